// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle activity.
//!
//! The notification manager can be given a [`DiagnosticsHandle`]; every
//! posted, dismissed, and expired notification is then reported as a
//! [`NotificationEvent`] and stored in a memory-bounded circular buffer
//! owned by the [`DiagnosticsCollector`].
//!
//! Recording is strictly non-blocking: events travel over a bounded channel
//! and are dropped if the collector falls behind. The queue's behavior never
//! depends on diagnostics being drained.

mod buffer;
mod collector;
mod events;

pub use buffer::{CircularBuffer, EventCapacity};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::NotificationEvent;
