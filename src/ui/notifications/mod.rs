// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, and disappear on their own after a fixed visible duration.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kind classification
//! - [`clock`] - Time source abstraction and the one-shot dismiss timer
//! - [`manager`] - `Manager` owning the active sequence and all timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_toasts::ui::notifications::{Kind, Manager};
//!
//! let mut manager = Manager::new();
//!
//! // Post a notification; the returned id allows early dismissal.
//! let id = manager.notify(Kind::Success, "Settings saved");
//!
//! // Call tick() periodically (e.g. from an iced time subscription) so
//! // expired notifications get removed.
//! manager.tick();
//!
//! manager.dismiss(id);
//! assert!(!manager.has_notifications());
//! ```
//!
//! # Design Considerations
//!
//! - All kinds share one auto-dismiss duration (5s by default); kind only
//!   affects presentation.
//! - No cap on simultaneous notifications; stacking is the renderer's concern.
//! - Position: top-right corner, oldest first.

mod clock;
mod manager;
mod notification;
mod toast;

pub use clock::{Clock, DismissTimer, SystemClock};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId};
pub use toast::Toast;
