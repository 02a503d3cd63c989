// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.
//!
//! # Categories
//!
//! - **Auto-dismiss**: Visible duration of a notification before removal
//! - **Tick**: Host polling cadence for expiry checks
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Default visible duration of a notification before automatic removal
/// (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Minimum allowed auto-dismiss duration (in milliseconds).
///
/// Anything shorter than this is not readable and almost certainly a
/// configuration mistake.
pub const MIN_AUTO_DISMISS_MS: u64 = 500;

/// Maximum allowed auto-dismiss duration (in milliseconds).
pub const MAX_AUTO_DISMISS_MS: u64 = 60_000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Recommended interval between host `tick()` calls (in milliseconds).
///
/// Expiry is checked against deadlines, so a coarser tick only delays
/// removal by at most one interval; it never drops it.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_EVENT_CAPACITY: usize = 1000;

/// Minimum diagnostics event buffer capacity.
pub const MIN_EVENT_CAPACITY: usize = 10;

/// Maximum diagnostics event buffer capacity.
pub const MAX_EVENT_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_DISMISS_MS <= DEFAULT_AUTO_DISMISS_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);
    assert!(MIN_EVENT_CAPACITY <= DEFAULT_EVENT_CAPACITY);
    assert!(DEFAULT_EVENT_CAPACITY <= MAX_EVENT_CAPACITY);
};
