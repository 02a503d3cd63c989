// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides a transient notification (toast) queue for
//! applications built with the Iced GUI framework.
//!
//! The queue accepts notification requests from anywhere in the application,
//! assigns each a unique identity, and guarantees automatic removal after a
//! fixed visible duration while allowing manual early dismissal. A toast
//! widget renders the active notifications and reports dismiss requests back
//! by id.
//!
//! Lifecycle and presentation are deliberately separated: the
//! [`ui::notifications::Manager`] owns the active sequence and the dismiss
//! timers, while [`ui::notifications::Toast`] only draws whatever the manager
//! currently holds.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod test_utils;
pub mod ui;
