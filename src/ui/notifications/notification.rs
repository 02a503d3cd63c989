// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Unique identifier for a notification.
///
/// Ids are assigned by the [`Manager`](super::Manager) from a monotonic
/// counter and are never reused, so a stale id can never address a newer
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Classifies a notification for presentation.
///
/// The kind determines color and icon only; every kind shares the same
/// lifecycle and auto-dismiss duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The id, kind, and message are fixed at creation; only the manager's
/// bookkeeping around a notification changes over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }

    /// Returns the notification's unique id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind classification.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        let success = Kind::Success.color();
        let error = Kind::Error.color();
        let info = Kind::Info.color();
        let warning = Kind::Warning.color();

        assert_ne!(success, error);
        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(error, info);
        assert_ne!(error, warning);
        assert_ne!(info, warning);
    }

    #[test]
    fn id_display_is_stable() {
        let id = NotificationId::from_raw(42);
        assert_eq!(id.to_string(), "n42");
    }

    #[test]
    fn notification_exposes_its_fields() {
        let n = Notification::new(NotificationId::from_raw(1), Kind::Warning, "low disk");
        assert_eq!(n.id(), NotificationId::from_raw(1));
        assert_eq!(n.kind(), Kind::Warning);
        assert_eq!(n.message(), "low disk");
    }
}
