// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity tracking.

use crate::ui::notifications::{Kind, NotificationId};
use std::time::Instant;

/// A notification lifecycle event.
///
/// Timestamps are monotonic ([`Instant`]); they order events relative to each
/// other but are not wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A notification entered the active sequence.
    Posted {
        id: NotificationId,
        kind: Kind,
        message: String,
        at: Instant,
    },
    /// A notification was removed by an explicit dismiss request.
    Dismissed { id: NotificationId, at: Instant },
    /// A notification was removed because its dismiss timer elapsed.
    Expired { id: NotificationId, at: Instant },
}

impl NotificationEvent {
    /// Returns the id of the notification this event concerns.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        match self {
            NotificationEvent::Posted { id, .. }
            | NotificationEvent::Dismissed { id, .. }
            | NotificationEvent::Expired { id, .. } => *id,
        }
    }

    /// Returns when the event occurred.
    #[must_use]
    pub fn at(&self) -> Instant {
        match self {
            NotificationEvent::Posted { at, .. }
            | NotificationEvent::Dismissed { at, .. }
            | NotificationEvent::Expired { at, .. } => *at,
        }
    }
}
