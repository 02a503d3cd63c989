// SPDX-License-Identifier: MPL-2.0
//! Event collection plumbing.
//!
//! [`DiagnosticsHandle`] is the cheap, cloneable producer side handed to the
//! notification manager; [`DiagnosticsCollector`] owns the bounded buffer and
//! drains pending events when the host asks.

use super::buffer::{CircularBuffer, EventCapacity};
use super::events::NotificationEvent;
use tokio::sync::mpsc;

/// Capacity of the channel between handles and the collector. Events beyond
/// this are dropped until the collector catches up.
const CHANNEL_CAPACITY: usize = 256;

/// Producer handle for reporting notification events.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    sender: mpsc::Sender<NotificationEvent>,
}

impl DiagnosticsHandle {
    /// Records an event without blocking.
    ///
    /// If the channel is full or the collector is gone, the event is silently
    /// dropped. Diagnostics must never stall the notification queue.
    pub fn record(&self, event: NotificationEvent) {
        let _ = self.sender.try_send(event);
    }
}

/// Owns the event buffer and the receiving end of the channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<NotificationEvent>,
    sender: mpsc::Sender<NotificationEvent>,
    receiver: mpsc::Receiver<NotificationEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            sender,
            receiver,
        }
    }

    /// Returns a new producer handle bound to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            sender: self.sender.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &NotificationEvent> {
        self.buffer.iter()
    }

    /// Discards all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(EventCapacity::default())
    }
}
