// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! A memory-bounded ring buffer that evicts the oldest entries when capacity
//! is reached, so diagnostics can never grow without bound even if the host
//! forgets to drain them.

use crate::config::{DEFAULT_EVENT_CAPACITY, MAX_EVENT_CAPACITY, MIN_EVENT_CAPACITY};
use std::collections::VecDeque;

/// Validated capacity for the diagnostics event buffer.
///
/// Construction clamps the requested value into the supported range, so a
/// `EventCapacity` is always usable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a capacity, clamping `value` into the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_EVENT_CAPACITY, MAX_EVENT_CAPACITY))
    }

    /// Returns the capacity as a plain count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(DEFAULT_EVENT_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all elements from the buffer.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
