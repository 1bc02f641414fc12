// SPDX-License-Identifier: MPL-2.0
//! Bounded event log.

use crate::domain::rail::BufferCapacity;
use std::collections::VecDeque;

/// Ring buffer that drops its oldest entry once full.
///
/// Entries are kept oldest first.
///
/// # Example
///
/// ```
/// use focus_rail::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut log = CircularBuffer::new(BufferCapacity::new(10));
/// for step in 0..12 {
///     log.push(step);
/// }
/// assert_eq!(log.len(), 10);
/// assert_eq!(log.latest(), Some(&11));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Unvalidated constructor for small test buffers. Zero becomes one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    /// Newest to oldest, at most `limit` entries.
    pub fn newest_first(&self, limit: usize) -> impl Iterator<Item = &T> {
        self.entries.iter().rev().take(limit)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
