// SPDX-License-Identifier: MPL-2.0
//! Bounded event log.

use std::collections::VecDeque;

/// Fixed-capacity ring that keeps the newest entries.
///
/// Entries come out oldest first. Pushing into a full ring evicts the front
/// entry and bumps [`evicted`](Self::evicted), so an exported report can say
/// how much history it lost.
///
/// ```
/// use iced_chip::diagnostics::CircularBuffer;
///
/// let mut log = CircularBuffer::with_capacity(2);
/// log.push("show");
/// log.push("idle");
/// log.push("hide");
///
/// assert_eq!(log.iter().copied().collect::<Vec<_>>(), ["idle", "hide"]);
/// assert_eq!(log.evicted(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    /// A ring holding at most `capacity` entries; zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            self.evicted += 1;
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
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

    /// Entries pushed out since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Empties the ring and resets the eviction count.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }
}
