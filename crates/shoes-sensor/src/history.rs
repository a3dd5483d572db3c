//! Bounded FIFO of recent readings, used for the distance chart.

use std::collections::VecDeque;

use crate::SensorReading;

/// Number of readings the dashboard chart keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Rolling window of the most recent readings, oldest first.
///
/// Pushing into a full buffer evicts exactly one entry (the oldest), so the
/// length never exceeds `capacity`.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    entries:  VecDeque<SensorReading>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer.  A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `reading`, evicting the oldest entry if over capacity.
    ///
    /// Returns the evicted reading, if any.
    pub fn push(&mut self, reading: SensorReading) -> Option<SensorReading> {
        self.entries.push_back(reading);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Iterate oldest → newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SensorReading> + DoubleEndedIterator {
        self.entries.iter()
    }

    /// Most recent reading.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.entries.back()
    }

    /// Copy out the contents, oldest first.
    pub fn to_vec(&self) -> Vec<SensorReading> {
        self.entries.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = &'a SensorReading;
    type IntoIter = std::collections::vec_deque::Iter<'a, SensorReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
