//! A fixed-capacity buffer that drops its oldest element when full.

use std::collections::VecDeque;
use std::collections::vec_deque;

// ============================================================================
// RingBuffer
// ============================================================================

/// A fixed-capacity FIFO buffer with O(1) push.
///
/// When the buffer reaches capacity, new elements evict the oldest ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be greater than 0");

        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an element to the back of the buffer, evicting the oldest if full.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Extends the buffer with elements from an iterator.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
        for item in iter {
            self.push(item);
        }
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }

    /// Collects all elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
