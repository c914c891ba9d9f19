//! Priority queue with the operations a binary heap does not offer
//!
//! `PriorityQueue` wraps `std::collections::BinaryHeap` and adds tail access,
//! tail removal, bulk conditional removal, conditional insertion and
//! value-equality removal.
//!
//! A binary heap only tracks its head. Everything that needs the tail or a
//! full ordering drains a scratch clone with repeated head removal, so the
//! live heap is never observed in its internal (implementation-defined)
//! array order. These operations cost O(n log n).
//!
//! Records with equal priority have no guaranteed relative order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Total priority order for queued records
pub trait Prioritized {
    /// `Greater` means `self` is served before `other`.
    fn priority_cmp(&self, other: &Self) -> Ordering;
}

/// Heap entry ordered by priority alone.
#[derive(Clone)]
struct Ranked<T>(T);

impl<T: Prioritized> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: Prioritized> Eq for Ranked<T> {}

impl<T: Prioritized> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Prioritized> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority_cmp(&other.0)
    }
}

/// Queue of records; the head is always the highest-priority record present
#[derive(Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Ranked<T>>,
}

impl<T: Prioritized> PriorityQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a record unconditionally
    pub fn push(&mut self, record: T) {
        self.heap.push(Ranked(record));
    }

    /// Highest-priority record, without removing it
    pub fn peek_head(&self) -> Option<&T> {
        self.heap.peek().map(|r| &r.0)
    }

    /// Remove and return the highest-priority record
    pub fn pop_head(&mut self) -> Option<T> {
        self.heap.pop().map(|r| r.0)
    }

    /// Remove and return the lowest-priority record
    ///
    /// Every record but the last is moved into a fresh heap, the last one is
    /// dropped out, and the fresh heap replaces the old one.
    pub fn pop_tail(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let mut kept = BinaryHeap::with_capacity(self.heap.len() - 1);
        while self.heap.len() > 1 {
            if let Some(record) = self.heap.pop() {
                kept.push(record);
            }
        }
        let tail = self.heap.pop().map(|r| r.0);
        self.heap = kept;
        tail
    }

    /// Insert `record` iff `predicate(record, queue)` holds
    ///
    /// The predicate sees the queue before insertion, so it can compare
    /// against the current head or tail. Returns whether the record was
    /// inserted.
    pub fn insert_if<F>(&mut self, record: T, predicate: F) -> bool
    where
        F: FnOnce(&T, &Self) -> bool,
    {
        if predicate(&record, self) {
            self.push(record);
            true
        } else {
            false
        }
    }

    /// Remove every record matching `predicate`, returning how many went
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.heap.len();
        self.heap.retain(|r| !predicate(&r.0));
        before - self.heap.len()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterate in arbitrary (heap array) order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|r| &r.0)
    }
}

impl<T: Prioritized + PartialEq> PriorityQueue<T> {
    /// Remove one record equal by value to `record`
    ///
    /// Value equality, not priority equality: two requests from different
    /// applicants with the same date and status are distinct.
    pub fn remove_first_equal(&mut self, record: &T) -> bool {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let found = entries.iter().position(|r| &r.0 == record);
        if let Some(index) = found {
            entries.swap_remove(index);
        }
        self.heap = BinaryHeap::from(entries);
        found.is_some()
    }
}

impl<T: Prioritized + Clone> PriorityQueue<T> {
    /// Drain a scratch clone head-first, leaving the live queue untouched.
    fn drain_scratch(&self) -> impl Iterator<Item = T> {
        let mut scratch = self.heap.clone();
        std::iter::from_fn(move || scratch.pop().map(|r| r.0))
    }

    /// Lowest-priority record, without removing it
    pub fn peek_tail(&self) -> Option<T> {
        self.drain_scratch().last()
    }

    /// All records in priority order, head first
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.drain_scratch().collect()
    }
}

impl<T: Prioritized> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(Ranked));
    }
}

impl<T: Prioritized> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Prioritized + fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
