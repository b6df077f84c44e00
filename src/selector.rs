//! Bounded top-K selection by file size
//!
//! Keeps the K largest records offered so far in a min-heap, so memory stays
//! O(K) no matter how many files the walk produces. With no limit every
//! record is kept and sorted once at the end.
//!
//! Ties: when several records share the smallest held size, the most
//! recently offered one is evicted first, and a candidate equal to the
//! current minimum is rejected. Earlier-seen files therefore win ties at the
//! cutoff, which keeps repeated scans of an unchanged tree stable.

use crate::types::FileRecord;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap slot: a record plus its offer sequence number
#[derive(Debug)]
struct Ranked {
    seq: u64,
    record: FileRecord,
}

impl Ord for Ranked {
    /// Smaller size ranks lower; among equal sizes a later offer ranks lower
    fn cmp(&self, other: &Self) -> Ordering {
        self.record
            .size
            .cmp(&other.record.size)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Collection holding at most `limit` of the largest records offered
#[derive(Debug)]
pub struct TopKSelector {
    limit: Option<usize>,
    heap: BinaryHeap<Reverse<Ranked>>,
    next_seq: u64,
}

impl TopKSelector {
    /// Create a selector; `None` keeps every record
    pub fn new(limit: Option<usize>) -> Self {
        let capacity = limit.map(|k| k.min(4096)).unwrap_or(256);
        Self {
            limit,
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Selector that keeps every record
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest size currently held
    pub fn min_size(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(r)| r.record.size)
    }

    /// Offer a record; returns true if it was kept
    pub fn offer(&mut self, record: FileRecord) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;

        if let Some(limit) = self.limit {
            if limit == 0 {
                return false;
            }
            if self.heap.len() >= limit {
                match self.heap.peek() {
                    Some(Reverse(min)) if record.size > min.record.size => {
                        self.heap.pop();
                    }
                    _ => return false,
                }
            }
        }

        self.heap.push(Reverse(Ranked { seq, record }));
        true
    }

    /// Consume the selector, returning records largest first
    pub fn drain_sorted_descending(self) -> Vec<FileRecord> {
        // Ascending order of Reverse<Ranked> is descending rank
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(r)| r.record)
            .collect()
    }
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Extend<FileRecord> for TopKSelector {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.offer(record);
        }
    }
}
