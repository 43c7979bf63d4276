//! Min-ordered search frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::StationId;

/// A station waiting to be expanded, keyed by its cumulative distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub cost: u64,
    pub station: StationId,
    /// Insertion order, used to break cost ties.
    seq: u64,
}

impl Ord for FrontierEntry {
    // Reversed so that `BinaryHeap` (a max-heap) pops the cheapest entry,
    // and among equal costs the one pushed first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of stations ordered by cost, FIFO among equal costs.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a station at the given cost.
    pub fn push(&mut self, station: StationId, cost: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { cost, station, seq });
    }

    /// Remove and return the cheapest entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
