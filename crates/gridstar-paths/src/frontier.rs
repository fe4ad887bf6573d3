use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::Cell;

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// Lowest `f` pops first; ties go to the lower `h` (closer to the goal),
/// then to the earlier insertion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) cell: Cell,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Open set. Entries made obsolete by a later, cheaper push stay in the
/// heap; the search recognises them on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, cell: Cell, g: f64, h: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            cell,
            g,
            h,
            f: g + h,
            seq,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Raw entry count, stale duplicates included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Entries in arbitrary order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.heap.iter()
    }
}
