#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use gridstar_core::{Cell, Grid};
use gridstar_paths::step_cost;

pub const EPS: f64 = 1e-9;

#[derive(PartialEq)]
struct Item(f64, Cell);

impl Eq for Item {}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact single-source costs over traversable cells (plain Dijkstra).
pub fn dijkstra(grid: &Grid, source: Cell, k: f64) -> HashMap<Cell, f64> {
    let mut dist = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(source, 0.0);
    heap.push(Item(0.0, source));
    while let Some(Item(d, c)) = heap.pop() {
        if dist.get(&c).is_some_and(|&best| d > best) {
            continue;
        }
        for n in grid.neighbors(c) {
            if !grid.is_traversable(n) {
                continue;
            }
            let nd = d + step_cost(c, n, k);
            if dist.get(&n).is_none_or(|&best| nd < best) {
                dist.insert(n, nd);
                heap.push(Item(nd, n));
            }
        }
    }
    dist
}

/// Cells reachable from `source` by eight-connected traversable moves.
pub fn flood(grid: &Grid, source: Cell) -> HashSet<Cell> {
    let mut seen = HashSet::new();
    if !grid.is_traversable(source) {
        return seen;
    }
    let mut queue = VecDeque::from([source]);
    seen.insert(source);
    while let Some(c) = queue.pop_front() {
        for n in grid.neighbors(c) {
            if grid.is_traversable(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Build a grid from a flat occupancy vector, reusing values cyclically.
pub fn grid_from_bits(rows: usize, cols: usize, bits: &[bool]) -> Grid {
    let raw = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| u8::from(bits[(r * cols + c) % bits.len()]))
                .collect()
        })
        .collect();
    Grid::from_rows(raw).unwrap()
}
