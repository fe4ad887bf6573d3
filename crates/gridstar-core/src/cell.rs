//! The [`Cell`] coordinate type.

use std::fmt;

/// A grid coordinate. Rows grow downwards, columns grow to the right, both
/// 0-indexed.
///
/// Coordinates are signed so that neighbor offsets can step outside the grid;
/// bounds are checked by [`Grid`](crate::Grid), never here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Offsets of the eight-connected neighborhood, orthogonal moves first.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

impl Cell {
    /// Origin (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// All eight neighbours (orthogonal + diagonal), regardless of bounds.
    #[inline]
    pub fn neighbors_8(self) -> [Cell; 8] {
        NEIGHBOR_OFFSETS.map(|(dr, dc)| self.shift(dr, dc))
    }

    /// Absolute row and column deltas to `other`.
    #[inline]
    pub fn deltas(self, other: Cell) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }

    /// Whether `other` is one of the eight neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        let (dr, dc) = self.deltas(other);
        dr.max(dc) == 1
    }

    /// Whether `other` is a diagonal neighbour of `self`.
    #[inline]
    pub fn is_diagonal_to(self, other: Cell) -> bool {
        self.deltas(other) == (1, 1)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
