use std::fmt;

use gridstar_core::{Cell, Grid};

/// A path from start to goal, both inclusive, with its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(cells: Vec<Cell>, cost: f64) -> Self {
        Self { cells, cost }
    }

    /// The trivial path for `start == goal`.
    pub(crate) fn single(cell: Cell) -> Self {
        Self::new(vec![cell], 0.0)
    }

    /// Cells in start → goal order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sum of step costs along the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (`len - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether every cell is traversable on `grid` and consecutive cells
    /// are eight-adjacent.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&c| grid.is_traversable(c))
            && self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)], 2.5);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Some(Cell::new(0, 0)));
        assert_eq!(p.goal(), Some(Cell::new(1, 2)));
        assert_eq!(p.cost(), 2.5);
        assert_eq!(p.to_string(), "(0, 0) -> (1, 1) -> (1, 2)");
    }

    #[test]
    fn single_cell_path() {
        let p = Path::single(Cell::new(4, 4));
        assert_eq!(p.steps(), 0);
        assert_eq!(p.cost(), 0.0);
        assert_eq!(p.start(), p.goal());
    }

    #[test]
    fn validity_checks_adjacency_and_obstacles() {
        let g: Grid = "..\n#.".parse().unwrap();
        let ok = Path::new(vec![Cell::new(0, 0), Cell::new(1, 1)], 0.0);
        let gap = Path::new(vec![Cell::new(0, 0), Cell::new(0, 2)], 0.0);
        let wall = Path::new(vec![Cell::new(0, 0), Cell::new(1, 0)], 0.0);
        assert!(ok.is_valid_on(&g));
        assert!(!gap.is_valid_on(&g));
        assert!(!wall.is_valid_on(&g));
    }
}
