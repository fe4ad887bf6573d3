//! Random obstacle layouts.
//!
//! Every cell is decided independently: a uniform draw from `[0, 1)` below
//! the requested density makes the cell blocked.

use rand::Rng;

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::{Grid, Occupancy};

/// Grid generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` grid where each cell is blocked with
    /// probability `density`.
    pub fn random_obstacles(
        &mut self,
        rows: usize,
        cols: usize,
        density: f64,
    ) -> Result<Grid, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let mut grid = Grid::new(rows, cols)?;
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let r: f64 = self.rng.random();
                if r < density {
                    grid.set(Cell::new(row, col), Occupancy::Blocked);
                }
            }
        }
        Ok(grid)
    }

    /// Like [`random_obstacles`](MapGen::random_obstacles), but keeps the
    /// given cells traversable so they can serve as endpoints.
    pub fn random_obstacles_keeping(
        &mut self,
        rows: usize,
        cols: usize,
        density: f64,
        keep: &[Cell],
    ) -> Result<Grid, GridError> {
        let mut grid = self.random_obstacles(rows, cols, density)?;
        for &c in keep {
            grid.set(c, Occupancy::Traversable);
        }
        Ok(grid)
    }
}
