//! The [`Grid`] type: a rectangular occupancy matrix.
//!
//! A `Grid` owns its cells in a single row-major buffer. Searches borrow it
//! immutably, so a grid cannot change while a search over it is alive; the
//! authoring helpers ([`set`](Grid::set), [`fill_rect`](Grid::fill_rect))
//! need `&mut self`.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::GridError;

/// Occupancy of a single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupancy {
    #[default]
    Traversable,
    Blocked,
}

impl Occupancy {
    /// The raw value used by the settings layer: 0 traversable, 1 blocked.
    pub const fn value(self) -> u8 {
        match self {
            Occupancy::Traversable => 0,
            Occupancy::Blocked => 1,
        }
    }

    /// ASCII symbol used by [`Grid`]'s `Display` and `FromStr`.
    pub const fn symbol(self) -> char {
        match self {
            Occupancy::Traversable => '.',
            Occupancy::Blocked => '#',
        }
    }
}

impl TryFrom<u8> for Occupancy {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(Occupancy::Traversable),
            1 => Ok(Occupancy::Blocked),
            other => Err(other),
        }
    }
}

impl From<Occupancy> for u8 {
    fn from(o: Occupancy) -> Self {
        o.value()
    }
}

/// A rectangular 2D grid of [`Occupancy`] values.
///
/// Invariant: at least one row and one column, every row the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct Grid {
    cells: Vec<Occupancy>,
    rows: usize,
    cols: usize,
}

/// Number of cells in a `rows × cols` grid. Each dimension must fit a
/// [`Cell`] coordinate and the total must fit one allocation.
fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    let max_dim = i32::MAX as usize;
    rows.checked_mul(cols)
        .filter(|&n| rows <= max_dim && cols <= max_dim && n <= isize::MAX as usize)
        .ok_or(GridError::TooLarge { rows, cols })
}

impl Grid {
    /// Create a fully traversable grid. Zero or oversized dimensions are
    /// rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            cells: vec![Occupancy::Traversable; len],
            rows,
            cols,
        })
    }

    /// Build a grid from rows of raw values (0 traversable, 1 blocked).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let len = checked_len(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                let occ = Occupancy::try_from(v)
                    .map_err(|value| GridError::InvalidValue { row: r, col: c, value })?;
                cells.push(occ);
            }
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Raw rows (0 traversable, 1 blocked), the inverse of [`from_rows`](Grid::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|o| o.value()).collect())
            .collect()
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: empty grids cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        if c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
        {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn cell_at(&self, idx: usize) -> Cell {
        Cell::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.index(c).is_some()
    }

    /// Occupancy at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Occupancy> {
        self.index(c).map(|i| self.cells[i])
    }

    /// True iff `c` is in bounds and not blocked.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.at(c) == Some(Occupancy::Traversable)
    }

    /// In-bounds eight-connected neighbours of `c`. Blocked cells are
    /// included; filtering them is up to the caller.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_8().into_iter().filter(|&n| self.contains(n))
    }

    /// Whether every in-bounds neighbour of `c` is blocked (a cell on a 1×1
    /// grid has no neighbours and counts as surrounded).
    pub fn is_surrounded(&self, c: Cell) -> bool {
        !self.neighbors(c).any(|n| self.is_traversable(n))
    }

    /// Set the occupancy at `c`. No-op if out of bounds.
    pub fn set(&mut self, c: Cell, occ: Occupancy) {
        if let Some(i) = self.index(c) {
            self.cells[i] = occ;
        }
    }

    /// Set every in-bounds cell of the inclusive rectangle spanned by `a` and `b`.
    pub fn fill_rect(&mut self, a: Cell, b: Cell, occ: Occupancy) {
        for row in a.row.min(b.row)..=a.row.max(b.row) {
            for col in a.col.min(b.col)..=a.col.max(b.col) {
                self.set(Cell::new(row, col), occ);
            }
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&o| o == Occupancy::Blocked).count()
    }

    /// Row-major iterator over `(Cell, Occupancy)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Cell, Occupancy)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &o)| (self.cell_at(i), o))
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(g: Grid) -> Self {
        g.to_rows()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one row per line: `.` or `0` traversable, `#` or `1` blocked.
    /// Blank lines and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                let v = match ch {
                    '.' | '0' => 0,
                    '#' | '1' => 1,
                    _ => {
                        return Err(GridError::UnknownSymbol {
                            line: line_no + 1,
                            ch,
                        });
                    }
                };
                row.push(v);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for o in row {
                write!(f, "{}", o.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_dimensions() {
        let g = Grid::new(3, 5).unwrap();
        assert_eq!(g.dimensions(), (3, 5));
        assert_eq!(g.len(), 15);
        assert_eq!(g.blocked_count(), 0);
        assert_eq!(Grid::new(0, 4), Err(GridError::Empty));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        // Columns must stay addressable by an `i32` cell coordinate.
        let wide = i32::MAX as usize + 1;
        assert_eq!(
            Grid::new(1, wide),
            Err(GridError::TooLarge { rows: 1, cols: wide })
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_bad_values() {
        let err = Grid::from_rows(vec![vec![0, 2]]).unwrap_err();
        assert_eq!(err, GridError::InvalidValue { row: 0, col: 1, value: 2 });
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn traversability_and_bounds() {
        let g: Grid = "
            .#
            ..
        "
        .parse()
        .unwrap();
        assert!(g.is_traversable(Cell::new(0, 0)));
        assert!(!g.is_traversable(Cell::new(0, 1)));
        assert!(!g.is_traversable(Cell::new(-1, 0)));
        assert!(!g.is_traversable(Cell::new(2, 0)));
        assert_eq!(g.at(Cell::new(0, 1)), Some(Occupancy::Blocked));
        assert_eq!(g.at(Cell::new(5, 5)), None);
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.neighbors(Cell::new(0, 0)).count(), 3);
        assert_eq!(g.neighbors(Cell::new(0, 1)).count(), 5);
        assert_eq!(g.neighbors(Cell::new(1, 1)).count(), 8);
        let single = Grid::new(1, 1).unwrap();
        assert_eq!(single.neighbors(Cell::ORIGIN).count(), 0);
    }

    #[test]
    fn neighbors_include_blocked() {
        let mut g = Grid::new(3, 3).unwrap();
        g.fill_rect(Cell::new(0, 0), Cell::new(2, 2), Occupancy::Blocked);
        g.set(Cell::new(1, 1), Occupancy::Traversable);
        assert_eq!(g.neighbors(Cell::new(1, 1)).count(), 8);
        assert!(g.is_surrounded(Cell::new(1, 1)));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "..#\n#..\n";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.to_string(), text);
        assert_eq!(g.to_rows(), vec![vec![0, 0, 1], vec![1, 0, 0]]);
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        let err = "..\n.x\n".parse::<Grid>().unwrap_err();
        assert_eq!(err, GridError::UnknownSymbol { line: 2, ch: 'x' });
    }

    #[test]
    fn iter_is_row_major() {
        let g: Grid = "#.\n..".parse().unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], (Cell::new(0, 0), Occupancy::Blocked));
        assert_eq!(items[2], (Cell::new(1, 0), Occupancy::Traversable));
    }
}
