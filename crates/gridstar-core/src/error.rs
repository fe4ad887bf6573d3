use thiserror::Error;

/// Reasons a grid cannot be built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,

    #[error("grid of {rows}x{cols} cells exceeds the addressable size")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, expected 0 (traversable) or 1 (blocked)")]
    InvalidValue { row: usize, col: usize, value: u8 },

    #[error("unknown grid symbol {ch:?} on line {line}")]
    UnknownSymbol { line: usize, ch: char },

    #[error("obstacle density {0} is outside [0, 1]")]
    InvalidDensity(f64),
}
