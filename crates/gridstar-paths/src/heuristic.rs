//! Heuristic selection.
//!
//! [`HeuristicKind`] is the selector carried by configuration; it is
//! resolved once per search into a [`BuiltinHeuristic`]. Any
//! `Fn(Cell, Cell) -> f64` can stand in for a builtin through the
//! [`Heuristic`] trait.

use std::fmt;
use std::str::FromStr;

use gridstar_core::Cell;

use crate::config::ConfigError;
use crate::distance::{euclidean, octile};

/// Estimate of the remaining cost between two cells.
///
/// Must be non-negative, and should never overestimate the true cost
/// (admissible) for the search to return optimal paths.
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

impl<F: Fn(Cell, Cell) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self(from, to)
    }
}

/// Named heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    #[default]
    Octile,
    Euclidean,
}

impl HeuristicKind {
    /// Bind the selector to a diagonal coefficient.
    pub fn resolve(self, diagonal_coefficient: f64) -> BuiltinHeuristic {
        match self {
            HeuristicKind::Octile => BuiltinHeuristic::Octile {
                diagonal_coefficient,
            },
            HeuristicKind::Euclidean => BuiltinHeuristic::Euclidean,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Octile => "octile",
            HeuristicKind::Euclidean => "euclidean",
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "octile" => Ok(HeuristicKind::Octile),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            _ => Err(ConfigError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A resolved builtin heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuiltinHeuristic {
    Octile { diagonal_coefficient: f64 },
    Euclidean,
}

impl Heuristic for BuiltinHeuristic {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match *self {
            BuiltinHeuristic::Octile {
                diagonal_coefficient,
            } => octile(from, to, diagonal_coefficient),
            BuiltinHeuristic::Euclidean => euclidean(from, to),
        }
    }
}
