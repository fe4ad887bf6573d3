use std::fmt;

use gridstar_core::{Cell, GridError};
use thiserror::Error;

use crate::config::ConfigError;

/// Which end of the search an endpoint error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors detected before any search work begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("invalid search configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("{endpoint} {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        rows: usize,
        cols: usize,
    },

    #[error("{endpoint} {cell} is blocked")]
    BlockedEndpoint { endpoint: Endpoint, cell: Cell },

    #[error("{endpoint} {cell} is surrounded by obstacles")]
    SurroundedEndpoint { endpoint: Endpoint, cell: Cell },
}

/// The frontier emptied without reaching the goal.
///
/// This is an ordinary search outcome, reported through
/// [`SearchStep::Failure`](crate::SearchStep::Failure), not a [`SearchError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("no path found between the endpoints")]
pub struct NoPathFound;
