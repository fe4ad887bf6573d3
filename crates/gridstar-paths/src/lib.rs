//! Step-by-step A* pathfinding on eight-connected occupancy grids.
//!
//! The engine is a [`Search`] value: it validates its inputs up front, owns
//! its frontier and score maps, and yields one [`SearchStep`] per
//! `next()` call so an observer can render or record every expansion:
//!
//! ```
//! use gridstar_core::{Cell, Grid};
//! use gridstar_paths::{Search, SearchConfig, SearchStep};
//!
//! let grid: Grid = "....\n.##.\n....".parse().unwrap();
//! let search = Search::new(&grid, Cell::new(0, 0), Cell::new(2, 3), &SearchConfig::default())
//!     .unwrap();
//! for step in search {
//!     match step {
//!         SearchStep::Expanded(e) => println!("expanded {}", e.cell),
//!         SearchStep::Success(path) => println!("path {path}"),
//!         SearchStep::Failure(e) => println!("{e}"),
//!     }
//! }
//! ```
//!
//! # Costs and heuristics
//!
//! Orthogonal moves cost 1 and diagonal moves `1 + k`, where `k` is
//! [`SearchConfig::diagonal_coefficient`]. The default `k` is
//! [`STANDARD_OCTILE_COEFFICIENT`] (`√2 − 1`);
//! [`SIMPLIFIED_OCTILE_COEFFICIENT`] (`0.5`) is also supported. The octile
//! heuristic uses the same `k`, so it stays consistent.
//!
//! # Tie-breaking
//!
//! Frontier entries with equal `f` are ordered by lower `h`, then by
//! insertion order, so repeated searches return the same path.

mod astar;
mod config;
mod distance;
mod endpoints;
mod error;
mod frontier;
mod heuristic;
mod path;
mod report;
mod settings;

pub use astar::{Expansion, Search, SearchSnapshot, SearchState, SearchStep, astar_path};
pub use config::{ConfigError, SearchConfig};
pub use distance::{
    SIMPLIFIED_OCTILE_COEFFICIENT, STANDARD_OCTILE_COEFFICIENT, euclidean, octile, path_cost,
    step_cost,
};
pub use endpoints::check_endpoints;
pub use error::{Endpoint, NoPathFound, SearchError};
pub use heuristic::{BuiltinHeuristic, Heuristic, HeuristicKind};
pub use path::Path;
pub use report::{BatchSummary, SearchReport};
pub use settings::{MazeSource, Problem, Settings};
