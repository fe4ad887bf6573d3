//! Settings-layer input: where the maze comes from, the endpoints, and the
//! search configuration, validated once into a [`Problem`].

use gridstar_core::{Cell, Grid, MapGen};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::astar::Search;
use crate::config::SearchConfig;
use crate::endpoints::check_endpoints;
use crate::error::SearchError;

/// Source of the occupancy grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum MazeSource {
    /// Explicit rows of 0 (traversable) and 1 (blocked).
    Explicit { rows: Vec<Vec<u8>> },
    /// Independent per-cell obstacles. The endpoints are kept open.
    Random {
        rows: usize,
        cols: usize,
        density: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub maze: MazeSource,
    pub start: Cell,
    pub goal: Cell,
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: SearchConfig,
}

/// A validated grid, endpoints and configuration, ready to search.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
    pub config: SearchConfig,
}

impl Settings {
    /// Build the grid and validate everything once.
    pub fn build(&self) -> Result<Problem, SearchError> {
        self.search.validate()?;
        let grid = match &self.maze {
            MazeSource::Explicit { rows } => Grid::from_rows(rows.clone())?,
            MazeSource::Random {
                rows,
                cols,
                density,
                seed,
            } => {
                let keep = [self.start, self.goal];
                match seed {
                    Some(seed) => MapGen::new(StdRng::seed_from_u64(*seed))
                        .random_obstacles_keeping(*rows, *cols, *density, &keep)?,
                    None => MapGen::new(rand::rng())
                        .random_obstacles_keeping(*rows, *cols, *density, &keep)?,
                }
            }
        };
        Problem::new(grid, self.start, self.goal, self.search)
    }
}

impl Problem {
    pub fn new(
        grid: Grid,
        start: Cell,
        goal: Cell,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        check_endpoints(&grid, start, goal, config.reject_surrounded)?;
        Ok(Self {
            grid,
            start,
            goal,
            config,
        })
    }

    /// Start a step-by-step search over this problem.
    pub fn search(&self) -> Result<Search<'_>, SearchError> {
        Search::new(&self.grid, self.start, self.goal, &self.config)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::heuristic::HeuristicKind;

    #[test]
    fn settings_from_json() {
        let json = r#"{
            "maze": { "kind": "explicit", "rows": [[0, 0, 0], [0, 1, 0]] },
            "start": { "row": 0, "col": 0 },
            "goal": { "row": 1, "col": 2 },
            "search": { "heuristic": "euclidean" }
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.search.heuristic, HeuristicKind::Euclidean);
        let p = s.build().unwrap();
        assert_eq!(p.grid.blocked_count(), 1);
    }

    #[test]
    fn search_section_is_optional() {
        let json = r#"{
            "maze": { "kind": "random", "rows": 5, "cols": 5, "density": 0.1 },
            "start": { "row": 0, "col": 0 },
            "goal": { "row": 4, "col": 4 }
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.search, SearchConfig::default());
        assert!(matches!(s.maze, MazeSource::Random { seed: None, .. }));
    }
}
