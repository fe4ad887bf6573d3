//! Step-by-step A* over an eight-connected occupancy grid.
//!
//! [`Search`] owns the frontier, score maps and predecessor links and hands
//! out one [`SearchStep`] per `next()` call. Between calls an observer can
//! inspect progress through read-only views ([`Search::frontier`],
//! [`Search::came_from`], ...) or take an owned [`SearchSnapshot`].

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;
use std::time::Instant;

use gridstar_core::{Cell, Grid};

use crate::config::SearchConfig;
use crate::distance::step_cost;
use crate::endpoints::check_endpoints;
use crate::error::{NoPathFound, SearchError};
use crate::frontier::{Entry, Frontier};
use crate::heuristic::{BuiltinHeuristic, Heuristic};
use crate::path::Path;
use crate::report::SearchReport;

/// Scores of a cell at the moment it was expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expansion {
    pub cell: Cell,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

/// One unit of search progress.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStep {
    /// A cell was popped from the frontier and its neighbours relaxed.
    Expanded(Expansion),
    /// Terminal: the goal was reached.
    Success(Path),
    /// Terminal: the frontier emptied first.
    Failure(NoPathFound),
}

impl SearchStep {
    /// The expanded cell, if this is an expansion step.
    pub fn expanded(&self) -> Option<Cell> {
        match self {
            SearchStep::Expanded(e) => Some(e.cell),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStep::Expanded(_))
    }
}

/// Lifecycle of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    Initialized,
    Running,
    Succeeded,
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Succeeded | SearchState::Exhausted)
    }
}

/// Owned copy of the observable search state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    /// Frontier cells, sorted row-major.
    pub frontier: Vec<Cell>,
    /// Expanded cells, sorted row-major.
    pub expanded: Vec<Cell>,
    /// `(cell, predecessor)` pairs, sorted by cell.
    pub came_from: Vec<(Cell, Cell)>,
}

/// A single A* search, driven as an iterator of [`SearchStep`]s.
///
/// The sequence is finite and ends with exactly one terminal step
/// ([`SearchStep::Success`] or [`SearchStep::Failure`]); after that `next()`
/// keeps returning `None`. Dropping the search mid-way is always safe.
pub struct Search<'g, H: Heuristic = BuiltinHeuristic> {
    grid: &'g Grid,
    start: Cell,
    goal: Cell,
    heuristic: H,
    diagonal_coefficient: f64,
    frontier: Frontier,
    g_score: HashMap<Cell, f64>,
    came_from: HashMap<Cell, Cell>,
    expanded: HashSet<Cell>,
    state: SearchState,
    expansions: usize,
    peak_frontier: usize,
    // set once the goal is expanded or the frontier empties; the terminal
    // step is handed out on the next call
    result: Option<Result<Path, NoPathFound>>,
}

impl<'g> Search<'g, BuiltinHeuristic> {
    /// Validate the inputs and prepare a search using the heuristic selected
    /// by `config`.
    pub fn new(
        grid: &'g Grid,
        start: Cell,
        goal: Cell,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        Self::with_heuristic(grid, start, goal, config, config.heuristic())
    }
}

impl<'g, H: Heuristic> Search<'g, H> {
    /// Validate the inputs and prepare a search with a caller-supplied
    /// heuristic. The step costs still come from `config`.
    pub fn with_heuristic(
        grid: &'g Grid,
        start: Cell,
        goal: Cell,
        config: &SearchConfig,
        heuristic: H,
    ) -> Result<Self, SearchError> {
        if let Err(err) = config
            .validate()
            .map_err(SearchError::from)
            .and_then(|()| check_endpoints(grid, start, goal, config.reject_surrounded))
        {
            log::debug!("rejecting search {start} -> {goal}: {err}");
            return Err(err);
        }

        let mut frontier = Frontier::default();
        frontier.push(start, 0.0, heuristic.estimate(start, goal));
        let mut g_score = HashMap::new();
        g_score.insert(start, 0.0);

        let (rows, cols) = grid.dimensions();
        log::debug!(
            "A* search {start} -> {goal} on {rows}x{cols} grid ({} heuristic, diagonal step {:.3})",
            config.heuristic,
            config.diagonal_cost()
        );

        Ok(Self {
            grid,
            start,
            goal,
            heuristic,
            diagonal_coefficient: config.diagonal_coefficient,
            frontier,
            g_score,
            came_from: HashMap::new(),
            expanded: HashSet::new(),
            state: SearchState::Initialized,
            expansions: 0,
            peak_frontier: 1,
            result: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of expansion steps produced so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Largest raw frontier size seen, stale duplicates included.
    #[inline]
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    /// Best known cost from start to `c`, if `c` has been reached.
    #[inline]
    pub fn g_score(&self, c: Cell) -> Option<f64> {
        self.g_score.get(&c).copied()
    }

    /// Best known predecessor of `c`.
    #[inline]
    pub fn came_from(&self, c: Cell) -> Option<Cell> {
        self.came_from.get(&c).copied()
    }

    /// Whether `c` has been reached (has a recorded `g` score).
    #[inline]
    pub fn is_visited(&self, c: Cell) -> bool {
        self.g_score.contains_key(&c)
    }

    /// Whether `c` has been expanded.
    #[inline]
    pub fn is_expanded(&self, c: Cell) -> bool {
        self.expanded.contains(&c)
    }

    /// Cells currently waiting in the frontier, in no particular order.
    pub fn frontier(&self) -> impl Iterator<Item = Cell> + '_ {
        self.frontier
            .iter()
            .filter(|e| !self.is_stale(e))
            .map(|e| e.cell)
    }

    /// Number of distinct cells in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier().count()
    }

    /// Owned copy of the frontier, expanded set and predecessor map.
    pub fn snapshot(&self) -> SearchSnapshot {
        let mut frontier: Vec<Cell> = self.frontier().collect();
        frontier.sort_unstable();
        let mut expanded: Vec<Cell> = self.expanded.iter().copied().collect();
        expanded.sort_unstable();
        let mut came_from: Vec<(Cell, Cell)> =
            self.came_from.iter().map(|(&c, &p)| (c, p)).collect();
        came_from.sort_unstable();
        SearchSnapshot {
            frontier,
            expanded,
            came_from,
        }
    }

    /// The terminal outcome, once the search has reached it.
    pub fn outcome(&self) -> Option<&Result<Path, NoPathFound>> {
        self.result.as_ref()
    }

    /// Drive the search to its terminal step and summarise it. Steps an
    /// observer already pulled still count; `elapsed` covers only the
    /// remaining work.
    pub fn run(mut self) -> SearchReport {
        let started = Instant::now();
        self.by_ref().for_each(drop);
        SearchReport {
            outcome: self.result.take().unwrap_or(Err(NoPathFound)),
            expansions: self.expansions,
            peak_frontier: self.peak_frontier,
            elapsed: started.elapsed(),
        }
    }

    /// A frontier entry is stale once a cheaper route to its cell exists.
    #[inline]
    fn is_stale(&self, e: &Entry) -> bool {
        self.g_score.get(&e.cell).is_some_and(|&best| e.g > best)
    }

    fn relax_neighbors(&mut self, current: Cell, current_g: f64) {
        let grid = self.grid;
        for neighbor in grid.neighbors(current) {
            if !grid.is_traversable(neighbor) {
                continue;
            }
            let tentative_g = current_g + step_cost(current, neighbor, self.diagonal_coefficient);
            if self
                .g_score
                .get(&neighbor)
                .is_some_and(|&known| tentative_g >= known)
            {
                continue;
            }
            self.came_from.insert(neighbor, current);
            self.g_score.insert(neighbor, tentative_g);
            let h = self.heuristic.estimate(neighbor, self.goal);
            self.frontier.push(neighbor, tentative_g, h);
        }
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());
    }

    fn reconstruct_path(&self) -> Path {
        let mut cells = vec![self.goal];
        let mut current = self.goal;
        while let Some(&prev) = self.came_from.get(&current) {
            cells.push(prev);
            current = prev;
        }
        cells.reverse();
        let cost = self.g_score.get(&self.goal).copied().unwrap_or_default();
        Path::new(cells, cost)
    }

    /// Hand out the terminal step for the recorded result.
    fn finish(&mut self) -> Option<SearchStep> {
        match self.result.as_ref()? {
            Ok(path) => {
                self.state = SearchState::Succeeded;
                log::debug!(
                    "path found: {} cells, cost {:.3}, {} expansions",
                    path.len(),
                    path.cost(),
                    self.expansions
                );
                Some(SearchStep::Success(path.clone()))
            }
            Err(e) => {
                self.state = SearchState::Exhausted;
                log::debug!("no path: frontier exhausted after {} expansions", self.expansions);
                Some(SearchStep::Failure(*e))
            }
        }
    }
}

impl<H: Heuristic> Iterator for Search<'_, H> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        match self.state {
            SearchState::Succeeded | SearchState::Exhausted => return None,
            SearchState::Initialized => {
                self.state = SearchState::Running;
                if self.start == self.goal {
                    self.result = Some(Ok(Path::single(self.start)));
                }
            }
            SearchState::Running => {}
        }

        if self.result.is_some() {
            return self.finish();
        }

        while let Some(entry) = self.frontier.pop() {
            if self.is_stale(&entry) {
                continue;
            }
            let current = entry.cell;
            self.expansions += 1;
            self.expanded.insert(current);
            log::trace!("expand {current} g={:.3} f={:.3}", entry.g, entry.f);

            if current == self.goal {
                self.result = Some(Ok(self.reconstruct_path()));
            } else {
                self.relax_neighbors(current, entry.g);
            }
            return Some(SearchStep::Expanded(Expansion {
                cell: current,
                g: entry.g,
                h: entry.h,
                f: entry.f,
            }));
        }

        self.result = Some(Err(NoPathFound));
        self.finish()
    }
}

impl<H: Heuristic> FusedIterator for Search<'_, H> {}

/// Run a search to completion and return the path, if any.
///
/// Invalid inputs are reported as [`SearchError`]; an unreachable goal is
/// `Ok(None)`.
pub fn astar_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
) -> Result<Option<Path>, SearchError> {
    let report = Search::new(grid, start, goal, config)?.run();
    Ok(report.outcome.ok())
}
