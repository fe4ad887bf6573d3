use std::time::Duration;

use crate::error::NoPathFound;
use crate::path::Path;

/// Summary of one completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: Result<Path, NoPathFound>,
    /// Number of expansion steps.
    pub expansions: usize,
    /// Largest raw frontier size, stale duplicates included.
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Cost of the found path.
    pub fn path_cost(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(Path::cost)
    }

    /// Length in cells of the found path.
    pub fn path_len(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(Path::len)
    }
}

/// Aggregate over a batch of [`SearchReport`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub successes: usize,
    pub mean_expansions: f64,
    pub mean_peak_frontier: f64,
    /// Mean path cost over successful runs only.
    pub mean_cost: Option<f64>,
    pub mean_elapsed: Duration,
    pub total_elapsed: Duration,
}

impl BatchSummary {
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a SearchReport>) -> Self {
        let mut s = BatchSummary::default();
        let mut expansions = 0usize;
        let mut peak = 0usize;
        let mut cost = 0.0;
        for r in reports {
            s.runs += 1;
            expansions += r.expansions;
            peak += r.peak_frontier;
            s.total_elapsed += r.elapsed;
            if let Some(c) = r.path_cost() {
                s.successes += 1;
                cost += c;
            }
        }
        if s.runs == 0 {
            return s;
        }
        let n = s.runs as f64;
        s.mean_expansions = expansions as f64 / n;
        s.mean_peak_frontier = peak as f64 / n;
        s.mean_elapsed = s.total_elapsed / s.runs as u32;
        if s.successes > 0 {
            s.mean_cost = Some(cost / s.successes as f64);
        }
        s
    }

    /// Fraction of runs that found a path, 0 for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64
        }
    }
}
