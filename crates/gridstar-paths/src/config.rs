use thiserror::Error;

use crate::distance::STANDARD_OCTILE_COEFFICIENT;
use crate::heuristic::{BuiltinHeuristic, HeuristicKind};

/// Slack for comparing the Euclidean admissibility bound.
const COEFFICIENT_EPSILON: f64 = 1e-12;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("diagonal coefficient {0} is outside [0, 1]")]
    CoefficientOutOfRange(f64),

    #[error("euclidean heuristic overestimates diagonal steps costing 1 + {0}; use a coefficient of at least √2 − 1")]
    InadmissibleEuclidean(f64),

    #[error("unknown heuristic {0:?}, expected \"octile\" or \"euclidean\"")]
    UnknownHeuristic(String),
}

/// Typed search configuration.
///
/// `diagonal_coefficient` is `k` in both the diagonal step cost (`1 + k`)
/// and the octile estimate (`max + k · min`), which keeps the octile
/// heuristic consistent for any `k` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: HeuristicKind,
    pub diagonal_coefficient: f64,
    /// Fail fast when an endpoint has no traversable neighbour.
    pub reject_surrounded: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Octile,
            diagonal_coefficient: STANDARD_OCTILE_COEFFICIENT,
            reject_surrounded: true,
        }
    }
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_diagonal_coefficient(mut self, k: f64) -> Self {
        self.diagonal_coefficient = k;
        self
    }

    pub fn with_reject_surrounded(mut self, reject: bool) -> Self {
        self.reject_surrounded = reject;
        self
    }

    /// Cost of one diagonal move.
    #[inline]
    pub fn diagonal_cost(&self) -> f64 {
        1.0 + self.diagonal_coefficient
    }

    /// The builtin heuristic this configuration selects.
    pub fn heuristic(&self) -> BuiltinHeuristic {
        self.heuristic.resolve(self.diagonal_coefficient)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.diagonal_coefficient;
        if !(0.0..=1.0).contains(&k) {
            return Err(ConfigError::CoefficientOutOfRange(k));
        }
        if self.heuristic == HeuristicKind::Euclidean
            && k < STANDARD_OCTILE_COEFFICIENT - COEFFICIENT_EPSILON
        {
            return Err(ConfigError::InadmissibleEuclidean(k));
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"heuristic":"euclidean"}"#).unwrap();
        assert_eq!(c.heuristic, HeuristicKind::Euclidean);
        assert_eq!(c.diagonal_coefficient, STANDARD_OCTILE_COEFFICIENT);
        assert!(c.reject_surrounded);
    }

    #[test]
    fn unknown_heuristic_is_rejected() {
        assert!(serde_json::from_str::<SearchConfig>(r#"{"heuristic":"manhattan"}"#).is_err());
    }
}
