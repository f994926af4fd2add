use crate::{ComplexityProfile, SearchAlgorithm, Sortedness, search::SearchOutcome};

/// Averaged timing and representative outcome of a profiled search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PerformanceMeasurement {
    /// Mean wall-clock time per repetition, in milliseconds.
    pub execution_time_ms: f64,

    pub comparisons: usize,
    pub found: bool,
    pub position: Option<usize>,
    pub complexity: ComplexityProfile,

    /// The search the caller asked for.
    pub requested: SearchAlgorithm,

    /// The search that actually ran; differs from `requested` when binary
    /// search on unsorted input degraded to linear search.
    pub executed: SearchAlgorithm,

    pub sortedness: Sortedness,
    pub repetitions: usize,
}

impl PerformanceMeasurement {
    /// Returns the representative search outcome.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            found: self.found,
            position: self.position,
            comparisons: self.comparisons,
        }
    }
}

/// How a profiled run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Every repetition ran.
    Completed(T),

    /// An observer aborted the run; no timings are reported.
    Aborted {
        /// Repetitions completed before the abort.
        completed: usize,
    },
}

impl<T> Outcome<T> {
    /// Returns the completed value, if any.
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Aborted { .. } => None,
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}
