use tracing::debug;

use crate::{ComplexityProfile, SearchAlgorithm, Sortedness, complexity};

/// Which search actually runs for a requested algorithm and sortedness.
///
/// Binary search on an array not known to be sorted degrades to a linear
/// scan. The plan records both the requested and the executed algorithm so
/// the substitution is visible in every measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    requested: SearchAlgorithm,
    executed: SearchAlgorithm,
    sortedness: Sortedness,
}

impl SearchPlan {
    /// Resolves the search to execute.
    #[must_use]
    pub fn resolve(requested: SearchAlgorithm, sortedness: Sortedness) -> Self {
        let executed = match (requested, sortedness) {
            (SearchAlgorithm::Binary, Sortedness::Unsorted) => SearchAlgorithm::Linear,
            (algorithm, _) => algorithm,
        };

        let plan = Self {
            requested,
            executed,
            sortedness,
        };
        if plan.is_degraded() {
            debug!(
                requested = %requested,
                executed = %executed,
                "binary search on unsorted input degrades to linear search"
            );
        }
        plan
    }

    #[must_use]
    pub fn requested(&self) -> SearchAlgorithm {
        self.requested
    }

    #[must_use]
    pub fn executed(&self) -> SearchAlgorithm {
        self.executed
    }

    #[must_use]
    pub fn sortedness(&self) -> Sortedness {
        self.sortedness
    }

    /// Returns true if the executed search differs from the requested one.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.requested != self.executed
    }

    /// Returns the catalog complexity for the requested search.
    #[must_use]
    pub fn complexity(&self) -> ComplexityProfile {
        complexity::search(self.requested, self.sortedness)
    }
}
