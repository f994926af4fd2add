//! Static Big-O catalog for the sort and search algorithms.
//!
//! Values are symbolic labels for reporting. Nothing here is measured or
//! derived from a run.

use std::fmt;

use crate::{SearchAlgorithm, SortAlgorithm, Sortedness};

/// A symbolic complexity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Complexity {
    #[cfg_attr(feature = "serde", serde(rename = "O(1)"))]
    Constant,

    #[cfg_attr(feature = "serde", serde(rename = "O(log n)"))]
    Logarithmic,

    /// Linear with a halved constant, reported for average linear search.
    #[cfg_attr(feature = "serde", serde(rename = "O(n/2)"))]
    HalfLinear,

    #[cfg_attr(feature = "serde", serde(rename = "O(n)"))]
    Linear,

    #[cfg_attr(feature = "serde", serde(rename = "O(n log n)"))]
    Linearithmic,

    #[cfg_attr(feature = "serde", serde(rename = "O(n²)"))]
    Quadratic,
}

impl Complexity {
    /// Returns the Big-O label, e.g. `"O(n log n)"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::HalfLinear => "O(n/2)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best, average, and worst time plus auxiliary space for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexityProfile {
    pub best: Complexity,
    pub average: Complexity,
    pub worst: Complexity,
    pub space: Complexity,
}

impl ComplexityProfile {
    const fn new(
        best: Complexity,
        average: Complexity,
        worst: Complexity,
        space: Complexity,
    ) -> Self {
        Self {
            best,
            average,
            worst,
            space,
        }
    }
}

/// Returns the complexity profile of a sort algorithm.
#[must_use]
pub fn sort(algorithm: SortAlgorithm) -> ComplexityProfile {
    use Complexity::{Constant, Linear, Linearithmic, Logarithmic, Quadratic};

    match algorithm {
        SortAlgorithm::Quick => ComplexityProfile::new(Linearithmic, Linearithmic, Quadratic, Logarithmic),
        SortAlgorithm::Merge => ComplexityProfile::new(Linearithmic, Linearithmic, Linearithmic, Linear),
        SortAlgorithm::Bubble => ComplexityProfile::new(Linear, Quadratic, Quadratic, Constant),
    }
}

/// Returns the complexity profile of a search algorithm.
///
/// Binary search on an array not known to be sorted is reported as linear,
/// because the profiler degrades it to a linear scan.
#[must_use]
pub fn search(algorithm: SearchAlgorithm, sortedness: Sortedness) -> ComplexityProfile {
    use Complexity::{Constant, HalfLinear, Linear, Logarithmic};

    match (algorithm, sortedness) {
        (SearchAlgorithm::Binary, Sortedness::Sorted) => {
            ComplexityProfile::new(Constant, Logarithmic, Logarithmic, Constant)
        }
        (SearchAlgorithm::Binary, Sortedness::Unsorted) => {
            ComplexityProfile::new(Linear, Linear, Linear, Constant)
        }
        (SearchAlgorithm::Linear, _) => ComplexityProfile::new(Constant, HalfLinear, Linear, Constant),
    }
}
