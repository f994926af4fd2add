use std::sync::Arc;

use crate::{SearchAlgorithm, SortAlgorithm, search::Bounds};

/// One step of a sort-then-search narrative.
///
/// Every snapshot is the array as it stood at that step and has the same
/// length as the traced input. Records of one phase share a single snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum StepRecord {
    /// The array is about to be sorted.
    Sort {
        algorithm: SortAlgorithm,
        #[cfg_attr(feature = "serde", serde(rename = "array"))]
        snapshot: Arc<[f64]>,
    },

    /// The array after sorting.
    Sorted {
        #[cfg_attr(feature = "serde", serde(rename = "array"))]
        snapshot: Arc<[f64]>,
    },

    /// A search examined `bounds`.
    #[cfg_attr(feature = "serde", serde(rename = "search"))]
    SearchProbe {
        algorithm: SearchAlgorithm,
        #[cfg_attr(feature = "serde", serde(rename = "array"))]
        snapshot: Arc<[f64]>,
        target: f64,
        sorted: bool,
        bounds: Bounds,

        /// Comparisons performed so far in this search.
        comparisons: usize,
    },

    /// A search found `target` at `index`.
    Found {
        #[cfg_attr(feature = "serde", serde(rename = "array"))]
        snapshot: Arc<[f64]>,
        index: usize,
        target: f64,
        sorted: bool,
    },

    /// A search finished without finding `target`.
    NotFound {
        #[cfg_attr(feature = "serde", serde(rename = "array"))]
        snapshot: Arc<[f64]>,
        target: f64,
        sorted: bool,
    },
}

impl StepRecord {
    /// Returns the array snapshot carried by this step.
    #[must_use]
    pub fn snapshot(&self) -> &[f64] {
        match self {
            Self::Sort { snapshot, .. }
            | Self::Sorted { snapshot }
            | Self::SearchProbe { snapshot, .. }
            | Self::Found { snapshot, .. }
            | Self::NotFound { snapshot, .. } => snapshot,
        }
    }

    /// Returns true for the record that ends a search phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::NotFound { .. })
    }

    /// Returns the running comparison count of a probe.
    #[must_use]
    pub fn comparisons(&self) -> Option<usize> {
        match self {
            Self::SearchProbe { comparisons, .. } => Some(*comparisons),
            _ => None,
        }
    }
}
