//! Instrumented search over numeric arrays.
//!
//! # Algorithms
//!
//! - [`linear`]: front-to-back scan, one comparison per visited element
//! - [`binary`]: halving search over ascending input, two comparisons per
//!   non-matching iteration
//!
//! # Observer Events
//!
//! Both searches emit one [`Event`] per probe: per visited index for linear
//! search, per iteration for binary search. Each event carries the probe's
//! [`Bounds`] and the running comparison count, which strictly increases from
//! one event to the next. The trace generator records these events, so a
//! trace always shows exactly what the engine did.
//!
//! Search observers cannot steer the engine: the action type is
//! [`Infallible`].

pub mod binary;
pub mod linear;

pub use binary::binary_search;
pub use linear::linear_search;

use std::convert::Infallible;

use presort_core::{NumericArray, Observer};

use crate::SearchAlgorithm;

/// The result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Whether the target was found.
    pub found: bool,

    /// Index of the match; present if and only if `found`.
    pub position: Option<usize>,

    /// Element comparisons performed.
    pub comparisons: usize,
}

impl SearchOutcome {
    /// Creates an outcome for a match at `position`.
    #[must_use]
    pub fn found(position: usize, comparisons: usize) -> Self {
        Self {
            found: true,
            position: Some(position),
            comparisons,
        }
    }

    /// Creates an outcome for a search that did not find the target.
    #[must_use]
    pub fn not_found(comparisons: usize) -> Self {
        Self {
            found: false,
            position: None,
            comparisons,
        }
    }
}

/// The positions a search is examining at one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged, rename_all_fields = "camelCase")
)]
pub enum Bounds {
    /// Inclusive binary search window and its midpoint.
    Binary {
        left: usize,
        right: usize,
        mid: usize,
    },

    /// The index a linear scan is visiting.
    Linear {
        #[cfg_attr(feature = "serde", serde(rename = "currentIndex"))]
        current: usize,
    },
}

/// Event emitted by a search for each probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The positions being examined.
    pub bounds: Bounds,

    /// Comparisons performed so far, including this probe's equality test.
    pub comparisons: usize,
}

/// Searches `array` for `target` with the selected algorithm.
///
/// Binary search requires `array` to be sorted; see [`binary::search`].
#[must_use]
pub fn search(array: &NumericArray, target: f64, algorithm: SearchAlgorithm) -> SearchOutcome {
    search_observed(array, target, algorithm, ())
}

/// Searches `array` for `target`, reporting each probe to `observer`.
pub fn search_observed<Obs>(
    array: &NumericArray,
    target: f64,
    algorithm: SearchAlgorithm,
    observer: Obs,
) -> SearchOutcome
where
    Obs: Observer<Event, Infallible>,
{
    match algorithm {
        SearchAlgorithm::Linear => linear::search(array.as_slice(), target, observer),
        SearchAlgorithm::Binary => binary::search(array.as_slice(), target, observer),
    }
}
