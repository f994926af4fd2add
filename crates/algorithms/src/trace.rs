//! Deterministic step traces for animated replay.
//!
//! # Sequence
//!
//! A trace narrates one sort-then-search run:
//!
//! 1. Linear search only: one [`StepRecord::SearchProbe`] per index scanned in
//!    the input array as given, then a terminal record.
//! 2. [`StepRecord::Sort`] with the pre-sort array.
//! 3. [`StepRecord::Sorted`] with the sort engine's result.
//! 4. The search replayed on the sorted array: one probe per scanned index
//!    (linear) or per iteration (binary), then a terminal record.
//!
//! Binary search has no unsorted phase: on unsorted input it would degrade to
//! linear search, and the narrative shows the sorted search only.
//!
//! # Terminal Records
//!
//! Every search phase ends with exactly one terminal record:
//! [`StepRecord::Found`] on a match, [`StepRecord::NotFound`] once the scan
//! or window is exhausted. This holds for both algorithms and both phases.
//!
//! # Consistency
//!
//! Probes are recorded from the search engine's own observer events, so a
//! trace reproduces the comparisons and positions the profiler measures for
//! the same inputs.

mod record;
mod validate;

pub use record::StepRecord;

use std::sync::Arc;

use presort_core::{NumericArray, finite_target};
use tracing::debug;

use crate::{
    Error, SearchAlgorithm, SortAlgorithm, Sortedness,
    search::{self, Event},
    sort,
};

use validate::validate;

/// Generates the step trace for sorting `array` and searching it for `target`.
///
/// The trace is a pure function of its inputs.
/// See the [module docs](self) for the record sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `target` is not finite, or
/// [`Error::InvariantViolation`] if the generated trace fails its own checks.
pub fn trace(
    array: &NumericArray,
    search_algorithm: SearchAlgorithm,
    target: f64,
    sort_algorithm: SortAlgorithm,
) -> Result<Vec<StepRecord>, Error> {
    let target = finite_target(target)?;
    let mut steps = Vec::new();

    let unsorted: Arc<[f64]> = Arc::from(array.as_slice());
    if search_algorithm == SearchAlgorithm::Linear {
        replay_search(&mut steps, array, &unsorted, search_algorithm, target, Sortedness::Unsorted);
    }

    steps.push(StepRecord::Sort {
        algorithm: sort_algorithm,
        snapshot: unsorted,
    });

    let sorted_array = sort::sort(array, sort_algorithm);
    let sorted: Arc<[f64]> = Arc::from(sorted_array.as_slice());
    steps.push(StepRecord::Sorted {
        snapshot: Arc::clone(&sorted),
    });

    replay_search(&mut steps, &sorted_array, &sorted, search_algorithm, target, Sortedness::Sorted);

    validate(&steps, array.len())?;

    debug!(
        search = %search_algorithm,
        sort = %sort_algorithm,
        size = array.len(),
        steps = steps.len(),
        "trace generated"
    );

    Ok(steps)
}

/// Runs one search phase, recording its probes and terminal record.
///
/// Every record of the phase shares `snapshot`, which holds `array`'s values.
fn replay_search(
    steps: &mut Vec<StepRecord>,
    array: &NumericArray,
    snapshot: &Arc<[f64]>,
    algorithm: SearchAlgorithm,
    target: f64,
    sortedness: Sortedness,
) {
    let sorted = sortedness.is_sorted();

    let outcome = search::search_observed(array, target, algorithm, |event: &Event| {
        steps.push(StepRecord::SearchProbe {
            algorithm,
            snapshot: Arc::clone(snapshot),
            target,
            sorted,
            bounds: event.bounds,
            comparisons: event.comparisons,
        });
        None
    });

    let snapshot = Arc::clone(snapshot);
    steps.push(match outcome.position {
        Some(index) => StepRecord::Found {
            snapshot,
            index,
            target,
            sorted,
        },
        None => StepRecord::NotFound {
            snapshot,
            target,
            sorted,
        },
    });
}
