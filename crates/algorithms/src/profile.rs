//! Averaged timing of searches.
//!
//! # Measurement
//!
//! The profiler runs the selected search against the same input once per
//! configured repetition, timing each run with [`Instant`]. The reported
//! `execution_time_ms` is the arithmetic mean. Comparisons, `found`, and
//! `position` come from a single run: every repetition is identical because
//! the search is pure and deterministic.
//!
//! # Degrade-to-Linear Policy
//!
//! Binary search requires sorted input. When binary search is requested for
//! an array not known to be sorted, the profiler runs linear search instead
//! and reports its outcome. The substitution is explicit: see [`SearchPlan`]
//! and the `requested`/`executed` fields of [`PerformanceMeasurement`].
//!
//! # Observer Events
//!
//! The profiler emits one [`Event`] after every repetition. Observers can
//! return [`Action::Abort`] to cancel; accumulated timings are then discarded
//! and [`Outcome::Aborted`] is returned, never a partial average.
//!
//! When [`Config::yield_every`] is set, the profiler yields to the scheduler
//! between repetitions so long measurements do not starve other threads.

mod config;
mod event;
mod measurement;
mod plan;

pub use config::Config;
pub use event::{Action, Event};
pub use measurement::{Outcome, PerformanceMeasurement};
pub use plan::SearchPlan;

use std::{
    hint::black_box,
    thread,
    time::{Duration, Instant},
};

use presort_core::{NumericArray, Observer, finite_target};
use tracing::debug;

use crate::{Error, InvariantError, SearchAlgorithm, Sortedness, search};

/// Measures the mean execution time of a search.
///
/// The observer receives an [`Event`] after each repetition.
/// See the [module docs](self) for the degrade-to-linear policy.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `target` is not finite.
///
/// # Panics
///
/// Panics in debug builds if `sortedness` is [`Sortedness::Sorted`] but
/// `array` is not in ascending order.
pub fn measure<Obs>(
    array: &NumericArray,
    algorithm: SearchAlgorithm,
    sortedness: Sortedness,
    target: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<PerformanceMeasurement>, Error>
where
    Obs: Observer<Event, Action>,
{
    let target = finite_target(target)?;
    debug_assert!(
        !sortedness.is_sorted() || array.is_sorted(),
        "array flagged as sorted is not in ascending order"
    );
    let plan = SearchPlan::resolve(algorithm, sortedness);

    let mut total = Duration::ZERO;
    let mut outcome = search::SearchOutcome::not_found(0);

    for repetition in 1..=config.repetitions() {
        let start = Instant::now();
        outcome = black_box(search::search(
            black_box(array),
            black_box(target),
            plan.executed(),
        ));
        let elapsed = start.elapsed();
        total += elapsed;

        let event = Event {
            repetition,
            elapsed,
            total,
        };
        if let Some(Action::Abort) = observer.observe(&event) {
            debug!(
                algorithm = %plan.executed(),
                completed = repetition,
                "measurement aborted by observer"
            );
            return Ok(Outcome::Aborted {
                completed: repetition,
            });
        }

        if config.yields_after(repetition) {
            thread::yield_now();
        }
    }

    let measurement = PerformanceMeasurement {
        execution_time_ms: mean_ms(total, config.repetitions()),
        comparisons: outcome.comparisons,
        found: outcome.found,
        position: outcome.position,
        complexity: plan.complexity(),
        requested: plan.requested(),
        executed: plan.executed(),
        sortedness,
        repetitions: config.repetitions(),
    };

    debug!(
        algorithm = %measurement.executed,
        sorted = sortedness.is_sorted(),
        size = array.len(),
        repetitions = measurement.repetitions,
        mean_ms = measurement.execution_time_ms,
        comparisons = measurement.comparisons,
        "measurement complete"
    );

    Ok(Outcome::Completed(measurement))
}

/// Measures the mean execution time of a search without observer support.
///
/// This is a convenience wrapper around [`measure`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `target` is not finite.
pub fn measure_unobserved(
    array: &NumericArray,
    algorithm: SearchAlgorithm,
    sortedness: Sortedness,
    target: f64,
    config: &Config,
) -> Result<PerformanceMeasurement, Error> {
    measure(array, algorithm, sortedness, target, config, ())?
        .completed()
        .ok_or(Error::InvariantViolation(InvariantError::UnexpectedAbort))
}

#[allow(clippy::cast_precision_loss)]
fn mean_ms(total: Duration, repetitions: usize) -> f64 {
    total.as_secs_f64() * 1_000.0 / repetitions as f64
}
