use std::convert::Infallible;

use presort_core::Observer;

use super::{Bounds, Event, SearchOutcome};

/// Scans `values` front to back for `target`.
///
/// Each visited element costs one comparison, so a match at index `k`
/// reports `k + 1` comparisons. The observer receives one [`Event`] per
/// visited index, after that index has been compared.
pub fn search<Obs>(values: &[f64], target: f64, mut observer: Obs) -> SearchOutcome
where
    Obs: Observer<Event, Infallible>,
{
    let mut comparisons = 0;

    for (current, &value) in values.iter().enumerate() {
        comparisons += 1;

        let event = Event {
            bounds: Bounds::Linear { current },
            comparisons,
        };
        if let Some(never) = observer.observe(&event) {
            match never {}
        }

        if value == target {
            return SearchOutcome::found(current, comparisons);
        }
    }

    SearchOutcome::not_found(comparisons)
}

/// Scans `values` for `target` without observer support.
#[must_use]
pub fn linear_search(values: &[f64], target: f64) -> SearchOutcome {
    search(values, target, ())
}
