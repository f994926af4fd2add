use std::convert::Infallible;

use presort_core::Observer;

use super::{Bounds, Event, SearchOutcome};

/// Searches ascending `values` for `target` by halving an inclusive window.
///
/// `values` must be sorted in ascending order. On unsorted input the result
/// is unspecified: the search may miss a present value.
///
/// Each iteration tests equality first, then ordering. A matching iteration
/// costs one comparison and every other iteration costs two. The observer
/// receives one [`Event`] per iteration, after the equality test.
pub fn search<Obs>(values: &[f64], target: f64, mut observer: Obs) -> SearchOutcome
where
    Obs: Observer<Event, Infallible>,
{
    let mut comparisons = 0;
    if values.is_empty() {
        return SearchOutcome::not_found(comparisons);
    }

    let mut left = 0;
    let mut right = values.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        comparisons += 1;

        let event = Event {
            bounds: Bounds::Binary { left, right, mid },
            comparisons,
        };
        if let Some(never) = observer.observe(&event) {
            match never {}
        }

        if values[mid] == target {
            return SearchOutcome::found(mid, comparisons);
        }

        comparisons += 1;
        if values[mid] < target {
            left = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            right = mid - 1;
        }
    }

    SearchOutcome::not_found(comparisons)
}

/// Searches ascending `values` for `target` without observer support.
#[must_use]
pub fn binary_search(values: &[f64], target: f64) -> SearchOutcome {
    search(values, target, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const SORTED: [f64; 11] = [1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 9.0];

    /// Bit length of `n`, which equals `ceil(log2(n + 1))`.
    fn ceil_log2_plus_one(n: usize) -> usize {
        (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn single_element_match_costs_one_comparison() {
        assert_eq!(binary_search(&[5.0], 5.0), SearchOutcome::found(0, 1));
    }

    #[test]
    fn finds_largest_value() {
        // mid = 5 (4 < 9), mid = 8 (5 < 9), mid = 9 (6 < 9), mid = 10 (match).
        let outcome = binary_search(&SORTED, 9.0);
        assert_eq!(outcome, SearchOutcome::found(10, 7));
    }

    #[test]
    fn missing_below_minimum_stops_at_left_edge() {
        let mut windows = Vec::new();
        let outcome = search(&SORTED, 0.0, |event: &Event| {
            windows.push(event.bounds);
            None
        });

        assert!(!outcome.found);
        assert_eq!(outcome.comparisons, 2 * windows.len());
        assert_eq!(
            windows.last(),
            Some(&Bounds::Binary {
                left: 0,
                right: 1,
                mid: 0
            })
        );
    }

    #[test]
    fn events_report_window_and_running_count() {
        let mut events = Vec::new();
        search(&[1.0, 2.0, 3.0, 4.0, 5.0], 4.0, |event: &Event| {
            events.push(*event);
            None
        });

        assert_eq!(
            events,
            vec![
                Event {
                    bounds: Bounds::Binary {
                        left: 0,
                        right: 4,
                        mid: 2
                    },
                    comparisons: 1
                },
                Event {
                    bounds: Bounds::Binary {
                        left: 3,
                        right: 4,
                        mid: 3
                    },
                    comparisons: 3
                },
            ]
        );
    }

    #[test]
    fn ties_resolve_consistently() {
        let first = binary_search(&SORTED, 5.0);
        let second = binary_search(&SORTED, 5.0);

        assert_eq!(first, second);
        assert_eq!(SORTED[first.position.expect("present")], 5.0);
    }

    fn sorted_distinct() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::btree_set(-10_000_i32..10_000, 1..128)
            .prop_map(|set| set.into_iter().map(f64::from).collect())
    }

    proptest! {
        #[test]
        fn prop_finds_every_present_value(values in sorted_distinct()) {
            for (i, &target) in values.iter().enumerate() {
                let outcome = binary_search(&values, target);
                prop_assert!(outcome.found);
                prop_assert_eq!(outcome.position, Some(i));
            }
        }

        #[test]
        fn prop_absent_value_is_bounded(values in sorted_distinct(), offset in 0.25_f64..0.75) {
            let bound = 2 * ceil_log2_plus_one(values.len());
            let absent = values.iter().map(|v| v + offset).chain([values[0] - 1.0]);

            for target in absent {
                let outcome = binary_search(&values, target);
                prop_assert!(!outcome.found);
                prop_assert_eq!(outcome.position, None);
                prop_assert!(outcome.comparisons <= bound);
            }
        }
    }
}
