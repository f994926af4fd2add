//! Comparison sorts that return a new ascending array.
//!
//! # Algorithms
//!
//! - [`quick_sort`]: three-way partition around the middle element
//! - [`merge_sort`]: top-down halving with a stable, left-biased merge
//! - [`bubble_sort`]: `n - 1` adjacent compare-and-swap passes
//!
//! Every sort copies its input. Empty and single-element slices are returned
//! as-is without comparing anything.
//!
//! [`sort_counted`] additionally reports how many element comparisons the
//! chosen algorithm performed, which the report uses to show the cost paid
//! for presorting.

mod bubble;
mod merge;
mod quick;

pub use bubble::bubble_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use presort_core::NumericArray;

use crate::SortAlgorithm;

/// A sorted array together with the comparisons spent producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SortRun {
    /// The values in ascending order.
    pub values: NumericArray,

    /// Element comparisons performed by the algorithm.
    pub comparisons: usize,
}

/// Returns a sorted copy of `array` using `algorithm`.
#[must_use]
pub fn sort(array: &NumericArray, algorithm: SortAlgorithm) -> NumericArray {
    sort_counted(array, algorithm).values
}

/// Returns a sorted copy of `array` along with the comparison count.
#[must_use]
pub fn sort_counted(array: &NumericArray, algorithm: SortAlgorithm) -> SortRun {
    let mut comparisons = 0;
    let values = sort_slice(array.as_slice(), algorithm, &mut comparisons);

    SortRun {
        values: array.rearranged(values),
        comparisons,
    }
}

fn sort_slice(values: &[f64], algorithm: SortAlgorithm, comparisons: &mut usize) -> Vec<f64> {
    match algorithm {
        SortAlgorithm::Quick => quick::partition_sort(values, comparisons),
        SortAlgorithm::Merge => merge::split_sort(values, comparisons),
        SortAlgorithm::Bubble => bubble::swap_sort(values, comparisons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn array(values: &[f64]) -> NumericArray {
        NumericArray::try_from(values).expect("test arrays are valid")
    }

    #[test]
    fn sorts_example_with_every_algorithm() {
        let input = array(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0]);
        let expected = [1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 9.0];

        for algorithm in SortAlgorithm::ALL {
            assert_eq!(sort(&input, algorithm).as_slice(), &expected, "{algorithm}");
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let input = array(&[2.0, 1.0]);
        let _ = sort(&input, SortAlgorithm::Bubble);
        assert_eq!(input.as_slice(), &[2.0, 1.0]);
    }

    #[test]
    fn single_value_fast_path() {
        for algorithm in SortAlgorithm::ALL {
            let run = sort_counted(&array(&[-4.5]), algorithm);
            assert_eq!(run.values.as_slice(), &[-4.5]);
            assert_eq!(run.comparisons, 0);
        }
    }

    #[test]
    fn empty_slices_are_returned_unchanged() {
        assert!(quick_sort(&[]).is_empty());
        assert!(merge_sort(&[]).is_empty());
        assert!(bubble_sort(&[]).is_empty());
    }

    #[test]
    fn stable_algorithms_keep_signed_zero_order() {
        let input = array(&[0.0, -0.0, 1.0]);

        for algorithm in [SortAlgorithm::Merge, SortAlgorithm::Bubble] {
            let bits: Vec<u64> = sort(&input, algorithm)
                .as_slice()
                .iter()
                .map(|v| v.to_bits())
                .collect();
            assert_eq!(
                bits,
                vec![0.0_f64.to_bits(), (-0.0_f64).to_bits(), 1.0_f64.to_bits()],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn bubble_comparisons_are_triangular() {
        let run = sort_counted(&array(&[4.0, 3.0, 2.0, 1.0, 0.0, 9.0]), SortAlgorithm::Bubble);
        assert_eq!(run.comparisons, 15);
    }

    fn values() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1.0e6_f64..1.0e6, 1..64)
    }

    fn reference_sort(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    proptest! {
        #[test]
        fn prop_sort_matches_reference(values in values()) {
            let input = array(&values);
            let expected = reference_sort(&values);

            for algorithm in SortAlgorithm::ALL {
                let sorted = sort(&input, algorithm);
                prop_assert!(sorted.is_sorted());
                prop_assert_eq!(sorted.as_slice(), expected.as_slice());
            }
        }

        #[test]
        fn prop_sort_is_idempotent(values in values()) {
            let input = array(&values);

            for algorithm in SortAlgorithm::ALL {
                let once = sort(&input, algorithm);
                let twice = sort(&once, algorithm);
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn prop_duplicates_are_preserved(values in prop::collection::vec(0_u8..4, 1..48)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let input = array(&values);

            for algorithm in SortAlgorithm::ALL {
                prop_assert_eq!(sort(&input, algorithm).into_inner(), reference_sort(&values));
            }
        }
    }
}
