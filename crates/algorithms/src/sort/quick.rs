/// Sorts `values` with a three-way quick sort around the middle element.
///
/// Elements are partitioned in place into less, equal, and greater buckets;
/// only the outer buckets are sorted further, so runs of duplicates never
/// deepen the recursion. The smaller outer bucket recurses and the larger one
/// is handled by the loop, which bounds the depth by `log2(n)`.
#[must_use]
pub fn quick_sort(values: &[f64]) -> Vec<f64> {
    partition_sort(values, &mut 0)
}

pub(super) fn partition_sort(values: &[f64], comparisons: &mut usize) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sort_range(&mut sorted, comparisons);
    sorted
}

fn sort_range(mut values: &mut [f64], comparisons: &mut usize) {
    while values.len() > 1 {
        let (less_end, greater_start) = partition(values, comparisons);

        let (rest, greater) = std::mem::take(&mut values).split_at_mut(greater_start);
        let less = &mut rest[..less_end];

        if less.len() <= greater.len() {
            sort_range(less, comparisons);
            values = greater;
        } else {
            sort_range(greater, comparisons);
            values = less;
        }
    }
}

/// Partitions `values` around its middle element.
///
/// Returns `(less_end, greater_start)`: values below the pivot end up in
/// `..less_end`, equal values in `less_end..greater_start`, and greater values
/// in `greater_start..`. Each element costs one comparison if it is less than
/// the pivot and two otherwise.
fn partition(values: &mut [f64], comparisons: &mut usize) -> (usize, usize) {
    let pivot = values[values.len() / 2];
    let mut less_end = 0;
    let mut next = 0;
    let mut greater_start = values.len();

    while next < greater_start {
        *comparisons += 1;
        if values[next] < pivot {
            values.swap(less_end, next);
            less_end += 1;
            next += 1;
            continue;
        }

        *comparisons += 1;
        if values[next] > pivot {
            greater_start -= 1;
            values.swap(next, greater_start);
        } else {
            next += 1;
        }
    }

    (less_end, greater_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        let sorted = quick_sort(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0]);
        assert_eq!(sorted, vec![1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 9.0]);
    }

    #[test]
    fn counts_one_comparison_for_smaller_values() {
        // Pivot is 2.0: 1.0 takes one comparison, 2.0 and 3.0 take two each.
        let mut comparisons = 0;
        let sorted = partition_sort(&[3.0, 2.0, 1.0], &mut comparisons);

        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn all_equal_values_partition_once() {
        let mut comparisons = 0;
        let sorted = partition_sort(&[7.0; 4], &mut comparisons);

        assert_eq!(sorted, vec![7.0; 4]);
        assert_eq!(comparisons, 8);
    }

    /// Builds a permutation of `1..=len` whose middle element is the maximum,
    /// and stays so after removing the maximum, for every length down to one.
    fn middle_maximum_input(len: u32) -> Vec<f64> {
        let mut values = Vec::new();
        for value in 1..=len {
            values.insert((values.len() + 1) / 2, f64::from(value));
        }
        values
    }

    #[test]
    fn middle_maximum_input_sorts_on_a_small_stack() {
        let input = middle_maximum_input(20_000);
        let expected: Vec<f64> = (1..=20_000).map(f64::from).collect();

        let sorted = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || quick_sort(&input))
            .expect("thread should spawn")
            .join()
            .expect("sort should not overflow the stack");

        assert_eq!(sorted, expected);
    }
}
