/// Sorts `values` with a top-down merge sort.
///
/// Ties take the left element first, so the sort is stable.
#[must_use]
pub fn merge_sort(values: &[f64]) -> Vec<f64> {
    split_sort(values, &mut 0)
}

pub(super) fn split_sort(values: &[f64], comparisons: &mut usize) -> Vec<f64> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let (left, right) = values.split_at(values.len() / 2);
    let left = split_sort(left, comparisons);
    let right = split_sort(right, comparisons);
    merge(&left, &right, comparisons)
}

fn merge(left: &[f64], right: &[f64], comparisons: &mut usize) -> Vec<f64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        *comparisons += 1;
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
