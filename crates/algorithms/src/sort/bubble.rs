/// Sorts `values` with bubble sort.
///
/// Always runs `n - 1` passes with no early exit, so the comparison count is
/// exactly `n(n - 1) / 2` regardless of input order.
#[must_use]
pub fn bubble_sort(values: &[f64]) -> Vec<f64> {
    swap_sort(values, &mut 0)
}

pub(super) fn swap_sort(values: &[f64], comparisons: &mut usize) -> Vec<f64> {
    let mut sorted = values.to_vec();
    let n = sorted.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            *comparisons += 1;
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }

    sorted
}
