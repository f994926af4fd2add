//! Shared fixtures for the cross-crate tests.

use presort_core::NumericArray;

/// The worked example used across the test suites.
pub const EXAMPLE: [f64; 11] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0];

/// [`EXAMPLE`] in ascending order.
pub const EXAMPLE_SORTED: [f64; 11] = [1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 9.0];

/// Returns [`EXAMPLE`] as a validated array.
///
/// # Panics
///
/// Never; the example values are finite and non-empty.
#[must_use]
pub fn example_array() -> NumericArray {
    NumericArray::try_from(&EXAMPLE[..]).expect("example is valid")
}

/// Returns a descending array of `len` integers, the worst case for bubble sort.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn descending(len: u32) -> NumericArray {
    NumericArray::new((0..len).rev().map(f64::from).collect()).expect("len must be non-zero")
}
