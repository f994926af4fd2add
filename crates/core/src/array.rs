use thiserror::Error;

/// Errors that can occur when validating a [`NumericArray`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("array must contain at least one value")]
    Empty,

    #[error("value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("target is not finite: {0}")]
    NonFiniteTarget(f64),
}

/// Checks that a search target is finite.
///
/// # Errors
///
/// Returns [`InputError::NonFiniteTarget`] for `NaN` or infinite targets.
pub fn finite_target(target: f64) -> Result<f64, InputError> {
    if target.is_finite() {
        Ok(target)
    } else {
        Err(InputError::NonFiniteTarget(target))
    }
}

/// A non-empty array of finite values.
///
/// `NumericArray` is the input every engine operates on. The invariant is
/// checked once at construction so the sort and search engines never have to
/// reason about `NaN` ordering or empty windows.
///
/// Engines never mutate a `NumericArray`; operations that reorder values
/// produce a new array via [`NumericArray::rearranged`].
///
/// # Examples
///
/// ```
/// use presort_core::{InputError, NumericArray};
///
/// let array = NumericArray::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(array.as_slice(), &[3.0, 1.0, 2.0]);
///
/// assert_eq!(NumericArray::new(vec![]), Err(InputError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct NumericArray(Vec<f64>);

impl NumericArray {
    /// Constructs a `NumericArray` after validating `values`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] if `values` is empty, or
    /// [`InputError::NonFinite`] for the first `NaN` or infinite value.
    pub fn new(values: Vec<f64>) -> Result<Self, InputError> {
        if values.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { index, value });
        }
        Ok(Self(values))
    }

    /// Returns a new array holding `values` in place of this array's values.
    ///
    /// `values` must be a rearrangement of this array's values, so the
    /// invariant carries over without a second validation pass.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the length changes or a value is not finite.
    #[must_use]
    pub fn rearranged(&self, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.0.len(), "rearrangement changed length");
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self(values)
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of values, which is never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.0.is_sorted()
    }

    /// Consumes the wrapper and returns the inner values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for NumericArray {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for NumericArray {
    type Error = InputError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for NumericArray {
    type Error = InputError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl From<NumericArray> for Vec<f64> {
    fn from(array: NumericArray) -> Self {
        array.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_values() {
        let array = NumericArray::new(vec![1.5, -2.0, 0.0]).expect("valid array");
        assert_eq!(array.len(), 3);
        assert_eq!(array.as_slice(), &[1.5, -2.0, 0.0]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(NumericArray::new(Vec::new()), Err(InputError::Empty));
    }

    #[test]
    fn rejects_nan_with_index() {
        let err = NumericArray::new(vec![1.0, 2.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, InputError::NonFinite { index: 2, value } if value.is_nan()));
    }

    #[test]
    fn rejects_infinity() {
        let err = NumericArray::try_from(&[f64::NEG_INFINITY, 1.0][..]).unwrap_err();
        assert_eq!(
            err,
            InputError::NonFinite {
                index: 0,
                value: f64::NEG_INFINITY
            }
        );
    }

    #[test]
    fn target_must_be_finite() {
        assert_eq!(finite_target(-3.5), Ok(-3.5));
        assert!(matches!(finite_target(f64::NAN), Err(InputError::NonFiniteTarget(v)) if v.is_nan()));
        assert_eq!(
            finite_target(f64::INFINITY),
            Err(InputError::NonFiniteTarget(f64::INFINITY))
        );
    }

    #[test]
    fn reports_sortedness() {
        let unsorted = NumericArray::new(vec![2.0, 1.0]).unwrap();
        let sorted = NumericArray::new(vec![1.0, 1.0, 2.0]).unwrap();

        assert!(!unsorted.is_sorted());
        assert!(sorted.is_sorted());
    }

    #[test]
    fn rearranged_keeps_new_order() {
        let array = NumericArray::new(vec![2.0, 1.0]).unwrap();
        let swapped = array.rearranged(vec![1.0, 2.0]);

        assert_eq!(swapped.as_slice(), &[1.0, 2.0]);
        assert_eq!(array.as_slice(), &[2.0, 1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let array: NumericArray = serde_json::from_str("[1.0, 2.5]").expect("valid json");
        assert_eq!(array.as_slice(), &[1.0, 2.5]);

        assert!(serde_json::from_str::<NumericArray>("[]").is_err());
    }
}
