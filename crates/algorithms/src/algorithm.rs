use std::{fmt, str::FromStr};

use crate::ConfigError;

/// The sorting algorithms available to the sort engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortAlgorithm {
    #[cfg_attr(feature = "serde", serde(rename = "quickSort"))]
    Quick,

    #[cfg_attr(feature = "serde", serde(rename = "mergeSort"))]
    Merge,

    #[cfg_attr(feature = "serde", serde(rename = "bubbleSort"))]
    Bubble,
}

/// The search algorithms available to the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithm {
    #[cfg_attr(feature = "serde", serde(rename = "linearSearch"))]
    Linear,

    #[cfg_attr(feature = "serde", serde(rename = "binarySearch"))]
    Binary,
}

/// Whether an array handed to a search is known to be in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Sortedness {
    Unsorted,
    Sorted,
}

impl SortAlgorithm {
    /// All sort algorithms, in catalog order.
    pub const ALL: [Self; 3] = [Self::Quick, Self::Merge, Self::Bubble];

    /// Returns the stable identifier, e.g. `"quickSort"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Quick => "quickSort",
            Self::Merge => "mergeSort",
            Self::Bubble => "bubbleSort",
        }
    }

    /// Returns a human-readable name, e.g. `"Quick Sort"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Bubble => "Bubble Sort",
        }
    }
}

impl SearchAlgorithm {
    /// All search algorithms, in catalog order.
    pub const ALL: [Self; 2] = [Self::Binary, Self::Linear];

    /// Returns the stable identifier, e.g. `"binarySearch"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linearSearch",
            Self::Binary => "binarySearch",
        }
    }

    /// Returns a human-readable name, e.g. `"Binary Search"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear Search",
            Self::Binary => "Binary Search",
        }
    }
}

impl Sortedness {
    #[must_use]
    pub fn is_sorted(self) -> bool {
        matches!(self, Self::Sorted)
    }
}

impl From<bool> for Sortedness {
    fn from(sorted: bool) -> Self {
        if sorted { Self::Sorted } else { Self::Unsorted }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_owned()))
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_owned()))
    }
}
