use presort_core::InputError;
use thiserror::Error;

/// Errors that make a requested run ill-formed before it starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("repetitions must be at least one")]
    ZeroRepetitions,

    #[error("unknown algorithm identifier: {0:?}")]
    UnknownAlgorithm(String),
}

/// Internal consistency checks that failed.
///
/// These indicate a bug in an engine, never a problem with the caller's input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("snapshot at step {step} has {actual} values, expected {expected}")]
    SnapshotLength {
        step: usize,
        expected: usize,
        actual: usize,
    },

    #[error("probe at step {step} reports {actual} comparisons after {previous}")]
    ComparisonsNotIncreasing {
        step: usize,
        previous: usize,
        actual: usize,
    },

    #[error("measurement aborted without an aborting observer")]
    UnexpectedAbort,
}

/// Errors returned by the engines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(#[from] InvariantError),
}
