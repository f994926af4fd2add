use crate::InvariantError;

use super::StepRecord;

/// Checks snapshot lengths and per-phase comparison growth.
///
/// A phase is a run of consecutive probes; any other record starts a new one.
pub(super) fn validate(steps: &[StepRecord], expected: usize) -> Result<(), InvariantError> {
    let mut previous = None;

    for (step, record) in steps.iter().enumerate() {
        let actual = record.snapshot().len();
        if actual != expected {
            return Err(InvariantError::SnapshotLength {
                step,
                expected,
                actual,
            });
        }

        match (previous, record.comparisons()) {
            (Some(previous), Some(actual)) if actual <= previous => {
                return Err(InvariantError::ComparisonsNotIncreasing {
                    step,
                    previous,
                    actual,
                });
            }
            (_, current) => previous = current,
        }
    }

    Ok(())
}
