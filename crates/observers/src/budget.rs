use std::time::Duration;

use presort_core::Observer;
use tracing::debug;

use crate::traits::{CanAbort, HasElapsed};

/// Aborts a run once its accumulated time exceeds a budget.
///
/// The check runs after each repetition, so a run may overshoot the budget by
/// at most one repetition before it is aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    budget: Duration,
}

impl TimeBudget {
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl<E: HasElapsed, A: CanAbort> Observer<E, A> for TimeBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.total() > self.budget {
            debug!(
                budget_ms = self.budget.as_secs_f64() * 1_000.0,
                total_ms = event.total().as_secs_f64() * 1_000.0,
                "time budget exceeded, aborting run"
            );
            return Some(A::abort());
        }
        None
    }
}
