use std::time::Duration;

/// Event emitted by the profiler after each timed repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Repetitions completed so far, starting at 1.
    pub repetition: usize,

    /// Wall-clock duration of this repetition.
    pub elapsed: Duration,

    /// Accumulated wall-clock duration of all completed repetitions.
    pub total: Duration,
}

/// Actions an observer can take during profiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the measurement.
    ///
    /// Accumulated timings are discarded and the profiler reports
    /// [`Outcome::Aborted`](super::Outcome::Aborted) instead of a partial average.
    Abort,
}
