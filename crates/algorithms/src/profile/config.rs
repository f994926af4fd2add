use std::num::NonZeroUsize;

use crate::ConfigError;

const DEFAULT_REPETITIONS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Configuration for the performance profiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    repetitions: NonZeroUsize,
    yield_every: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            yield_every: None,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `yield_every` is the number of repetitions between cooperative yields
    /// to the scheduler; zero disables yielding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroRepetitions`] if `repetitions` is zero.
    pub fn new(repetitions: usize, yield_every: usize) -> Result<Self, ConfigError> {
        let repetitions = NonZeroUsize::new(repetitions).ok_or(ConfigError::ZeroRepetitions)?;

        Ok(Self {
            repetitions,
            yield_every: NonZeroUsize::new(yield_every),
        })
    }

    /// Returns the number of timed repetitions.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions.get()
    }

    /// Returns the yield interval, if yielding is enabled.
    #[must_use]
    pub fn yield_every(&self) -> Option<NonZeroUsize> {
        self.yield_every
    }

    /// Returns true if the profiler should yield after `repetition`.
    pub(super) fn yields_after(&self, repetition: usize) -> bool {
        self.yield_every
            .is_some_and(|every| repetition % every.get() == 0)
    }
}
