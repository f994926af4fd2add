//! Capability traits for cross-engine observers.
//!
//! These traits abstract over engine-specific event and action types, so an
//! observer can be written once and used wherever the capability exists.
//!
//! # Event traits
//!
//! - [`HasElapsed`]: events that carry wall-clock timing
//!
//! # Action traits
//!
//! - [`CanAbort`]: actions that can cancel a run
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use presort_algorithms::profile::{Action, Event};
//! use presort_core::Observer;
//! use presort_observers::traits::{CanAbort, HasElapsed};
//!
//! /// Aborts as soon as a single repetition runs longer than `limit`.
//! struct SlowRepetition {
//!     limit: Duration,
//! }
//!
//! impl<E: HasElapsed, A: CanAbort> Observer<E, A> for SlowRepetition {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.elapsed() > self.limit).then(A::abort)
//!     }
//! }
//!
//! let mut observer = SlowRepetition { limit: Duration::from_millis(5) };
//! let event = |elapsed_ms| Event {
//!     repetition: 2,
//!     elapsed: Duration::from_millis(elapsed_ms),
//!     total: Duration::from_millis(50),
//! };
//!
//! assert_eq!(Observer::<Event, Action>::observe(&mut observer, &event(5)), None);
//! assert_eq!(
//!     Observer::<Event, Action>::observe(&mut observer, &event(6)),
//!     Some(Action::Abort)
//! );
//! ```

use std::time::Duration;

use presort_algorithms::profile;

/// An event that carries wall-clock timing.
pub trait HasElapsed {
    /// Returns the duration of the step this event reports.
    fn elapsed(&self) -> Duration;

    /// Returns the accumulated duration of the run so far.
    fn total(&self) -> Duration;
}

/// An action type that can cancel a run.
pub trait CanAbort {
    /// Returns the action that aborts the run.
    fn abort() -> Self;
}

// --- HasElapsed for profile::Event ---

impl HasElapsed for profile::Event {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn total(&self) -> Duration {
        self.total
    }
}

// --- CanAbort for profile::Action ---

impl CanAbort for profile::Action {
    fn abort() -> Self {
        Self::Abort
    }
}
