use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use presort_core::Observer;
use tracing::debug;

use crate::traits::CanAbort;

/// Aborts a run once cancellation has been requested.
///
/// Clones share the same flag, so one clone can be handed to the profiler
/// while another stays with whoever may cancel, possibly on another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every run observed by this flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl<E, A: CanAbort> Observer<E, A> for CancelFlag {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_cancelled() {
            debug!("cancellation requested, aborting run");
            return Some(A::abort());
        }
        None
    }
}
