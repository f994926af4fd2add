//! Reusable observers for Presort engines.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the profiler and report entry points.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-engine observers
//!   ([`HasElapsed`], [`CanAbort`])
//!
//! # Observers
//!
//! - [`CancelFlag`]: aborts when another thread requests cancellation
//! - [`TimeBudget`]: aborts once accumulated time exceeds a budget
//!
//! [`Observer`]: presort_core::Observer
//! [`HasElapsed`]: traits::HasElapsed
//! [`CanAbort`]: traits::CanAbort

pub mod traits;

mod budget;
mod cancel;

pub use budget::TimeBudget;
pub use cancel::CancelFlag;
