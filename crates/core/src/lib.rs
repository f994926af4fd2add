//! Core traits and types for Presort.
//!
//! This crate defines the shared abstractions the algorithm and observer
//! crates build on:
//!
//! - [`NumericArray`]: a validated, non-empty array of finite values
//! - [`Observer`]: receives engine events and optionally returns control actions

mod array;
mod observer;

pub use array::{InputError, NumericArray, finite_target};
pub use observer::Observer;
