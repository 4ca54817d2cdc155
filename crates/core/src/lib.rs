//! Core traits and array primitives for the crossent solvers.
//!
//! This crate defines the pieces the cross-entropy solvers build on:
//!
//! - [`Observer`]: receives per-iteration solver events and optionally
//!   returns a control action
//! - [`sampling`]: axis-generic cumulative sums, tiling, index/subscript
//!   conversion, and PMF/CDF sampling along an axis of an `ndarray` array

mod observer;

pub mod sampling;

pub use observer::Observer;
