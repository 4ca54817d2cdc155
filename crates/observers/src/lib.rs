//! Reusable observers for the crossent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any problem family.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for solver events and actions
//!   ([`HasScores`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: reports progress through `tracing`
//! - [`EliteSpread`]: stops once the elite scores have collapsed together
//!
//! [`Observer`]: crossent_core::Observer
//! [`HasScores`]: traits::HasScores
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod converge;
mod logging;

pub use converge::EliteSpread;
pub use logging::LogObserver;
