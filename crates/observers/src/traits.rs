//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over the event and action types of a solver, so an
//! observer written against them works for every parameter type.
//!
//! # Example
//!
//! ```rust
//! use crossent_core::Observer;
//! use crossent_observers::traits::{CanStopEarly, HasScores};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasScores, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.min_score() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use crossent_solvers::problem;

/// An event that reports the scores of one iteration.
pub trait HasScores {
    /// Returns the number of completed iterations.
    fn iter(&self) -> usize;

    /// Returns the lowest score of the iteration.
    fn min_score(&self) -> f64;

    /// Returns the elite boundary score of the iteration.
    fn elite_score(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<P> HasScores for problem::Event<'_, P> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn min_score(&self) -> f64 {
        self.min_score
    }

    fn elite_score(&self) -> f64 {
        self.elite_score
    }
}

impl CanStopEarly for problem::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
