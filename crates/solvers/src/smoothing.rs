use thiserror::Error;

use crate::problem::{State, Updater};

/// Parameters that can be mixed with another set of the same kind.
pub trait Blend {
    /// Returns `weight * self + (1 - weight) * other`, elementwise.
    #[must_use]
    fn blend(&self, other: &Self, weight: f64) -> Self;
}

/// Errors that can occur when constructing a [`Smoothing`] updater.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SmoothingError {
    #[error("smoothing weight must be in [0, 1], got {0}")]
    Weight(f64),
}

/// An exponential moving average between estimated and current parameters.
///
/// With weight `w`, each update yields `w * estimated + (1 - w) * current`.
/// A weight of one keeps the raw estimate; smaller weights slow the
/// distribution's collapse onto the elite set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    weight: f64,
}

impl Smoothing {
    /// Creates a smoothing updater.
    ///
    /// # Errors
    ///
    /// Returns an error if `weight` is not in `[0, 1]`.
    pub fn new(weight: f64) -> Result<Self, SmoothingError> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(SmoothingError::Weight(weight));
        }
        Ok(Self { weight })
    }

    /// Returns the weight given to the new estimate.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<P: Blend> Updater<P> for Smoothing {
    fn update(&mut self, estimated: P, state: &State<P>) -> P {
        estimated.blend(state.params(), self.weight)
    }
}
