//! The five strategy roles of a cross-entropy problem.
//!
//! Each role is a single-method trait. Closures with the matching signature
//! implement the roles directly, so most callers never name these traits.

use std::marker::PhantomData;

use ndarray::{Array, ArrayView, Dimension};
use rand::rngs::StdRng;

use super::{BoxError, State};

/// Draws a batch of samples, one per entry along axis 0.
pub trait SampleGenerator<P, A, D: Dimension> {
    /// Returns `state.num_samples()` samples drawn from `state.params()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be sampled from.
    fn generate(&mut self, state: &State<P>, rng: &mut StdRng) -> Result<Array<A, D>, BoxError>;
}

impl<P, A, D, F> SampleGenerator<P, A, D> for F
where
    D: Dimension,
    F: FnMut(&State<P>, &mut StdRng) -> Array<A, D>,
{
    fn generate(&mut self, state: &State<P>, rng: &mut StdRng) -> Result<Array<A, D>, BoxError> {
        Ok(self(state, rng))
    }
}

/// Scores a single sample; lower is better.
pub trait Scorer<A, D: Dimension> {
    /// # Errors
    ///
    /// Returns an error if the sample cannot be scored, which aborts the run.
    fn score(&mut self, sample: ArrayView<'_, A, D::Smaller>) -> Result<f64, BoxError>;
}

impl<A, D, F> Scorer<A, D> for F
where
    D: Dimension,
    F: FnMut(ArrayView<'_, A, D::Smaller>) -> f64,
{
    fn score(&mut self, sample: ArrayView<'_, A, D::Smaller>) -> Result<f64, BoxError> {
        Ok(self(sample))
    }
}

/// Adapts a fallible scoring closure into a [`Scorer`].
pub(super) struct TryScore<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> TryScore<F, E> {
    pub(super) fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<A, D, F, E> Scorer<A, D> for TryScore<F, E>
where
    D: Dimension,
    F: FnMut(ArrayView<'_, A, D::Smaller>) -> Result<f64, E>,
    E: Into<BoxError>,
{
    fn score(&mut self, sample: ArrayView<'_, A, D::Smaller>) -> Result<f64, BoxError> {
        (self.f)(sample).map_err(Into::into)
    }
}

/// Fits new distribution parameters to the elite samples.
pub trait Estimator<P, A, D: Dimension> {
    /// Returns the parameters estimated from `elite`, whose axis 0 indexes
    /// the elite samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the elite samples do not fit the parameters.
    fn estimate(&mut self, elite: ArrayView<'_, A, D>, state: &State<P>) -> Result<P, BoxError>;
}

impl<P, A, D, F> Estimator<P, A, D> for F
where
    D: Dimension,
    F: FnMut(ArrayView<'_, A, D>, &State<P>) -> P,
{
    fn estimate(&mut self, elite: ArrayView<'_, A, D>, state: &State<P>) -> Result<P, BoxError> {
        Ok(self(elite, state))
    }
}

/// Combines freshly estimated parameters with the current ones.
pub trait Updater<P> {
    fn update(&mut self, estimated: P, state: &State<P>) -> P;
}

impl<P, F> Updater<P> for F
where
    F: FnMut(P, &State<P>) -> P,
{
    fn update(&mut self, estimated: P, state: &State<P>) -> P {
        self(estimated, state)
    }
}

/// Decides, after each iteration, whether the run is finished.
pub trait StopDecision<P> {
    fn should_stop(&mut self, state: &State<P>) -> bool;
}

impl<P, F> StopDecision<P> for F
where
    F: FnMut(&State<P>) -> bool,
{
    fn should_stop(&mut self, state: &State<P>) -> bool {
        self(state)
    }
}
