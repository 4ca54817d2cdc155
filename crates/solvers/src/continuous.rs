//! Independent Gaussian sampling over real-valued variables.
//!
//! Variables may be laid out in any shape; a batch stacks samples along a
//! new leading axis, so a problem over a `3 × 2` matrix of variables draws
//! batches of shape `[num_samples, 3, 2]`.

use ndarray::{Array, ArrayD, ArrayView, ArrayViewD, Dimension, IxDyn};
use rand::{Rng, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::{
    moments::mean_and_variance,
    problem::{BoxError, Estimator, Problem, SampleGenerator, ShapeMismatch, State},
    smoothing::Blend,
};

/// A cross-entropy problem with a Gaussian distribution per variable.
pub type ContinuousProblem = Problem<GaussianParams, f64, IxDyn>;

/// Per-variable means and standard deviations, in matching shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianParams {
    pub mean: ArrayD<f64>,
    pub stddev: ArrayD<f64>,
}

impl GaussianParams {
    pub fn new<D: Dimension>(mean: Array<f64, D>, stddev: Array<f64, D>) -> Self {
        Self {
            mean: mean.into_dyn(),
            stddev: stddev.into_dyn(),
        }
    }
}

impl Blend for GaussianParams {
    fn blend(&self, other: &Self, weight: f64) -> Self {
        Self {
            mean: weight * &self.mean + (1.0 - weight) * &other.mean,
            stddev: weight * &self.stddev + (1.0 - weight) * &other.stddev,
        }
    }
}

/// Draws `num_samples` samples, scaling standard normals by `stddev` and
/// shifting them by `mean`.
///
/// # Errors
///
/// Returns an error if `mean` and `stddev` have different shapes.
pub fn generate_gaussian_samples<R: Rng + ?Sized>(
    params: &GaussianParams,
    num_samples: usize,
    rng: &mut R,
) -> Result<ArrayD<f64>, ShapeMismatch> {
    ShapeMismatch::check("mean and stddev", params.mean.shape(), params.stddev.shape())?;

    let mut shape = Vec::with_capacity(params.mean.ndim() + 1);
    shape.push(num_samples);
    shape.extend_from_slice(params.mean.shape());

    let mut samples =
        ArrayD::from_shape_simple_fn(IxDyn(&shape), || rng.sample::<f64, _>(StandardNormal));
    samples *= &params.stddev;
    samples += &params.mean;
    Ok(samples)
}

/// Maximum-likelihood fit: the elite mean and sample standard deviation of
/// each variable.
///
/// A single elite sample yields a zero standard deviation. Returns `None` if
/// `elite` holds no samples.
pub fn estimate_ml(elite: ArrayViewD<'_, f64>) -> Option<GaussianParams> {
    let (mean, variance) = mean_and_variance(elite)?;
    Some(GaussianParams {
        mean,
        stddev: variance.mapv_into(f64::sqrt),
    })
}

/// The default generator of a [`ContinuousProblem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianSampler;

impl SampleGenerator<GaussianParams, f64, IxDyn> for GaussianSampler {
    fn generate(
        &mut self,
        state: &State<GaussianParams>,
        rng: &mut StdRng,
    ) -> Result<ArrayD<f64>, BoxError> {
        Ok(generate_gaussian_samples(state.params(), state.num_samples(), rng)?)
    }
}

/// The default estimator of a [`ContinuousProblem`], see [`estimate_ml`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianEstimator;

impl Estimator<GaussianParams, f64, IxDyn> for GaussianEstimator {
    fn estimate(
        &mut self,
        elite: ArrayView<'_, f64, IxDyn>,
        state: &State<GaussianParams>,
    ) -> Result<GaussianParams, BoxError> {
        Ok(estimate_ml(elite).unwrap_or_else(|| state.params().clone()))
    }
}

impl ContinuousProblem {
    /// Creates a Gaussian problem with the given initial means and standard
    /// deviations, which fix the shape of every sample.
    ///
    /// The generator and estimator are installed; a scorer, batch size and
    /// elite count still have to be provided.
    pub fn gaussian<D: Dimension>(mean: Array<f64, D>, stddev: Array<f64, D>) -> Self {
        let mut problem = Self::new(GaussianParams::new(mean, stddev));
        problem.set_generator(GaussianSampler);
        problem.set_estimator(GaussianEstimator);
        problem
    }

    /// Returns the current mean of each variable.
    #[must_use]
    pub fn mean(&self) -> &ArrayD<f64> {
        &self.params().mean
    }

    /// Returns the current standard deviation of each variable.
    #[must_use]
    pub fn stddev(&self) -> &ArrayD<f64> {
        &self.params().stddev
    }

    /// Shape of a single sample.
    #[must_use]
    pub fn sample_shape(&self) -> &[usize] {
        self.params().mean.shape()
    }
}
