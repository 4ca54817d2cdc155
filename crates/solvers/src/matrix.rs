//! Independent categorical sampling over discrete variables.
//!
//! Parameters are a probability matrix with one row per value and one
//! column per variable; every column is a probability mass function. A
//! sample is a row of value indices, one per variable.

use crossent_core::sampling::{SamplingError, sample_pmf_axis, tile};
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Ix2, ShapeError};
use rand::{Rng, rngs::StdRng};
use thiserror::Error;

use crate::{
    problem::{BoxError, Estimator, Problem, SampleGenerator, State},
    smoothing::Blend,
};

/// A cross-entropy problem over a probability matrix.
pub type MatrixProblem = Problem<Array2<f64>, usize, Ix2>;

/// Errors from drawing categorical samples.
#[derive(Debug, Error)]
pub enum CategoricalError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl Blend for Array2<f64> {
    fn blend(&self, other: &Self, weight: f64) -> Self {
        weight * self + (1.0 - weight) * other
    }
}

/// Draws `num_samples` rows of value indices from the columns of
/// `probabilities`.
///
/// # Errors
///
/// Returns an error if `probabilities` has no rows while samples are
/// requested.
pub fn generate_categorical_samples<S, R>(
    probabilities: &ArrayBase<S, Ix2>,
    num_samples: usize,
    rng: &mut R,
) -> Result<Array2<usize>, CategoricalError>
where
    S: Data<Elem = f64>,
    R: Rng + ?Sized,
{
    if num_samples == 0 {
        return Ok(Array2::zeros((0, probabilities.ncols())));
    }

    let tiled = tile(probabilities, &[1, 1, num_samples]);
    let values = sample_pmf_axis(&tiled, Axis(0), rng)?;
    Ok(values.into_dimensionality::<Ix2>()?.reversed_axes())
}

/// Maximum-likelihood fit: the fraction of elite samples taking each value,
/// per variable.
///
/// # Errors
///
/// Returns an error if an elite sample holds a value of `num_values` or more.
pub fn estimate_ml(
    elite: ArrayView2<'_, usize>,
    num_values: usize,
) -> Result<Array2<f64>, SamplingError> {
    let mut counts = Array2::zeros((num_values, elite.ncols()));
    for sample in elite.rows() {
        for (variable, &value) in sample.iter().enumerate() {
            if value >= num_values {
                return Err(SamplingError::IndexOutOfBounds {
                    index: value,
                    shape: vec![num_values],
                });
            }
            counts[[value, variable]] += 1.0;
        }
    }

    if elite.nrows() > 0 {
        counts /= elite.nrows() as f64;
    }
    Ok(counts)
}

/// Returns the most probable value of each variable.
///
/// Ties go to the lowest value index.
pub fn most_likely_solution<S>(probabilities: &ArrayBase<S, Ix2>) -> Array1<usize>
where
    S: Data<Elem = f64>,
{
    probabilities
        .columns()
        .into_iter()
        .map(|column| {
            let mut best = 0;
            for (value, &p) in column.iter().enumerate() {
                if p > column[best] {
                    best = value;
                }
            }
            best
        })
        .collect()
}

/// The default generator of a [`MatrixProblem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalSampler;

impl SampleGenerator<Array2<f64>, usize, Ix2> for CategoricalSampler {
    fn generate(
        &mut self,
        state: &State<Array2<f64>>,
        rng: &mut StdRng,
    ) -> Result<Array2<usize>, BoxError> {
        Ok(generate_categorical_samples(
            state.params(),
            state.num_samples(),
            rng,
        )?)
    }
}

/// The default estimator of a [`MatrixProblem`], see [`estimate_ml`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalEstimator;

impl Estimator<Array2<f64>, usize, Ix2> for CategoricalEstimator {
    fn estimate(
        &mut self,
        elite: ArrayView2<'_, usize>,
        state: &State<Array2<f64>>,
    ) -> Result<Array2<f64>, BoxError> {
        Ok(estimate_ml(elite, state.params().nrows())?)
    }
}

impl MatrixProblem {
    /// Creates a categorical problem from an initial probability matrix with
    /// one row per value and one column per variable.
    ///
    /// The generator and estimator are installed; a scorer, batch size and
    /// elite count still have to be provided.
    pub fn categorical(probabilities: Array2<f64>) -> Self {
        let mut problem = Self::new(probabilities);
        problem.set_generator(CategoricalSampler);
        problem.set_estimator(CategoricalEstimator);
        problem
    }

    /// Returns the number of values each variable can take.
    #[must_use]
    pub fn num_values(&self) -> usize {
        self.params().nrows()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.params().ncols()
    }

    /// Returns the most probable value of each variable under the current
    /// parameters.
    #[must_use]
    pub fn most_likely_solution(&self) -> Array1<usize> {
        most_likely_solution(self.params())
    }
}
