//! Independent Beta sampling over variables in the unit interval.
//!
//! Beta variates are built as `a / (a + b)` from two Erlang variates whose
//! integer shapes come from `alpha` and `beta`. Non-integer shapes are
//! truncated, so the family is exact only for integral parameters.

use ndarray::{Array1, Array2, ArrayView2, Ix2, Zip};
use rand::{Rng, distributions::Open01, rngs::StdRng};
use rand_distr::{Distribution, Gamma};

use crate::{
    moments::mean_and_variance,
    problem::{BoxError, Estimator, Problem, SampleGenerator, ShapeMismatch, State},
    smoothing::Blend,
};

/// Erlang shapes up to this bound are drawn as literal sums of exponentials.
const ERLANG_SUM_LIMIT: f64 = 64.0;

/// A cross-entropy problem with a Beta distribution per variable.
pub type BetaProblem = Problem<BetaParams, f64, Ix2>;

/// Per-variable Beta shape parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaParams {
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
}

impl BetaParams {
    pub fn new(alpha: Array1<f64>, beta: Array1<f64>) -> Self {
        Self { alpha, beta }
    }

    /// Returns the mean `alpha / (alpha + beta)` of each variable.
    #[must_use]
    pub fn means(&self) -> Array1<f64> {
        &self.alpha / (&self.alpha + &self.beta)
    }
}

impl Blend for BetaParams {
    fn blend(&self, other: &Self, weight: f64) -> Self {
        Self {
            alpha: weight * &self.alpha + (1.0 - weight) * &other.alpha,
            beta: weight * &self.beta + (1.0 - weight) * &other.beta,
        }
    }
}

/// Draws an Erlang variate with unit rate and shape `floor(shape)`, at least 1.
fn erlang<R: Rng + ?Sized>(shape: f64, rng: &mut R) -> f64 {
    let k = shape.floor().max(1.0);
    if k <= ERLANG_SUM_LIMIT {
        (0..k as usize)
            .map(|_| -rng.sample::<f64, _>(Open01).ln())
            .sum()
    } else {
        match Gamma::new(k, 1.0) {
            Ok(gamma) => gamma.sample(rng),
            Err(_) => f64::NAN,
        }
    }
}

/// Draws `num_samples` rows of Beta variates, one column per variable.
///
/// # Errors
///
/// Returns an error if `alpha` and `beta` have different lengths.
pub fn generate_beta_samples<R: Rng + ?Sized>(
    params: &BetaParams,
    num_samples: usize,
    rng: &mut R,
) -> Result<Array2<f64>, ShapeMismatch> {
    ShapeMismatch::check("alpha and beta", params.alpha.shape(), params.beta.shape())?;

    let mut samples = Array2::zeros((num_samples, params.alpha.len()));
    for mut row in samples.rows_mut() {
        Zip::from(&mut row)
            .and(&params.alpha)
            .and(&params.beta)
            .for_each(|x, &alpha, &beta| {
                let a = erlang(alpha, rng);
                let b = erlang(beta, rng);
                *x = a / (a + b);
            });
    }
    Ok(samples)
}

/// Method-of-moments fit to the elite samples.
///
/// For each variable with elite mean `m`, sample variance `v` and
/// `q = m * (1 - m)`, the shapes become `m * r` and `(1 - m) * r` with
/// `r = q / v - 1`. Variables outside `0 < v < q` keep their `current`
/// shapes.
///
/// # Errors
///
/// Returns an error if the elite has a different number of variables than
/// `current`.
pub fn estimate_mom(
    elite: ArrayView2<'_, f64>,
    current: &BetaParams,
) -> Result<BetaParams, ShapeMismatch> {
    ShapeMismatch::check("alpha and beta", current.alpha.shape(), current.beta.shape())?;
    ShapeMismatch::check(
        "elite variables and params",
        &[elite.ncols()],
        current.alpha.shape(),
    )?;

    let mut next = current.clone();
    let Some((mean, variance)) = mean_and_variance(elite) else {
        return Ok(next);
    };

    Zip::from(&mut next.alpha)
        .and(&mut next.beta)
        .and(&mean)
        .and(&variance)
        .for_each(|alpha, beta, &m, &v| {
            let q = m * (1.0 - m);
            if 0.0 < v && v < q {
                let r = q / v - 1.0;
                *alpha = m * r;
                *beta = (1.0 - m) * r;
            }
        });
    Ok(next)
}

/// The default generator of a [`BetaProblem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BetaSampler;

impl SampleGenerator<BetaParams, f64, Ix2> for BetaSampler {
    fn generate(
        &mut self,
        state: &State<BetaParams>,
        rng: &mut StdRng,
    ) -> Result<Array2<f64>, BoxError> {
        Ok(generate_beta_samples(state.params(), state.num_samples(), rng)?)
    }
}

/// The default estimator of a [`BetaProblem`], see [`estimate_mom`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BetaEstimator;

impl Estimator<BetaParams, f64, Ix2> for BetaEstimator {
    fn estimate(
        &mut self,
        elite: ArrayView2<'_, f64>,
        state: &State<BetaParams>,
    ) -> Result<BetaParams, BoxError> {
        Ok(estimate_mom(elite, state.params())?)
    }
}

impl BetaProblem {
    /// Creates a Beta problem with the given initial shapes, one per variable.
    ///
    /// The generator and estimator are installed; a scorer, batch size and
    /// elite count still have to be provided.
    pub fn from_shapes(alpha: Array1<f64>, beta: Array1<f64>) -> Self {
        let mut problem = Self::new(BetaParams::new(alpha, beta));
        problem.set_generator(BetaSampler);
        problem.set_estimator(BetaEstimator);
        problem
    }

    /// Returns the first shape parameter of each variable.
    #[must_use]
    pub fn alpha(&self) -> &Array1<f64> {
        &self.params().alpha
    }

    /// Returns the second shape parameter of each variable.
    #[must_use]
    pub fn beta(&self) -> &Array1<f64> {
        &self.params().beta
    }

    /// Returns the number of independent variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.params().alpha.len()
    }
}
