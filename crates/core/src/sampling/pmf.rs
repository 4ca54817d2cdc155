use ndarray::{
    Array, Array1, ArrayBase, ArrayView1, Axis, Data, Dimension, RemoveAxis, Zip, arr0,
};
use rand::{Rng, distributions::Standard};

use super::{SamplingError, cumsum_axis, index_to_subscript};

/// Samples one index along `axis` of an array of probabilities.
///
/// Entries along `axis` are treated as a probability mass function that sums
/// to one up to rounding. One uniform draw is made for every slice
/// perpendicular to `axis`, so the result has the array's shape with `axis`
/// removed.
///
/// # Errors
///
/// Returns an error if `axis` is out of range or has length zero.
pub fn sample_pmf_axis<S, D, R>(
    pmf: &ArrayBase<S, D>,
    axis: Axis,
    rng: &mut R,
) -> Result<Array<usize, D::Smaller>, SamplingError>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    R: Rng + ?Sized,
{
    sample_cdf_axis(&cumsum_axis(pmf, axis), axis, rng)
}

/// Like [`sample_pmf_axis`], but with caller-supplied uniform draws.
///
/// `draws` must have the array's shape with `axis` removed.
///
/// # Errors
///
/// Returns an error if `axis` is out of range or has length zero, or if
/// `draws` has the wrong shape.
pub fn sample_pmf_axis_with<S, S2, D>(
    pmf: &ArrayBase<S, D>,
    axis: Axis,
    draws: &ArrayBase<S2, D::Smaller>,
) -> Result<Array<usize, D::Smaller>, SamplingError>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: RemoveAxis,
{
    sample_cdf_axis_with(&cumsum_axis(pmf, axis), axis, draws)
}

/// Samples one index along `axis` of an array of cumulative probabilities.
///
/// Entries along `axis` must be non-decreasing and should end at one. For
/// each perpendicular slice the selected index is the first whose cumulative
/// value strictly exceeds a uniform draw in `[0, 1)`.
///
/// # Errors
///
/// Returns an error if `axis` is out of range or has length zero.
pub fn sample_cdf_axis<S, D, R>(
    cdf: &ArrayBase<S, D>,
    axis: Axis,
    rng: &mut R,
) -> Result<Array<usize, D::Smaller>, SamplingError>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    R: Rng + ?Sized,
{
    check_axis(cdf, axis)?;
    let draws = Array::from_shape_simple_fn(cdf.raw_dim().remove_axis(axis), || {
        rng.sample::<f64, _>(Standard)
    });
    sample_cdf_axis_with(cdf, axis, &draws)
}

/// Like [`sample_cdf_axis`], but with caller-supplied uniform draws.
///
/// The selection rule, per slice:
///
/// - the first index whose cumulative value is strictly greater than the draw
///   wins, so leading zero-probability entries are never chosen;
/// - if no entry exceeds the draw (mass short of one, or all zeros), the last
///   index along `axis` is chosen.
///
/// # Errors
///
/// Returns an error if `axis` is out of range or has length zero, or if
/// `draws` has the wrong shape.
pub fn sample_cdf_axis_with<S, S2, D>(
    cdf: &ArrayBase<S, D>,
    axis: Axis,
    draws: &ArrayBase<S2, D::Smaller>,
) -> Result<Array<usize, D::Smaller>, SamplingError>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: RemoveAxis,
{
    check_axis(cdf, axis)?;

    let expected = cdf.raw_dim().remove_axis(axis);
    if draws.shape() != expected.slice() {
        return Err(SamplingError::DrawShape {
            expected: expected.slice().to_vec(),
            found: draws.shape().to_vec(),
        });
    }

    Ok(Zip::from(cdf.lanes(axis))
        .and(draws)
        .map_collect(|lane, &draw| first_exceeding(lane, draw)))
}

/// Samples a subscript from an array whose entries together form a PMF.
///
/// The array is read with the first axis varying fastest, sampled as one flat
/// PMF, and the flat index is converted back with [`index_to_subscript`].
///
/// # Errors
///
/// Returns an error if the array is empty.
pub fn sample_pmf<S, D, R>(pmf: &ArrayBase<S, D>, rng: &mut R) -> Result<Vec<usize>, SamplingError>
where
    S: Data<Elem = f64>,
    D: Dimension,
    R: Rng + ?Sized,
{
    sample_pmf_with(pmf, rng.sample::<f64, _>(Standard))
}

/// Like [`sample_pmf`], but with a caller-supplied uniform draw.
///
/// # Errors
///
/// Returns an error if the array is empty.
pub fn sample_pmf_with<S, D>(pmf: &ArrayBase<S, D>, draw: f64) -> Result<Vec<usize>, SamplingError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let flat: Array1<f64> = pmf.t().iter().copied().collect();
    let index = sample_pmf_axis_with(&flat, Axis(0), &arr0(draw))?.into_scalar();
    index_to_subscript(pmf.shape(), index)
}

fn check_axis<S, D>(array: &ArrayBase<S, D>, axis: Axis) -> Result<(), SamplingError>
where
    S: Data,
    D: Dimension,
{
    if axis.index() >= array.ndim() {
        return Err(SamplingError::AxisOutOfRange {
            axis: axis.index(),
            ndim: array.ndim(),
        });
    }
    if array.len_of(axis) == 0 {
        return Err(SamplingError::EmptyAxis { axis: axis.index() });
    }
    Ok(())
}

fn first_exceeding(lane: ArrayView1<'_, f64>, draw: f64) -> usize {
    lane.iter()
        .position(|&cumulative| draw < cumulative)
        .unwrap_or(lane.len() - 1)
}
