use ndarray::{Array, ArrayView, Axis, RemoveAxis};

/// Mean and sample variance of `samples` along axis 0.
///
/// The variance uses the `n - 1` divisor and is zero for a single sample.
/// Returns `None` when there are no samples.
pub(crate) fn mean_and_variance<D: RemoveAxis>(
    samples: ArrayView<'_, f64, D>,
) -> Option<(Array<f64, D::Smaller>, Array<f64, D::Smaller>)> {
    if samples.ndim() == 0 {
        return None;
    }
    let mean = samples.mean_axis(Axis(0))?;
    let variance = if samples.len_of(Axis(0)) > 1 {
        samples.var_axis(Axis(0), 1.0)
    } else {
        Array::zeros(mean.raw_dim())
    };
    Some((mean, variance))
}
