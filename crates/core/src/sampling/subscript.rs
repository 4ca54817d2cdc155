use super::SamplingError;

/// Converts a flat index into per-axis subscripts for `shape` (MATLAB's `ind2sub`).
///
/// The index is split by successive division by each axis length in order,
/// so the first axis varies fastest. That is the iteration order of the
/// reversed-axes view, so `array[index_to_subscript(array.shape(), i)?]` is
/// the `i`-th element of `array.t().iter()`.
///
/// # Errors
///
/// Returns [`SamplingError::IndexOutOfBounds`] if `index` is not smaller than
/// the number of elements in `shape`.
pub fn index_to_subscript(shape: &[usize], index: usize) -> Result<Vec<usize>, SamplingError> {
    let size: usize = shape.iter().product();
    if index >= size {
        return Err(SamplingError::IndexOutOfBounds {
            index,
            shape: shape.to_vec(),
        });
    }

    let mut rest = index;
    Ok(shape
        .iter()
        .map(|&len| {
            let sub = rest % len;
            rest /= len;
            sub
        })
        .collect())
}
