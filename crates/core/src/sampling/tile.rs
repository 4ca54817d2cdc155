use ndarray::{Array1, ArrayBase, ArrayD, Data, Dimension, IxDyn};

/// Replicates `array` according to per-axis repeat counts (MATLAB's `repmat`).
///
/// `reps` may be shorter than the array's rank, in which case the remaining
/// axes repeat once, or longer, in which case the array gains trailing axes
/// of length one before tiling. A rank-0 source or any zero repeat count
/// produces an empty one-dimensional array.
///
/// # Example
///
/// ```
/// use crossent_core::sampling::tile;
/// use ndarray::array;
///
/// let tiled = tile(&array![1, 2], &[2, 3]);
/// assert_eq!(tiled.shape(), &[4, 3]);
/// assert_eq!(tiled[[3, 2]], 2);
/// ```
pub fn tile<A, S, D>(array: &ArrayBase<S, D>, reps: &[usize]) -> ArrayD<A>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    if array.ndim() == 0 || reps.contains(&0) {
        return Array1::from_vec(Vec::new()).into_dyn();
    }

    let rank = array.ndim().max(reps.len());
    let source_shape = array.shape();
    let tile_shape: Vec<usize> = (0..rank)
        .map(|axis| source_shape.get(axis).copied().unwrap_or(1))
        .collect();
    let out_shape: Vec<usize> = tile_shape
        .iter()
        .enumerate()
        .map(|(axis, &len)| len * reps.get(axis).copied().unwrap_or(1))
        .collect();

    let source = array.view().into_dyn();
    let mut subscript = vec![0; source.ndim()];
    ArrayD::from_shape_fn(IxDyn(&out_shape), |index| {
        for (axis, sub) in subscript.iter_mut().enumerate() {
            *sub = index[axis] % tile_shape[axis];
        }
        source[IxDyn(&subscript)].clone()
    })
}
