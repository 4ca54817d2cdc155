use std::ops::AddAssign;

use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension};

/// Returns the running sum of `array` along `axis`.
///
/// Every lane parallel to `axis` is accumulated independently; the other axes
/// are untouched. An `axis` beyond the array's rank leaves the copy unchanged,
/// and an empty array yields an empty array.
pub fn cumsum_axis<A, S, D>(array: &ArrayBase<S, D>, axis: Axis) -> Array<A, D>
where
    A: Copy + AddAssign,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut out = array.to_owned();
    cumsum_axis_inplace(&mut out, axis);
    out
}

/// In-place version of [`cumsum_axis`].
///
/// Each slice perpendicular to `axis` is added into its successor, walking
/// the axis from front to back.
pub fn cumsum_axis_inplace<A, S, D>(array: &mut ArrayBase<S, D>, axis: Axis)
where
    A: Copy + AddAssign,
    S: DataMut<Elem = A>,
    D: Dimension,
{
    if axis.index() >= array.ndim() {
        return;
    }
    array.accumulate_axis_inplace(axis, |&prev, curr| *curr += prev);
}
