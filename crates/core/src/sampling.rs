//! Axis-generic array primitives used by the sampling families.
//!
//! Every function here is a free function over `ndarray` arrays; nothing is
//! attached to the array types themselves, so call sites always name this
//! module explicitly.
//!
//! - [`cumsum_axis`] / [`cumsum_axis_inplace`]: running sums along one axis
//! - [`tile`]: replicate an array by per-axis repeat counts
//! - [`index_to_subscript`]: convert a flat index into per-axis subscripts
//! - [`sample_pmf_axis`] / [`sample_cdf_axis`]: draw one index along an axis
//!   for every slice perpendicular to it
//! - [`sample_pmf`]: draw a subscript from a whole-array PMF
//!
//! The `*_with` variants accept caller-supplied uniform draws instead of a
//! random generator, which makes the selection rule testable exactly.

mod cumsum;
mod error;
mod pmf;
mod subscript;
mod tile;

pub use cumsum::{cumsum_axis, cumsum_axis_inplace};
pub use error::SamplingError;
pub use pmf::{
    sample_cdf_axis, sample_cdf_axis_with, sample_pmf, sample_pmf_axis, sample_pmf_axis_with,
    sample_pmf_with,
};
pub use subscript::index_to_subscript;
pub use tile::tile;
