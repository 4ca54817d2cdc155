use thiserror::Error;

/// Errors raised by the sampling primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplingError {
    #[error("out of bounds: index={index} for shape={shape:?}")]
    IndexOutOfBounds { index: usize, shape: Vec<usize> },

    #[error("axis {axis} is out of range for an array of rank {ndim}")]
    AxisOutOfRange { axis: usize, ndim: usize },

    #[error("cannot sample along axis {axis}: it has length zero")]
    EmptyAxis { axis: usize },

    #[error("draws have shape {found:?}, expected {expected:?}")]
    DrawShape {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}
