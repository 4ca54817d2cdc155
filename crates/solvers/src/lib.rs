//! Cross-entropy method solvers.
//!
//! The cross-entropy method minimizes an opaque score by repeatedly sampling
//! from a parametric distribution and refitting the distribution to the
//! best-scoring samples.
//!
//! # Modules
//!
//! - [`problem`]: the generic solver and its strategy traits
//! - [`continuous`]: independent Gaussians over real variables
//! - [`beta`]: independent Beta distributions over the unit interval
//! - [`matrix`]: independent categorical distributions over discrete values
//!
//! # Example
//!
//! ```
//! use crossent_solvers::ContinuousProblem;
//! use ndarray::array;
//!
//! let mut problem = ContinuousProblem::gaussian(array![0.0], array![10.0]);
//! problem.seed(42);
//! problem.set_num_samples(100);
//! problem.set_num_elite(10);
//! problem.set_max_iters(50);
//! problem.score_with(|x| (x[0] - 2.0).powi(2));
//!
//! problem.solve()?;
//! assert!((problem.mean()[0] - 2.0).abs() < 1e-3);
//! # Ok::<(), crossent_solvers::problem::Error>(())
//! ```

pub mod beta;
pub mod continuous;
pub mod matrix;
pub mod problem;

mod moments;
mod smoothing;

pub use beta::{BetaParams, BetaProblem};
pub use continuous::{ContinuousProblem, GaussianParams};
pub use matrix::MatrixProblem;
pub use problem::Problem;
pub use smoothing::{Blend, Smoothing, SmoothingError};
