use std::fmt;

use super::{BoxError, ConfigError};

/// Errors that can occur while solving a cross-entropy problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no {0} strategy provided")]
    MissingStrategy(Strategy),

    #[error("no max_iters provided for the default stop decision")]
    MissingMaxIters,

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("sample generation failed: {0}")]
    Generate(#[source] BoxError),

    #[error("generator returned {found} samples, expected {expected}")]
    BatchSize { expected: usize, found: usize },

    #[error("scoring sample {index} failed: {source}")]
    Score {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("sample {index} scored NaN")]
    NanScore { index: usize },

    #[error("estimation failed: {0}")]
    Estimate(#[source] BoxError),
}

/// The strategy slots that have no default and must be filled before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    GenerateSamples,
    ScoreSample,
    Estimate,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GenerateSamples => "generate_samples",
            Self::ScoreSample => "score_sample",
            Self::Estimate => "estimate",
        })
    }
}

/// Shapes of two arrays that must agree but do not.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{what}: shapes {left:?} and {right:?} differ")]
pub struct ShapeMismatch {
    pub what: &'static str,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl ShapeMismatch {
    pub(crate) fn check(what: &'static str, left: &[usize], right: &[usize]) -> Result<(), Self> {
        if left == right {
            Ok(())
        } else {
            Err(Self {
                what,
                left: left.to_vec(),
                right: right.to_vec(),
            })
        }
    }
}
