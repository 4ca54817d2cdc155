use thiserror::Error;

/// Scalar settings for a cross-entropy run.
///
/// The default config has no batch size and no elite count, so a problem
/// must be given both before [`solve`](super::Problem::solve) will run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub(super) num_samples: usize,
    pub(super) num_elite: usize,
    pub(super) max_iters: Option<usize>,
    pub(super) track_overall_min: bool,
}

/// Errors that can occur when validating a cross-entropy config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("num_samples must be positive")]
    NumSamples,

    #[error("num_elite must be in 1..={num_samples}, got {num_elite}")]
    NumElite { num_elite: usize, num_samples: usize },
}

impl Config {
    /// Checks that the batch and elite sizes describe a runnable iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_samples` is zero or `num_elite` is not in
    /// `1..=num_samples`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_samples == 0 {
            return Err(ConfigError::NumSamples);
        }
        if self.num_elite == 0 || self.num_elite > self.num_samples {
            return Err(ConfigError::NumElite {
                num_elite: self.num_elite,
                num_samples: self.num_samples,
            });
        }
        Ok(())
    }

    /// Returns the number of samples drawn per iteration.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Returns the nominal elite count.
    #[must_use]
    pub fn num_elite(&self) -> usize {
        self.num_elite
    }

    /// Returns the iteration bound used by the default stop decision.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns whether the best-ever sample is tracked across iterations.
    #[must_use]
    pub fn track_overall_min(&self) -> bool {
        self.track_overall_min
    }
}
