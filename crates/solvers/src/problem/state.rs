use super::Config;

/// Distribution parameters and diagnostics of a cross-entropy problem.
///
/// Strategies receive the state by reference, so a custom update or stop
/// decision can read the current parameters, the config, and the scores of
/// the iteration in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct State<P> {
    pub(super) params: P,
    pub(super) config: Config,
    pub(super) num_iters: usize,
    pub(super) min_score: Option<f64>,
    pub(super) elite_score: Option<f64>,
    pub(super) overall_min_score: f64,
}

impl<P> State<P> {
    pub(super) fn new(params: P) -> Self {
        Self {
            params,
            config: Config::default(),
            num_iters: 0,
            min_score: None,
            elite_score: None,
            overall_min_score: f64::INFINITY,
        }
    }

    /// Returns the current distribution parameters.
    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Returns the sampling configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of samples drawn per iteration.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.config.num_samples
    }

    /// Returns the number of elite samples kept per iteration.
    #[must_use]
    pub fn num_elite(&self) -> usize {
        self.config.num_elite
    }

    /// Returns the iteration bound, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.config.max_iters
    }

    /// Returns the number of completed iterations of the current run.
    #[must_use]
    pub fn num_iters(&self) -> usize {
        self.num_iters
    }

    /// Returns the lowest score of the current iteration's batch.
    ///
    /// `None` before the batch has been scored.
    #[must_use]
    pub fn min_score(&self) -> Option<f64> {
        self.min_score
    }

    /// Returns the elite boundary score of the current iteration.
    ///
    /// `None` before the batch has been scored.
    #[must_use]
    pub fn elite_score(&self) -> Option<f64> {
        self.elite_score
    }

    /// Returns the best score seen since construction.
    ///
    /// Stays at `+inf` unless tracking is enabled.
    #[must_use]
    pub fn overall_min_score(&self) -> f64 {
        self.overall_min_score
    }
}
