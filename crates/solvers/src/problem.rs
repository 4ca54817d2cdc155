//! The generic cross-entropy solver.
//!
//! # Algorithm
//!
//! Each iteration draws `num_samples` samples from the current distribution,
//! scores them (lower is better), and keeps the elite set: every sample
//! scoring at or below the `num_elite`-th smallest score. New parameters are
//! estimated from the elite set, passed through the update strategy, and
//! stored. The run ends when the stop decision returns true.
//!
//! # Strategies
//!
//! A [`Problem`] holds five strategy slots:
//!
//! - [`SampleGenerator`]: required; installed by the concrete families
//! - [`Scorer`]: required; there is never a default
//! - [`Estimator`]: required; installed by the concrete families
//! - [`Updater`]: optional; defaults to keeping the estimate unchanged
//! - [`StopDecision`]: optional; defaults to stopping after `max_iters`
//!
//! Strategies are looked up when they are needed, so they can be replaced
//! any number of times before [`Problem::solve`] runs.
//!
//! # Observer Events
//!
//! [`Problem::solve_observed`] emits one [`Event`] per iteration after the
//! parameters are updated and before the stop decision is consulted.
//! Observers can return [`Action::StopEarly`] to end the run immediately.

mod action;
mod config;
mod elite;
mod error;
mod event;
mod state;
mod status;
mod strategy;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, ShapeMismatch, Strategy};
pub use event::Event;
pub use state::State;
pub use status::Status;
pub use strategy::{Estimator, SampleGenerator, Scorer, StopDecision, Updater};

use crossent_core::Observer;
use ndarray::{Array, ArrayView, Axis, RemoveAxis};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use strategy::TryScore;

/// Boxed error returned by user-supplied strategies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A cross-entropy optimization problem.
///
/// `P` is the distribution parameter type, `A` the sample element type and
/// `D` the dimension of a whole batch, whose axis 0 indexes samples.
pub struct Problem<P, A, D: RemoveAxis> {
    state: State<P>,
    rng: StdRng,
    generator: Option<Box<dyn SampleGenerator<P, A, D>>>,
    scorer: Option<Box<dyn Scorer<A, D>>>,
    estimator: Option<Box<dyn Estimator<P, A, D>>>,
    updater: Option<Box<dyn Updater<P>>>,
    stop_decision: Option<Box<dyn StopDecision<P>>>,
    overall_min_score_sample: Option<Array<A, D::Smaller>>,
}

impl<P, A, D> Problem<P, A, D>
where
    A: Clone,
    D: RemoveAxis,
{
    /// Creates a problem with initial parameters and no strategies.
    ///
    /// The random generator is seeded from system entropy; use
    /// [`seed`](Self::seed) for reproducible runs.
    pub fn new(params: P) -> Self {
        Self {
            state: State::new(params),
            rng: StdRng::from_entropy(),
            generator: None,
            scorer: None,
            estimator: None,
            updater: None,
            stop_decision: None,
            overall_min_score_sample: None,
        }
    }

    /// Returns the parameters and diagnostics of the problem.
    #[must_use]
    pub fn state(&self) -> &State<P> {
        &self.state
    }

    /// Returns the current distribution parameters.
    #[must_use]
    pub fn params(&self) -> &P {
        &self.state.params
    }

    /// Replaces the current distribution parameters.
    pub fn set_params(&mut self, params: P) {
        self.state.params = params;
    }

    /// Returns the number of samples drawn per iteration.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.state.config.num_samples
    }

    /// Sets the number of samples drawn per iteration.
    pub fn set_num_samples(&mut self, num_samples: usize) {
        self.state.config.num_samples = num_samples;
    }

    /// Returns the number of elite samples kept per iteration.
    #[must_use]
    pub fn num_elite(&self) -> usize {
        self.state.config.num_elite
    }

    /// Sets the number of elite samples kept per iteration.
    pub fn set_num_elite(&mut self, num_elite: usize) {
        self.state.config.num_elite = num_elite;
    }

    /// Returns the iteration bound, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.state.config.max_iters
    }

    /// Sets the iteration bound of the default stop decision.
    ///
    /// Custom stop decisions may read it through [`State::max_iters`].
    pub fn set_max_iters(&mut self, max_iters: usize) {
        self.state.config.max_iters = Some(max_iters);
    }

    /// Returns whether the best-ever sample is tracked.
    #[must_use]
    pub fn track_overall_min(&self) -> bool {
        self.state.config.track_overall_min
    }

    /// Enables or disables tracking of the best-ever sample.
    pub fn set_track_overall_min(&mut self, track: bool) {
        self.state.config.track_overall_min = track;
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn num_iters(&self) -> usize {
        self.state.num_iters
    }

    /// Returns the lowest score of the last iteration.
    #[must_use]
    pub fn min_score(&self) -> Option<f64> {
        self.state.min_score
    }

    /// Returns the worst score admitted to the last elite set.
    #[must_use]
    pub fn elite_score(&self) -> Option<f64> {
        self.state.elite_score
    }

    /// Returns the lowest score seen while tracking was enabled.
    ///
    /// Starts at positive infinity.
    #[must_use]
    pub fn overall_min_score(&self) -> f64 {
        self.state.overall_min_score
    }

    /// Returns the best sample seen while tracking was enabled.
    #[must_use]
    pub fn overall_min_score_sample(&self) -> Option<&Array<A, D::Smaller>> {
        self.overall_min_score_sample.as_ref()
    }

    /// Replaces the random generator.
    pub fn set_rng(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    /// Reseeds the random generator.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Installs the sample generation strategy.
    pub fn set_generator(&mut self, generator: impl SampleGenerator<P, A, D> + 'static) {
        self.generator = Some(Box::new(generator));
    }

    /// Installs a sample generator closure.
    pub fn generate_with<F>(&mut self, f: F)
    where
        F: FnMut(&State<P>, &mut StdRng) -> Array<A, D> + 'static,
    {
        self.set_generator(f);
    }

    /// Installs the scoring strategy.
    pub fn set_scorer(&mut self, scorer: impl Scorer<A, D> + 'static) {
        self.scorer = Some(Box::new(scorer));
    }

    /// Installs a scoring closure; lower scores are better.
    pub fn score_with<F>(&mut self, f: F)
    where
        F: FnMut(ArrayView<'_, A, D::Smaller>) -> f64 + 'static,
    {
        self.set_scorer(f);
    }

    /// Installs a fallible scoring closure.
    ///
    /// An error from the closure aborts the run with [`Error::Score`].
    pub fn try_score_with<F, E>(&mut self, f: F)
    where
        F: FnMut(ArrayView<'_, A, D::Smaller>) -> Result<f64, E> + 'static,
        E: Into<BoxError> + 'static,
    {
        self.set_scorer(TryScore::new(f));
    }

    /// Installs the estimation strategy.
    pub fn set_estimator(&mut self, estimator: impl Estimator<P, A, D> + 'static) {
        self.estimator = Some(Box::new(estimator));
    }

    /// Installs an estimator closure.
    pub fn estimate_with<F>(&mut self, f: F)
    where
        F: FnMut(ArrayView<'_, A, D>, &State<P>) -> P + 'static,
    {
        self.set_estimator(f);
    }

    /// Installs the update strategy; without one the estimate is adopted as is.
    pub fn set_updater(&mut self, updater: impl Updater<P> + 'static) {
        self.updater = Some(Box::new(updater));
    }

    /// Installs an update closure, called with the estimate and the state
    /// holding the parameters it replaces.
    pub fn update_with<F>(&mut self, f: F)
    where
        F: FnMut(P, &State<P>) -> P + 'static,
    {
        self.set_updater(f);
    }

    /// Installs the stop decision; without one the run stops at `max_iters`.
    pub fn set_stop_decision(&mut self, stop_decision: impl StopDecision<P> + 'static) {
        self.stop_decision = Some(Box::new(stop_decision));
    }

    /// Installs a stop decision closure, consulted after every iteration.
    pub fn stop_when<F>(&mut self, f: F)
    where
        F: FnMut(&State<P>) -> bool + 'static,
    {
        self.set_stop_decision(f);
    }

    /// Runs the cross-entropy loop until the stop decision returns true.
    ///
    /// This is a convenience wrapper around [`solve_observed`](Self::solve_observed)
    /// that uses a no-op observer.
    ///
    /// # Errors
    ///
    /// See [`solve_observed`](Self::solve_observed).
    pub fn solve(&mut self) -> Result<Status, Error> {
        self.solve_observed(())
    }

    /// Runs the cross-entropy loop, reporting each iteration to `observer`.
    ///
    /// The iteration counter restarts at zero; parameters and the best-ever
    /// sample carry over from any previous run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, a required strategy is
    /// missing, the default stop decision has no `max_iters`, or a strategy
    /// fails. A failure aborts the run and leaves the state as it was when
    /// the failing strategy was called.
    pub fn solve_observed<Obs>(&mut self, mut observer: Obs) -> Result<Status, Error>
    where
        Obs: for<'a> Observer<Event<'a, P>, Action>,
    {
        self.state.config.validate()?;
        self.state.num_iters = 0;

        loop {
            self.state.min_score = None;
            self.state.elite_score = None;

            let batch = self.generate()?;
            let scores = self.score(&batch)?;

            let elite = elite::select(&scores, self.state.config.num_elite);
            self.state.min_score = Some(elite.min_score);
            self.state.elite_score = Some(elite.elite_score);

            let elite_samples = batch.select(Axis(0), &elite.indices);
            let estimated = self.estimate(elite_samples.view())?;
            self.state.params = match self.updater.as_mut() {
                Some(updater) => updater.update(estimated, &self.state),
                None => estimated,
            };
            self.state.num_iters += 1;

            debug!(
                iter = self.state.num_iters,
                min_score = elite.min_score,
                elite_score = elite.elite_score,
                elite_count = elite.indices.len(),
                "cross-entropy iteration"
            );

            let event = Event {
                iter: self.state.num_iters,
                min_score: elite.min_score,
                elite_score: elite.elite_score,
                elite_count: elite.indices.len(),
                overall_min_score: self.state.overall_min_score,
                params: &self.state.params,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                info!(iters = self.state.num_iters, "stopped by observer");
                return Ok(Status::StoppedByObserver);
            }

            if self.should_stop()? {
                info!(
                    iters = self.state.num_iters,
                    min_score = elite.min_score,
                    "cross-entropy run finished"
                );
                return Ok(Status::StopDecision);
            }
        }
    }

    fn generate(&mut self) -> Result<Array<A, D>, Error> {
        let generator = self
            .generator
            .as_mut()
            .ok_or(Error::MissingStrategy(Strategy::GenerateSamples))?;
        let batch = generator
            .generate(&self.state, &mut self.rng)
            .map_err(Error::Generate)?;

        let expected = self.state.config.num_samples;
        let found = if batch.ndim() == 0 {
            0
        } else {
            batch.len_of(Axis(0))
        };
        if found != expected {
            return Err(Error::BatchSize { expected, found });
        }
        Ok(batch)
    }

    fn score(&mut self, batch: &Array<A, D>) -> Result<Vec<f64>, Error> {
        let scorer = self
            .scorer
            .as_mut()
            .ok_or(Error::MissingStrategy(Strategy::ScoreSample))?;

        let mut scores = Vec::with_capacity(batch.len_of(Axis(0)));
        for (index, sample) in batch.axis_iter(Axis(0)).enumerate() {
            let score = scorer
                .score(sample.view())
                .map_err(|source| Error::Score { index, source })?;
            if score.is_nan() {
                return Err(Error::NanScore { index });
            }

            if self.state.config.track_overall_min && score < self.state.overall_min_score {
                trace!(index, score, "new overall minimum");
                self.state.overall_min_score = score;
                self.overall_min_score_sample = Some(sample.to_owned());
            }
            scores.push(score);
        }
        Ok(scores)
    }

    fn estimate(&mut self, elite: ArrayView<'_, A, D>) -> Result<P, Error> {
        let estimator = self
            .estimator
            .as_mut()
            .ok_or(Error::MissingStrategy(Strategy::Estimate))?;
        estimator
            .estimate(elite, &self.state)
            .map_err(Error::Estimate)
    }

    fn should_stop(&mut self) -> Result<bool, Error> {
        match self.stop_decision.as_mut() {
            Some(decision) => Ok(decision.should_stop(&self.state)),
            None => {
                let max_iters = self.state.config.max_iters.ok_or(Error::MissingMaxIters)?;
                Ok(self.state.num_iters >= max_iters)
            }
        }
    }
}
