use crossent_core::Observer;
use tracing::debug;

use crate::traits::{CanStopEarly, HasScores};

/// Stops a run once the elite set's scores lie within `tolerance` of the
/// batch minimum.
///
/// A collapsed spread means the distribution has concentrated on one score
/// level, so further iterations rarely improve it. The check is skipped
/// until `min_iters` iterations have completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliteSpread {
    tolerance: f64,
    min_iters: usize,
}

impl EliteSpread {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E: HasScores, A: CanStopEarly> Observer<E, A> for EliteSpread {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iter() < self.min_iters {
            return None;
        }

        let spread = event.elite_score() - event.min_score();
        if spread <= self.tolerance {
            debug!(iter = event.iter(), spread, "elite spread converged");
            return Some(A::stop_early());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossent_solvers::{ContinuousProblem, problem::Status};
    use ndarray::array;

    #[test]
    fn stops_when_elite_collapses() {
        let mut problem = ContinuousProblem::gaussian(array![5.0, -5.0], array![3.0, 3.0]);
        problem.seed(31);
        problem.set_num_samples(100);
        problem.set_num_elite(10);
        problem.set_max_iters(1000);
        problem.score_with(|x| x.iter().map(|v| v * v).sum());

        let status = problem
            .solve_observed(EliteSpread::new(1e-9).min_iters(3))
            .unwrap();

        assert_eq!(status, Status::StoppedByObserver);
        assert!(problem.num_iters() >= 3);
        assert!(problem.num_iters() < 1000);
        assert!(problem.elite_score().unwrap() - problem.min_score().unwrap() <= 1e-9);
    }

    #[test]
    fn waits_for_min_iters() {
        let mut problem = ContinuousProblem::gaussian(array![0.0], array![0.0]);
        problem.set_num_samples(4);
        problem.set_num_elite(2);
        problem.set_max_iters(10);
        problem.score_with(|x| x[0]);

        // A zero stddev gives identical scores from the first iteration.
        let status = problem
            .solve_observed(EliteSpread::new(0.0).min_iters(4))
            .unwrap();

        assert_eq!(status, Status::StoppedByObserver);
        assert_eq!(problem.num_iters(), 4);
    }
}
