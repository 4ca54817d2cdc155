use crossent_core::Observer;
use tracing::info;

use crate::traits::HasScores;

/// Emits an `info` event with the scores of every `every`-th iteration.
///
/// Never acts on the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    every: usize,
}

impl LogObserver {
    /// Logs every `every` iterations; zero is treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::every(1)
    }
}

impl<E: HasScores, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iter() % self.every == 0 {
            info!(
                iter = event.iter(),
                min_score = event.min_score(),
                elite_score = event.elite_score(),
                "cross-entropy progress"
            );
        }
        None
    }
}
