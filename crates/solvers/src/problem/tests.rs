use std::{cell::RefCell, rc::Rc};

use approx::assert_relative_eq;
use ndarray::{Array2, ArrayView2, Ix2, array};
use thiserror::Error;

use super::{Action, ConfigError, Error, Event, Problem, State, Status, Strategy};

/// A toy problem whose parameter is a single location and whose batches are
/// column vectors of fixed values.
type Toy = Problem<f64, f64, Ix2>;

fn estimate_mean(elite: ArrayView2<'_, f64>, _state: &State<f64>) -> f64 {
    elite.column(0).mean().unwrap_or_default()
}

fn toy(batch: Array2<f64>, num_elite: usize) -> Toy {
    let mut problem = Toy::new(0.0);
    problem.set_num_samples(batch.nrows());
    problem.set_num_elite(num_elite);
    problem.set_max_iters(1);
    problem.generate_with(move |_, _| batch.clone());
    problem.score_with(|sample| sample[0]);
    problem.estimate_with(estimate_mean);
    problem
}

#[test]
fn elite_includes_ties_at_the_boundary() {
    let mut problem = toy(array![[2.0], [1.0], [0.0], [1.0], [1.0]], 2);

    let status = problem.solve().expect("should solve");

    assert_eq!(status, Status::StopDecision);
    assert_eq!(problem.num_iters(), 1);
    assert_eq!(problem.min_score(), Some(0.0));
    assert_eq!(problem.elite_score(), Some(1.0));
    // Elite is {0, 1, 1, 1}.
    assert_relative_eq!(*problem.params(), 0.75);
}

#[test]
fn update_defaults_to_the_estimate() {
    let mut problem = toy(array![[4.0], [2.0], [6.0]], 2);
    problem.set_params(100.0);

    problem.solve().unwrap();

    assert_relative_eq!(*problem.params(), 3.0);
}

#[test]
fn update_sees_previous_params() {
    let mut problem = toy(array![[4.0], [2.0], [6.0]], 2);
    problem.set_params(1.0);
    problem.update_with(|estimated, state: &State<f64>| 0.5 * estimated + 0.5 * state.params());

    problem.solve().unwrap();

    assert_relative_eq!(*problem.params(), 2.0);
}

#[test]
fn iteration_counter_restarts_on_each_solve() {
    let mut problem = toy(array![[1.0], [2.0]], 1);
    problem.set_max_iters(3);

    problem.solve().unwrap();
    assert_eq!(problem.num_iters(), 3);

    problem.solve().unwrap();
    assert_eq!(problem.num_iters(), 3);
}

#[test]
fn custom_stop_decision_replaces_max_iters() {
    let mut problem = toy(array![[1.0], [2.0]], 1);
    problem.stop_when(|state| state.num_iters() == 5);

    assert_eq!(problem.solve().unwrap(), Status::StopDecision);
    assert_eq!(problem.num_iters(), 5);
}

#[test]
fn stop_decision_reads_scores_of_the_iteration() {
    let mut problem = toy(array![[3.0], [1.0]], 1);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    problem.stop_when(move |state| {
        record
            .borrow_mut()
            .push((state.min_score(), state.elite_score()));
        true
    });

    problem.solve().unwrap();

    assert_eq!(*seen.borrow(), vec![(Some(1.0), Some(1.0))]);
}

#[test]
fn overall_min_untracked_by_default() {
    let mut problem = toy(array![[-5.0], [1.0]], 1);
    problem.set_max_iters(4);

    problem.solve().unwrap();

    assert_eq!(problem.overall_min_score(), f64::INFINITY);
    assert!(problem.overall_min_score_sample().is_none());
}

/// Batches whose first column is the score and second column tags the sample.
fn tagged_batches(state: &State<f64>) -> Array2<f64> {
    match state.num_iters() {
        0 => array![[5.0, 0.0], [3.0, 1.0], [4.0, 2.0]],
        1 => array![[3.0, 10.0], [6.0, 11.0], [7.0, 12.0]],
        _ => array![[9.0, 20.0], [1.0, 21.0], [9.0, 22.0]],
    }
}

#[test]
fn overall_min_updates_only_on_strict_improvement() {
    let mut problem = Toy::new(0.0);
    problem.set_num_samples(3);
    problem.set_num_elite(1);
    problem.set_track_overall_min(true);
    problem.generate_with(|state, _| tagged_batches(state));
    problem.score_with(|sample| sample[0]);
    problem.estimate_with(estimate_mean);

    problem.set_max_iters(2);
    problem.solve().unwrap();
    assert_eq!(problem.overall_min_score(), 3.0);
    assert_eq!(problem.overall_min_score_sample(), Some(&array![3.0, 1.0]));

    problem.set_max_iters(3);
    problem.solve().unwrap();
    assert_eq!(problem.overall_min_score(), 1.0);
    assert_eq!(problem.overall_min_score_sample(), Some(&array![1.0, 21.0]));
}

#[test]
fn observer_sees_each_iteration_and_can_stop() {
    let mut problem = toy(array![[2.0], [1.0], [3.0]], 2);
    problem.set_max_iters(10);

    let mut events = Vec::new();
    let status = problem
        .solve_observed(|event: &Event<'_, f64>| {
            events.push((event.iter, event.min_score, event.elite_score, event.elite_count));
            (event.iter == 3).then_some(Action::StopEarly)
        })
        .unwrap();

    assert_eq!(status, Status::StoppedByObserver);
    assert_eq!(problem.num_iters(), 3);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], (1, 1.0, 2.0, 2));
}

#[test]
fn missing_strategies_are_reported() {
    let mut problem = Toy::new(0.0);
    problem.set_num_samples(2);
    problem.set_num_elite(1);
    problem.set_max_iters(1);

    let err = problem.solve().unwrap_err();
    assert!(matches!(err, Error::MissingStrategy(Strategy::GenerateSamples)));

    problem.generate_with(|_, _| array![[1.0], [2.0]]);
    let err = problem.solve().unwrap_err();
    assert!(matches!(err, Error::MissingStrategy(Strategy::ScoreSample)));
    assert_eq!(err.to_string(), "no score_sample strategy provided");

    problem.score_with(|sample| sample[0]);
    let err = problem.solve().unwrap_err();
    assert!(matches!(err, Error::MissingStrategy(Strategy::Estimate)));

    problem.estimate_with(estimate_mean);
    assert!(problem.solve().is_ok());
}

#[test]
fn default_stop_decision_needs_max_iters() {
    let mut problem = Toy::new(0.0);
    problem.set_num_samples(2);
    problem.set_num_elite(1);
    problem.generate_with(|_, _| array![[1.0], [2.0]]);
    problem.score_with(|sample| sample[0]);
    problem.estimate_with(estimate_mean);

    let err = problem.solve().unwrap_err();

    assert!(matches!(err, Error::MissingMaxIters));
    assert_eq!(problem.num_iters(), 1);
}

#[test]
fn config_is_validated_before_running() {
    let mut problem = toy(array![[1.0], [2.0]], 3);
    assert!(matches!(
        problem.solve(),
        Err(Error::Config(ConfigError::NumElite {
            num_elite: 3,
            num_samples: 2
        }))
    ));

    problem.set_num_elite(0);
    assert!(matches!(
        problem.solve(),
        Err(Error::Config(ConfigError::NumElite { num_elite: 0, .. }))
    ));

    problem.set_num_samples(0);
    assert!(matches!(
        problem.solve(),
        Err(Error::Config(ConfigError::NumSamples))
    ));
    assert_eq!(problem.num_iters(), 0);
}

#[test]
fn wrong_batch_size_is_rejected() {
    let mut problem = toy(array![[1.0], [2.0], [3.0]], 1);
    problem.set_num_samples(5);

    assert!(matches!(
        problem.solve(),
        Err(Error::BatchSize {
            expected: 5,
            found: 3
        })
    ));
}

#[test]
fn nan_score_aborts_the_run() {
    let mut problem = toy(array![[1.0], [f64::NAN], [3.0]], 1);

    assert!(matches!(problem.solve(), Err(Error::NanScore { index: 1 })));
    assert_eq!(problem.num_iters(), 0);
}

#[derive(Debug, Error)]
#[error("sample out of domain")]
struct OutOfDomain;

#[test]
fn scorer_failure_aborts_the_run() {
    let mut problem = toy(array![[1.0], [-2.0], [3.0]], 1);
    problem.try_score_with(|sample| {
        if sample[0] < 0.0 {
            Err(OutOfDomain)
        } else {
            Ok(sample[0])
        }
    });

    let err = problem.solve().unwrap_err();

    assert!(matches!(err, Error::Score { index: 1, .. }));
    assert_eq!(err.to_string(), "scoring sample 1 failed: sample out of domain");
}

#[test]
fn generator_failure_is_wrapped() {
    struct Failing;

    impl super::SampleGenerator<f64, f64, Ix2> for Failing {
        fn generate(
            &mut self,
            _state: &State<f64>,
            _rng: &mut rand::rngs::StdRng,
        ) -> Result<Array2<f64>, super::BoxError> {
            Err(OutOfDomain.into())
        }
    }

    let mut problem = toy(array![[1.0]], 1);
    problem.set_generator(Failing);

    assert!(matches!(problem.solve(), Err(Error::Generate(_))));
}

#[test]
fn seeded_runs_are_reproducible() {
    use rand::{Rng, distributions::Standard};

    let run = |seed| {
        let mut problem = Toy::new(0.0);
        problem.seed(seed);
        problem.set_num_samples(8);
        problem.set_num_elite(2);
        problem.set_max_iters(3);
        problem.generate_with(|state, rng| {
            Array2::from_shape_simple_fn((state.num_samples(), 1), || {
                rng.sample::<f64, _>(Standard)
            })
        });
        problem.score_with(|sample| sample[0]);
        problem.estimate_with(estimate_mean);
        problem.solve().unwrap();
        *problem.params()
    };

    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}
