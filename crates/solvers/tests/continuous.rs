use approx::assert_abs_diff_eq;
use ndarray::array;

use crossent_solvers::{ContinuousProblem, Smoothing, problem::Status};

#[test]
fn quadratic_converges_to_its_minimum() {
    let mut problem = ContinuousProblem::gaussian(array![0.0], array![10.0]);
    problem.seed(567);
    problem.set_num_samples(100);
    problem.set_num_elite(10);
    problem.set_max_iters(100);
    problem.score_with(|x| (x[0] - 2.0).powi(2));

    let status = problem.solve().expect("should solve");

    assert_eq!(status, Status::StopDecision);
    assert_eq!(problem.num_iters(), 100);
    assert_abs_diff_eq!(problem.mean()[0], 2.0, epsilon = 1e-3);
}

/// Maximizes `exp(-(x-2)^2) + 0.8 exp(-(x+2)^2)`, which has a global
/// maximum at 2 and a local one at -2.
#[test]
fn bimodal_finds_global_maximum() {
    let mut problem = ContinuousProblem::gaussian(array![0.0], array![10.0]);
    problem.seed(567);
    problem.set_num_samples(1000);
    problem.set_num_elite(10);
    problem.set_max_iters(100);
    problem.score_with(|x| {
        let x = x[0];
        -((-(x - 2.0).powi(2)).exp() + 0.8 * (-(x + 2.0).powi(2)).exp())
    });

    problem.solve().unwrap();

    assert_abs_diff_eq!(problem.mean()[0], 2.0, epsilon = 1e-6);
}

#[test]
fn smoothed_rosenbrock_reaches_the_valley_floor() {
    let (a, b) = (1.0, 100.0);

    let mut problem = ContinuousProblem::gaussian(array![0.0, 0.0], array![10.0, 10.0]);
    problem.seed(567);
    problem.set_num_samples(1000);
    problem.set_num_elite(10);
    problem.set_max_iters(300);
    problem.set_updater(Smoothing::new(0.1).unwrap());
    problem.score_with(move |x| (a - x[0]).powi(2) + b * (x[1] - x[0].powi(2)).powi(2));

    problem.solve().unwrap();

    assert_abs_diff_eq!(problem.mean()[0], 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(problem.mean()[1], 1.0, epsilon = 1e-2);
}

#[test]
fn matrix_shaped_variables() {
    let target = array![[1.0, -1.0], [0.5, 3.0]];

    let mut problem = ContinuousProblem::gaussian(
        array![[0.0, 0.0], [0.0, 0.0]],
        array![[5.0, 5.0], [5.0, 5.0]],
    );
    problem.seed(99);
    problem.set_num_samples(200);
    problem.set_num_elite(20);
    problem.set_max_iters(60);
    let goal = target.clone().into_dyn();
    problem.score_with(move |x| (&x - &goal).mapv(|d| d * d).sum());

    problem.solve().unwrap();

    assert_eq!(problem.sample_shape(), &[2, 2]);
    assert_abs_diff_eq!(*problem.mean(), target.into_dyn(), epsilon = 1e-3);
}

#[test]
fn tracks_best_sample_seen() {
    let mut problem = ContinuousProblem::gaussian(array![3.0], array![1.0]);
    problem.seed(4);
    problem.set_num_samples(50);
    problem.set_num_elite(5);
    problem.set_max_iters(20);
    problem.set_track_overall_min(true);
    problem.score_with(|x| x[0].abs());

    problem.solve().unwrap();

    let best = problem.overall_min_score_sample().expect("tracking is on");
    assert_eq!(best[0].abs(), problem.overall_min_score());
    assert!(problem.overall_min_score() <= problem.min_score().unwrap());
}
