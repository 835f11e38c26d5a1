use approx::assert_relative_eq;

use falsi_core::{FindZero, ScalarFn};
use falsi_solvers::equation::{
    RootSolver, Status,
    regula_falsi::{Config, ConfigError, Error, RootFinder},
};

#[test]
fn finds_root_of_shifted_line() {
    let finder = RootFinder::default();

    let solution = finder.solve_fn(|x| x - 2.0).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
    assert!((solution.x - 2.0).abs() <= 1e-6);
    assert_eq!(finder.last_iters(), Some(solution.iters));
}

#[test]
fn reports_no_root_for_positive_parabola() {
    let finder = RootFinder::default();

    let result = finder.solve_fn(|x| x * x + 1.0);

    assert!(matches!(result, Err(Error::NoRootInRange { .. })));
    assert_eq!(finder.last_iters(), None);
}

#[test]
fn reports_invalid_config_for_equal_bounds() {
    let mut finder = RootFinder::default();
    finder.set_bounds([3.0, 3.0]);

    let result = finder.solve_fn(|x| x - 3.0);

    assert!(matches!(
        result,
        Err(Error::InvalidConfig(ConfigError::ZeroWidth { .. }))
    ));
}

#[test]
fn swapped_bounds_solve_identically() {
    let config = Config::default();
    let forward = RootFinder::new([-2.0, 5.0], config);
    let swapped = RootFinder::new([5.0, -2.0], config);

    let f = |x: f64| x.exp() - 3.0;
    let a = forward.solve_fn(f).expect("forward");
    let b = swapped.solve_fn(f).expect("swapped");

    assert_relative_eq!(a.x, 3.0_f64.ln(), epsilon = 1e-6);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.iters, b.iters);
}

#[test]
fn single_iteration_budget_returns_estimate() {
    let finder = RootFinder::new(
        [0.0, 4.0],
        Config {
            max_iters: 1,
            ..Config::default()
        },
    );

    let solution = finder.solve_fn(|x| x * x * x - 2.0).expect("should estimate");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(solution.x.is_finite());
    assert!(solution.x > 0.0 && solution.x < 4.0);
}

#[test]
fn solving_twice_gives_same_answer() {
    let finder = RootFinder::new([0.0, 4.0], Config::default());
    let f = |x: f64| x.sin() - 0.5;

    let first = finder.solve_fn(f).expect("first");
    let second = finder.solve_fn(f).expect("second");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.status, second.status);
}

#[test]
fn strategies_are_interchangeable_behind_root_solver() {
    fn roots<S: RootSolver>(solvers: &[S]) -> Vec<f64> {
        solvers
            .iter()
            .filter_map(|s| {
                s.find_root(&ScalarFn::new(|x: f64| x * x - 9.0), &FindZero)
                    .ok()
            })
            .map(|solution| solution.x)
            .collect()
    }

    // Scanning from the left finds -3; a narrower interval finds 3.
    let finders = [
        RootFinder::default(),
        RootFinder::new([0.0, 10.0], Config::default()),
    ];

    let found = roots(&finders);

    assert_eq!(found.len(), 2);
    assert_relative_eq!(found[0], -3.0, epsilon = 1e-6);
    assert_relative_eq!(found[1], 3.0, epsilon = 1e-6);
}
