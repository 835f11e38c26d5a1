use std::sync::atomic::{AtomicUsize, Ordering};

use falsi_core::{EquationProblem, FindZero, Model, Observer, ScalarFn};

use crate::equation::{RootSolver, Solution};

use super::{Action, Config, Error, Event, solve, solve_unobserved};

/// A reusable regula falsi solver that owns its search interval and tuning.
///
/// Solving never mutates the stored bounds or config: reversed bounds are
/// ordered in a working copy on each call, so a shared `RootFinder` can serve
/// any number of solves. The only state a solve writes is the iteration count
/// of the most recent converged solve, see [`RootFinder::last_iters`].
#[derive(Debug)]
pub struct RootFinder {
    bounds: [f64; 2],
    config: Config,
    // Zero until a solve converges; a converged solve takes at least one iteration.
    last_iters: AtomicUsize,
}

impl Default for RootFinder {
    /// Searches `[-10, 10]` with the default [`Config`].
    fn default() -> Self {
        Self::new([-10.0, 10.0], Config::default())
    }
}

impl Clone for RootFinder {
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            config: self.config,
            last_iters: AtomicUsize::new(self.last_iters.load(Ordering::Relaxed)),
        }
    }
}

impl RootFinder {
    /// Creates a root finder for the given bounds and config.
    ///
    /// Nothing is validated here; invalid settings are reported by the solve.
    #[must_use]
    pub fn new(bounds: [f64; 2], config: Config) -> Self {
        Self {
            bounds,
            config,
            last_iters: AtomicUsize::new(0),
        }
    }

    /// Replaces the search interval, keeping the rest of the config.
    pub fn set_bounds(&mut self, bounds: [f64; 2]) {
        self.bounds = bounds;
    }

    /// Replaces the search interval and all tuning parameters.
    pub fn configure(&mut self, bounds: [f64; 2], config: Config) {
        self.bounds = bounds;
        self.config = config;
    }

    /// Returns the search interval as it was given.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    /// Returns the tuning parameters.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the iteration count of the most recent converged solve.
    ///
    /// Returns `None` if no solve on this instance has converged yet.
    /// Failed or unconverged solves leave the value unchanged.
    #[must_use]
    pub fn last_iters(&self) -> Option<usize> {
        match self.last_iters.load(Ordering::Relaxed) {
            0 => None,
            iters => Some(iters),
        }
    }

    /// Finds a root with observer support.
    ///
    /// See [`solve`](super::solve) for details.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bounds or config are invalid, if no
    /// sign change is found in range, if a residual is non-finite, or if the
    /// model or problem fails during evaluation.
    pub fn solve<M, P, Obs>(
        &self,
        model: &M,
        problem: &P,
        observer: Obs,
    ) -> Result<Solution<M::Input, M::Output>, Error>
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
        Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
    {
        let solution = solve(model, problem, self.bounds, &self.config, observer)?;
        self.record(&solution);
        Ok(solution)
    }

    /// Finds a root without observer support.
    ///
    /// # Errors
    ///
    /// See [`RootFinder::solve`].
    pub fn solve_unobserved<M, P>(
        &self,
        model: &M,
        problem: &P,
    ) -> Result<Solution<M::Input, M::Output>, Error>
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    {
        let solution = solve_unobserved(model, problem, self.bounds, &self.config)?;
        self.record(&solution);
        Ok(solution)
    }

    /// Finds `x` where the scalar function `f(x)` is (near) zero.
    ///
    /// # Errors
    ///
    /// See [`RootFinder::solve`]. A plain function cannot fail to evaluate,
    /// but it can still return a non-finite value.
    pub fn solve_fn<F>(&self, f: F) -> Result<Solution<f64, f64>, Error>
    where
        F: Fn(f64) -> f64,
    {
        self.solve_unobserved(&ScalarFn::new(f), &FindZero)
    }

    fn record<I, O>(&self, solution: &Solution<I, O>) {
        if solution.is_converged() {
            self.last_iters.store(solution.iters, Ordering::Relaxed);
        }
    }
}

impl RootSolver for RootFinder {
    type Error = Error;

    fn find_root<M, P>(
        &self,
        model: &M,
        problem: &P,
    ) -> Result<Solution<M::Input, M::Output>, Self::Error>
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    {
        self.solve_unobserved(model, problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::Status;

    #[test]
    fn default_searches_symmetric_interval() {
        let finder = RootFinder::default();

        assert_eq!(finder.bounds(), [-10.0, 10.0]);
        assert_eq!(*finder.config(), Config::default());
        assert_eq!(finder.last_iters(), None);
    }

    #[test]
    fn setters_replace_configuration() {
        let mut finder = RootFinder::default();

        finder.set_bounds([4.0, -4.0]);
        assert_eq!(finder.bounds(), [4.0, -4.0]);
        assert_eq!(*finder.config(), Config::default());

        let config = Config {
            step: 0.5,
            residual_tol: 1e-9,
            max_iters: 20,
        };
        finder.configure([0.0, 1.0], config);
        assert_eq!(finder.bounds(), [0.0, 1.0]);
        assert_eq!(*finder.config(), config);
    }

    #[test]
    fn solve_leaves_reversed_bounds_untouched() {
        let finder = RootFinder::new([10.0, -10.0], Config::default());

        let solution = finder.solve_fn(|x| x - 2.0).expect("should solve");

        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-9);
        assert_eq!(finder.bounds(), [10.0, -10.0]);
    }

    #[test]
    fn records_iterations_only_on_convergence() {
        let mut finder = RootFinder::default();

        let solution = finder.solve_fn(|x| x - 2.0).expect("should solve");
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(finder.last_iters(), Some(solution.iters));

        // No root in range: the record is kept.
        assert!(finder.solve_fn(|x| x * x + 1.0).is_err());
        assert_eq!(finder.last_iters(), Some(solution.iters));

        // Budget exhausted: the record is kept.
        finder.configure(
            [0.0, 10.0],
            Config {
                max_iters: 1,
                ..Config::default()
            },
        );
        let unconverged = finder.solve_fn(|x| x * x - 2.0).expect("should return estimate");
        assert_eq!(unconverged.status, Status::MaxIters);
        assert_eq!(finder.last_iters(), Some(solution.iters));
    }

    #[test]
    fn clone_is_independent() {
        let mut original = RootFinder::new([0.0, 5.0], Config::default());
        let copy = original.clone();

        original.set_bounds([-1.0, 1.0]);

        assert_eq!(copy.bounds(), [0.0, 5.0]);
        assert_eq!(copy.config(), original.config());
    }

    #[test]
    fn usable_through_root_solver() {
        fn solve_with<S: RootSolver>(solver: &S) -> f64 {
            solver
                .find_root(&ScalarFn::new(|x: f64| x * x * x - 8.0), &FindZero)
                .map(|solution| solution.x)
                .unwrap_or(f64::NAN)
        }

        let config = Config {
            residual_tol: 1e-10,
            ..Config::default()
        };
        let finder = RootFinder::new([0.0, 5.0], config);

        assert_relative_eq!(solve_with(&finder), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn shared_across_threads() {
        let finder = RootFinder::default();

        let roots: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = [1.0, -3.0, 7.5]
                .into_iter()
                .map(|root| {
                    let finder = &finder;
                    scope.spawn(move || finder.solve_fn(move |x| x - root).map(|s| s.x))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("thread").expect("should solve"))
                .collect()
        });

        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], -3.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 7.5, epsilon = 1e-9);
        assert!(finder.last_iters().is_some());
    }
}
