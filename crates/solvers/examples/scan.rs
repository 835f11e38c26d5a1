//! Finds roots of a few scalar functions and prints each solver event.
//!
//! Run with `RUST_LOG=falsi_solvers=debug` to see the solver's own diagnostics.

use falsi_core::{FindZero, ScalarFn};
use falsi_solvers::equation::regula_falsi::{Config, Event, RootFinder};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let finder = RootFinder::default();

    let cases: [(&str, fn(f64) -> f64); 3] = [
        ("x - 2", |x| x - 2.0),
        ("x^2 + 1", |x| x * x + 1.0),
        ("cos(x) - x", |x| x.cos() - x),
    ];

    for (name, f) in cases {
        match finder.solve_fn(f) {
            Ok(solution) => info!(
                function = name,
                x = solution.x,
                residual = solution.residual,
                iters = solution.iters,
                status = ?solution.status,
                "solved"
            ),
            Err(error) => info!(function = name, %error, "no solution"),
        }
    }

    // Watch the bracket close in on the root of x^3 - 2x - 5.
    let tight = RootFinder::new(
        [0.0, 3.0],
        Config {
            residual_tol: 1e-12,
            ..Config::default()
        },
    );
    let model = ScalarFn::new(|x: f64| x.powi(3) - 2.0 * x - 5.0);
    let observer = |event: &Event<'_, f64, f64>| {
        if let Event::Estimate { iter, bracket, .. } = event {
            let [left, right] = bracket.as_array();
            info!(iter, left, right, x = event.x(), residual = event.residual(), "estimate");
        }
        None
    };

    match tight.solve(&model, &FindZero, observer) {
        Ok(solution) => info!(x = solution.x, iters = ?tight.last_iters(), "converged"),
        Err(error) => info!(%error, "failed"),
    }
}
