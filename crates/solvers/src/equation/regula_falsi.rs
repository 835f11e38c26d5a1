//! Regula falsi with a fixed-step bracket scan.
//!
//! # Algorithm
//!
//! The solver evaluates the residual once at the upper bound, then scans
//! from the lower bound in fixed steps. The first scan position whose residual
//! does not share a strict sign with the upper residual forms a bracket, which
//! is refined by false position: each estimate is where the secant through the
//! two endpoints crosses zero, and it replaces the endpoint whose residual
//! shares its sign.
//!
//! Refinement stops as soon as `|residual| <= residual_tol`. If the iteration
//! budget runs out first, the last estimate is returned with
//! [`Status::MaxIters`] rather than an error.
//!
//! # When to Use
//!
//! - The root lies somewhere in a known interval, but no bracket is known
//! - Function evaluations are cheap enough to afford a linear scan
//! - A residual tolerance is the natural stopping criterion
//!
//! # Limitations
//!
//! - **First bracket only**: only the first sign change found is refined
//! - **Fixed step**: sign changes that open and close within one step are missed
//! - **Computed scan positions**: the `k`-th position is `lower + k * step`
//!   rather than a running sum, so positions can differ from an accumulating
//!   scan in the last bits
//! - **One-sided convergence**: on convex or concave residuals one endpoint
//!   can stay fixed, so convergence is linear
//!
//! # Observer Events
//!
//! Every evaluation emits one [`Event`]:
//!
//! - [`Event::Upper`] — the upper bound, evaluated once before scanning
//! - [`Event::Scan`] — each scan position
//! - [`Event::Estimate`] — each false-position estimate, with the bracket it
//!   came from
//!
//! Observers can return [`Action::StopEarly`] to halt immediately; the
//! evaluation that triggered the event is returned with
//! [`Status::StoppedByObserver`].
//!
//! # Diagnostics
//!
//! Outcomes are reported through `tracing`: failures and exhausted budgets at
//! `warn`, convergence and observer stops at `debug`, and each evaluation at
//! `trace`.
//!
//! [`Status::MaxIters`]: crate::equation::Status::MaxIters
//! [`Status::StoppedByObserver`]: crate::equation::Status::StoppedByObserver

mod action;
mod bounds;
mod bracket;
mod config;
mod error;
mod event;
mod finder;
mod refine;
mod scan;


pub use action::Action;
pub use bracket::{Bracket, Point};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use finder::RootFinder;

pub use crate::equation::{Solution, Status};

use falsi_core::{EquationProblem, Model, Observer};
use tracing::{debug, warn};

use crate::equation::Evaluation;

use bounds::Bounds;
use refine::refine;
use scan::{Scan, scan};

/// Finds a root of the equation within `bounds`.
///
/// The bounds may be given in either order. The observer receives an
/// [`Event`] for every evaluation; see the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bounds or config are invalid, if no sign change is
/// found in range, if a residual is non-finite, or if the model or problem
/// fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let result = search(model, problem, bounds, config, &mut observer);

    match &result {
        Ok(solution) => match solution.status {
            Status::Converged => debug!(
                x = solution.x,
                residual = solution.residual,
                iters = solution.iters,
                "converged"
            ),
            Status::MaxIters => warn!(
                x = solution.x,
                residual = solution.residual,
                iters = solution.iters,
                "no convergence within iteration budget"
            ),
            Status::StoppedByObserver => debug!(
                x = solution.x,
                iters = solution.iters,
                "stopped by observer"
            ),
        },
        Err(error) => warn!(%error, ?bounds, "regula falsi failed"),
    }

    result
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bounds or config are invalid, if no sign change is
/// found in range, if a residual is non-finite, or if the model or problem
/// fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bounds, config, ())
}

fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bounds)?;
    config.validate()?;

    match scan(model, problem, &bounds, config, observer)? {
        Scan::Bracketed(bracket) => refine(model, problem, bracket, config, observer),
        Scan::Stopped(solution) => Ok(solution),
        Scan::Exhausted => Err(Error::NoRootInRange {
            lower: bounds.lower(),
            upper: bounds.upper(),
        }),
    }
}

/// Rejects evaluations whose residual is NaN or infinite.
fn require_finite<I, O>(eval: Evaluation<I, O, 1>) -> Result<Evaluation<I, O, 1>, Error> {
    if eval.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x(),
            residual: eval.residual(),
        })
    }
}
