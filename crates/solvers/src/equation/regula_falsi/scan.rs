use falsi_core::{EquationProblem, Model, Observer};
use tracing::trace;

use crate::equation::{Solution, Status, evaluate};

use super::{Action, Bracket, Config, Error, Event, Point, bounds::Bounds, require_finite};

/// How the scan for a sign change ended.
pub(super) enum Scan<I, O> {
    /// A sign change was found between a scan position and the upper bound.
    Bracketed(Bracket),
    /// The observer stopped the solver.
    Stopped(Solution<I, O>),
    /// The scan passed the upper bound without finding a sign change.
    Exhausted,
}

/// Scans from the lower bound toward the upper bound for a sign change.
///
/// The upper bound is evaluated once. Each scan position is then compared
/// against it, and the first position whose residual does not share a strict
/// sign with the upper residual forms the bracket.
pub(super) fn scan<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: &Bounds,
    config: &Config,
    observer: &mut Obs,
) -> Result<Scan<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let upper_eval = require_finite(evaluate(model, problem, [bounds.upper()])?)?;
    let upper = Point::from(&upper_eval);

    if let Some(Action::StopEarly) = observer.observe(&Event::Upper { eval: &upper_eval }) {
        return Ok(Scan::Stopped(Solution::from_eval(
            upper_eval,
            Status::StoppedByObserver,
            0,
        )));
    }

    for (step, x) in bounds.scan(config.step).enumerate() {
        let eval = require_finite(evaluate(model, problem, [x])?)?;
        let point = Point::from(&eval);
        trace!(step, x, residual = point.residual, "scan");

        if let Some(Action::StopEarly) = observer.observe(&Event::Scan { step, eval: &eval }) {
            return Ok(Scan::Stopped(Solution::from_eval(
                eval,
                Status::StoppedByObserver,
                0,
            )));
        }

        if let Some(bracket) = Bracket::new(point, upper) {
            return Ok(Scan::Bracketed(bracket));
        }
    }

    Ok(Scan::Exhausted)
}
