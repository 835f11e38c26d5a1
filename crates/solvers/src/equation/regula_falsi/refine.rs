use falsi_core::{EquationProblem, Model, Observer};
use tracing::trace;

use crate::equation::{Solution, Status, evaluate};

use super::{Action, Bracket, Config, Error, Event, Point, require_finite};

/// Refines a bracket with false-position steps until the residual meets
/// tolerance or the iteration budget runs out.
///
/// Each estimate replaces the bracket endpoint whose residual shares its
/// sign, so the bracket keeps a sign change while closing in on the root.
/// When the budget runs out, the last estimate is returned with
/// [`Status::MaxIters`].
pub(super) fn refine<M, P, Obs>(
    model: &M,
    problem: &P,
    mut bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut iter = 0;
    loop {
        iter += 1;

        let x = bracket.false_position();
        let eval = require_finite(evaluate(model, problem, [x])?)?;
        let point = Point::from(&eval);
        trace!(iter, x, residual = point.residual, "estimate");

        let event = Event::Estimate {
            iter,
            bracket: &bracket,
            eval: &eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        bracket.shrink(point);

        if point.residual.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if iter >= config.max_iters {
            return Ok(Solution::from_eval(eval, Status::MaxIters, iter));
        }
    }
}
