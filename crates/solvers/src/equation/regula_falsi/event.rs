use crate::equation::Evaluation;

use super::{Bracket, Point};

/// Event emitted by the regula falsi solver for each evaluation.
pub enum Event<'a, I, O> {
    /// Evaluation at the fixed upper bound, made once before scanning.
    Upper {
        /// The result of the evaluation.
        eval: &'a Evaluation<I, O, 1>,
    },
    /// Evaluation at a scan position.
    Scan {
        /// Zero-based scan step; the position is `lower + step * config.step`.
        step: usize,
        /// The result of the evaluation.
        eval: &'a Evaluation<I, O, 1>,
    },
    /// Evaluation at a false-position estimate.
    Estimate {
        /// Iteration counter (1-based within the refinement loop).
        iter: usize,
        /// The bracket the estimate was computed from.
        bracket: &'a Bracket,
        /// The result of the evaluation.
        eval: &'a Evaluation<I, O, 1>,
    },
}

impl<'a, I, O> Event<'a, I, O> {
    /// Returns the evaluation carried by this event.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        match self {
            Event::Upper { eval } | Event::Scan { eval, .. } | Event::Estimate { eval, .. } => {
                *eval
            }
        }
    }

    /// Returns the evaluated point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::from(self.eval())
    }

    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval().x()
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval().residual()
    }
}
