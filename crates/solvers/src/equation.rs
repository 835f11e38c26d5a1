//! Solvers for equation problems: finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`regula_falsi`] — fixed-step scan for a sign change followed by
//!   false-position refinement of the first bracket found
//!
//! Solvers implement [`RootSolver`] so callers can hold any strategy behind
//! one interface.
//!
//! [`EquationProblem`]: falsi_core::EquationProblem

mod evaluate;
mod solution;
mod solver;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use solution::{Solution, Status};
pub use solver::RootSolver;

pub mod regula_falsi;
