//! Root solvers for the falsi workspace.
//!
//! # Modules
//!
//! - [`equation`] — solvers that drive the residual of an
//!   [`EquationProblem`] to zero
//!
//! [`EquationProblem`]: falsi_core::EquationProblem

pub mod equation;
