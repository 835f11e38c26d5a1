//! Core traits and types for the falsi workspace.
//!
//! This crate defines the shared abstractions that root solvers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and
//!   extracts residuals from outputs
//! - [`ScalarFn`] and [`FindZero`] — expose a plain `f(x)` as a model and
//!   the problem of driving it to zero

mod function;
mod model;
mod observer;
mod problems;

pub use function::{FindZero, ScalarFn};
pub use observer::Observer;
pub use problems::EquationProblem;
pub use {model::Model, model::Snapshot};
