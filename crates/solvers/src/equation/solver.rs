use falsi_core::{EquationProblem, Model};

use super::Solution;

/// A configured strategy for finding a root of a scalar equation.
///
/// Implementors own their configuration and search a fresh working copy on
/// every call, so one instance can be reused for any number of problems.
/// Cloning a solver yields an independent instance with the same settings.
pub trait RootSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Searches for `x` where the problem's residual is (near) zero.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the search cannot produce an estimate.
    fn find_root<M, P>(
        &self,
        model: &M,
        problem: &P,
    ) -> Result<Solution<M::Input, M::Output>, Self::Error>
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>;
}
