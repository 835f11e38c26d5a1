use std::convert::Infallible;

use crate::{EquationProblem, Model};

/// A plain scalar function `f(x)` exposed as a [`Model`].
///
/// The wrapped function is treated as pure: solvers may call it any number of
/// times, at any real argument, in any order.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F> {
    function: F,
}

impl<F> ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a scalar function.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Model for ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.function)(*input))
    }
}

impl<F> From<F> for ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

/// The equation `f(x) = 0` for any scalar model.
///
/// The solver variable is passed straight through as the model input and the
/// model output is the residual.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindZero;

impl EquationProblem<1> for FindZero {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fn_calls_wrapped_function() {
        let model = ScalarFn::new(|x: f64| x * x - 2.0);
        assert_eq!(model.call(&3.0), Ok(7.0));
    }

    #[test]
    fn scalar_fn_from_closure() {
        let model: ScalarFn<_> = (|x: f64| -x).into();
        assert_eq!(model.call(&1.5), Ok(-1.5));
    }

    #[test]
    fn find_zero_uses_output_as_residual() {
        let problem = FindZero;
        assert_eq!(problem.input(&[4.0]), Ok(4.0));
        assert_eq!(problem.residuals(&4.0, &-0.25), Ok([-0.25]));
    }
}
