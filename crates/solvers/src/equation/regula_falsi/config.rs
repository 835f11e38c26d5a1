use thiserror::Error;

/// Configuration for the regula falsi solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Distance the scan advances between evaluations.
    pub step: f64,
    /// Refinement stops once `|residual| <= residual_tol`.
    pub residual_tol: f64,
    /// Maximum number of false-position iterations.
    pub max_iters: usize,
}

/// Errors that can occur when validating a regula falsi configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("bounds have zero width: lower and upper are both {value}")]
    ZeroWidth { value: f64 },

    #[error("bounds must be finite, got {value}")]
    NonFiniteBound { value: f64 },

    #[error("step must be finite and positive, got {value}")]
    Step { value: f64 },

    #[error("residual_tol must be finite and positive, got {value}")]
    ResidualTol { value: f64 },

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 0.1,
            residual_tol: 1e-6,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Validates the step, tolerance, and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns the first parameter that would make the search degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::Step { value: self.step });
        }
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol {
                value: self.residual_tol,
            });
        }
        if self.max_iters < 1 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_iters, 1000);
    }

    #[test]
    fn rejects_non_positive_step() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = Config {
                step,
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::Step { .. })));
        }
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        for residual_tol in [0.0, -1e-6, f64::NAN] {
            let config = Config {
                residual_tol,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ResidualTol { .. })
            ));
        }
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxIters));
    }
}
