use super::ConfigError;

/// Ordered finite bounds for the scan.
///
/// This is the working copy of a solver's interval: endpoints may be given in
/// either order and are swapped here, never in the stored configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Validates and orders the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if endpoints are non-finite or equal.
    pub(super) fn new(bounds: [f64; 2]) -> Result<Self, ConfigError> {
        let [a, b] = bounds;

        if let Some(&value) = bounds.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteBound { value });
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(ConfigError::ZeroWidth { value: a });
        }

        if a < b {
            Ok(Self { lower: a, upper: b })
        } else {
            Ok(Self { lower: b, upper: a })
        }
    }

    pub(super) fn lower(&self) -> f64 {
        self.lower
    }

    pub(super) fn upper(&self) -> f64 {
        self.upper
    }

    /// Scan positions `lower + k * step` for `k = 0, 1, ...` up to `upper`.
    ///
    /// Positions are computed from `lower` rather than accumulated, so rounding
    /// error does not grow with the number of steps.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn scan(&self, step: f64) -> impl Iterator<Item = f64> {
        let Self { lower, upper } = *self;
        (0_u64..)
            .map(move |k| lower + k as f64 * step)
            .take_while(move |&x| x <= upper)
    }
}
