use crate::equation::Evaluation;

/// A point with its evaluated residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    fn shares_sign_with(&self, other: &Point) -> bool {
        self.residual * other.residual >= 0.0
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x(), eval.residual())
    }
}

/// Two points whose residuals do not share a strict sign.
///
/// A zero residual at either end counts as a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a bracket if the residuals change sign between the points.
    ///
    /// Returns `None` when both residuals are strictly positive or strictly
    /// negative.
    pub(super) fn new(left: Point, right: Point) -> Option<Self> {
        if left.residual * right.residual > 0.0 {
            return None;
        }
        Some(Self { left, right })
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.right.x - self.left.x).abs()
    }

    /// Returns where the secant through both endpoints crosses zero.
    ///
    /// The residuals are scaled into `[-1, 1]` before interpolating, so large
    /// finite residuals cannot overflow. If both residuals are zero the left
    /// endpoint is already a root and is returned.
    #[must_use]
    pub fn false_position(&self) -> f64 {
        let Self { left, right } = self;

        let scale = left.residual.abs().max(right.residual.abs());
        #[allow(clippy::float_cmp)]
        if scale == 0.0 {
            return left.x;
        }
        let (y0, y1) = (left.residual / scale, right.residual / scale);

        // Opposite signs keep |y0 - y1| >= 1.
        let t = (y0 / (y0 - y1)).clamp(0.0, 1.0);
        left.x + t * (right.x - left.x)
    }

    /// Replaces the endpoint whose residual shares a sign with `point`.
    ///
    /// The left endpoint is replaced when its residual has the same sign as
    /// the new one (or either is zero), otherwise the right endpoint is.
    pub(super) fn shrink(&mut self, point: Point) {
        if self.left.shares_sign_with(&point) {
            self.left = point;
        } else {
            self.right = point;
        }
    }
}
