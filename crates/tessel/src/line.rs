//! Infinite lines in slope–intercept form and their half-plane test.
//!
//! - `Line`: `y = y0 + slope·x`, immutable once built.
//! - The half-plane test is strict: points on the line count as "below".
//!
//! Vertical lines have no slope–intercept form and cannot be represented.

use nalgebra::Vector2;

/// Line `y = y_intercept + slope · x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    y_intercept: f64,
    slope: f64,
}

impl Line {
    /// Store both coefficients verbatim (no validation).
    #[inline]
    pub fn new(y_intercept: f64, slope: f64) -> Self {
        Self { y_intercept, slope }
    }

    /// Line through `p` with the given slope.
    #[inline]
    pub fn through(p: Vector2<f64>, slope: f64) -> Self {
        Self::new(p.y - slope * p.x, slope)
    }

    #[inline]
    pub fn y_intercept(&self) -> f64 {
        self.y_intercept
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Height of the line at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.y_intercept + x * self.slope
    }

    /// True iff `(x, y)` lies strictly above the line. No epsilon.
    #[inline]
    pub fn above(&self, x: f64, y: f64) -> bool {
        y > self.eval(x)
    }

    #[inline]
    pub fn above_point(&self, p: Vector2<f64>) -> bool {
        self.above(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn horizontal_line_through_origin() {
        let line = Line::new(0.0, 0.0);
        assert_eq!(line.slope(), 0.0);
        assert!(line.above(0.0, 1.0));
        assert!(!line.above(0.0, -1.0));
    }

    #[test]
    fn points_on_the_line_are_below() {
        let line = Line::new(1.5, -2.0);
        assert!(!line.above(0.0, 1.5));
        assert!(!line.above(2.0, -2.5));
        assert!(!line.above_point(vector![-1.0, 3.5]));
    }

    #[test]
    fn through_recovers_the_point() {
        let p = vector![0.75, -1.25];
        let line = Line::through(p, 3.0);
        assert!((line.eval(p.x) - p.y).abs() < 1e-12);
        assert!((line.y_intercept() - (-1.25 - 3.0 * 0.75)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn flat_line_is_exact_threshold(y0 in -1e6f64..1e6, x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let line = Line::new(y0, 0.0);
            prop_assert_eq!(line.above(x, y), y > y0);
        }

        #[test]
        fn exact_line_points_never_above(y0 in -100.0f64..100.0, slope in -100.0f64..100.0, x in -100.0f64..100.0) {
            let line = Line::new(y0, slope);
            prop_assert!(!line.above(x, line.eval(x)));
        }
    }
}
