use super::{Point2, Vector2, TOLERANCE};
use crate::error::SensorError;

/// An infinite line in implicit normal form `a*x + b*y + c = 0` with `a² + b² = 1`.
///
/// Evaluating the left-hand side at a point yields the signed perpendicular
/// distance from that point to the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalLine {
    a: f64,
    b: f64,
    c: f64,
}

impl NormalLine {
    /// Builds the line through two points.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Degenerate` if the points are closer than [`TOLERANCE`].
    pub fn through(p0: &Point2, p1: &Point2) -> Result<Self, SensorError> {
        let d: Vector2 = p1 - p0;
        let len = d.x.hypot(d.y);
        if len < TOLERANCE {
            return Err(SensorError::Degenerate {
                x0: p0.x,
                y0: p0.y,
                x1: p1.x,
                y1: p1.y,
            });
        }

        let a = d.y / len;
        let b = -d.x / len;
        let c = -(a * p0.x + b * p0.y);
        Ok(Self { a, b, c })
    }

    /// Returns the `(a, b, c)` coefficients.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Signed perpendicular distance from `p` to the line.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unsigned perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance(&self, p: &Point2) -> f64 {
        self.signed_distance(p).abs()
    }
}
