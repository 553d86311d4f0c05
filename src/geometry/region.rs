use crate::error::RegionError;
use crate::math::{Point2, Rect};

/// The square `[0, L] × [0, L]` to be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    side: u32,
}

impl Region {
    /// Creates a region with the given side length.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NonPositiveSide` if `side` is zero.
    pub fn new(side: u32) -> Result<Self, RegionError> {
        if side == 0 {
            return Err(RegionError::NonPositiveSide(side));
        }
        Ok(Self { side })
    }

    /// Returns the side length `L`.
    #[must_use]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The whole region as a search rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::square(f64::from(self.side))
    }

    /// Returns `true` if `p` lies inside or on the boundary of the square.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let l = f64::from(self.side);
        (0.0..=l).contains(&p.x) && (0.0..=l).contains(&p.y)
    }

    /// The thirteen points most likely to expose a gap: corners, center,
    /// edge midpoints, then the quarter points on both diagonals.
    #[must_use]
    pub fn strategic_points(&self) -> [Point2; 13] {
        let l = f64::from(self.side);
        let half = l / 2.0;
        let quarter = l / 4.0;
        let three_quarters = 3.0 * l / 4.0;
        [
            Point2::new(0.0, 0.0),
            Point2::new(l, 0.0),
            Point2::new(0.0, l),
            Point2::new(l, l),
            Point2::new(half, half),
            Point2::new(0.0, half),
            Point2::new(half, 0.0),
            Point2::new(l, half),
            Point2::new(half, l),
            Point2::new(quarter, three_quarters),
            Point2::new(three_quarters, quarter),
            Point2::new(quarter, quarter),
            Point2::new(three_quarters, three_quarters),
        ]
    }
}
