use super::{Aabb2, Point2};

/// An axis-aligned rectangle visited during quadrant subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    #[must_use]
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// The square `[0, side] × [0, side]`.
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Midpoint, where the rectangle is split into quadrants.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Corners in the order bottom-left, bottom-right, top-left, top-right.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.left, self.bottom),
            Point2::new(self.right, self.bottom),
            Point2::new(self.left, self.top),
            Point2::new(self.right, self.top),
        ]
    }

    /// Splits at the midpoint into four equal quadrants, in the same order as
    /// [`Rect::corners`].
    #[must_use]
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid = self.center();
        [
            Rect::new(self.left, self.bottom, mid.x, mid.y),
            Rect::new(mid.x, self.bottom, self.right, mid.y),
            Rect::new(self.left, mid.y, mid.x, self.top),
            Rect::new(mid.x, mid.y, self.right, self.top),
        ]
    }

    /// Returns `true` if both sides are no larger than `size`.
    #[must_use]
    pub fn fits_within(&self, size: f64) -> bool {
        self.width() <= size && self.height() <= size
    }

    /// Returns `true` if the rectangle touches or overlaps `bounds`.
    #[must_use]
    pub fn overlaps(&self, bounds: &Aabb2) -> bool {
        !(self.right < bounds.min.x
            || self.left > bounds.max.x
            || self.top < bounds.min.y
            || self.bottom > bounds.max.y)
    }
}
