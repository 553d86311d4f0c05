use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Smallest box containing both points, grown by `margin` on every side.
    #[must_use]
    pub fn around_segment(p0: &Point2, p1: &Point2, margin: f64) -> Self {
        Self {
            min: Point2::new(p0.x.min(p1.x) - margin, p0.y.min(p1.y) - margin),
            max: Point2::new(p0.x.max(p1.x) + margin, p0.y.max(p1.y) + margin),
        }
    }
}
