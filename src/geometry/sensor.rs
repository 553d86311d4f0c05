use crate::error::SensorError;
use crate::math::{Aabb2, NormalLine, Point2, Rect, TOLERANCE, VIEW_DISTANCE};

/// A linear sweep that observes everything within `radius` of the infinite
/// line through its two endpoints.
///
/// Immutable once built. The bounding box is the segment's extents grown by
/// the radius and is only used to skip rectangle proofs, never to measure
/// distance. Points up to `slack` beyond the radius still count as covered.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    line: NormalLine,
    bounds: Aabb2,
    radius: f64,
    slack: f64,
}

impl Sensor {
    /// Creates a sensor with the standard [`VIEW_DISTANCE`].
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Degenerate` if the endpoints coincide.
    pub fn new(p0: Point2, p1: Point2) -> Result<Self, SensorError> {
        Self::with_radius(p0, p1, VIEW_DISTANCE)
    }

    /// Creates a sensor observing `radius` units on either side of its line.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Degenerate` if the endpoints coincide, or
    /// `SensorError::InvalidRadius` if `radius` is negative or not finite.
    pub fn with_radius(p0: Point2, p1: Point2, radius: f64) -> Result<Self, SensorError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SensorError::InvalidRadius(radius));
        }
        let line = NormalLine::through(&p0, &p1)?;
        Ok(Self {
            line,
            bounds: Aabb2::around_segment(&p0, &p1, radius),
            radius,
            slack: TOLERANCE,
        })
    }

    /// Replaces the boundary slack, which defaults to [`TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns `SensorError::InvalidSlack` if `slack` is negative or not finite.
    pub fn with_slack(mut self, slack: f64) -> Result<Self, SensorError> {
        if !slack.is_finite() || slack < 0.0 {
            return Err(SensorError::InvalidSlack(slack));
        }
        self.slack = slack;
        Ok(self)
    }

    /// Returns the normalized line the sensor observes along.
    #[must_use]
    pub fn line(&self) -> &NormalLine {
        &self.line
    }

    /// Conservative box around the observed part of the segment.
    #[must_use]
    pub fn bounds(&self) -> &Aabb2 {
        &self.bounds
    }

    /// Returns the observation radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the boundary slack added to the radius in [`Sensor::covers`].
    #[must_use]
    pub fn slack(&self) -> f64 {
        self.slack
    }

    /// Returns `true` if `p` lies inside the observation band (with slack).
    #[must_use]
    pub fn covers(&self, p: &Point2) -> bool {
        self.line.distance(p) <= self.radius + self.slack
    }

    /// Returns `true` if this sensor alone covers every corner of `rect`.
    ///
    /// Since the band is convex, this proves the whole rectangle is covered.
    /// Rectangles outside the bounding box are rejected without testing.
    #[must_use]
    pub fn covers_all_corners(&self, rect: &Rect) -> bool {
        rect.overlaps(&self.bounds) && rect.corners().iter().all(|c| self.covers(c))
    }
}
