mod quadrant_search;
mod quick_check;
mod verify;

pub use quadrant_search::{is_rectangle_covered, QuadrantSearch};
pub use quick_check::QuickCheck;
pub use verify::VerifyCoverage;

use crate::geometry::Sensor;
use crate::math::{Point2, RESOLUTION, TOLERANCE, VIEW_DISTANCE};

/// Parameters controlling a coverage check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageParams {
    /// Observation radius given to sensors built from input.
    pub view_distance: f64,
    /// Cell size at which subdivision stops.
    pub resolution: f64,
    /// Distance past the radius still treated as covered, given to sensors
    /// built from input.
    pub slack: f64,
    /// Whether to probe the strategic points before subdividing.
    pub quick_check: bool,
}

impl Default for CoverageParams {
    fn default() -> Self {
        Self {
            view_distance: VIEW_DISTANCE,
            resolution: RESOLUTION,
            slack: TOLERANCE,
            quick_check: true,
        }
    }
}

impl CoverageParams {
    #[must_use]
    pub fn with_view_distance(mut self, view_distance: f64) -> Self {
        self.view_distance = view_distance;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    #[must_use]
    pub fn with_slack(mut self, slack: f64) -> Self {
        self.slack = slack;
        self
    }

    #[must_use]
    pub fn with_quick_check(mut self, enabled: bool) -> Self {
        self.quick_check = enabled;
        self
    }
}

/// Outcome of a coverage check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Every point of the region lies in some sensor's band.
    FullCoverage,
    /// A point of the region observed by no sensor.
    Uncovered(Point2),
}

impl Verdict {
    /// Returns the witness point, if any.
    #[must_use]
    pub fn witness(&self) -> Option<Point2> {
        match self {
            Verdict::FullCoverage => None,
            Verdict::Uncovered(p) => Some(*p),
        }
    }

    #[must_use]
    pub fn is_full_coverage(&self) -> bool {
        matches!(self, Verdict::FullCoverage)
    }
}

/// Counters gathered while searching. They never affect the verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Strategic points probed before subdivision.
    pub points_probed: usize,
    /// Rectangles taken off the work queue.
    pub rectangles_examined: usize,
    /// Rectangles proven covered by a single sensor.
    pub rectangles_pruned: usize,
    /// Rectangles that reached the resolution floor.
    pub terminal_cells: usize,
    /// Deepest subdivision level visited (the full square is level 0).
    pub max_depth: u32,
}

/// Verdict plus search statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageReport {
    pub verdict: Verdict,
    pub stats: SearchStats,
}

/// Returns `true` if at least one sensor covers `p`.
#[must_use]
pub fn is_point_covered(sensors: &[Sensor], p: &Point2) -> bool {
    sensors.iter().any(|s| s.covers(p))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_fixed_constants() {
        let params = CoverageParams::default();
        assert!((params.view_distance - 50.0).abs() < f64::EPSILON);
        assert!((params.resolution - 0.001).abs() < f64::EPSILON);
        assert!((params.slack - 1e-9).abs() < f64::EPSILON);
        assert!(params.quick_check);
    }

    #[test]
    fn union_point_test() {
        let sensors = vec![
            Sensor::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)).unwrap(),
            Sensor::new(Point2::new(0.0, 0.0), Point2::new(0.0, 100.0)).unwrap(),
        ];
        assert!(is_point_covered(&sensors, &Point2::new(90.0, 10.0)));
        assert!(is_point_covered(&sensors, &Point2::new(10.0, 90.0)));
        assert!(!is_point_covered(&sensors, &Point2::new(60.0, 60.0)));
        assert!(!is_point_covered(&[], &Point2::new(0.0, 0.0)));
    }

    #[test]
    fn verdict_witness() {
        assert_eq!(Verdict::FullCoverage.witness(), None);
        let p = Point2::new(1.0, 2.0);
        assert_eq!(Verdict::Uncovered(p).witness(), Some(p));
        assert!(!Verdict::Uncovered(p).is_full_coverage());
    }
}
