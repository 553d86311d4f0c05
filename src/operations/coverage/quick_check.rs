use tracing::debug;

use super::is_point_covered;
use crate::geometry::{Region, Sensor};
use crate::math::Point2;

/// Probes the region's strategic points for one that no sensor covers.
///
/// This is a shortcut only: finding nothing says nothing about coverage.
pub struct QuickCheck {
    region: Region,
}

impl QuickCheck {
    /// Creates a new `QuickCheck` over `region`.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    /// Returns the first strategic point outside every sensor's band.
    #[must_use]
    pub fn execute(&self, sensors: &[Sensor]) -> Option<Point2> {
        let witness = self
            .region
            .strategic_points()
            .into_iter()
            .find(|p| !is_point_covered(sensors, p));
        if let Some(p) = witness {
            debug!(x = p.x, y = p.y, "strategic point uncovered");
        }
        witness
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sensor(x0: f64, y0: f64, x1: f64, y1: f64) -> Sensor {
        Sensor::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    #[test]
    fn midline_covers_all_strategic_points() {
        let region = Region::new(100).unwrap();
        assert_eq!(QuickCheck::new(region).execute(&[sensor(0.0, 50.0, 100.0, 50.0)]), None);
    }

    #[test]
    fn bottom_edge_exposes_top_left_corner() {
        // Corners are probed first: (0,0), (100,0), then (0,100).
        let region = Region::new(100).unwrap();
        let witness = QuickCheck::new(region).execute(&[sensor(0.0, 0.0, 100.0, 0.0)]);
        assert_eq!(witness, Some(Point2::new(0.0, 100.0)));
    }

    #[test]
    fn diagonal_exposes_off_diagonal_corner() {
        let region = Region::new(100).unwrap();
        let witness = QuickCheck::new(region).execute(&[sensor(0.0, 0.0, 100.0, 100.0)]);
        assert_eq!(witness, Some(Point2::new(100.0, 0.0)));
    }

    #[test]
    fn no_sensors_exposes_origin() {
        let region = Region::new(3).unwrap();
        assert_eq!(QuickCheck::new(region).execute(&[]), Some(Point2::new(0.0, 0.0)));
    }

    #[test]
    fn interior_hole_is_missed() {
        // Every strategic point is covered, yet (87.5, 87.5) is not.
        let region = Region::new(100).unwrap();
        let sensors = [
            sensor(0.0, 20.0, 100.0, 20.0),
            sensor(0.0, 150.0, 100.0, 150.0),
            sensor(25.0, 0.0, 25.0, 100.0),
        ];
        assert_eq!(QuickCheck::new(region).execute(&sensors), None);
        assert!(!is_point_covered(&sensors, &Point2::new(87.5, 87.5)));
    }
}
