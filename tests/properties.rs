#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use sweepcover::geometry::{Region, Sensor};
use sweepcover::math::{Point2, RESOLUTION, TOLERANCE};
use sweepcover::operations::coverage::{CoverageReport, Verdict, VerifyCoverage};

/// A long sensor through a point of the region at the given angle.
///
/// Its half-length exceeds the region diagonal, so every point of the
/// region inside its band also lies inside its bounding box.
fn line_through(side: u32, fx: f64, fy: f64, angle: f64) -> Sensor {
    let l = f64::from(side);
    let center = Point2::new(fx * l, fy * l);
    let half = 4.0 * l + 100.0;
    let (sin, cos) = angle.sin_cos();
    Sensor::new(
        Point2::new(center.x - half * cos, center.y - half * sin),
        Point2::new(center.x + half * cos, center.y + half * sin),
    )
    .unwrap()
}

fn problem() -> impl Strategy<Value = (Region, Vec<Sensor>)> {
    (1u32..=100).prop_flat_map(|side| {
        let sensor = (0.0..=1.0f64, 0.0..=1.0f64, 0.0..std::f64::consts::PI)
            .prop_map(move |(fx, fy, angle)| line_through(side, fx, fy, angle));
        (
            Just(Region::new(side).unwrap()),
            prop::collection::vec(sensor, 1..=4),
        )
    })
}

fn verify(region: Region, sensors: &[Sensor]) -> CoverageReport {
    VerifyCoverage::new(region).execute(sensors).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn witness_lies_outside_every_band((region, sensors) in problem()) {
        if let Verdict::Uncovered(w) = verify(region, &sensors).verdict {
            prop_assert!(region.contains(&w), "witness {w:?} outside region");
            for s in &sensors {
                prop_assert!(s.line().distance(&w) > s.radius(), "witness {w:?} covered");
            }
        }
    }

    #[test]
    fn full_coverage_holds_on_sampled_points((region, sensors) in problem()) {
        if verify(region, &sensors).verdict.is_full_coverage() {
            let l = f64::from(region.side());
            for i in 0..=20 {
                for j in 0..=20 {
                    let p = Point2::new(l * f64::from(i) / 20.0, l * f64::from(j) / 20.0);
                    let nearest = sensors
                        .iter()
                        .map(|s| s.line().distance(&p) - s.radius())
                        .fold(f64::INFINITY, f64::min);
                    prop_assert!(nearest <= RESOLUTION + TOLERANCE, "{p:?} uncovered by {nearest}");
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic((region, sensors) in problem()) {
        prop_assert_eq!(verify(region, &sensors), verify(region, &sensors));
    }

    #[test]
    fn duplicate_sensors_do_not_change_verdict((region, sensors) in problem()) {
        let doubled: Vec<Sensor> = sensors.iter().chain(&sensors).cloned().collect();
        prop_assert_eq!(verify(region, &sensors).verdict, verify(region, &doubled).verdict);
    }
}
