use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{is_point_covered, CoverageReport, SearchStats, Verdict};
use crate::geometry::{Region, Sensor};
use crate::math::{Point2, Rect, RESOLUTION};

/// Returns `true` if a single sensor covers all four corners of `rect`.
///
/// Sound but incomplete: a rectangle covered only by the union of several
/// bands is reported as not covered.
#[must_use]
pub fn is_rectangle_covered(rect: &Rect, sensors: &[Sensor]) -> bool {
    sensors.iter().any(|s| s.covers_all_corners(rect))
}

/// Breadth-first quadrant subdivision of the region.
///
/// Rectangles proven covered by one sensor are dropped. The rest are split
/// until they fit within `resolution`, at which point the union of all bands
/// decides whether the cell holds a witness. A non-terminal rectangle whose
/// center is uncovered yields that center immediately.
pub struct QuadrantSearch {
    region: Region,
    resolution: f64,
}

impl QuadrantSearch {
    /// Creates a new `QuadrantSearch` with the default [`RESOLUTION`].
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            resolution: RESOLUTION,
        }
    }

    /// Sets the cell size at which subdivision stops. Must be positive.
    #[must_use]
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Executes the search.
    #[must_use]
    pub fn execute(&self, sensors: &[Sensor]) -> CoverageReport {
        let mut stats = SearchStats::default();
        let mut queue: VecDeque<(Rect, u32)> = VecDeque::new();
        queue.push_back((self.region.bounds(), 0));

        while let Some((rect, depth)) = queue.pop_front() {
            stats.rectangles_examined += 1;
            stats.max_depth = stats.max_depth.max(depth);

            if is_rectangle_covered(&rect, sensors) {
                stats.rectangles_pruned += 1;
                continue;
            }

            if rect.fits_within(self.resolution) {
                stats.terminal_cells += 1;
                if let Some(p) = terminal_witness(&rect, sensors) {
                    return finish(Verdict::Uncovered(p), stats);
                }
                continue;
            }

            let center = rect.center();
            if !is_point_covered(sensors, &center) {
                return finish(Verdict::Uncovered(center), stats);
            }

            trace!(depth, ?rect, "subdividing");
            queue.extend(rect.quadrants().into_iter().map(|q| (q, depth + 1)));
        }

        finish(Verdict::FullCoverage, stats)
    }
}

/// Center first, then corners; only points no sensor covers qualify.
fn terminal_witness(rect: &Rect, sensors: &[Sensor]) -> Option<Point2> {
    std::iter::once(rect.center())
        .chain(rect.corners())
        .find(|p| !is_point_covered(sensors, p))
}

fn finish(verdict: Verdict, stats: SearchStats) -> CoverageReport {
    debug!(
        ?verdict,
        examined = stats.rectangles_examined,
        pruned = stats.rectangles_pruned,
        terminal = stats.terminal_cells,
        max_depth = stats.max_depth,
        "quadrant search finished"
    );
    CoverageReport { verdict, stats }
}
