use tracing::{debug, debug_span};

use super::{CoverageParams, CoverageReport, QuadrantSearch, QuickCheck, SearchStats, Verdict};
use crate::error::{OperationError, Result};
use crate::geometry::{Region, Sensor};
use crate::math::Point2;

/// Decides whether the sensors cover the whole region.
///
/// Probes the strategic points first and falls back to quadrant subdivision
/// when none of them is exposed.
pub struct VerifyCoverage {
    region: Region,
    params: CoverageParams,
}

impl VerifyCoverage {
    /// Creates a new `VerifyCoverage` with default parameters.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            params: CoverageParams::default(),
        }
    }

    /// Sets custom search parameters.
    #[must_use]
    pub fn with_params(mut self, params: CoverageParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidParameters` if the resolution is not a
    /// positive finite number.
    pub fn execute(&self, sensors: &[Sensor]) -> Result<CoverageReport> {
        let resolution = self.params.resolution;
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(OperationError::InvalidParameters(format!(
                "resolution must be positive, got {resolution}"
            ))
            .into());
        }

        let _span = debug_span!(
            "verify_coverage",
            side = self.region.side(),
            sensors = sensors.len()
        )
        .entered();

        if self.params.quick_check {
            if let Some(p) = QuickCheck::new(self.region).execute(sensors) {
                return Ok(CoverageReport {
                    verdict: Verdict::Uncovered(p),
                    stats: SearchStats {
                        points_probed: self.probed_until(p),
                        ..SearchStats::default()
                    },
                });
            }
            debug!("strategic points covered, subdividing");
        }

        let mut report = QuadrantSearch::new(self.region)
            .with_resolution(resolution)
            .execute(sensors);
        if self.params.quick_check {
            report.stats.points_probed = self.region.strategic_points().len();
        }
        Ok(report)
    }

    /// Number of strategic points probed up to and including `witness`.
    fn probed_until(&self, witness: Point2) -> usize {
        self.region
            .strategic_points()
            .iter()
            .position(|p| *p == witness)
            .map_or(0, |i| i + 1)
    }
}
