use std::path::Path;

use crate::error::Result;
use crate::operations::coverage::Verdict;

/// Written when every point of the region is covered.
pub const SUCCESS_MARKER: &str = "OK";

/// Written for any invalid input or failed check.
pub const FAILURE_MARKER: &str = "ERROR";

/// Formats a verdict: the success marker, or the witness to three decimals.
#[must_use]
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::FullCoverage => SUCCESS_MARKER.to_string(),
        Verdict::Uncovered(p) => format!("{:.3} {:.3}", p.x, p.y),
    }
}

/// Formats the outcome of a run as a single newline-terminated line.
#[must_use]
pub fn format_outcome(outcome: &Result<Verdict>) -> String {
    match outcome {
        Ok(verdict) => format!("{}\n", format_verdict(verdict)),
        Err(_) => format!("{FAILURE_MARKER}\n"),
    }
}

/// Writes the formatted outcome to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written.
pub fn write_outcome(path: &Path, outcome: &Result<Verdict>) -> std::io::Result<()> {
    std::fs::write(path, format_outcome(outcome))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{RegionError, SweepcoverError};
    use crate::math::Point2;

    #[test]
    fn full_coverage_marker() {
        assert_eq!(format_outcome(&Ok(Verdict::FullCoverage)), "OK\n");
    }

    #[test]
    fn witness_has_three_decimals() {
        let out = format_outcome(&Ok(Verdict::Uncovered(Point2::new(0.0, 100.0))));
        assert_eq!(out, "0.000 100.000\n");
        let out = format_verdict(&Verdict::Uncovered(Point2::new(87.5, 12.3456)));
        assert_eq!(out, "87.500 12.346");
    }

    #[test]
    fn any_error_is_failure_marker() {
        let err: Result<Verdict> = Err(SweepcoverError::Region(RegionError::NonPositiveSide(0)));
        assert_eq!(format_outcome(&err), "ERROR\n");
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("OUTPUT");
        write_outcome(&path, &Ok(Verdict::FullCoverage)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "OK\n");
    }
}
