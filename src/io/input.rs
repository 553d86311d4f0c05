use std::path::Path;

use tracing::debug;

use crate::error::{InputError, Result};
use crate::geometry::{Region, Sensor};
use crate::math::Point2;
use crate::operations::coverage::{CoverageParams, CoverageReport, VerifyCoverage};

/// Largest accepted region side.
pub const MAX_SIDE: u32 = 1000;

/// Largest accepted number of sensors.
pub const MAX_SENSORS: i64 = 100;

/// A validated problem instance.
#[derive(Debug, Clone)]
pub struct Problem {
    pub region: Region,
    pub sensors: Vec<Sensor>,
}

impl Problem {
    /// Runs the coverage check on this instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` are invalid.
    pub fn verify(&self, params: CoverageParams) -> Result<CoverageReport> {
        VerifyCoverage::new(self.region)
            .with_params(params)
            .execute(&self.sensors)
    }
}

/// Reads and parses a problem from a file.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be read, or any error of
/// [`parse_problem`].
pub fn read_problem(path: &Path, params: &CoverageParams) -> Result<Problem> {
    let text = std::fs::read_to_string(path).map_err(InputError::from)?;
    parse_problem(&text, params)
}

/// Parses a problem from its text form. Tokens after the last sensor are ignored.
///
/// # Errors
///
/// Returns an `InputError` describing the first malformed field.
pub fn parse_problem(text: &str, params: &CoverageParams) -> Result<Problem> {
    let mut tokens = text.split_whitespace();

    let side = parse_side(tokens.next())?;
    let count = parse_count(tokens.next())?;

    let mut sensors = Vec::with_capacity(count);
    for index in 0..count {
        let mut coords = [0.0; 4];
        for (found, slot) in coords.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or(InputError::TooFewCoordinates { sensor: index, found })?;
            *slot = parse_coordinate(token)?;
        }
        let [x0, y0, x1, y1] = coords;
        let sensor = Sensor::with_radius(
            Point2::new(x0, y0),
            Point2::new(x1, y1),
            params.view_distance,
        )
        .and_then(|sensor| sensor.with_slack(params.slack))
        .map_err(|source| InputError::InvalidSensor {
            sensor: index,
            source,
        })?;
        sensors.push(sensor);
    }

    debug!(side, sensors = sensors.len(), "parsed problem");
    Ok(Problem {
        region: Region::new(side)?,
        sensors,
    })
}

fn parse_side(token: Option<&str>) -> std::result::Result<u32, InputError> {
    let token = token.ok_or(InputError::MissingField("side"))?;
    let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
        field: "side",
        token: token.to_string(),
    })?;
    if !(1.0..=f64::from(MAX_SIDE)).contains(&value) {
        return Err(InputError::SideOutOfRange(value));
    }
    if value.fract() != 0.0 {
        return Err(InputError::NonIntegerSide(value));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let side = value as u32;
    Ok(side)
}

fn parse_count(token: Option<&str>) -> std::result::Result<usize, InputError> {
    let token = token.ok_or(InputError::MissingField("sensor count"))?;
    let count: i64 = token.parse().map_err(|_| InputError::InvalidNumber {
        field: "sensor count",
        token: token.to_string(),
    })?;
    if !(1..=MAX_SENSORS).contains(&count) {
        return Err(InputError::SensorCountOutOfRange(count));
    }
    usize::try_from(count).map_err(|_| InputError::SensorCountOutOfRange(count))
}

fn parse_coordinate(token: &str) -> std::result::Result<f64, InputError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field: "coordinate",
            token: token.to_string(),
        })
}
