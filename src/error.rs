use thiserror::Error;

/// Top-level error type for the sweep coverage checker.
#[derive(Debug, Error)]
pub enum SweepcoverError {
    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building a sensor from its endpoints.
#[derive(Debug, Error, PartialEq)]
pub enum SensorError {
    #[error("degenerate sensor: endpoints ({x0}, {y0}) and ({x1}, {y1}) coincide")]
    Degenerate { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("invalid observation radius {0}")]
    InvalidRadius(f64),

    #[error("invalid boundary slack {0}")]
    InvalidSlack(f64),
}

/// Errors related to the square region under test.
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("region side must be positive, got {0}")]
    NonPositiveSide(u32),
}

/// Errors related to coverage operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Errors produced while reading a problem instance.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid number for {field}: {token:?}")]
    InvalidNumber { field: &'static str, token: String },

    #[error("region side {0} is not an integer")]
    NonIntegerSide(f64),

    #[error("region side {0} is out of range [1, 1000]")]
    SideOutOfRange(f64),

    #[error("sensor count {0} is out of range [1, 100]")]
    SensorCountOutOfRange(i64),

    #[error("sensor {sensor} has only {found} of 4 coordinates")]
    TooFewCoordinates { sensor: usize, found: usize },

    #[error("sensor {sensor}: {source}")]
    InvalidSensor {
        sensor: usize,
        #[source]
        source: SensorError,
    },
}

/// Convenience type alias for results using [`SweepcoverError`].
pub type Result<T> = std::result::Result<T, SweepcoverError>;
