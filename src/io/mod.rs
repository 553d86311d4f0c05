//! Reading problem instances and writing verdicts.
//!
//! The text format is whitespace-separated: the region side `L`, the sensor
//! count `N`, then `N` groups of `x0 y0 x1 y1`. Every failure collapses to a
//! single marker on output.

pub mod input;
pub mod output;

pub use input::{parse_problem, read_problem, Problem, MAX_SENSORS, MAX_SIDE};
pub use output::{format_outcome, format_verdict, write_outcome, FAILURE_MARKER, SUCCESS_MARKER};
