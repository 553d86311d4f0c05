pub mod aabb_2d;
pub mod line_2d;
pub mod rect_2d;

pub use aabb_2d::Aabb2;
pub use line_2d::NormalLine;
pub use rect_2d::Rect;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Perpendicular distance a sensor observes on either side of its line.
pub const VIEW_DISTANCE: f64 = 50.0;

/// Cell size at which subdivision stops and a terminal decision is made.
pub const RESOLUTION: f64 = 0.001;

/// Global slack for floating-point comparisons at the band boundary.
pub const TOLERANCE: f64 = 1e-9;
