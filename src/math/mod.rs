pub mod distance_2d;
pub mod intersect_2d;
pub mod sample_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default tolerance for segment-membership tests.
///
/// This one is world-space dependent: it bounds how far an intersection
/// candidate may fall outside the segment's extent and still be accepted.
/// Every operation that uses it takes it as an explicit parameter.
pub const DEFAULT_EPSILON: f64 = 1e-4;
