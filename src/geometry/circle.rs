use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::line_circle_intersect_2d;
use crate::math::sample_2d::sample_circle_2d;
use crate::math::{Point2, TOLERANCE};

use super::Segment;

/// A full circle in the 2D sketch plane.
///
/// Defined by a center and a non-negative radius. A degenerate circle
/// (radius = 0) is permitted — it arises from a click without a drag — but
/// produces no intersections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or any input is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        for coord in [center.x, center.y, radius] {
            if !coord.is_finite() {
                return Err(GeometryError::NonFinite(coord).into());
            }
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle from a drag gesture: the drag start is the center and
    /// the radius is the distance to the drag end.
    #[must_use]
    pub fn from_drag(center: Point2, rim: Point2) -> Self {
        Self {
            center,
            radius: (rim - center).norm(),
        }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns whether the circle is too small to intersect anything.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius < TOLERANCE
    }

    /// Samples the circle into a closed polyline of `segments + 1` points.
    ///
    /// The first and last points are identical. See
    /// [`sample_circle_2d`](crate::math::sample_2d::sample_circle_2d).
    #[must_use]
    pub fn sample(&self, segments: usize) -> Vec<Point2> {
        sample_circle_2d(self.center.x, self.center.y, self.radius, segments)
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .collect()
    }

    /// Intersects the circle with a finite segment.
    ///
    /// Returns 0, 1, or 2 points, each on the infinite line through the
    /// segment endpoints and within the segment's extent (within `epsilon`).
    /// Degenerate circles and segments yield an empty result.
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment, epsilon: f64) -> Vec<Point2> {
        line_circle_intersect_2d(
            segment.start().x,
            segment.start().y,
            segment.end().x,
            segment.end().y,
            self.center.x,
            self.center.y,
            self.radius,
            epsilon,
        )
        .into_iter()
        .map(|(x, y)| Point2::new(x, y))
        .collect()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle: center ({:.2}, {:.2}) radius = {:.2}",
            self.center.x, self.center.y, self.radius
        )
    }
}
