use std::fmt;

use crate::math::distance_2d::is_point_on_segment_2d;
use crate::math::{Point2, Vector2, TOLERANCE};

/// A finite line segment in the 2D sketch plane.
///
/// May be degenerate (`start == end`): zero length, no defined direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns whether the segment has (near-)zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Returns the unit direction from start to end, or `None` for a
    /// degenerate segment.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        let d = self.end - self.start;
        let len = d.norm();
        if len < TOLERANCE {
            None
        } else {
            Some(d / len)
        }
    }

    /// Perimeter-sum membership test for a point already on the infinite
    /// line through the endpoints.
    ///
    /// See [`is_point_on_segment_2d`](crate::math::distance_2d::is_point_on_segment_2d).
    #[must_use]
    pub fn contains_point(&self, point: &Point2, epsilon: f64) -> bool {
        is_point_on_segment_2d(
            self.start.x, self.start.y, self.end.x, self.end.y, point.x, point.y, epsilon,
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
