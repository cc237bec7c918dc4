use crate::geometry::{Circle, Segment};
use crate::math::Point2;

/// The interactive construction state.
///
/// One full session runs `Idle → DrawingCircle → CircleReady →
/// DrawingSegment → Complete`; only [`GeometryEngine`](super::GeometryEngine)
/// mutates it, and only through pointer events and `reset`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionState {
    /// Nothing drawn yet.
    Idle,
    /// Dragging out the circle; `radius` is the live preview value and
    /// tracks the last pointer position.
    DrawingCircle { center: Point2, radius: f64 },
    /// Circle committed, waiting for the segment drag to start.
    CircleReady { circle: Circle },
    /// Dragging out the segment; `end` is the live preview endpoint, absent
    /// until the first move.
    DrawingSegment {
        circle: Circle,
        start: Point2,
        end: Option<Point2>,
    },
    /// Both shapes committed; `intersections` holds 0, 1, or 2 points.
    Complete {
        circle: Circle,
        segment: Segment,
        intersections: Vec<Point2>,
    },
}

impl ConstructionState {
    /// Returns the committed or in-progress circle, if any.
    #[must_use]
    pub fn circle(&self) -> Option<&Circle> {
        match self {
            Self::Idle | Self::DrawingCircle { .. } => None,
            Self::CircleReady { circle }
            | Self::DrawingSegment { circle, .. }
            | Self::Complete { circle, .. } => Some(circle),
        }
    }

    /// Returns the committed segment, if any.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Self::Complete { segment, .. } => Some(segment),
            _ => None,
        }
    }

    /// Returns the intersection points once the construction is complete.
    #[must_use]
    pub fn intersections(&self) -> Option<&[Point2]> {
        match self {
            Self::Complete { intersections, .. } => Some(intersections),
            _ => None,
        }
    }
}
