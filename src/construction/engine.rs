use crate::geometry::{Circle, Segment};
use crate::math::{Point2, DEFAULT_EPSILON};

use super::ConstructionState;

/// Interactive circle/segment construction engine.
///
/// The host feeds pointer events (already converted into the engine's 2D
/// coordinate space) and reads the state back to render. Events that do not
/// match the current state are silently ignored, so a stray `pointer_down`
/// mid-drag cannot corrupt the construction. The engine never resets on its
/// own; call [`reset`](Self::reset) to start over.
///
/// Single-threaded by design: the host is responsible for serializing
/// events in `down → move* → up` order per gesture.
#[derive(Debug, Clone)]
pub struct GeometryEngine {
    state: ConstructionState,
    epsilon: f64,
}

impl GeometryEngine {
    /// Creates an engine with the default segment-membership epsilon (1e-4).
    #[must_use]
    pub fn new() -> Self {
        Self::with_epsilon(DEFAULT_EPSILON)
    }

    /// Creates an engine with a custom segment-membership epsilon.
    ///
    /// The right value depends on the world-space scale of the host's
    /// coordinates; 1e-4 suits unit-scale (NDC-like) spaces.
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            state: ConstructionState::Idle,
            epsilon,
        }
    }

    /// Starts a drag: the circle's center when idle, the segment's start
    /// point once the circle is committed. Ignored in any other state.
    pub fn on_pointer_down(&mut self, p: Point2) {
        match &self.state {
            ConstructionState::Idle => {
                self.state = ConstructionState::DrawingCircle {
                    center: p,
                    radius: 0.0,
                };
            }
            ConstructionState::CircleReady { circle } => {
                self.state = ConstructionState::DrawingSegment {
                    circle: *circle,
                    start: p,
                    end: None,
                };
            }
            _ => {}
        }
    }

    /// Updates the live preview: the circle radius or the segment endpoint.
    /// Ignored outside of a drag.
    pub fn on_pointer_move(&mut self, p: Point2) {
        match &mut self.state {
            ConstructionState::DrawingCircle { center, radius } => {
                *radius = (p - *center).norm();
            }
            ConstructionState::DrawingSegment { end, .. } => {
                *end = Some(p);
            }
            _ => {}
        }
    }

    /// Ends a drag, committing the circle or the segment. Committing the
    /// segment also computes the intersection points. Ignored outside of a
    /// drag.
    pub fn on_pointer_up(&mut self, p: Point2) {
        match &self.state {
            ConstructionState::DrawingCircle { center, .. } => {
                self.state = ConstructionState::CircleReady {
                    circle: Circle::from_drag(*center, p),
                };
            }
            ConstructionState::DrawingSegment { circle, start, .. } => {
                let segment = Segment::new(*start, p);
                let intersections = circle.intersect_segment(&segment, self.epsilon);
                self.state = ConstructionState::Complete {
                    circle: *circle,
                    segment,
                    intersections,
                };
            }
            _ => {}
        }
    }

    /// Returns to `Idle`, clearing the circle, segment, and intersections.
    pub fn reset(&mut self) {
        self.state = ConstructionState::Idle;
    }

    /// Read-only snapshot of the construction state.
    #[must_use]
    pub fn state(&self) -> &ConstructionState {
        &self.state
    }

    /// The committed or in-progress circle, if any.
    #[must_use]
    pub fn circle(&self) -> Option<&Circle> {
        self.state.circle()
    }

    /// The committed segment, if any.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        self.state.segment()
    }

    /// The intersection points once the construction is complete.
    #[must_use]
    pub fn intersections(&self) -> Option<&[Point2]> {
        self.state.intersections()
    }

    /// Returns whether both shapes are committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, ConstructionState::Complete { .. })
    }
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::new()
    }
}
