mod engine;
mod state;

pub use engine::GeometryEngine;
pub use state::ConstructionState;

use crate::math::Point2;

/// Formats an intersection result as an overlay line.
///
/// Mirrors the status text hosts display next to the sketch: the point
/// count followed by each point to two decimals, or "No intersection".
#[must_use]
pub fn intersection_summary(points: &[Point2]) -> String {
    if points.is_empty() {
        return "No intersection".to_string();
    }
    use std::fmt::Write as _;
    let mut text = format!("Intersection Points: {}", points.len());
    for (i, p) in points.iter().enumerate() {
        let _ = write!(text, " Point {}: ({:.2}, {:.2})", i + 1, p.x, p.y);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_empty() {
        assert_eq!(intersection_summary(&[]), "No intersection");
    }

    #[test]
    fn summary_two_points() {
        let pts = [Point2::new(2.0, 0.0), Point2::new(-2.0, 0.0)];
        assert_eq!(
            intersection_summary(&pts),
            "Intersection Points: 2 Point 1: (2.00, 0.00) Point 2: (-2.00, 0.00)"
        );
    }

    #[test]
    fn summary_single_point() {
        let pts = [Point2::new(0.0, 1.0)];
        assert_eq!(
            intersection_summary(&pts),
            "Intersection Points: 1 Point 1: (0.00, 1.00)"
        );
    }
}
