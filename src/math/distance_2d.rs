/// Returns the Euclidean distance between `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn point_to_point_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Perimeter-sum segment membership test.
///
/// For a point `(px, py)` already known to lie on the infinite line through
/// `(ax, ay)` and `(bx, by)`, checks whether it also lies within the finite
/// segment: with `d1 = dist(p, a)`, `d2 = dist(p, b)` and
/// `len = dist(a, b)`, the point is a member iff `|d1 + d2 - len| < epsilon`.
///
/// This does NOT verify colinearity; a point far off the line can pass if
/// `epsilon` is large. For a degenerate segment (`a == b`) the test degrades
/// to `d1 + d2 < epsilon`, i.e. the point must coincide with the collapsed
/// segment.
#[must_use]
pub fn is_point_on_segment_2d(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> bool {
    let d1 = point_to_point_dist(px, py, ax, ay);
    let d2 = point_to_point_dist(px, py, bx, by);
    let len = point_to_point_dist(ax, ay, bx, by);
    (d1 + d2 - len).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_EPSILON;

    const TOL: f64 = 1e-10;

    #[test]
    fn dist_pythagorean() {
        let d = point_to_point_dist(0.0, 0.0, 3.0, 4.0);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn dist_coincident_points() {
        let d = point_to_point_dist(1.5, -2.5, 1.5, -2.5);
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn membership_point_on_segment() {
        assert!(is_point_on_segment_2d(
            0.0, 0.0, 2.0, 0.0, 1.0, 0.0, DEFAULT_EPSILON
        ));
    }

    #[test]
    fn membership_point_at_endpoint() {
        // Exact endpoints are always accepted.
        assert!(is_point_on_segment_2d(
            0.0, 0.0, 2.0, 0.0, 0.0, 0.0, DEFAULT_EPSILON
        ));
        assert!(is_point_on_segment_2d(
            0.0, 0.0, 2.0, 0.0, 2.0, 0.0, DEFAULT_EPSILON
        ));
    }

    #[test]
    fn membership_point_beyond_endpoint() {
        // On the infinite line but outside [a, b] by more than epsilon.
        assert!(!is_point_on_segment_2d(
            0.0, 0.0, 2.0, 0.0, 2.1, 0.0, DEFAULT_EPSILON
        ));
        assert!(!is_point_on_segment_2d(
            0.0, 0.0, 2.0, 0.0, -0.5, 0.0, DEFAULT_EPSILON
        ));
    }

    #[test]
    fn membership_symmetric_under_endpoint_swap() {
        let cases = [(0.7, 0.0), (2.3, 0.0), (-1.0, 0.0), (2.0, 0.0)];
        for (px, py) in cases {
            let forward = is_point_on_segment_2d(0.0, 0.0, 2.0, 0.0, px, py, DEFAULT_EPSILON);
            let reversed = is_point_on_segment_2d(2.0, 0.0, 0.0, 0.0, px, py, DEFAULT_EPSILON);
            assert_eq!(forward, reversed, "asymmetric at ({px}, {py})");
        }
    }

    #[test]
    fn membership_degenerate_segment() {
        // Collapsed segment: only the segment's own point is a member.
        assert!(is_point_on_segment_2d(
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, DEFAULT_EPSILON
        ));
        assert!(!is_point_on_segment_2d(
            1.0, 1.0, 1.0, 1.0, 1.0, 2.0, DEFAULT_EPSILON
        ));
    }

    #[test]
    fn membership_respects_epsilon() {
        // 1e-3 past the endpoint: rejected at the default epsilon,
        // accepted with a looser one.
        assert!(!is_point_on_segment_2d(
            0.0, 0.0, 1.0, 0.0, 1.001, 0.0, DEFAULT_EPSILON
        ));
        assert!(is_point_on_segment_2d(
            0.0, 0.0, 1.0, 0.0, 1.001, 0.0, 1e-2
        ));
    }
}
