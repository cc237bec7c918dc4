use super::distance_2d::is_point_on_segment_2d;
use super::TOLERANCE;

/// Intersection of a line segment with a full circle in 2D.
///
/// The segment goes from `(ax0, ay0)` to `(ax1, ay1)`; the circle has center
/// `(cx, cy)` and `radius`. `epsilon` bounds the segment-membership test for
/// the candidate points (see
/// [`is_point_on_segment_2d`](super::distance_2d::is_point_on_segment_2d)).
///
/// Returns 0, 1, or 2 `(x, y)` points. Every returned point lies on the
/// infinite line through the segment endpoints and within the segment's
/// extent (within `epsilon`). For the non-vertical case the line is expressed
/// as `y = m*x + b` and substituted into the circle equation, giving the
/// quadratic `A*x² + B*x + C = 0` with `A = 1 + m²`,
/// `B = 2*(m*b - m*cy - cx)`, `C = cx² + (b - cy)² - r²`. The root using
/// `+sqrt(disc)` is tested and emitted first.
///
/// Degenerate inputs (near-zero radius, zero-length segment) return an empty
/// result. A vertical segment is solved directly against `x = ax0` instead of
/// dividing by zero. A tangent contact (discriminant at zero within
/// tolerance) is collapsed to a single point rather than reported twice.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn line_circle_intersect_2d(
    ax0: f64,
    ay0: f64,
    ax1: f64,
    ay1: f64,
    cx: f64,
    cy: f64,
    radius: f64,
    epsilon: f64,
) -> Vec<(f64, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE {
        return results;
    }

    let dx = ax1 - ax0;
    let dy = ay1 - ay0;
    if dx * dx + dy * dy < TOLERANCE * TOLERANCE {
        return results;
    }

    let candidates = if dx.abs() < TOLERANCE {
        vertical_candidates(ax0, cx, cy, radius)
    } else {
        slope_intercept_candidates(ax0, ay0, ax1, ay1, cx, cy, radius)
    };

    for (px, py) in candidates {
        if is_point_on_segment_2d(ax0, ay0, ax1, ay1, px, py, epsilon) {
            results.push((px, py));
        }
    }

    results
}

/// Candidate points for a vertical line `x = x0` against the circle.
///
/// `(x0 - cx)² + (y - cy)² = r²` solved for `y` directly.
fn vertical_candidates(x0: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let offset = x0 - cx;
    let h_sq = radius * radius - offset * offset;
    if h_sq < -TOLERANCE {
        return Vec::new();
    }
    let h = h_sq.max(0.0).sqrt();

    if h < TOLERANCE * 100.0 {
        // Tangent case: single contact point.
        vec![(x0, cy)]
    } else {
        vec![(x0, cy + h), (x0, cy - h)]
    }
}

/// Candidate points via the slope/intercept quadratic.
///
/// Precondition: the segment is not vertical.
fn slope_intercept_candidates(
    ax0: f64,
    ay0: f64,
    ax1: f64,
    ay1: f64,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Vec<(f64, f64)> {
    let m = (ay1 - ay0) / (ax1 - ax0);
    let b = ay0 - m * ax0;

    let qa = 1.0 + m * m;
    let qb = 2.0 * (m * b - m * cy - cx);
    let qc = cx * cx + (b - cy) * (b - cy) - radius * radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < -TOLERANCE {
        return Vec::new();
    }
    let disc_sqrt = disc.max(0.0).sqrt();

    let x_roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: the two roots coincide; report the contact once.
        vec![-qb / (2.0 * qa)]
    } else {
        vec![
            (-qb + disc_sqrt) / (2.0 * qa),
            (-qb - disc_sqrt) / (2.0 * qa),
        ]
    };

    x_roots.into_iter().map(|x| (x, m * x + b)).collect()
}
