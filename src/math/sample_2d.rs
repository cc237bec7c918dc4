use std::f64::consts::TAU;

/// Samples a circle into a closed polyline.
///
/// Produces `segments + 1` points: for `i` in `0..=segments`, the angle is
/// `TAU * i / segments` and the point is
/// `(cx + radius*cos(angle), cy + radius*sin(angle))`. The final point reuses
/// the first so the polyline closes exactly; `cos`/`sin` at `TAU` do not
/// round-trip to their values at `0` in f64.
///
/// Pure function of its inputs; `segments = 0` yields a single point.
#[must_use]
pub fn sample_circle_2d(cx: f64, cy: f64, radius: f64, segments: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(segments + 1);
    if segments == 0 {
        points.push((cx + radius, cy));
        return points;
    }

    for i in 0..segments {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / segments as f64;
        let angle = TAU * t;
        points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    points.push(points[0]);

    points
}
