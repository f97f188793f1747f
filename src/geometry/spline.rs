//! Spline sampling through helix strand points.
//!
//! Pure Vec3 → Vec3 transforms; tube meshing is left to the renderer.

use glam::Vec3;

/// Catmull-Rom spline interpolation (passes through all control points).
///
/// Sequences shorter than two points are returned unchanged, so callers can
/// feed a degenerate strand without special-casing it.
pub fn catmull_rom(points: &[Vec3], segments_per_span: usize) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 || segments_per_span == 0 {
        return points.to_vec();
    }
    if n < 3 {
        return linear_interpolate(points, segments_per_span);
    }

    let mut result = Vec::with_capacity((n - 1) * segments_per_span + 1);

    for i in 0..n - 1 {
        let p0 = if i == 0 {
            points[0] * 2.0 - points[1]
        } else {
            points[i - 1]
        };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 >= n {
            points[n - 1] * 2.0 - points[n - 2]
        } else {
            points[i + 2]
        };

        for j in 0..segments_per_span {
            let t = j as f32 / segments_per_span as f32;
            let t2 = t * t;
            let t3 = t2 * t;

            let pos = 0.5
                * ((2.0 * p1)
                    + (-p0 + p2) * t
                    + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                    + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3);
            result.push(pos);
        }
    }

    result.push(points[n - 1]);
    result
}

/// Linear interpolation fallback for two-point sequences.
fn linear_interpolate(points: &[Vec3], segments_per_span: usize) -> Vec<Vec3> {
    let mut result = Vec::new();
    for pair in points.windows(2) {
        for j in 0..segments_per_span {
            let t = j as f32 / segments_per_span as f32;
            result.push(pair[0].lerp(pair[1], t));
        }
    }
    if let Some(&last) = points.last() {
        result.push(last);
    }
    result
}
