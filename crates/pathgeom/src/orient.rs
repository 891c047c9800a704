//! Winding classification of closed paths.
//!
//! Sign convention: `+1` when the signed turns sum to `+2π`, i.e. every turn
//! rotates the incoming edge towards `(x, y) ↦ (-y, x)`. In the host's y-down
//! screen frame that reads as clockwise, hence the name. The convention is
//! fixed by the square fixture in the tests, not re-derived.

use nalgebra::Vector2;

use crate::cfg::EPSILON;
use crate::path::{is_closed, Path, Segment};

/// Signed turn at `through` for the polyline `from → through → to`.
///
/// Magnitude is the unsigned angle between the two edges; the sign is that of
/// `rot90(AB) · BC`. A zero-length edge contributes no turn.
pub fn turn_angle(from: Vector2<f64>, through: Vector2<f64>, to: Vector2<f64>) -> f64 {
    let ab = through - from;
    let bc = to - through;
    let (na, nb) = (ab.norm(), bc.norm());
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    let angle = (ab.dot(&bc) / (na * nb)).clamp(-1.0, 1.0).acos();
    let rot = Vector2::new(-ab.y, ab.x);
    angle * sign(rot.dot(&bc))
}

/// `+1` (clockwise), `-1` (counter-clockwise) or `0` (indeterminate).
///
/// Indeterminate covers open paths and closed paths with fewer than three
/// distinct vertices. Vertices are the terminal points of every segment but
/// the trailing Close (control points are ignored).
pub fn orientation(path: &Path) -> i32 {
    if !is_closed(path) {
        return 0;
    }
    let body = &path.segs[..path.segs.len() - 1];
    let mut points: Vec<Vector2<f64>> = body.iter().filter_map(Segment::end_point).collect();
    points.dedup_by(|a, b| (*a - *b).norm() < EPSILON);
    while points.len() > 1 && (points[0] - points[points.len() - 1]).norm() < EPSILON {
        points.pop();
    }
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let rot: f64 = (0..n)
        .map(|i| turn_angle(points[(i + n - 1) % n], points[i], points[(i + 1) % n]))
        .sum();
    sign(rot.round()) as i32
}

#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
