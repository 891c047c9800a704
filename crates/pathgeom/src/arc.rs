//! Circular arcs as cubic Bézier paths.
//!
//! One canonical quarter circle (unit radius, 0 → π/2) is rotated into each
//! crossed quadrant with the fixed quadrant sine/cosine tables; partial
//! quadrants at either end are De Casteljau splits of that same curve.
//!
//! Quadrant numbering (y-down host frame):
//! ```text
//!  2 | 3
//! ---+---
//!  1 | 0
//! ```

use std::f64::consts::{FRAC_PI_2, SQRT_2, TAU};

use nalgebra::Vector2;

use crate::bezier::CubicBez;
use crate::cfg::EPSILON;
use crate::path::Path;

/// Handle length of the cubic quarter circle (unit radius).
pub const KAPPA: f64 = 4.0 * (SQRT_2 - 1.0) / 3.0;

const SIN_Q: [f64; 4] = [0.0, 1.0, 0.0, -1.0];
const COS_Q: [f64; 4] = [1.0, 0.0, -1.0, 0.0];

/// Canonical quarter circle `(1, 0) → (0, 1)`.
pub fn unit_quad_bezier() -> CubicBez {
    CubicBez::new(
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, KAPPA),
        Vector2::new(KAPPA, 1.0),
        Vector2::new(0.0, 1.0),
    )
}

#[inline]
fn unsigned_mod(x: f64, y: f64) -> f64 {
    x.rem_euclid(y)
}

/// Parameter of the canonical quarter circle sitting at `frac` of its 90° sweep.
///
/// The cubic is not angle-linear, so the angle is inverted by bisection
/// (the polar angle of the curve is monotone in `t`).
fn quad_param(quad: &CubicBez, frac: f64) -> f64 {
    if frac <= 0.0 {
        return 0.0;
    }
    if frac >= 1.0 {
        return 1.0;
    }
    let target = frac * FRAC_PI_2;
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..52 {
        let mid = 0.5 * (lo + hi);
        let p = quad.eval(mid);
        if p.y.atan2(p.x) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Arc of radius `r` around `center` from angle `start` to `end` (radians).
///
/// The result is `M p_start C ... C ...`; it always begins at the `start`
/// endpoint, so `end < start` yields the arc traversed backwards. A zero sweep
/// yields the lone Move. Both endpoints lie exactly on the circle; interior
/// points carry the quarter-circle approximation error (≈2.7e-4·r).
pub fn arc(center: Vector2<f64>, r: f64, start: f64, end: f64) -> Path {
    let min = start.min(end);
    let max = start.max(end);

    let on_circle = |a: f64| center + Vector2::new(a.cos(), a.sin()) * r;
    if max - min < EPSILON {
        let mut path = Path::new();
        path.move_to(on_circle(start));
        return path;
    }
    let mut points = vec![on_circle(min)];

    let min_seg = (min / FRAC_PI_2 - EPSILON).ceil() as i64;
    let max_seg = (max / FRAC_PI_2 + EPSILON).floor() as i64;

    let quad = unit_quad_bezier();
    // Curve parameters of the fractional positions inside the end quadrants.
    let t1 = quad_param(&quad, unsigned_mod(min / FRAC_PI_2, 1.0));
    let t2 = quad_param(&quad, unsigned_mod(max / FRAC_PI_2, 1.0));

    let mut push_rotated = |bez: &CubicBez, quadrant: i64| {
        let q = quadrant.rem_euclid(4) as usize;
        let (sin, cos) = (SIN_Q[q], COS_Q[q]);
        points.extend([bez.p1, bez.p2, bez.p3].into_iter().map(|p| {
            center + Vector2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) * r
        }));
    };

    if min_seg > max_seg {
        // No quadrant boundary inside the sweep.
        let q = (min / FRAC_PI_2).floor() as i64;
        push_rotated(&quad.split(t1, t2), q);
    } else {
        if (min_seg as f64 * FRAC_PI_2 - min).abs() > EPSILON {
            push_rotated(&quad.split(t1, 1.0), min_seg - 1);
        }
        for seg in min_seg..max_seg {
            push_rotated(&quad, seg);
        }
        if (max_seg as f64 * FRAC_PI_2 - max).abs() > EPSILON {
            push_rotated(&quad.split(0.0, t2), max_seg);
        }
    }

    if points.len() > 1 {
        // Snap the trailing split end onto the circle (full quadrants end there already).
        if let Some(last) = points.last_mut() {
            *last = on_circle(max);
        }
    }

    if end < start {
        points.reverse();
    }

    let mut path = Path::new();
    path.move_to(points[0]);
    for c in points[1..].chunks_exact(3) {
        path.cubic_to(c[0], c[1], c[2]);
    }
    path
}

/// Closed full circle starting at angle 0.
pub fn circle(center: Vector2<f64>, r: f64) -> Path {
    let mut path = arc(center, r, 0.0, TAU);
    path.close();
    path
}
