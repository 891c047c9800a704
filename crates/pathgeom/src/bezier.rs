//! Cubic Bézier primitive: evaluation, derivative, De Casteljau split, arc length.
//!
//! The curve is stored by its four control points. All routines are pure and
//! allocation-free; splitting returns a new `CubicBez`.

use nalgebra::Vector2;

use crate::error::PathError;

// 8-point Gauss-Legendre nodes/weights on [-1, 1], symmetric pairs.
const GL_NODES: [f64; 4] = [
    0.183_434_642_495_649_8,
    0.525_532_409_916_329_0,
    0.796_666_477_413_626_7,
    0.960_289_856_497_536_3,
];
const GL_WEIGHTS: [f64; 4] = [
    0.362_683_783_378_362_0,
    0.313_706_645_877_887_3,
    0.222_381_034_453_374_5,
    0.101_228_536_290_376_3,
];

/// Cubic Bézier segment `p0 → p3` with control points `p1`, `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBez {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub p3: Vector2<f64>,
}

impl CubicBez {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Build from a flat coordinate list `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    pub fn from_coords(coords: &[f64]) -> Result<Self, PathError> {
        if coords.len() != 8 {
            return Err(PathError::InvalidPointCount {
                count: coords.len().div_ceil(2),
            });
        }
        let p = |i: usize| Vector2::new(coords[2 * i], coords[2 * i + 1]);
        Ok(Self::new(p(0), p(1), p(2), p(3)))
    }

    /// Flat coordinate list, inverse of `from_coords`.
    pub fn to_coords(&self) -> [f64; 8] {
        [
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x,
            self.p3.y,
        ]
    }

    #[inline]
    pub fn points(&self) -> [Vector2<f64>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Vector2<f64> {
        let mt = 1.0 - t;
        self.p0 * (mt * mt * mt)
            + self.p1 * (3.0 * mt * mt * t)
            + self.p2 * (3.0 * mt * t * t)
            + self.p3 * (t * t * t)
    }

    /// First derivative at parameter `t`.
    #[inline]
    pub fn deriv(&self, t: f64) -> Vector2<f64> {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * mt * mt)
            + (self.p2 - self.p1) * (6.0 * mt * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Second derivative at parameter `t`.
    #[inline]
    pub fn deriv2(&self, t: f64) -> Vector2<f64> {
        let a = self.p2 - self.p1 * 2.0 + self.p0;
        let b = self.p3 - self.p2 * 2.0 + self.p1;
        (a * (1.0 - t) + b * t) * 6.0
    }

    /// Signed curvature `(c' × c'') / |c'|³`; positive when the curve turns
    /// towards its `normal`. Zero where the derivative vanishes.
    pub fn curvature(&self, t: f64) -> f64 {
        let d1 = self.deriv(t);
        let speed = d1.norm();
        if speed <= 1e-12 * self.hull_extent().max(1.0) {
            return 0.0;
        }
        let d2 = self.deriv2(t);
        (d1.x * d2.y - d1.y * d2.x) / (speed * speed * speed)
    }

    /// Unit forward tangent at `t`.
    ///
    /// Where the derivative vanishes (a control point sits on its endpoint),
    /// the chord towards the next distinct control point is used instead.
    /// Returns the zero vector only for a curve collapsed to a point.
    pub fn tangent(&self, t: f64) -> Vector2<f64> {
        let d = self.deriv(t);
        let scale = self.hull_extent().max(1.0);
        if d.norm() > 1e-12 * scale {
            return d.normalize();
        }
        let fallbacks = if t < 0.5 {
            [self.p2 - self.p0, self.p3 - self.p0]
        } else {
            [self.p3 - self.p1, self.p3 - self.p0]
        };
        fallbacks
            .into_iter()
            .find(|v| v.norm() > 1e-12 * scale)
            .map(|v| v.normalize())
            .unwrap_or_else(Vector2::zeros)
    }

    /// Unit tangent rotated +90° (`(x, y) ↦ (-y, x)`).
    #[inline]
    pub fn normal(&self, t: f64) -> Vector2<f64> {
        let d = self.tangent(t);
        Vector2::new(-d.y, d.x)
    }

    /// De Casteljau subdivision at `t`.
    pub fn subdivide(&self, t: f64) -> (CubicBez, CubicBez) {
        let p01 = self.p0.lerp(&self.p1, t);
        let p12 = self.p1.lerp(&self.p2, t);
        let p23 = self.p2.lerp(&self.p3, t);
        let p012 = p01.lerp(&p12, t);
        let p123 = p12.lerp(&p23, t);
        let mid = p012.lerp(&p123, t);
        (
            CubicBez::new(self.p0, p01, p012, mid),
            CubicBez::new(mid, p123, p23, self.p3),
        )
    }

    /// Sub-curve over `[t0, t1]` (re-parameterized to `[0, 1]`).
    pub fn split(&self, t0: f64, t1: f64) -> CubicBez {
        if t0 <= 0.0 && t1 >= 1.0 {
            return *self;
        }
        let head = if t1 >= 1.0 { *self } else { self.subdivide(t1).0 };
        if t0 <= 0.0 {
            return head;
        }
        if t1 <= 0.0 {
            let p = self.p0;
            return CubicBez::new(p, p, p, p);
        }
        head.subdivide(t0 / t1).1
    }

    /// Arc length, adaptively refined until successive estimates agree within `accuracy`.
    pub fn arclen(&self, accuracy: f64, max_depth: u32) -> f64 {
        let whole = self.gauss_legendre(0.0, 1.0);
        self.arclen_rec(0.0, 1.0, whole, accuracy, max_depth)
    }

    fn arclen_rec(&self, a: f64, b: f64, whole: f64, accuracy: f64, depth: u32) -> f64 {
        let m = 0.5 * (a + b);
        let left = self.gauss_legendre(a, m);
        let right = self.gauss_legendre(m, b);
        if depth == 0 || (left + right - whole).abs() <= accuracy {
            return left + right;
        }
        self.arclen_rec(a, m, left, 0.5 * accuracy, depth - 1)
            + self.arclen_rec(m, b, right, 0.5 * accuracy, depth - 1)
    }

    fn gauss_legendre(&self, a: f64, b: f64) -> f64 {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        let mut sum = 0.0;
        for (x, w) in GL_NODES.iter().zip(GL_WEIGHTS.iter()) {
            sum += w * self.deriv(mid - half * x).norm();
            sum += w * self.deriv(mid + half * x).norm();
        }
        sum * half
    }

    /// Length of the control polygon; an upper bound of the arc length.
    #[inline]
    pub fn hull_length(&self) -> f64 {
        (self.p1 - self.p0).norm() + (self.p2 - self.p1).norm() + (self.p3 - self.p2).norm()
    }

    fn hull_extent(&self) -> f64 {
        self.points()
            .iter()
            .map(|p| (p - self.p0).abs().max())
            .fold(0.0, f64::max)
    }

    /// Map every control point through `f`.
    pub fn map(&self, f: impl Fn(Vector2<f64>) -> Vector2<f64>) -> CubicBez {
        CubicBez::new(f(self.p0), f(self.p1), f(self.p2), f(self.p3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn straight() -> CubicBez {
        CubicBez::new(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 0.0],
        )
    }

    #[test]
    fn straight_cubic_has_chord_length() {
        let c = straight();
        assert!((c.arclen(1e-9, 16) - 3.0).abs() < 1e-9);
        assert!((c.eval(0.5) - vector![1.5, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn quarter_circle_length_close_to_pi_over_two() {
        let k = 4.0 * (2f64.sqrt() - 1.0) / 3.0;
        let c = CubicBez::new(
            vector![1.0, 0.0],
            vector![1.0, k],
            vector![k, 1.0],
            vector![0.0, 1.0],
        );
        let len = c.arclen(1e-9, 16);
        assert!((len - std::f64::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn split_matches_evaluation() {
        let c = CubicBez::new(
            vector![0.0, 0.0],
            vector![1.0, 2.0],
            vector![3.0, -1.0],
            vector![4.0, 1.0],
        );
        let s = c.split(0.25, 0.75);
        assert!((s.p0 - c.eval(0.25)).norm() < 1e-12);
        assert!((s.p3 - c.eval(0.75)).norm() < 1e-12);
        assert!((s.eval(0.5) - c.eval(0.5)).norm() < 1e-12);
        // Whole range is the identity.
        assert_eq!(c.split(0.0, 1.0), c);
    }

    #[test]
    fn tangent_falls_back_when_handle_is_collapsed() {
        let c = CubicBez::new(
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![0.0, 5.0],
            vector![5.0, 5.0],
        );
        let t = c.tangent(0.0);
        assert!((t - vector![0.0, 1.0]).norm() < 1e-12);
        let n = c.normal(0.0);
        assert!((n - vector![-1.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn curvature_of_quarter_circle_is_near_one() {
        let k = 4.0 * (2f64.sqrt() - 1.0) / 3.0;
        let c = CubicBez::new(
            vector![1.0, 0.0],
            vector![1.0, k],
            vector![k, 1.0],
            vector![0.0, 1.0],
        );
        for t in [0.0, 0.5, 1.0] {
            assert!((c.curvature(t) - 1.0).abs() < 0.1);
        }
        assert_eq!(straight().curvature(0.3), 0.0);
    }

    #[test]
    fn from_coords_rejects_wrong_count() {
        let err = CubicBez::from_coords(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]).unwrap_err();
        assert_eq!(err, PathError::InvalidPointCount { count: 3 });
        let ok = CubicBez::from_coords(&straight().to_coords()).unwrap();
        assert_eq!(ok, straight());
    }
}
