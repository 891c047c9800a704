//! Parallel offset of a path by a signed distance.
//!
//! Purpose
//! - Produce the outline of a path shifted sideways by `d`: positive `d` moves
//!   a closed path outwards regardless of its winding (orientation `+1`
//!   negates `d`); open paths shift towards `rot90(direction)`.
//!
//! Construction
//! - Lines translate along their unit normal.
//! - Cubics are subdivided until each piece's control polygon turns by at
//!   most `PathCfg::offset_max_turn`; every piece then moves its endpoints
//!   along the end normals and scales its handles by `1 - d·κ`.
//! - Consecutive offset pieces whose endpoints coincide are spliced; others are
//!   joined by a round corner centered on the original vertex.
//! - A Move starts an independent contour; a Close adds the closing edge, a
//!   corner back to the contour's first offset point, then an explicit Close.
//!
//! Code cross-refs: `arc::arc` (corners), `orient::orientation`, `bezier::CubicBez::curvature`

use nalgebra::Vector2;
use tracing::{debug, trace};

use crate::arc::arc;
use crate::bezier::CubicBez;
use crate::cfg::PathCfg;
use crate::error::PathError;
use crate::orient::orientation;
use crate::path::{Curve, Path, Segment};

/// Depth limit of the cubic subdivision (at most 2^depth pieces per cubic).
const MAX_SPLIT_DEPTH: u32 = 10;

/// Offset `path` by `d` with default tolerances.
pub fn offset(d: f64, path: &Path) -> Result<Path, PathError> {
    offset_with_cfg(d, path, &PathCfg::default())
}

/// Offset `path` by `d`.
///
/// Fails with `InvalidPath` unless the first segment is a Move.
pub fn offset_with_cfg(d: f64, path: &Path, cfg: &PathCfg) -> Result<Path, PathError> {
    if !matches!(path.segs.first(), Some(Segment::Move(_))) {
        return Err(PathError::invalid("offset needs a path that starts with a Move"));
    }
    let d = if orientation(path) == 1 { -d } else { d };

    let mut out = Path::new();
    let mut join = Join::new();
    for curve in path.curves() {
        match curve {
            Curve::Move(_) => join = Join::new(),
            Curve::Line(a, b) => join.push(&mut out, a, offset_line(a, b, d, cfg.eps), d, cfg),
            Curve::Cubic(c) => join.push(&mut out, c.p0, offset_cubic(&c, d, cfg), d, cfg),
            Curve::Close(a, first) => {
                join.push(&mut out, a, offset_line(a, first, d, cfg.eps), d, cfg);
                if join.continued {
                    let first_off = join.first_off;
                    join.corner(&mut out, first, first_off, d, cfg);
                    out.close();
                }
                join.continued = false;
            }
        }
    }
    Ok(out)
}

/// Running state of one offset contour.
struct Join {
    /// Start of the contour's first offset piece.
    first_off: Vector2<f64>,
    /// End of the most recent offset piece.
    last_off: Vector2<f64>,
    continued: bool,
}

impl Join {
    fn new() -> Self {
        Self {
            first_off: Vector2::zeros(),
            last_off: Vector2::zeros(),
            continued: false,
        }
    }

    /// Append an offset piece (a `M ...` path) whose original starts at `origin`.
    fn push(
        &mut self,
        out: &mut Path,
        origin: Vector2<f64>,
        piece: Option<Path>,
        d: f64,
        cfg: &PathCfg,
    ) {
        let Some(piece) = piece else {
            return;
        };
        let (Some(start), Some(end)) = (piece.first_point(), piece.end_point()) else {
            return;
        };
        if self.continued {
            self.corner(out, origin, start, d, cfg);
            out.segs.extend_from_slice(&piece.segs[1..]);
        } else {
            self.first_off = start;
            self.continued = true;
            out.segs.extend(piece.segs);
        }
        self.last_off = end;
    }

    /// Round corner around `origin` from the last offset end to `next`.
    fn corner(
        &mut self,
        out: &mut Path,
        origin: Vector2<f64>,
        next: Vector2<f64>,
        d: f64,
        cfg: &PathCfg,
    ) {
        if (next - self.last_off).norm() < cfg.eps {
            return;
        }
        let corner = round_corner(origin, self.last_off, next, d);
        out.segs.extend_from_slice(&corner.segs[1..]);
        self.last_off = next;
    }
}

/// Arc of radius `d` around `origin` from `last` to `next`.
///
/// Both points sit `|d|` away from `origin`; the sweep is the smaller angle
/// between them, turning the way `rot90(last - origin)` points.
fn round_corner(origin: Vector2<f64>, last: Vector2<f64>, next: Vector2<f64>, d: f64) -> Path {
    let (mut dir_last, mut dir_next) = (last - origin, next - origin);
    if d < 0.0 {
        dir_last = -dir_last;
        dir_next = -dir_next;
    }
    let angle = angle_between(dir_last, dir_next);
    let start = dir_last.y.atan2(dir_last.x);
    let turn = if rot90(dir_last).dot(&dir_next) < 0.0 { -1.0 } else { 1.0 };
    arc(origin, d, start, start + angle * turn)
}

fn offset_line(a: Vector2<f64>, b: Vector2<f64>, d: f64, eps: f64) -> Option<Path> {
    let dir = b - a;
    let len = dir.norm();
    if len < eps {
        trace!(len, "offset: dropping degenerate line");
        return None;
    }
    let shift = rot90(dir) * (d / len);
    let mut piece = Path::new();
    piece.move_to(a + shift);
    piece.line_to(b + shift);
    Some(piece)
}

fn offset_cubic(c: &CubicBez, d: f64, cfg: &PathCfg) -> Option<Path> {
    let len = c.arclen(cfg.arclen_eps, cfg.max_arclen_depth);
    if len < cfg.eps {
        trace!(len, "offset: dropping degenerate cubic");
        return None;
    }
    let mut pieces = Vec::new();
    split_by_turn(*c, cfg.offset_max_turn, MAX_SPLIT_DEPTH, &mut pieces);

    let mut piece = Path::new();
    for (i, b) in pieces.iter().map(|b| offset_piece(b, d)).enumerate() {
        if i == 0 {
            piece.move_to(b.p0);
        }
        piece.cubic_to(b.p1, b.p2, b.p3);
    }
    Some(piece)
}

fn split_by_turn(c: CubicBez, max_turn: f64, depth: u32, out: &mut Vec<CubicBez>) {
    if polygon_turn(&c) <= max_turn {
        out.push(c);
        return;
    }
    if depth == 0 {
        debug!(turn = polygon_turn(&c), "offset: subdivision depth exhausted");
        out.push(c);
        return;
    }
    let (left, right) = c.subdivide(0.5);
    split_by_turn(left, max_turn, depth - 1, out);
    split_by_turn(right, max_turn, depth - 1, out);
}

/// Total turning of the control polygon; bounds the tangent turn of the curve.
fn polygon_turn(c: &CubicBez) -> f64 {
    let (t0, t1) = (c.tangent(0.0), c.tangent(1.0));
    let mid = c.p2 - c.p1;
    if mid.norm() <= f64::EPSILON * c.hull_length().max(1.0) {
        return angle_between(t0, t1);
    }
    angle_between(t0, mid) + angle_between(mid, t1)
}

fn offset_piece(c: &CubicBez, d: f64) -> CubicBez {
    let q0 = c.p0 + c.normal(0.0) * d;
    let q3 = c.p3 + c.normal(1.0) * d;
    // Offset speed is |c'|·(1 - dκ); clamp where the offset passes a center of curvature.
    let s0 = (1.0 - d * c.curvature(0.0)).max(0.0);
    let s3 = (1.0 - d * c.curvature(1.0)).max(0.0);
    CubicBez::new(q0, q0 + (c.p1 - c.p0) * s0, q3 + (c.p2 - c.p3) * s3, q3)
}

#[inline]
fn rot90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Unsigned angle between two vectors (0 if either is zero).
fn angle_between(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let n = u.norm() * v.norm();
    if n == 0.0 {
        return 0.0;
    }
    (u.dot(&v) / n).clamp(-1.0, 1.0).acos()
}
