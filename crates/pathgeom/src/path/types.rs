//! Path value types: boundary tokens, commands, segments, curves.
//!
//! - `Token`: one element of the flat stream exchanged with the host.
//! - `Segment`: a command with its own operands (raw decomposition).
//! - `Curve`: a segment carrying its start point, self-contained for geometry.
//! - `Path`: an ordered list of segments; the engine never mutates a path it was given.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::bezier::CubicBez;
use crate::cfg::PathCfg;

/// Marker tag the host may put in front of a path literal.
pub const PATH_MARKER: &str = "path";

/// Drawing command tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, Display, AsRefStr)]
pub enum Command {
    #[strum(serialize = "M")]
    Move,
    #[strum(serialize = "L")]
    Line,
    #[strum(serialize = "C")]
    CubicBezier,
    #[strum(serialize = "Z")]
    Close,
}

impl Command {
    /// Number of numeric operands following the tag.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            Command::Move | Command::Line => 2,
            Command::CubicBezier => 6,
            Command::Close => 0,
        }
    }
}

/// One element of the flat token stream: a command tag or a number.
///
/// Serializes untagged, so `["M", 0, 0, "L", 10, 0]` is a valid JSON path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Num(f64),
    Tag(String),
}

impl Token {
    #[inline]
    pub fn cmd(c: Command) -> Self {
        Token::Tag(c.as_ref().to_owned())
    }
    #[inline]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Token::Num(v) => Some(*v),
            Token::Tag(_) => None,
        }
    }
    #[inline]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Token::Tag(t) => Some(t.as_str()),
            Token::Num(_) => None,
        }
    }
}

impl From<f64> for Token {
    fn from(v: f64) -> Self {
        Token::Num(v)
    }
}

impl From<Command> for Token {
    fn from(c: Command) -> Self {
        Token::cmd(c)
    }
}

/// A command together with its own operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Move(Vector2<f64>),
    Line(Vector2<f64>),
    Cubic {
        c1: Vector2<f64>,
        c2: Vector2<f64>,
        to: Vector2<f64>,
    },
    Close,
}

impl Segment {
    pub fn command(&self) -> Command {
        match self {
            Segment::Move(_) => Command::Move,
            Segment::Line(_) => Command::Line,
            Segment::Cubic { .. } => Command::CubicBezier,
            Segment::Close => Command::Close,
        }
    }

    /// Terminal point written by this segment (`None` for Close).
    pub fn end_point(&self) -> Option<Vector2<f64>> {
        match *self {
            Segment::Move(p) | Segment::Line(p) => Some(p),
            Segment::Cubic { to, .. } => Some(to),
            Segment::Close => None,
        }
    }

    /// Operands in token order.
    pub fn operands(&self) -> Vec<f64> {
        match *self {
            Segment::Move(p) | Segment::Line(p) => vec![p.x, p.y],
            Segment::Cubic { c1, c2, to } => vec![c1.x, c1.y, c2.x, c2.y, to.x, to.y],
            Segment::Close => Vec::new(),
        }
    }

    /// Append `[tag, ...operands]` to a token stream.
    pub fn write_tokens(&self, out: &mut Vec<Token>) {
        out.push(Token::cmd(self.command()));
        out.extend(self.operands().into_iter().map(Token::Num));
    }

    /// Build from a command and exactly `cmd.arity()` operands.
    pub(crate) fn from_operands(cmd: Command, ops: &[f64]) -> Self {
        let p = |i: usize| Vector2::new(ops[2 * i], ops[2 * i + 1]);
        match cmd {
            Command::Move => Segment::Move(p(0)),
            Command::Line => Segment::Line(p(0)),
            Command::CubicBezier => Segment::Cubic {
                c1: p(0),
                c2: p(1),
                to: p(2),
            },
            Command::Close => Segment::Close,
        }
    }
}

/// A segment enriched with its preceding point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Move(Vector2<f64>),
    Line(Vector2<f64>, Vector2<f64>),
    Cubic(CubicBez),
    /// Implicit closing line `(prev, first)`.
    Close(Vector2<f64>, Vector2<f64>),
}

impl Curve {
    pub fn command(&self) -> Command {
        match self {
            Curve::Move(_) => Command::Move,
            Curve::Line(..) => Command::Line,
            Curve::Cubic(_) => Command::CubicBezier,
            Curve::Close(..) => Command::Close,
        }
    }

    pub fn start(&self) -> Vector2<f64> {
        match *self {
            Curve::Move(p) => p,
            Curve::Line(a, _) | Curve::Close(a, _) => a,
            Curve::Cubic(c) => c.p0,
        }
    }

    pub fn end(&self) -> Vector2<f64> {
        match *self {
            Curve::Move(p) => p,
            Curve::Line(_, b) | Curve::Close(_, b) => b,
            Curve::Cubic(c) => c.p3,
        }
    }

    /// Geometric length (Move has none).
    pub fn length(&self, cfg: &PathCfg) -> f64 {
        match *self {
            Curve::Move(_) => 0.0,
            Curve::Line(a, b) | Curve::Close(a, b) => (b - a).norm(),
            Curve::Cubic(c) => c.arclen(cfg.arclen_eps, cfg.max_arclen_depth),
        }
    }

    /// Whether arc-length search must skip this curve.
    ///
    /// Moves are never traversable; straight curves whose endpoints coincide
    /// within `eps`, and cubics whose control points all do, have no direction
    /// to sample.
    pub fn is_degenerate(&self, eps: f64) -> bool {
        match *self {
            Curve::Move(_) => true,
            Curve::Line(a, b) | Curve::Close(a, b) => (b - a).norm() < eps,
            Curve::Cubic(c) => c.hull_length() < eps,
        }
    }

    /// Point at local parameter `t`.
    pub fn position(&self, t: f64) -> Vector2<f64> {
        match *self {
            Curve::Move(p) => p,
            Curve::Line(a, b) | Curve::Close(a, b) => a.lerp(&b, t),
            Curve::Cubic(c) => c.eval(t),
        }
    }

    /// Unit forward tangent at local parameter `t` (zero for a Move or a point-like curve).
    pub fn tangent(&self, t: f64) -> Vector2<f64> {
        match *self {
            Curve::Move(_) => Vector2::zeros(),
            Curve::Line(a, b) | Curve::Close(a, b) => {
                let d = b - a;
                let n = d.norm();
                if n > 0.0 {
                    d / n
                } else {
                    Vector2::zeros()
                }
            }
            Curve::Cubic(c) => c.tangent(t),
        }
    }

    /// Portion over `[t0, t1]`; keeps the curve kind.
    pub fn split(&self, t0: f64, t1: f64) -> Curve {
        match *self {
            Curve::Move(p) => Curve::Move(p),
            Curve::Line(a, b) => Curve::Line(a.lerp(&b, t0), a.lerp(&b, t1)),
            Curve::Close(a, b) => Curve::Close(a.lerp(&b, t0), a.lerp(&b, t1)),
            Curve::Cubic(c) => Curve::Cubic(c.split(t0, t1)),
        }
    }

    /// Drop the start point again. A Close maps back to `Segment::Close`.
    pub fn to_segment(&self) -> Segment {
        match *self {
            Curve::Move(p) => Segment::Move(p),
            Curve::Line(_, b) => Segment::Line(b),
            Curve::Cubic(c) => Segment::Cubic {
                c1: c.p1,
                c2: c.p2,
                to: c.p3,
            },
            Curve::Close(..) => Segment::Close,
        }
    }
}

/// An ordered sequence of segments forming one or more contours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segs: Vec<Segment>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_segments(segs: Vec<Segment>) -> Self {
        Self { segs }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    pub fn move_to(&mut self, p: Vector2<f64>) {
        self.segs.push(Segment::Move(p));
    }

    pub fn line_to(&mut self, p: Vector2<f64>) {
        self.segs.push(Segment::Line(p));
    }

    pub fn cubic_to(&mut self, c1: Vector2<f64>, c2: Vector2<f64>, to: Vector2<f64>) {
        self.segs.push(Segment::Cubic { c1, c2, to });
    }

    pub fn close(&mut self) {
        self.segs.push(Segment::Close);
    }

    /// Closed polyline through `points` (`M p0 L p1 ... Z`).
    pub fn polygon(points: &[Vector2<f64>]) -> Self {
        let mut path = Path::new();
        let mut it = points.iter();
        if let Some(&first) = it.next() {
            path.move_to(first);
            for &p in it {
                path.line_to(p);
            }
            path.close();
        }
        path
    }

    /// Open polyline through `points` (`M p0 L p1 ...`).
    pub fn polyline(points: &[Vector2<f64>]) -> Self {
        let mut path = Path::new();
        let mut it = points.iter();
        if let Some(&first) = it.next() {
            path.move_to(first);
            for &p in it {
                path.line_to(p);
            }
        }
        path
    }

    /// Opening point of the first contour.
    pub fn first_point(&self) -> Option<Vector2<f64>> {
        match self.segs.first() {
            Some(Segment::Move(p)) => Some(*p),
            _ => None,
        }
    }

    /// Current point after the last segment (Close returns to its contour's start).
    pub fn end_point(&self) -> Option<Vector2<f64>> {
        self.curves().last().map(|c| c.end())
    }
}
