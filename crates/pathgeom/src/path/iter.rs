//! Lazy segment and curve sequences.
//!
//! Both iterators borrow immutable data, so restarting means calling the
//! constructor again.

use std::str::FromStr;

use nalgebra::Vector2;

use super::types::{Command, Curve, Path, Segment, Token, PATH_MARKER};
use crate::bezier::CubicBez;
use crate::error::PathError;

/// Segments decoded from a flat token stream.
///
/// Yields `Err` once at the first malformed run and then stops.
#[derive(Clone, Debug)]
pub struct TokenSegments<'a> {
    tokens: &'a [Token],
    pos: usize,
    failed: bool,
}

impl<'a> TokenSegments<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let pos = match tokens.first() {
            Some(Token::Tag(t)) if t == PATH_MARKER => 1,
            _ => 0,
        };
        Self {
            tokens,
            pos,
            failed: false,
        }
    }

    fn next_segment(&mut self) -> Result<Segment, PathError> {
        let tokens = self.tokens;
        let tag = match &tokens[self.pos] {
            Token::Tag(t) => t,
            Token::Num(v) => {
                return Err(PathError::malformed(format!(
                    "expected a command at token {}, found number {v}",
                    self.pos
                )))
            }
        };
        let cmd = Command::from_str(tag)
            .map_err(|_| PathError::InvalidCommand { tag: tag.clone() })?;
        let start = self.pos + 1;
        let run = tokens[start..]
            .iter()
            .take_while(|t| matches!(t, Token::Num(_)))
            .count();
        if run != cmd.arity() {
            return Err(PathError::malformed(format!(
                "command {cmd} at token {} takes {} operands, found {run}",
                self.pos,
                cmd.arity()
            )));
        }
        let ops: Vec<f64> = tokens[start..start + run]
            .iter()
            .filter_map(Token::as_num)
            .collect();
        self.pos = start + run;
        Ok(Segment::from_operands(cmd, &ops))
    }
}

impl Iterator for TokenSegments<'_> {
    type Item = Result<Segment, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.tokens.len() {
            return None;
        }
        let seg = self.next_segment();
        self.failed = seg.is_err();
        Some(seg)
    }
}

/// Curves of a path: each segment prefixed with the current point.
#[derive(Clone, Debug)]
pub struct Curves<'a> {
    segs: std::slice::Iter<'a, Segment>,
    first: Vector2<f64>,
    prev: Vector2<f64>,
}

impl<'a> Curves<'a> {
    pub fn new(segs: &'a [Segment]) -> Self {
        Self {
            segs: segs.iter(),
            first: Vector2::zeros(),
            prev: Vector2::zeros(),
        }
    }
}

impl Iterator for Curves<'_> {
    type Item = Curve;

    fn next(&mut self) -> Option<Curve> {
        let seg = *self.segs.next()?;
        let curve = match seg {
            Segment::Move(p) => {
                self.first = p;
                self.prev = p;
                Curve::Move(p)
            }
            Segment::Line(p) => {
                let c = Curve::Line(self.prev, p);
                self.prev = p;
                c
            }
            Segment::Cubic { c1, c2, to } => {
                let c = Curve::Cubic(CubicBez::new(self.prev, c1, c2, to));
                self.prev = to;
                c
            }
            // A later Move starts the next contour; the pen state is left as is.
            Segment::Close => Curve::Close(self.prev, self.first),
        };
        Some(curve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segs.size_hint()
    }
}

impl ExactSizeIterator for Curves<'_> {}

impl Path {
    /// Parse a flat token stream (optionally led by the `path` marker).
    pub fn from_tokens(tokens: &[Token]) -> Result<Path, PathError> {
        let segs = TokenSegments::new(tokens).collect::<Result<Vec<_>, _>>()?;
        Ok(Path::from_segments(segs))
    }

    /// Canonical flat token stream (no marker).
    pub fn to_tokens(&self) -> Vec<Token> {
        let mut out = Vec::with_capacity(self.segs.len() * 3);
        for seg in &self.segs {
            seg.write_tokens(&mut out);
        }
        out
    }

    /// Lazy curve sequence.
    #[inline]
    pub fn curves(&self) -> Curves<'_> {
        Curves::new(&self.segs)
    }
}
