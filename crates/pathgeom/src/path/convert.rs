//! Whole-path conversions: open/close form, bezier form, joining, segment split.

use super::types::{Curve, Path, Segment, Token};
use crate::cfg::EPSILON;

/// True if the path ends with a Close.
#[inline]
pub fn is_closed(path: &Path) -> bool {
    matches!(path.segs.last(), Some(Segment::Close))
}

/// Replace a trailing implicit closing edge by an explicit Line.
///
/// The Line is only added when the closing edge is longer than `EPSILON`;
/// open paths are returned unchanged.
pub fn make_open(path: &Path) -> Path {
    if !is_closed(path) {
        return path.clone();
    }
    let mut segs = path.segs[..path.segs.len() - 1].to_vec();
    if let Some(Curve::Close(last, first)) = path.curves().last() {
        if (first - last).norm() > EPSILON {
            segs.push(Segment::Line(first));
        }
    }
    Path::from_segments(segs)
}

/// Convert every Line to an equivalent Cubic (controls on the endpoints).
pub fn to_beziers(path: &Path) -> Path {
    let segs = path
        .curves()
        .map(|curve| match curve.to_segment() {
            Segment::Line(to) => Segment::Cubic {
                c1: curve.start(),
                c2: to,
                to,
            },
            seg => seg,
        })
        .collect();
    Path::from_segments(segs)
}

/// Per-segment token runs, `[[M, x, y], [L, x, y], ...]`.
pub fn split_segments(path: &Path) -> Vec<Vec<Token>> {
    path.segs
        .iter()
        .map(|seg| {
            let mut run = Vec::with_capacity(1 + seg.command().arity());
            seg.write_tokens(&mut run);
            run
        })
        .collect()
}

/// Concatenate paths in order, each opened first.
///
/// A path whose start coincides with the running end point (within `EPSILON`)
/// is spliced without its leading Move; otherwise the Move becomes a Line that
/// bridges the gap. Empty paths are skipped.
pub fn path_join<'a>(first: &Path, rest: impl IntoIterator<Item = &'a Path>) -> Path {
    let mut out = make_open(first);
    let mut last_end = out.end_point();
    for path in rest {
        let opened = make_open(path);
        let Some((head, tail)) = opened.segs.split_first() else {
            continue;
        };
        match (*head, last_end) {
            (Segment::Move(start), Some(end)) if (start - end).norm() < EPSILON => {}
            (Segment::Move(start), Some(_)) => out.segs.push(Segment::Line(start)),
            (seg, _) => out.segs.push(seg),
        }
        out.segs.extend_from_slice(tail);
        last_end = opened.end_point();
    }
    out
}
