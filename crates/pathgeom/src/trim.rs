//! Sub-path extraction by arc length.
//!
//! Both boundaries are located with one pass over the cumulative length
//! table (degenerate curves skipped, as in `measure`); the boundary curves are
//! split at their local parameters and everything between passes through.

use tracing::debug;

use crate::cfg::{PathCfg, EPSILON};
use crate::measure::{path_length, LengthTable};
use crate::path::{make_open, Curve, Path, Segment};

/// Keep the part of `path` between `start_len` from the start and `end_len`
/// from the end.
///
/// The path is opened first. Negative lengths clamp to 0 and crossed bounds
/// are swapped; a remainder shorter than `EPSILON` yields the empty path.
pub fn trim_by_length(start_len: f64, end_len: f64, path: &Path) -> Path {
    let opened = make_open(path);
    let table = LengthTable::new(&opened, &PathCfg::default());

    let mut start = start_len.max(0.0);
    let mut end = (table.total() - end_len).max(0.0);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    if end - start < EPSILON {
        debug!(start, end, "trim: nothing left");
        return Path::new();
    }

    let (Some((si, st)), Some((ei, et))) = (locate(&table, start), locate(&table, end)) else {
        return Path::new();
    };
    if si > ei {
        debug!(si, ei, "trim: boundaries out of order");
        return Path::new();
    }

    let mut segs = Vec::with_capacity(ei - si + 2);
    if si == ei {
        push_piece(&mut segs, table.curves[si].split(st, et));
    } else {
        push_piece(&mut segs, table.curves[si].split(st, 1.0));
        let mut reopened = false;
        for curve in &table.curves[si + 1..ei] {
            match *curve {
                Curve::Move(_) => {
                    reopened = true;
                    segs.push(curve.to_segment());
                }
                // The first emitted contour starts at the cut, not at the old start.
                Curve::Close(_, first) if !reopened => segs.push(Segment::Line(first)),
                _ => segs.push(curve.to_segment()),
            }
        }
        if et > EPSILON {
            push_piece(&mut segs, table.curves[ei].split(0.0, et));
        }
    }
    // An end cut at the very start of a later contour leaves its Move dangling.
    while matches!(segs.last(), Some(Segment::Move(_))) {
        segs.pop();
    }
    Path::from_segments(segs)
}

/// Normalized form: keep the part between fractions `t1` and `t2` of the length.
pub fn path_trim(t1: f64, t2: f64, path: &Path) -> Path {
    let len = path_length(path);
    trim_by_length(t1 * len, (1.0 - t2) * len, path)
}

/// First usable curve with `from <= len < to`; past the end, the last usable
/// curve at `t = 1`.
fn locate(table: &LengthTable, len: f64) -> Option<(usize, f64)> {
    table
        .spans()
        .find(|&(_, from, to)| from <= len && len < to)
        .map(|(i, from, to)| (i, (len - from) / (to - from)))
        .or_else(|| table.last_usable().map(|i| (i, 1.0)))
}

/// Append a split boundary curve; the first one also opens the result.
fn push_piece(segs: &mut Vec<Segment>, piece: Curve) {
    if segs.is_empty() {
        segs.push(Segment::Move(piece.start()));
    }
    segs.push(match piece {
        Curve::Close(_, to) => Segment::Line(to),
        other => other.to_segment(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::{arc, circle};
    use crate::measure::position_at;
    use crate::path::path_join;
    use crate::sample::{draw_polygon_path, RadialCfg, ReplayToken};
    use nalgebra::vector;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Path {
        Path::polygon(&[
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ])
    }

    #[test]
    fn square_trimmed_by_ten_from_both_ends() {
        let t = trim_by_length(10.0, 10.0, &square());
        assert_eq!(
            t.segs,
            vec![
                Segment::Move(vector![10.0, 0.0]),
                Segment::Line(vector![10.0, 10.0]),
                Segment::Line(vector![0.0, 10.0]),
            ]
        );
        assert!((path_length(&t) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn cuts_inside_curves_split_them() {
        let t = trim_by_length(5.0, 5.0, &square());
        assert_eq!(t.first_point(), Some(vector![5.0, 0.0]));
        assert_eq!(t.end_point(), Some(vector![0.0, 5.0]));
        assert_eq!(t.len(), 5);
        assert!((path_length(&t) - 30.0).abs() < 1e-12);

        // Both cuts on the first edge.
        let t = trim_by_length(2.0, 35.0, &square());
        assert_eq!(
            t.segs,
            vec![Segment::Move(vector![2.0, 0.0]), Segment::Line(vector![5.0, 0.0])]
        );
    }

    #[test]
    fn crossed_bounds_swap_and_full_trims_are_empty() {
        assert_eq!(trim_by_length(30.0, 30.0, &square()), trim_by_length(10.0, 10.0, &square()));
        assert!(trim_by_length(20.0, 20.0, &square()).is_empty());
        assert!(trim_by_length(1.0, 1.0, &Path::new()).is_empty());
        // Negative lengths clamp to the ends.
        assert_eq!(trim_by_length(-5.0, -5.0, &square()), make_open(&square()));
    }

    #[test]
    fn interior_close_stays_attached_to_its_contour() {
        let mut p = square();
        p.move_to(vector![20.0, 0.0]);
        p.line_to(vector![30.0, 0.0]);
        let t = trim_by_length(5.0, 5.0, &p);
        assert_eq!(
            t.segs,
            vec![
                Segment::Move(vector![5.0, 0.0]),
                Segment::Line(vector![10.0, 0.0]),
                Segment::Line(vector![10.0, 10.0]),
                Segment::Line(vector![0.0, 10.0]),
                Segment::Line(vector![0.0, 0.0]),
                Segment::Move(vector![20.0, 0.0]),
                Segment::Line(vector![25.0, 0.0]),
            ]
        );
    }

    /// Open polyline whose second edge is shorter than `EPSILON`.
    fn with_sliver_edge(tail: &[f64]) -> Path {
        let mut pts = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 5e-6]];
        pts.extend(tail.iter().map(|&x| vector![x, 5e-6]));
        Path::polyline(&pts)
    }

    #[test]
    fn start_cut_inside_a_sliver_edge() {
        let p = with_sliver_edge(&[20.0, 30.0, 40.0, 50.0]);
        let total = path_length(&p);
        let t = trim_by_length(10.000002, total - 15.0, &p);
        let first = t.first_point().unwrap();
        let end = t.end_point().unwrap();
        assert!((first - vector![10.0, 5e-6]).norm() < 1e-5);
        assert!((end - vector![35.0, 5e-6]).norm() < 1e-5);
        assert!((path_length(&t) - 25.0).abs() < 1e-5);

        let p = with_sliver_edge(&[20.0]);
        let t = trim_by_length(10.000002, 1.0, &p);
        assert!(t.first_point().unwrap().x < t.end_point().unwrap().x);
        assert!((t.end_point().unwrap() - vector![19.0, 5e-6]).norm() < 1e-5);
    }

    #[test]
    fn end_cut_at_a_contour_start_drops_its_move() {
        let mut p = Path::polyline(&[vector![0.0, 0.0], vector![10.0, 0.0]]);
        p.move_to(vector![20.0, 0.0]);
        p.line_to(vector![30.0, 0.0]);
        let t = trim_by_length(0.0, 10.0, &p);
        assert_eq!(
            t.segs,
            vec![Segment::Move(vector![0.0, 0.0]), Segment::Line(vector![10.0, 0.0])]
        );
    }

    #[test]
    fn normalized_trim_on_a_cubic() {
        let p = arc(vector![0.0, 0.0], 1.0, 0.0, FRAC_PI_2);
        let t = path_trim(0.25, 0.75, &p);
        assert_eq!(t.len(), 2);
        let a = position_at(0.25, &p).unwrap();
        let b = position_at(0.75, &p).unwrap();
        assert!((t.first_point().unwrap() - a).norm() < 1e-9);
        assert!((t.end_point().unwrap() - b).norm() < 1e-9);
        // Symmetric about the diagonal.
        assert!((a.x - b.y).abs() < 1e-9 && (a.y - b.x).abs() < 1e-9);
    }

    #[test]
    fn untrimmed_circle_is_the_opened_circle() {
        let c = circle(vector![1.0, 1.0], 4.0);
        assert_eq!(trim_by_length(0.0, 0.0, &c), make_open(&c));
    }

    proptest! {
        #[test]
        fn zero_trim_is_identity_on_explicit_edge_paths(seed in any::<u64>()) {
            let p = make_open(&draw_polygon_path(RadialCfg::default(), ReplayToken { seed, index: 2 }));
            prop_assert_eq!(trim_by_length(0.0, 0.0, &p), p);
        }

        #[test]
        fn trimmed_halves_join_back_to_the_whole(seed in any::<u64>(), u in 0.05f64..0.95) {
            let p = draw_polygon_path(RadialCfg::default(), ReplayToken { seed, index: 4 });
            let total = path_length(&p);
            let cut = u * total;
            let head = trim_by_length(0.0, total - cut, &p);
            let tail = trim_by_length(cut, 0.0, &p);
            // A cut just past a vertex drops a sliver shorter than EPSILON of that curve.
            prop_assert!((path_length(&head) + path_length(&tail) - total).abs() < 1e-4 * total);
            let joined = path_join(&head, [&tail]);
            prop_assert!((path_length(&joined) - total).abs() < 1e-9 * total);
            prop_assert!((path_length(&path_join(&make_open(&p), [])) - total).abs() < 1e-9 * total);
        }
    }
}
