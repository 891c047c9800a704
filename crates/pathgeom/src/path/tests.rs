use super::*;
use crate::error::PathError;
use nalgebra::vector;

fn toks(json: &str) -> Vec<Token> {
    serde_json::from_str(json).expect("token json")
}

fn square() -> Path {
    Path::from_tokens(&toks(r#"["M", 0, 0, "L", 10, 0, "L", 10, 10, "L", 0, 10, "Z"]"#)).unwrap()
}

#[test]
fn parse_square_and_render_back() {
    let p = square();
    assert_eq!(p.len(), 5);
    assert_eq!(p.segs[0], Segment::Move(vector![0.0, 0.0]));
    assert_eq!(p.segs[4], Segment::Close);
    let json = serde_json::to_string(&p.to_tokens()).unwrap();
    assert_eq!(json, r#"["M",0.0,0.0,"L",10.0,0.0,"L",10.0,10.0,"L",0.0,10.0,"Z"]"#);
}

#[test]
fn leading_marker_is_skipped() {
    let p = Path::from_tokens(&toks(r#"["path", "M", 1, 2, "C", 1, 3, 2, 3, 2, 2]"#)).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(
        p.segs[1],
        Segment::Cubic {
            c1: vector![1.0, 3.0],
            c2: vector![2.0, 3.0],
            to: vector![2.0, 2.0],
        }
    );
}

#[test]
fn malformed_streams_are_rejected() {
    let leading_number = Path::from_tokens(&toks(r#"[1, 2, "L", 3, 4]"#)).unwrap_err();
    assert!(matches!(leading_number, PathError::MalformedPath { .. }));

    let truncated = Path::from_tokens(&toks(r#"["M", 0, 0, "C", 1, 1, 2, 2]"#)).unwrap_err();
    assert!(matches!(truncated, PathError::MalformedPath { .. }));

    let close_with_operand = Path::from_tokens(&toks(r#"["M", 0, 0, "Z", 1]"#)).unwrap_err();
    assert!(matches!(close_with_operand, PathError::MalformedPath { .. }));

    let unknown = Path::from_tokens(&toks(r#"["M", 0, 0, "Q", 1, 1, 2, 2]"#)).unwrap_err();
    assert_eq!(unknown, PathError::InvalidCommand { tag: "Q".into() });
}

#[test]
fn segment_iterator_stops_after_first_error() {
    let tokens = toks(r#"["M", 0, 0, "L", 1, "L", 2, 2]"#);
    let items: Vec<_> = TokenSegments::new(&tokens).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn curves_carry_previous_point() {
    let p = square();
    let curves: Vec<Curve> = p.curves().collect();
    assert_eq!(curves[0], Curve::Move(vector![0.0, 0.0]));
    assert_eq!(curves[1], Curve::Line(vector![0.0, 0.0], vector![10.0, 0.0]));
    assert_eq!(curves[4], Curve::Close(vector![0.0, 10.0], vector![0.0, 0.0]));
    // Restartable: a second pass sees the same sequence.
    assert_eq!(p.curves().collect::<Vec<_>>(), curves);
}

#[test]
fn second_contour_resets_first_point() {
    let p = Path::from_tokens(&toks(
        r#"["M", 0, 0, "L", 1, 0, "Z", "M", 5, 5, "L", 6, 5, "L", 6, 6, "Z"]"#,
    ))
    .unwrap();
    let last = p.curves().last().unwrap();
    assert_eq!(last, Curve::Close(vector![6.0, 6.0], vector![5.0, 5.0]));
}

#[test]
fn make_open_adds_explicit_closing_edge() {
    let open = make_open(&square());
    assert!(!is_closed(&open));
    assert_eq!(open.len(), 5);
    assert_eq!(open.segs[4], Segment::Line(vector![0.0, 0.0]));

    // Already-coincident closing edge: the Close is just dropped.
    let mut p = Path::polyline(&[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]]);
    p.close();
    let q = make_open(&p);
    assert_eq!(q.len(), 3);

    // Open paths pass through.
    let line = Path::polyline(&[vector![0.0, 0.0], vector![3.0, 4.0]]);
    assert_eq!(make_open(&line), line);
}

#[test]
fn to_beziers_keeps_geometry() {
    let b = to_beziers(&square());
    assert_eq!(b.len(), 5);
    assert_eq!(
        b.segs[1],
        Segment::Cubic {
            c1: vector![0.0, 0.0],
            c2: vector![10.0, 0.0],
            to: vector![10.0, 0.0],
        }
    );
    assert_eq!(b.segs[4], Segment::Close);
}

#[test]
fn join_splices_or_bridges() {
    let a = Path::polyline(&[vector![0.0, 0.0], vector![1.0, 0.0]]);
    let b = Path::polyline(&[vector![1.0, 0.0], vector![1.0, 1.0]]);
    let c = Path::polyline(&[vector![5.0, 5.0], vector![6.0, 5.0]]);
    let joined = path_join(&a, [&b, &c]);
    assert_eq!(
        joined.segs,
        vec![
            Segment::Move(vector![0.0, 0.0]),
            Segment::Line(vector![1.0, 0.0]),
            Segment::Line(vector![1.0, 1.0]),
            Segment::Line(vector![5.0, 5.0]),
            Segment::Line(vector![6.0, 5.0]),
        ]
    );
    assert_eq!(joined.end_point(), Some(vector![6.0, 5.0]));
}

#[test]
fn join_opens_closed_inputs_and_skips_empty() {
    let joined = path_join(&square(), [&Path::new()]);
    assert_eq!(joined, make_open(&square()));
    let from_empty = path_join(&Path::new(), [&square()]);
    assert_eq!(from_empty, make_open(&square()));
}

#[test]
fn split_segments_groups_tokens() {
    let runs = split_segments(&square());
    assert_eq!(runs.len(), 5);
    assert_eq!(runs[0], vec![Token::cmd(Command::Move), Token::Num(0.0), Token::Num(0.0)]);
    assert_eq!(runs[4], vec![Token::cmd(Command::Close)]);
}

#[test]
fn join_splices_after_an_opened_closed_path() {
    let lead = Path::polyline(&[vector![-5.0, 0.0], vector![0.0, 0.0]]);
    let down = Path::polyline(&[vector![0.0, 0.0], vector![0.0, -3.0]]);
    let joined = path_join(&lead, [&square(), &down]);
    assert_eq!(
        joined.segs,
        vec![
            Segment::Move(vector![-5.0, 0.0]),
            Segment::Line(vector![0.0, 0.0]),
            Segment::Line(vector![10.0, 0.0]),
            Segment::Line(vector![10.0, 10.0]),
            Segment::Line(vector![0.0, 10.0]),
            Segment::Line(vector![0.0, 0.0]),
            Segment::Line(vector![0.0, -3.0]),
        ]
    );
}
