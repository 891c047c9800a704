//! Outline a random polygon and an arc, then trim the outline.
//!
//! Usage:
//!   cargo run -p pathgeom --example stroke_outline -- [seed] [width]
//!
//! Prints `key=value` lines: lengths before/after offset and trim, the
//! orientation of each path, and timings.

use std::time::Instant;

use nalgebra::Vector2;
use pathgeom::arc::arc;
use pathgeom::measure::{path_length, position_at};
use pathgeom::offset::offset;
use pathgeom::orient::orientation;
use pathgeom::path::path_join;
use pathgeom::sample::{draw_polygon_path, RadialCfg, ReplayToken};
use pathgeom::trim::path_trim;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025u64);
    let width = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.5f64);

    let poly = draw_polygon_path(RadialCfg::default(), ReplayToken { seed, index: 0 });
    let start = Instant::now();
    let outline = offset(width, &poly).expect("sampled polygons start with a Move");
    let offset_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "polygon segments={} length={:.6} orientation={}",
        poly.len(),
        path_length(&poly),
        orientation(&poly)
    );
    println!(
        "outline segments={} length={:.6} orientation={}",
        outline.len(),
        path_length(&outline),
        orientation(&outline)
    );
    println!("offset_time_ms={offset_ms:.3}");

    let bow = arc(Vector2::new(0.0, 0.0), 20.0, 0.0, 3.0);
    let bow_outline = offset(-width, &bow).expect("arcs start with a Move");
    let middle = path_trim(0.25, 0.75, &bow_outline);
    let p = position_at(0.5, &middle).expect("trimmed arc is not empty");
    println!(
        "arc length={:.6} outline_length={:.6} middle_length={:.6} middle_mid=({:.4}, {:.4})",
        path_length(&bow),
        path_length(&bow_outline),
        path_length(&middle),
        p.x,
        p.y
    );

    let chained = path_join(&middle, [&outline]);
    println!("joined segments={} length={:.6}", chained.len(), path_length(&chained));
}
