//! Length & parameterization plus the sampling queries built on it.
//!
//! - `LengthTable`: per-curve cumulative lengths; cubic lengths come from the
//!   adaptive estimator in `bezier` (tolerance from `PathCfg`).
//! - `find_curve_at_length`: skips Moves and zero-length straight curves, so
//!   the local parameter division is always well defined.
//! - Queries: position, outward normal, tangent angle; `*_at` forms take a
//!   normalized parameter in `[0, 1]`.

mod query;
mod table;

pub use query::{
    angle_at, angle_at_length, find_curve_at_length, normal_at, normal_at_length, path_length,
    position_at, position_at_length,
};
pub use table::{CurveAt, LengthTable};
