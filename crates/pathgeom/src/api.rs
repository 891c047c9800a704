//! Curated surface for host runtimes (UNSTABLE).
//!
//! Important
//! - A host hands paths over as flat token streams (`Token`) and calls one
//!   operation per request; everything it needs is re-exported here so callers
//!   do not depend on the module layout.
//! - Breaking changes are allowed; prefer these re-exports for consistency.

// Path model and token boundary
pub use crate::path::{Command, Curve, Path, Segment, Token, PATH_MARKER};
// Whole-path conversions
pub use crate::path::{is_closed, make_open, path_join, split_segments, to_beziers};
// Length, position, normal, angle
pub use crate::measure::{
    angle_at, angle_at_length, find_curve_at_length, normal_at, normal_at_length, path_length,
    position_at, position_at_length, CurveAt,
};
// Construction and transformation
pub use crate::arc::{arc, circle};
pub use crate::offset::{offset, offset_with_cfg};
pub use crate::orient::orientation;
pub use crate::trim::{path_trim, trim_by_length};
// Tolerances and errors
pub use crate::cfg::{PathCfg, EPSILON};
pub use crate::error::PathError;
