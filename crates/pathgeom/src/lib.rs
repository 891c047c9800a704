//! 2D vector-path geometry.
//!
//! Paths are sequences of Move / Line / cubic Bézier / Close segments over
//! `nalgebra::Vector2<f64>` points. The crate measures them (arc length,
//! position, normal, tangent angle), classifies their winding, synthesizes
//! circular arcs, offsets them into stroke outlines, and trims and joins them.
//!
//! API Policy
//! - Operations are pure functions over immutable `Path` values.
//! - Host runtimes should go through `api` (token-level boundary + re-exports).

pub mod api;
pub mod arc;
pub mod bezier;
pub mod cfg;
pub mod error;
pub mod measure;
pub mod offset;
pub mod orient;
pub mod path;
// Test and benchmark fixtures; not part of the host surface.
#[doc(hidden)]
pub mod sample;
pub mod trim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{PathCfg, EPSILON};
pub use error::PathError;
pub use nalgebra::Vector2 as Vec2;
pub use path::{Path, Segment, Token};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arc::{arc, circle};
    pub use crate::bezier::CubicBez;
    pub use crate::measure::{path_length, position_at, position_at_length};
    pub use crate::offset::offset;
    pub use crate::orient::orientation;
    pub use crate::path::{make_open, path_join, Curve, Path, Segment, Token};
    pub use crate::trim::{path_trim, trim_by_length};
    pub use crate::{PathCfg, PathError, EPSILON};
    pub use nalgebra::Vector2 as Vec2;
}
