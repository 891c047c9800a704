//! Segment model: flat-token boundary form, segments, curves.
//!
//! Purpose
//! - Decode the host's flat token stream into typed `Segment`s once, at the
//!   boundary, and give every other module a typed `Path` to work on.
//! - Provide the lazy `Curves` view (segment + preceding point) that the
//!   length, query, offset and trim modules consume.
//!
//! Code cross-refs: `measure::LengthTable`, `trim::trim_by_length`, `offset::offset`

mod convert;
mod iter;
mod types;

pub use convert::{is_closed, make_open, path_join, split_segments, to_beziers};
pub use iter::{Curves, TokenSegments};
pub use types::{Command, Curve, Path, Segment, Token, PATH_MARKER};

#[cfg(test)]
mod tests;
