//! Error kinds surfaced to the host.

use thiserror::Error;

/// Errors raised by path parsing and path operations.
///
/// Every variant reflects malformed input; nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The token stream does not start with a command or an operand run is truncated.
    #[error("malformed path: {reason}")]
    MalformedPath { reason: String },

    /// A command tag is not one of `M`, `L`, `C`, `Z`.
    #[error("invalid path command: {tag}")]
    InvalidCommand { tag: String },

    /// A length/position query found no traversable curve.
    #[error("empty path: no curve to sample")]
    EmptyPath,

    /// A cubic bezier needs exactly 4 coordinate pairs.
    #[error("invalid point count for cubic bezier: expected 4 points, found {count}")]
    InvalidPointCount { count: usize },

    /// The path violates a structural precondition of the operation.
    #[error("invalid path: {reason}")]
    InvalidPath { reason: String },
}

impl PathError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            reason: reason.into(),
        }
    }
}
