//! Error types for moment block decoding.

use bytecursor::CursorError;
use thiserror::Error;

use crate::bounds::RangeCheck;

/// Result type for moment block decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that abort decoding of a moment data block.
///
/// No partial block is produced when any of these is returned. Stopping the
/// sample array early on a block-start token is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The cursor could not satisfy a read or step.
    #[error("read exhausted: {0}")]
    ReadExhausted(#[from] CursorError),

    /// One or more header fields are outside their allowed range.
    ///
    /// Every violating field is listed, in header order.
    #[error("header validation failed: {}", describe_violations(.violations))]
    ValidationFailed { violations: Vec<RangeCheck> },
}

impl DecodeError {
    /// Returns the failed range checks for a validation error.
    #[must_use]
    pub fn violations(&self) -> &[RangeCheck] {
        match self {
            Self::ValidationFailed { violations } => violations,
            _ => &[],
        }
    }
}

fn describe_violations(violations: &[RangeCheck]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
