//! Error types for cursor operations.

use thiserror::Error;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while reading from or repositioning a [`ByteCursor`].
///
/// [`ByteCursor`]: crate::ByteCursor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Attempted to read past the end of the buffer.
    #[error("attempted to read {requested} bytes but only {available} bytes available")]
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A forward or backward step would leave the buffer.
    #[error("cannot step {delta:+} bytes from position {position} in a {len}-byte buffer")]
    SeekOutOfBounds {
        /// Position before the step.
        position: usize,
        /// Signed step that was requested.
        delta: isize,
        /// Length of the underlying buffer.
        len: usize,
    },

    /// A fixed-width text field contained a non-ASCII byte.
    #[error("non-ASCII byte in text field at offset {offset}")]
    InvalidAscii {
        /// Absolute buffer offset of the offending byte.
        offset: usize,
    },
}
