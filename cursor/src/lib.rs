//! Bounded byte cursor for NEXRAD Level II message decoding.
//!
//! This crate provides [`ByteCursor`], a forward reader over an in-memory
//! message buffer. Block decoders use it to pull fixed-width big-endian fields
//! and to look ahead for the start of the next block.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads and steps are bounds-checked.
//! - **No net movement on lookahead** - [`ByteCursor::peek_u32`] never moves
//!   the cursor, and [`ByteCursor::advance`]/[`ByteCursor::retreat`] are exact
//!   inverses of each other.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytecursor::ByteCursor;
//!
//! let bytes = [b'D', b'R', b'E', b'F', 0x01, 0x02];
//! let mut cursor = ByteCursor::new(&bytes);
//!
//! assert_eq!(cursor.peek_u32(), Some(u32::from_be_bytes(*b"DREF")));
//! assert_eq!(cursor.read_ascii(4).unwrap(), "DREF");
//! assert_eq!(cursor.read_u16().unwrap(), 0x0102);
//! ```

mod cursor;
mod error;

pub use cursor::ByteCursor;
pub use error::{CursorError, CursorResult};
