//! Decoder for NEXRAD Level II generic moment data blocks.
//!
//! A moment data block is a fixed 28-byte header followed by an array of
//! 8- or 16-bit sample words, one per range gate. This crate decodes the
//! header with physical scaling, validates it against configurable bounds,
//! and decodes the sample array. The declared gate count is an upper bound:
//! decoding stops early when the bytes ahead match the start of another known
//! block, and the undecoded gates are reported as missing.
//!
//! # Design Principles
//!
//! - **Validate before reading samples** - A rejected header never triggers sample decoding.
//! - **Early stop is not an error** - Truncated arrays are surfaced through `missing_count`.
//! - **No framing knowledge** - This crate decodes one block; message assembly lives elsewhere.
//!
//! # Example
//!
//! ```
//! use bytecursor::ByteCursor;
//! use moment::decode_moment_block;
//!
//! let mut bytes = vec![b'D', b'V', b'E', b'L', 0, 0, 0, 0];
//! for raw in [2u16, 1000, 4000, 0, 0] {
//!     bytes.extend_from_slice(&raw.to_be_bytes());
//! }
//! bytes.extend_from_slice(&[0, 8]);
//! bytes.extend_from_slice(&1.0f32.to_be_bytes());
//! bytes.extend_from_slice(&0.0f32.to_be_bytes());
//! bytes.extend_from_slice(&[5, 10]);
//! bytes.extend_from_slice(b"DREF");
//!
//! let block = decode_moment_block(&mut ByteCursor::new(&bytes)).unwrap();
//! assert_eq!(block.samples(), &[5.0, 10.0]);
//! assert_eq!(block.missing_count(), 0);
//! ```

mod block;
mod bounds;
mod error;
mod header;
mod name;
mod samples;
mod sentinel;

pub use block::{decode_moment_block, decode_moment_block_with, DecodeOptions, MomentDataBlock};
pub use bounds::{Bound, HeaderBounds, RangeCheck};
pub use error::{DecodeError, DecodeResult};
pub use header::{
    decode_header, MomentHeader, HEADER_SIZE, RANGE_SAMPLE_INTERVAL_SCALE, RANGE_SCALE,
    SNR_THRESHOLD_SCALE, TOVER_SCALE,
};
pub use name::{MomentName, MOMENT_BLOCK_TYPE};
pub use samples::{decode_samples, missing_count, SampleRun, ScanState, StopReason, WordSize};
pub use sentinel::SentinelSet;
