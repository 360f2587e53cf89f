//! Full moment data block decoding.

use bytecursor::ByteCursor;

use crate::bounds::HeaderBounds;
use crate::error::DecodeResult;
use crate::header::{decode_header, MomentHeader};
use crate::name::MomentName;
use crate::samples::{decode_samples, missing_count, StopReason};
use crate::sentinel::SentinelSet;

/// Configuration for [`decode_moment_block_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeOptions {
    /// Header field bounds checked before samples are read.
    pub bounds: HeaderBounds,
    /// Tokens that mark the start of the next block.
    pub sentinels: SentinelSet,
}

/// A decoded moment data block.
///
/// Constructed once per decode and immutable afterwards. The number of
/// decoded samples plus [`missing_count`](Self::missing_count) always equals
/// the header's `gate_count`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MomentDataBlock {
    header: MomentHeader,
    samples: Vec<f32>,
    missing_count: u32,
    stop_reason: StopReason,
}

impl MomentDataBlock {
    /// Returns the decoded header.
    #[must_use]
    pub const fn header(&self) -> &MomentHeader {
        &self.header
    }

    /// Returns the rescaled samples in gate order.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the block, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Returns the number of declared gates that were not decoded.
    #[must_use]
    pub const fn missing_count(&self) -> u32 {
        self.missing_count
    }

    /// Returns why sample decoding stopped.
    #[must_use]
    pub const fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Returns `true` if every declared gate was decoded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.missing_count == 0
    }

    /// Returns the declared gate count.
    #[must_use]
    pub const fn gate_count(&self) -> u16 {
        self.header.gate_count
    }

    /// Returns the known moment this block carries, if any.
    #[must_use]
    pub fn moment(&self) -> Option<MomentName> {
        self.header.moment()
    }

    /// Returns `(range_km, value)` pairs for the decoded gates.
    pub fn gates(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        (0..self.header.gate_count)
            .filter_map(|index| self.header.gate_range_km(index))
            .zip(self.samples.iter().copied())
    }
}

/// Decodes a moment data block with the NEXRAD bounds and block tokens.
///
/// See [`decode_moment_block_with`].
pub fn decode_moment_block(cursor: &mut ByteCursor<'_>) -> DecodeResult<MomentDataBlock> {
    decode_moment_block_with(cursor, &DecodeOptions::default())
}

/// Decodes a moment data block starting at the cursor position.
///
/// The header is decoded and validated first; a header that fails validation
/// aborts the decode with the cursor just past the header and no sample bytes
/// read. Sample decoding then continues from the cursor and may stop before
/// `gate_count` when the next block's start token is seen.
pub fn decode_moment_block_with(
    cursor: &mut ByteCursor<'_>,
    options: &DecodeOptions,
) -> DecodeResult<MomentDataBlock> {
    let header = decode_header(cursor)?;
    options.bounds.validate(&header)?;

    let run = decode_samples(cursor, &header, &options.sentinels)?;
    let missing_count = missing_count(header.gate_count, run.samples.len());

    Ok(MomentDataBlock {
        header,
        samples: run.samples,
        missing_count,
        stop_reason: run.stop_reason,
    })
}
