//! Sample array decoding with block-boundary lookahead.
//!
//! The declared gate count is only an upper bound: a radial may carry fewer
//! samples, in which case the next block's start token follows immediately.
//! Each gate is preceded by a non-consuming 4-byte lookahead. For 16-bit words
//! a second lookahead one byte further is taken, because a token can also
//! begin halfway into what would otherwise be the next word.

use bytecursor::ByteCursor;
use log::debug;

use crate::error::DecodeResult;
use crate::header::MomentHeader;
use crate::sentinel::SentinelSet;

/// Width of one raw sample word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    /// One byte per gate.
    Bits8,
    /// Two bytes per gate, big-endian.
    Bits16,
}

impl WordSize {
    /// Maps the header's word size in bits onto a sample width.
    ///
    /// The width is the whole number of bytes the bit count covers: 8 through
    /// 15 bits read one byte per gate, anything else two. Header validation
    /// limits the value to 8..=16 unless the bounds are relaxed.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        if bits / 8 == 1 {
            Self::Bits8
        } else {
            Self::Bits16
        }
    }

    /// Returns the number of bytes per sample.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits8 => 1,
            Self::Bits16 => 2,
        }
    }
}

/// Why the sample loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StopReason {
    /// All declared gates were decoded.
    GateCountExhausted,
    /// A block-start token was seen before gate `gate` could be decoded.
    SentinelDetected {
        /// Index of the first gate not decoded.
        gate: usize,
        /// The matching token.
        token: u32,
    },
}

/// State of the sample loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Stopped(StopReason),
}

/// Result of decoding a sample array.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRun {
    /// Rescaled samples in gate order.
    pub samples: Vec<f32>,
    /// Why decoding stopped.
    pub stop_reason: StopReason,
}

/// Computes the number of declared gates that were not decoded.
///
/// Saturates at zero; the sample loop never decodes more than `gate_count`.
#[must_use]
pub fn missing_count(gate_count: u16, decoded: usize) -> u32 {
    let decoded = u32::try_from(decoded).unwrap_or(u32::MAX);
    u32::from(gate_count).saturating_sub(decoded)
}

/// Decodes up to `header.gate_count` samples from the cursor.
///
/// Stops early, without error, when the lookahead matches a token in
/// `sentinels`. On such a stop the cursor is left at the first byte of the
/// gate that was not decoded.
pub fn decode_samples(
    cursor: &mut ByteCursor<'_>,
    header: &MomentHeader,
    sentinels: &SentinelSet,
) -> DecodeResult<SampleRun> {
    let word_size = WordSize::from_bits(header.word_size);
    let mut scanner = Scanner {
        header,
        sentinels,
        word_size,
        samples: Vec::with_capacity(usize::from(header.gate_count)),
    };

    let mut state = ScanState::Scanning;
    let stop_reason = loop {
        match state {
            ScanState::Scanning => state = scanner.step(cursor)?,
            ScanState::Stopped(reason) => break reason,
        }
    };

    if let StopReason::SentinelDetected { gate, token } = stop_reason {
        debug!(
            "{} sample array ended at gate {gate} of {} on block token {token:#010x}",
            String::from_utf8_lossy(&header.data_name),
            header.gate_count,
        );
    }

    Ok(SampleRun {
        samples: scanner.samples,
        stop_reason,
    })
}

struct Scanner<'h> {
    header: &'h MomentHeader,
    sentinels: &'h SentinelSet,
    word_size: WordSize,
    samples: Vec<f32>,
}

impl Scanner<'_> {
    /// Decodes one gate, or decides the loop is over.
    fn step(&mut self, cursor: &mut ByteCursor<'_>) -> DecodeResult<ScanState> {
        let gate = self.samples.len();
        if gate >= usize::from(self.header.gate_count) {
            return Ok(ScanState::Stopped(StopReason::GateCountExhausted));
        }
        if let Some(token) = self.sentinels.match_at(cursor) {
            return Ok(ScanState::Stopped(StopReason::SentinelDetected { gate, token }));
        }

        let raw = match self.word_size {
            WordSize::Bits8 => u16::from(cursor.read_u8()?),
            WordSize::Bits16 => {
                cursor.advance(1)?;
                let straddling = self.sentinels.match_at(cursor);
                cursor.retreat(1)?;
                if let Some(token) = straddling {
                    return Ok(ScanState::Stopped(StopReason::SentinelDetected { gate, token }));
                }
                cursor.read_u16()?
            }
        };
        self.samples.push(self.header.rescale(raw));
        Ok(ScanState::Scanning)
    }
}
