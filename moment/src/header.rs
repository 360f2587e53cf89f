//! Moment data block header layout and decoding.

use bytecursor::ByteCursor;
use log::trace;

use crate::error::DecodeResult;
use crate::name::MomentName;

/// Header size in bytes (28 total).
pub const HEADER_SIZE: usize = 1 + 3 + 4 + 2 + 2 + 2 + 2 + 2 + 1 + 1 + 4 + 4;

/// Divisor applied to the raw range field (meters to km).
pub const RANGE_SCALE: f32 = 1000.0;

/// Divisor applied to the raw range sample interval field (meters to km).
pub const RANGE_SAMPLE_INTERVAL_SCALE: f32 = 1000.0;

/// Divisor applied to the raw TOVER field.
pub const TOVER_SCALE: f32 = 100.0;

/// Divisor applied to the raw SNR threshold field.
pub const SNR_THRESHOLD_SCALE: f32 = 1000.0;

/// Fixed 28-byte header of a generic moment data block.
///
/// The four ratio fields are stored already scaled to physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MomentHeader {
    /// Data block type tag (`b'D'` for moment data).
    pub block_type: u8,
    /// Three-character moment name, e.g. `b"VEL"`.
    pub data_name: [u8; 3],
    /// Opaque reserved bytes, carried through unchanged.
    pub reserved: [u8; 4],
    /// Declared number of range gates.
    pub gate_count: u16,
    /// Range to the center of the first gate, in km.
    pub range: f32,
    /// Spacing between adjacent gates, in km.
    pub range_sample_interval: f32,
    /// Range folding threshold, in dB.
    pub tover: f32,
    /// SNR threshold, in dB.
    pub snr_threshold: f32,
    /// Control flags (recombined bins indicator).
    pub control_flags: u8,
    /// Sample width in bits; 8 through 15 read one byte per gate, 16 reads two.
    pub word_size: u8,
    /// Divisor converting raw samples to physical values.
    pub scale: f32,
    /// Offset subtracted from raw samples before scaling.
    pub offset: f32,
}

impl MomentHeader {
    /// Returns the block type as a character.
    #[must_use]
    pub const fn block_type_char(&self) -> char {
        self.block_type as char
    }

    /// Returns the moment name as text, if it is valid ASCII.
    #[must_use]
    pub fn data_name_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data_name)
            .ok()
            .filter(|name| name.is_ascii())
    }

    /// Returns the known moment this block carries, if any.
    #[must_use]
    pub fn moment(&self) -> Option<MomentName> {
        MomentName::from_tag(self.data_name)
    }

    /// Converts a raw sample word into its physical value.
    ///
    /// `physical = (raw - offset) / scale`
    #[must_use]
    pub fn rescale(&self, raw: u16) -> f32 {
        (f32::from(raw) - self.offset) / self.scale
    }

    /// Returns the center distance of gate `index` in km.
    ///
    /// Returns `None` for indices at or beyond `gate_count`.
    #[must_use]
    pub fn gate_range_km(&self, index: u16) -> Option<f32> {
        (index < self.gate_count)
            .then(|| f32::from(index).mul_add(self.range_sample_interval, self.range))
    }
}

/// Decodes the fixed header at the cursor position.
///
/// Consumes exactly [`HEADER_SIZE`] bytes on success. No range validation is
/// performed here; see [`HeaderBounds::validate`].
///
/// [`HeaderBounds::validate`]: crate::HeaderBounds::validate
pub fn decode_header(cursor: &mut ByteCursor<'_>) -> DecodeResult<MomentHeader> {
    let start = cursor.position();

    let block_type = cursor.read_u8()?;
    let data_name = cursor.read_array::<3>()?;
    let reserved = cursor.read_array::<4>()?;
    let gate_count = cursor.read_u16()?;
    let range = f32::from(cursor.read_u16()?) / RANGE_SCALE;
    let range_sample_interval = f32::from(cursor.read_u16()?) / RANGE_SAMPLE_INTERVAL_SCALE;
    let tover = f32::from(cursor.read_u16()?) / TOVER_SCALE;
    let snr_threshold = f32::from(cursor.read_u16()?) / SNR_THRESHOLD_SCALE;
    let control_flags = cursor.read_u8()?;
    let word_size = cursor.read_u8()?;
    let scale = cursor.read_f32()?;
    let offset = cursor.read_f32()?;

    debug_assert_eq!(cursor.position() - start, HEADER_SIZE);

    let header = MomentHeader {
        block_type,
        data_name,
        reserved,
        gate_count,
        range,
        range_sample_interval,
        tover,
        snr_threshold,
        control_flags,
        word_size,
        scale,
        offset,
    };
    trace!(
        "decoded moment header {}{} at offset {start}: {gate_count} gates, {word_size}-bit words",
        header.block_type_char(),
        String::from_utf8_lossy(&header.data_name),
    );
    Ok(header)
}
