//! Configurable header field bounds and range validation.

use std::fmt;

use log::debug;

use crate::error::{DecodeError, DecodeResult};
use crate::header::MomentHeader;

/// Inclusive numeric bound for a single header field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub min: f32,
    pub max: f32,
}

impl Bound {
    /// Creates an inclusive bound.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A bound that admits every finite and infinite value (but not NaN).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(f32::NEG_INFINITY, f32::INFINITY)
    }

    /// Returns `true` if `value` lies within the bound. NaN never does.
    ///
    /// The comparison stays in `f32`. This departs from the NEXRAD reference
    /// decoder, which widens the scaled value to `f64` first: there a raw range
    /// of 32768 becomes 32.768001... and fails the 32.768 km maximum, while
    /// here it is accepted.
    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One field checked against its bound.
///
/// Values are compared in `f32`, the precision the scaled fields are stored
/// in, so a raw value that scales exactly onto a bound is accepted. A
/// comparison widened to `f64`, as the reference decoder does, can reject
/// such a value; see [`Bound::contains`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeCheck {
    pub name: &'static str,
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl RangeCheck {
    /// Creates a range check.
    #[must_use]
    pub const fn new(name: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self {
            name,
            value,
            min,
            max,
        }
    }

    const fn against(name: &'static str, value: f32, bound: Bound) -> Self {
        Self::new(name, value, bound.min, bound.max)
    }

    /// Returns `true` if the value is within `[min, max]`.
    #[must_use]
    pub fn passes(&self) -> bool {
        Bound::new(self.min, self.max).contains(self.value)
    }
}

impl fmt::Display for RangeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} outside [{}, {}]",
            self.name, self.value, self.min, self.max
        )
    }
}

/// Bounds enforced on a decoded header before any sample is read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderBounds {
    pub gate_count: Bound,
    pub range: Bound,
    pub range_sample_interval: Bound,
    pub tover: Bound,
    pub snr_threshold: Bound,
    pub control_flags: Bound,
    pub word_size: Bound,
    pub scale: Bound,
    pub offset: Bound,
}

impl Default for HeaderBounds {
    fn default() -> Self {
        Self::nexrad()
    }
}

impl HeaderBounds {
    /// Bounds mandated by the Level II interface control document.
    #[must_use]
    pub const fn nexrad() -> Self {
        Self {
            gate_count: Bound::new(0.0, 1840.0),
            range: Bound::new(0.0, 32.768),
            range_sample_interval: Bound::new(0.25, 4.0),
            tover: Bound::new(0.0, 20.0),
            snr_threshold: Bound::new(-12.0, 20.0),
            control_flags: Bound::new(0.0, 3.0),
            word_size: Bound::new(8.0, 16.0),
            scale: Bound::new(0.0, 65535.0),
            offset: Bound::new(-60.5, 65535.0),
        }
    }

    /// Bounds that accept any non-NaN header (use with caution).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            gate_count: Bound::unbounded(),
            range: Bound::unbounded(),
            range_sample_interval: Bound::unbounded(),
            tover: Bound::unbounded(),
            snr_threshold: Bound::unbounded(),
            control_flags: Bound::unbounded(),
            word_size: Bound::unbounded(),
            scale: Bound::unbounded(),
            offset: Bound::unbounded(),
        }
    }

    /// Returns every field check for `header`, in header order.
    #[must_use]
    pub fn checks(&self, header: &MomentHeader) -> [RangeCheck; 9] {
        [
            RangeCheck::against("gate_count", f32::from(header.gate_count), self.gate_count),
            RangeCheck::against("range", header.range, self.range),
            RangeCheck::against(
                "range_sample_interval",
                header.range_sample_interval,
                self.range_sample_interval,
            ),
            RangeCheck::against("tover", header.tover, self.tover),
            RangeCheck::against("snr_threshold", header.snr_threshold, self.snr_threshold),
            RangeCheck::against(
                "control_flags",
                f32::from(header.control_flags),
                self.control_flags,
            ),
            RangeCheck::against("word_size", f32::from(header.word_size), self.word_size),
            RangeCheck::against("scale", header.scale, self.scale),
            RangeCheck::against("offset", header.offset, self.offset),
        ]
    }

    /// Returns the failing checks for `header`, in header order.
    #[must_use]
    pub fn violations(&self, header: &MomentHeader) -> Vec<RangeCheck> {
        self.checks(header)
            .into_iter()
            .filter(|check| !check.passes())
            .collect()
    }

    /// Validates `header`, reporting every out-of-range field at once.
    pub fn validate(&self, header: &MomentHeader) -> DecodeResult<()> {
        let violations = self.violations(header);
        if violations.is_empty() {
            return Ok(());
        }
        debug!(
            "rejecting moment header with {} out-of-range field(s)",
            violations.len()
        );
        Err(DecodeError::ValidationFailed { violations })
    }
}
