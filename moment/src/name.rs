//! Known NEXRAD moment names.

/// Tag byte that opens every generic moment data block.
pub const MOMENT_BLOCK_TYPE: u8 = b'D';

/// The seven moments a Level II radial can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MomentName {
    /// `REF`
    Reflectivity,
    /// `VEL`
    Velocity,
    /// `SW ` (space padded)
    SpectrumWidth,
    /// `ZDR`
    DifferentialReflectivity,
    /// `PHI`
    DifferentialPhase,
    /// `RHO`
    CorrelationCoefficient,
    /// `CFP`
    ClutterFilterPower,
}

impl MomentName {
    /// All known moments, in the order they appear in a radial.
    pub const ALL: [Self; 7] = [
        Self::Reflectivity,
        Self::Velocity,
        Self::SpectrumWidth,
        Self::DifferentialReflectivity,
        Self::DifferentialPhase,
        Self::CorrelationCoefficient,
        Self::ClutterFilterPower,
    ];

    /// Returns the three-byte wire tag.
    #[must_use]
    pub const fn tag(self) -> [u8; 3] {
        match self {
            Self::Reflectivity => *b"REF",
            Self::Velocity => *b"VEL",
            Self::SpectrumWidth => *b"SW ",
            Self::DifferentialReflectivity => *b"ZDR",
            Self::DifferentialPhase => *b"PHI",
            Self::CorrelationCoefficient => *b"RHO",
            Self::ClutterFilterPower => *b"CFP",
        }
    }

    /// Parses a three-byte wire tag.
    #[must_use]
    pub fn from_tag(tag: [u8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.tag() == tag)
    }

    /// Returns the big-endian `u32` formed by the block type and this tag.
    ///
    /// This is the value a 4-byte lookahead sees at the start of a block
    /// carrying this moment.
    #[must_use]
    pub const fn block_token(self) -> u32 {
        let [a, b, c] = self.tag();
        u32::from_be_bytes([MOMENT_BLOCK_TYPE, a, b, c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip() {
        for name in MomentName::ALL {
            assert_eq!(MomentName::from_tag(name.tag()), Some(name));
        }
        assert_eq!(MomentName::from_tag(*b"XYZ"), None);
        assert_eq!(MomentName::from_tag(*b"SW\0"), None);
    }

    #[test]
    fn block_tokens_match_wire_values() {
        let tokens: Vec<u32> = MomentName::ALL.iter().map(|n| n.block_token()).collect();
        assert_eq!(
            tokens,
            vec![
                1_146_242_374, // DREF
                1_146_504_524, // DVEL
                1_146_312_480, // DSW
                1_146_766_418, // DZDR
                1_146_112_073, // DPHI
                1_146_243_151, // DRHO
                1_145_259_600, // DCFP
            ]
        );
    }
}
