//! Block-start tokens that terminate a sample array early.

use bytecursor::ByteCursor;

use crate::name::MomentName;

/// A set of 4-byte block-start tokens.
///
/// When the 4-byte lookahead at a gate matches one of these values, the
/// sample array is considered finished and the remaining gates are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelSet {
    tokens: Vec<u32>,
}

impl Default for SentinelSet {
    fn default() -> Self {
        Self::nexrad()
    }
}

impl SentinelSet {
    /// Creates a set from arbitrary tokens. Duplicates are removed.
    pub fn new(tokens: impl IntoIterator<Item = u32>) -> Self {
        let mut tokens: Vec<u32> = tokens.into_iter().collect();
        tokens.sort_unstable();
        tokens.dedup();
        Self { tokens }
    }

    /// Creates an empty set; sample decoding then only stops at `gate_count`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// The start tokens of the seven NEXRAD moment data blocks.
    #[must_use]
    pub fn nexrad() -> Self {
        Self::new(MomentName::ALL.map(MomentName::block_token))
    }

    /// Returns a copy of this set with `token` added.
    #[must_use]
    pub fn with(mut self, token: u32) -> Self {
        if let Err(idx) = self.tokens.binary_search(&token) {
            self.tokens.insert(idx, token);
        }
        self
    }

    /// Returns `true` if `token` is in the set.
    #[must_use]
    pub fn contains(&self, token: u32) -> bool {
        self.tokens.binary_search(&token).is_ok()
    }

    /// Returns the number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the set holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the matching token at the cursor position, without moving it.
    ///
    /// Fewer than four remaining bytes never match.
    #[must_use]
    pub fn match_at(&self, cursor: &ByteCursor<'_>) -> Option<u32> {
        cursor.peek_u32().filter(|token| self.contains(*token))
    }
}
