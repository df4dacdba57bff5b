//! # Session Digit Offset
//!
//! The per-session constant that drives the digit-shift transform. Chosen
//! once when the masking session initializes and never changed afterwards;
//! a fresh page load may draw a different offset.

use thiserror::Error;

/// Error constructing a digit offset from an out-of-range value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("digit offset must be in 1..=9, got {value}")]
pub struct OffsetError {
    /// The rejected value.
    pub value: u8,
}

/// A digit-shift offset in `[1, 9]`.
///
/// Zero is excluded — a zero shift would render true digits. The offset is
/// immutable once constructed; sessions hold exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitOffset(u8);

impl DigitOffset {
    /// The offset used when the OS entropy source is unavailable.
    pub const FALLBACK: DigitOffset = DigitOffset(7);

    /// Create an offset, validating the `1..=9` range.
    pub fn new(value: u8) -> Result<Self, OffsetError> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OffsetError { value })
        }
    }

    /// Draw an offset from OS entropy.
    ///
    /// Falls back to [`DigitOffset::FALLBACK`] if the entropy source fails;
    /// the session still masks, just with a predictable shift.
    pub fn generate() -> Self {
        let mut byte = [0u8; 1];
        match getrandom::getrandom(&mut byte) {
            Ok(()) => Self(1 + byte[0] % 9),
            Err(e) => {
                tracing::warn!(error = %e, "entropy source unavailable, using fallback digit offset");
                Self::FALLBACK
            }
        }
    }

    /// The shift amount.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DigitOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
