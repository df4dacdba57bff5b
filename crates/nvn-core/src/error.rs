//! # Error Types
//!
//! Shared error types for the foundational crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error parsing a region code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region code: {code:?}")]
pub struct RegionParseError {
    /// The string that failed to parse.
    pub code: String,
}

/// Error constructing or parsing a timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The string used a non-`Z` timezone offset.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NonUtc(String),

    /// The string is not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {reason}")]
    Invalid {
        /// The string that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
