//! Codec-level errors for BR Code payload processing
//!
//! Provides error handling for both directions of the codec: defensive
//! length validation during TLV construction, and structural diagnostics
//! when parsing or verifying an existing payload. Each variant carries the
//! context needed to locate the offending field without re-parsing.

use thiserror::Error;

/// BR Code encoding/parsing errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrCodeError {
    /// Field value cannot be represented by the 2-digit decimal length prefix
    #[error("Value too long for tag {tag}: {got} characters exceeds limit {limit}")]
    ValueTooLong {
        tag: String,
        limit: usize,
        got: usize,
    },

    /// Amount is not representable as a fixed-point cents value
    #[error("Amount out of range: {amount} is not a finite value within 0..={max}")]
    AmountOutOfRange { amount: String, max: String },

    /// Payload is shorter than the minimum structurally valid BR Code
    #[error("Payload too small: need at least {need} characters, got {got}")]
    PayloadTooSmall { need: usize, got: usize },

    /// Declared field length overruns the remaining payload
    #[error("Truncated field: tag {tag} at offset {offset} declares {declared} characters, only {remaining} remain (cause: {likely_cause})")]
    TruncatedField {
        tag: String,
        offset: usize,
        declared: usize,
        remaining: usize,
        likely_cause: String,
    },

    /// Tag position holds non-digit characters
    #[error("Invalid tag at offset {offset}: expected 2 decimal digits, found {found:?}")]
    InvalidTag { offset: usize, found: String },

    /// Length position holds non-digit characters
    #[error("Invalid length for tag {tag} at offset {offset}: expected 2 decimal digits, found {found:?}")]
    InvalidLength {
        tag: String,
        offset: usize,
        found: String,
    },

    /// Trailing CRC16 disagrees with the recomputed checksum
    #[error("Checksum mismatch: payload carries {expected}, calculated {calculated} (cause: {likely_cause})")]
    ChecksumMismatch {
        expected: String,
        calculated: String,
        likely_cause: String,
    },
}

impl BrCodeError {
    /// Create a ValueTooLong error for a field exceeding the TLV length prefix
    pub fn value_too_long(tag: impl Into<String>, limit: usize, got: usize) -> Self {
        Self::ValueTooLong {
            tag: tag.into(),
            limit,
            got,
        }
    }

    /// Create an AmountOutOfRange error for a value field 54 cannot carry
    pub fn amount_out_of_range(amount: f64, max: f64) -> Self {
        Self::AmountOutOfRange {
            amount: amount.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a TruncatedField error with a diagnostic cause
    pub fn truncated_field(
        tag: impl Into<String>,
        offset: usize,
        declared: usize,
        remaining: usize,
    ) -> Self {
        let likely_cause = if remaining == 0 {
            "payload ends immediately after the length digits"
        } else {
            "payload truncated in transit or length mis-encoded upstream"
        };

        Self::TruncatedField {
            tag: tag.into(),
            offset,
            declared,
            remaining,
            likely_cause: likely_cause.to_string(),
        }
    }

    /// Create a ChecksumMismatch error with a diagnostic cause
    pub fn checksum_mismatch(expected: impl Into<String>, calculated: impl Into<String>) -> Self {
        let expected = expected.into();
        let likely_cause = if !expected.chars().all(|c| c.is_ascii_hexdigit()) {
            "trailer is not hexadecimal - payload cut off before the CRC field"
        } else if expected.chars().any(|c| c.is_ascii_lowercase()) {
            "CRC emitted in lowercase - BR Code requires uppercase hex"
        } else {
            "payload altered after assembly"
        };

        Self::ChecksumMismatch {
            expected,
            calculated: calculated.into(),
            likely_cause: likely_cause.to_string(),
        }
    }
}

/// Result type for codec operations
pub type BrCodeResult<T> = std::result::Result<T, BrCodeError>;
