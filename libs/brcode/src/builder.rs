//! # Ordered TLV Field Builder - BR Code Construction
//!
//! ## Purpose
//!
//! Collects `(tag, value)` pairs in insertion order and serializes them once
//! into the EMV tag-length-value wire form. Keeping the fields as an ordered
//! list until `build` makes the mandated field order testable independently
//! of string concatenation, and lets the nested tag-26 merchant group reuse
//! the same builder as its own sub-assembler.
//!
//! ## Architecture
//!
//! ```text
//! PixData → [TlvBuilder] → TLV string → CRC16 trailer → BR Code payload
//!    ↑           ↓              ↓             ↓
//! Caller     Ordered        encode_field  checksum.rs
//! Input      (tag, value)   per field
//! ```

use crate::constants::MAX_FIELD_LEN;
use crate::error::{BrCodeError, BrCodeResult};

/// Encode a single field into EMV tag-length-value form
///
/// Output is `tag` + zero-padded 2-digit decimal codepoint count + `value`.
/// Values longer than 99 codepoints cannot be represented by the length
/// prefix and are rejected rather than silently emitting a corrupt prefix.
pub fn encode_field(tag: &str, value: &str) -> BrCodeResult<String> {
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(BrCodeError::value_too_long(tag, MAX_FIELD_LEN, len));
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Ordered TLV builder for BR Code payload fragments
#[derive(Debug, Clone, Default)]
pub struct TlvBuilder {
    fields: Vec<(String, String)>,
}

impl TlvBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, preserving insertion order
    pub fn field(mut self, tag: &str, value: impl Into<String>) -> Self {
        self.fields.push((tag.to_string(), value.into()));
        self
    }

    /// Append a field only when a value is present
    pub fn optional_field(self, tag: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.field(tag, value),
            None => self,
        }
    }

    /// Append a nested group: the inner builder serializes into this
    /// field's value
    pub fn group(self, tag: &str, inner: TlvBuilder) -> BrCodeResult<Self> {
        let value = inner.build()?;
        Ok(self.field(tag, value))
    }

    /// Number of fields queued so far
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Serialize every queued field in insertion order
    pub fn build(self) -> BrCodeResult<String> {
        let mut out = String::new();
        for (tag, value) in &self.fields {
            out.push_str(&encode_field(tag, value)?);
        }
        Ok(out)
    }
}
