//! # BR Code TLV Parser - Diagnostic Payload Inspection
//!
//! ## Purpose
//!
//! Parses an assembled payload back into structured `{tag, length, value}`
//! records, with one level of sub-field parsing for the nested merchant
//! account (26) and additional data (62) groups. This is the inverse of the
//! assembler and exists for diagnostics and round-trip verification - it is
//! not on the payment-critical path, but it enforces the same TLV grammar a
//! banking app applies, so a payload that parses and checksums here is
//! structurally sound.
//!
//! Offsets in errors and records count Unicode codepoints, matching the
//! codepoint-based length prefixes the builder emits.

use serde::Serialize;
use tracing::debug;

use crate::checksum::verify_payload;
use crate::constants::NESTED_TAGS;
use crate::error::{BrCodeError, BrCodeResult};

/// One parsed TLV field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlvField {
    /// 2-digit decimal tag.
    pub tag: String,
    /// Declared value length in codepoints.
    pub length: usize,
    /// Raw field value, nested groups included verbatim.
    pub value: String,
    /// Sub-fields for the nested group tags, empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TlvField>,
}

/// Parse a payload into its TLV fields in wire order
///
/// The trailing CRC is an ordinary TLV field (tag 63) and appears as the
/// last record. Values under the nested group tags get one level of
/// sub-field parsing; sub-fields that do not form valid TLV themselves
/// leave `children` empty rather than failing the whole parse, since a
/// foreign payload may put free text there.
pub fn parse_payload(payload: &str) -> BrCodeResult<Vec<TlvField>> {
    parse_fields(payload, true)
}

fn parse_fields(payload: &str, parse_nested: bool) -> BrCodeResult<Vec<TlvField>> {
    let chars: Vec<char> = payload.chars().collect();
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < chars.len() {
        if offset + 4 > chars.len() {
            return Err(BrCodeError::truncated_field(
                "??",
                offset,
                4,
                chars.len() - offset,
            ));
        }

        let tag: String = chars[offset..offset + 2].iter().collect();
        if !tag.chars().all(|c| c.is_ascii_digit()) {
            return Err(BrCodeError::InvalidTag { offset, found: tag });
        }

        let length_digits: String = chars[offset + 2..offset + 4].iter().collect();
        let length: usize = length_digits.parse().map_err(|_| BrCodeError::InvalidLength {
            tag: tag.clone(),
            offset: offset + 2,
            found: length_digits,
        })?;

        let value_start = offset + 4;
        let remaining = chars.len() - value_start;
        if length > remaining {
            return Err(BrCodeError::truncated_field(
                tag, value_start, length, remaining,
            ));
        }
        let value: String = chars[value_start..value_start + length].iter().collect();

        let children = if parse_nested && NESTED_TAGS.contains(&tag.as_str()) {
            parse_fields(&value, false).unwrap_or_default()
        } else {
            Vec::new()
        };

        fields.push(TlvField {
            tag,
            length,
            value,
            children,
        });
        offset = value_start + length;
    }

    Ok(fields)
}

/// Parse a payload, verify its trailing checksum, and log a human-readable
/// field breakdown
///
/// Returns the structured records so callers (and tests) can inspect the
/// breakdown instead of scraping log output.
pub fn debug_pix_payload(payload: &str) -> BrCodeResult<Vec<TlvField>> {
    verify_payload(payload)?;
    let fields = parse_payload(payload)?;

    for field in &fields {
        debug!(
            tag = %field.tag,
            length = field.length,
            value = %field.value,
            "BR Code field"
        );
        for child in &field.children {
            debug!(
                parent = %field.tag,
                tag = %child.tag,
                length = child.length,
                value = %child.value,
                "BR Code sub-field"
            );
        }
    }

    Ok(fields)
}
