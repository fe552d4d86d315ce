//! # PIX Payload Assembler - BR Code Construction
//!
//! ## Purpose
//!
//! Composes the merchant account, amount, recipient, and reconciliation
//! fields into the final BR Code string in the order the EMV/BR Code
//! specification mandates. Reordering any field breaks compatibility with
//! every BR Code reader, so the sequence below is a hard contract, not a
//! style choice.
//!
//! ## What This Module Does NOT Do
//!
//! - No PIX key format validation - the key is passed through verbatim and
//!   validated by the receiving institution
//! - No QR image rendering - the returned string is handed to any compliant
//!   QR library by the caller
//! - No I/O, clock access, or shared state - the assembler is a pure
//!   function over its input

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::builder::TlvBuilder;
use crate::checksum::checksum_hex;
use crate::constants::*;
use crate::error::{BrCodeError, BrCodeResult};
use crate::normalize::{normalize, truncate_chars};

/// Input record for one encoding call
///
/// Caller-owned and immutable for the duration of the call; the codec holds
/// no state between calls. Recipient key/name/city typically come from the
/// caller's configuration layer, amount and txid from the checkout attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixData {
    /// PIX address: e-mail, phone, tax id, or random (EVP) key. Embedded
    /// verbatim, never normalized.
    pub key: String,
    /// Recipient display name. Normalized, limited to 25 codepoints.
    pub name: String,
    /// Recipient city. Normalized, limited to 15 codepoints.
    pub city: String,
    /// Value in reais. `None` or zero produces a reusable, amount-free code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Free-text memo. Normalized, limited to 25 codepoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reconciliation id. Limited to 25 codepoints, NOT normalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
}

/// Convert a major-unit amount to integer cents
///
/// Rounds at the third decimal first so values like 10.005, which sit just
/// below the half-cent boundary in binary floating point, still land on the
/// next cent instead of drifting down to 10.00. The range check keeps the
/// intermediate arithmetic inside i64 - infinities, NaN, and amounts past
/// the 13-character limit of field 54 are rejected rather than wrapped.
fn amount_to_cents(amount: f64) -> BrCodeResult<i64> {
    if !amount.is_finite() || !(0.0..=MAX_AMOUNT).contains(&amount) {
        return Err(BrCodeError::amount_out_of_range(amount, MAX_AMOUNT));
    }
    let millis = (amount * 1000.0).round() as i64;
    Ok((millis + 5) / 10)
}

/// Render an amount as the fixed-point 2-decimal string of field 54
fn format_amount(amount: f64) -> BrCodeResult<String> {
    let cents = amount_to_cents(amount)?;
    Ok(format!("{}.{:02}", cents / 100, cents % 100))
}

/// Assemble the complete BR Code payload for a PIX payment request
///
/// Field order: payload format (00), initiation method (01), merchant
/// account group (26), category code (52), currency (53), amount (54,
/// optional), country (58), name (59), city (60), additional data (62,
/// optional), CRC (63). The CRC16 is computed over everything assembled so
/// far including the literal `6304` prefix, then appended as 4 uppercase
/// hex digits.
///
/// Reachable errors: an oversized merchant account group, which happens
/// when the raw `key` is long enough to push the tag-26 value past 99
/// characters (every other string field is truncated below its limit
/// first), and an amount that is non-finite or past what field 54 can
/// carry.
pub fn generate_pix_payload(data: &PixData) -> BrCodeResult<String> {
    let mut merchant = TlvBuilder::new()
        .field(SUB_GUI, PIX_GUI)
        .field(SUB_KEY, data.key.as_str());
    if let Some(description) = &data.description {
        let description = normalize(description);
        merchant = merchant.field(
            SUB_DESCRIPTION,
            truncate_chars(&description, MAX_DESCRIPTION_LEN),
        );
    }

    let name = normalize(&data.name);
    let city = normalize(&data.city);

    let mut builder = TlvBuilder::new()
        .field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR)
        .field(TAG_INITIATION_METHOD, INITIATION_METHOD)
        .group(TAG_MERCHANT_ACCOUNT, merchant)?
        .field(TAG_CATEGORY_CODE, MERCHANT_CATEGORY_CODE)
        .field(TAG_CURRENCY, CURRENCY_BRL);

    if let Some(amount) = data.amount {
        if amount > 0.0 {
            builder = builder.field(TAG_AMOUNT, format_amount(amount)?);
        }
    }

    builder = builder
        .field(TAG_COUNTRY, COUNTRY_BR)
        .field(TAG_NAME, truncate_chars(&name, MAX_NAME_LEN))
        .field(TAG_CITY, truncate_chars(&city, MAX_CITY_LEN));

    if let Some(txid) = &data.txid {
        let additional = TlvBuilder::new().field(SUB_TXID, truncate_chars(txid, MAX_TXID_LEN));
        builder = builder.group(TAG_ADDITIONAL_DATA, additional)?;
    }

    let mut payload = builder.build()?;
    payload.push_str(CRC_PREFIX);
    let crc = checksum_hex(&payload);
    payload.push_str(&crc);

    trace!(len = payload.len(), crc = %crc, "assembled BR Code payload");
    Ok(payload)
}
