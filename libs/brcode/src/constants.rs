//! # BR Code Protocol Constants
//!
//! ## Purpose
//!
//! Central registry of the EMV/BR Code constants used throughout the codec.
//! Tag numbers, fixed field values, and field length limits are mandated by
//! the Banco Central do Brasil BR Code specification (itself derived from the
//! EMV QR Code specification) and must remain stable - any deviation produces
//! payloads that banking apps reject or mis-parse.
//!
//! ## Integration Points
//!
//! - **Payload Assembly**: tags and fixed values drive the mandated field order
//! - **Parsing**: nested-group tags select one level of sub-field parsing
//! - **Validation**: length limits bound every value before TLV encoding

/// Tag 00 - payload format indicator, always first.
pub const TAG_PAYLOAD_FORMAT: &str = "00";
/// Tag 01 - point-of-initiation method.
pub const TAG_INITIATION_METHOD: &str = "01";
/// Tag 26 - merchant account information (nested PIX group).
pub const TAG_MERCHANT_ACCOUNT: &str = "26";
/// Tag 52 - merchant category code.
pub const TAG_CATEGORY_CODE: &str = "52";
/// Tag 53 - transaction currency (ISO 4217 numeric).
pub const TAG_CURRENCY: &str = "53";
/// Tag 54 - transaction amount (optional).
pub const TAG_AMOUNT: &str = "54";
/// Tag 58 - country code.
pub const TAG_COUNTRY: &str = "58";
/// Tag 59 - merchant/recipient display name.
pub const TAG_NAME: &str = "59";
/// Tag 60 - merchant/recipient city.
pub const TAG_CITY: &str = "60";
/// Tag 62 - additional data field template (nested, carries the txid).
pub const TAG_ADDITIONAL_DATA: &str = "62";
/// Tag 63 - trailing CRC16 field, always last.
pub const TAG_CRC: &str = "63";

/// Sub-tag 00 under tag 26 - arranger GUI.
pub const SUB_GUI: &str = "00";
/// Sub-tag 01 under tag 26 - PIX key.
pub const SUB_KEY: &str = "01";
/// Sub-tag 02 under tag 26 - free-text description.
pub const SUB_DESCRIPTION: &str = "02";
/// Sub-tag 05 under tag 62 - transaction/reconciliation id.
pub const SUB_TXID: &str = "05";

/// Fixed value of tag 00.
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";
/// Fixed value of tag 01. Emitted for both amount-bearing and reusable
/// codes; BR Code readers in the wild accept "12" uniformly.
pub const INITIATION_METHOD: &str = "12";
/// Arranger GUI identifying the payload as a PIX payment request.
pub const PIX_GUI: &str = "br.gov.bcb.pix";
/// Fixed value of tag 52 - category code is unused by PIX.
pub const MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";
/// Fixed value of tag 58.
pub const COUNTRY_BR: &str = "BR";

/// Literal announcing the CRC field: tag 63 plus its fixed length 04.
/// The checksum is computed over the payload *including* this prefix.
pub const CRC_PREFIX: &str = "6304";

/// Maximum value length representable by the 2-digit decimal length prefix.
pub const MAX_FIELD_LEN: usize = 99;
/// Recipient name limit (tag 59), applied after normalization.
pub const MAX_NAME_LEN: usize = 25;
/// Recipient city limit (tag 60), applied after normalization.
pub const MAX_CITY_LEN: usize = 15;
/// Description limit (sub-tag 02 under tag 26), applied after normalization.
pub const MAX_DESCRIPTION_LEN: usize = 25;
/// Transaction id limit (sub-tag 05 under tag 62). Not normalized.
pub const MAX_TXID_LEN: usize = 25;

/// Largest encodable amount: field 54 caps at 13 characters, i.e. ten
/// integer digits plus ".99".
pub const MAX_AMOUNT: f64 = 9_999_999_999.99;

/// Smallest structurally possible payload: one empty field plus the CRC
/// field ("6304" + 4 hex digits).
pub const MIN_PAYLOAD_LEN: usize = 12;

/// Tags whose values are themselves TLV-encoded and get one level of
/// sub-field parsing.
pub const NESTED_TAGS: [&str; 2] = [TAG_MERCHANT_ACCOUNT, TAG_ADDITIONAL_DATA];
