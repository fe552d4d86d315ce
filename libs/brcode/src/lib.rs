//! # BR Code Codec - PIX Payment Payload Construction
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer for PIX BR Code payloads:
//! - EMV tag-length-value field encoding and ordered payload assembly
//! - Text normalization for the string fields the spec folds to uppercase
//! - CRC16-CCITT trailing checksum (compute, verify, streaming)
//! - TLV grammar parsing for diagnostics and round-trip verification
//!
//! ## Architecture Role
//!
//! ```text
//! Checkout flow → [brcode] → BR Code string → QR renderer / copy-paste
//!      ↑              ↓             ↓               ↓
//! PixData input  TLV assembly  CRC16 trailer   Banking app
//! (key, amount)  fixed order   uppercase hex   validates CRC
//! ```
//!
//! ## What This Crate Contains
//! - `PixData` input record and `generate_pix_payload` assembler
//! - `TlvBuilder` ordered field builder with nested-group support
//! - CRC16-CCITT checksum functions bit-exact with the EMV parameterization
//! - `parse_payload`/`debug_pix_payload` structural inspection
//! - Protocol constants (tags, fixed values, field limits)
//!
//! ## What This Crate Does NOT Contain
//! - PIX key format validation (the receiving institution's job)
//! - QR image rendering (any compliant QR library consumes the output)
//! - Payment provider integration, persistence, or network transport
//!
//! ## Concurrency
//!
//! Every public function is pure: no I/O, no clock, no shared mutable
//! state. Concurrent calls are independent and require no coordination.

pub mod builder;
pub mod checksum;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod payload;

// Re-export the public API at the crate root for convenience
pub use builder::{encode_field, TlvBuilder};
pub use checksum::{checksum_hex, crc16, format_crc16, verify_payload, StreamingCrc16};
pub use constants::*;
pub use error::{BrCodeError, BrCodeResult};
pub use normalize::{normalize, truncate_chars};
pub use parser::{debug_pix_payload, parse_payload, TlvField};
pub use payload::{generate_pix_payload, PixData};
