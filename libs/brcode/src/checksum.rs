//! CRC16-CCITT Checksum Validation
//!
//! Trailing integrity checksum for BR Code payloads. The exact
//! parameterization (polynomial 0x1021, initial value 0xFFFF, no final XOR)
//! is the compatibility-critical contract: banking apps recompute this
//! checksum before accepting a scanned code as a payment request, so a
//! single differing bit makes the payload unreadable.

use crate::constants::MIN_PAYLOAD_LEN;
use crate::error::{BrCodeError, BrCodeResult};

/// Advance the register by one input byte
#[inline]
fn crc16_step(mut crc: u16, byte: u8) -> u16 {
    crc ^= (byte as u16) << 8;
    for _ in 0..8 {
        if crc & 0x8000 != 0 {
            crc = (crc << 1) ^ 0x1021;
        } else {
            crc <<= 1;
        }
    }
    crc
}

/// Calculate the CRC16-CCITT checksum of a byte buffer
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFF, |crc, &byte| crc16_step(crc, byte))
}

/// Format a checksum as the 4 uppercase hex digits BR Code mandates
pub fn format_crc16(crc: u16) -> String {
    format!("{crc:04X}")
}

/// Calculate and format the checksum of a payload fragment in one step
pub fn checksum_hex(payload: &str) -> String {
    format_crc16(crc16(payload.as_bytes()))
}

/// Verify the trailing checksum of a fully assembled payload
///
/// Recomputes CRC16 over everything before the final 4 characters
/// (including the literal `6304` that announces the CRC field) and compares
/// it against the trailer.
pub fn verify_payload(payload: &str) -> BrCodeResult<()> {
    let split = payload.len().wrapping_sub(4);
    if payload.len() < MIN_PAYLOAD_LEN || !payload.is_char_boundary(split) {
        return Err(BrCodeError::PayloadTooSmall {
            need: MIN_PAYLOAD_LEN,
            got: payload.len(),
        });
    }

    let (body, expected) = payload.split_at(split);
    let calculated = checksum_hex(body);
    if expected != calculated {
        return Err(BrCodeError::checksum_mismatch(expected, calculated));
    }
    Ok(())
}

/// Streaming checksum calculator for piecewise payload assembly
pub struct StreamingCrc16 {
    crc: u16,
}

impl StreamingCrc16 {
    pub fn new() -> Self {
        Self { crc: 0xFFFF }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.crc = data
            .iter()
            .fold(self.crc, |crc, &byte| crc16_step(crc, byte));
    }

    pub fn finalize(self) -> u16 {
        self.crc
    }

    pub fn reset(&mut self) {
        self.crc = 0xFFFF;
    }
}

impl Default for StreamingCrc16 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // Standard CRC16-CCITT/XMODEM-family cross-check, independent of
        // any payload produced by this crate.
        assert_eq!(crc16(b"123456789"), 0x31C3);
        assert_eq!(checksum_hex("123456789"), "31C3");
    }

    #[test]
    fn test_determinism_and_sensitivity() {
        let data = b"00020126330014br.gov.bcb.pix";
        assert_eq!(crc16(data), crc16(data));

        let other = b"00020126330014br.gov.bcb.piy";
        assert_ne!(crc16(data), crc16(other));
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_crc16(0x001F), "001F");
        assert_eq!(format_crc16(0x0000), "0000");
        assert_eq!(format_crc16(0xFFFF), "FFFF");
    }

    #[test]
    fn test_verify_round_trip() {
        let mut payload = String::from("000201520400005303986");
        payload.push_str("6304");
        let crc = checksum_hex(&payload);
        payload.push_str(&crc);

        assert!(verify_payload(&payload).is_ok());

        // Flip one character and verification must fail
        let corrupted = payload.replacen("986", "987", 1);
        assert!(matches!(
            verify_payload(&corrupted),
            Err(BrCodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_short_input() {
        assert!(matches!(
            verify_payload("6304"),
            Err(BrCodeError::PayloadTooSmall { .. })
        ));
        assert!(matches!(
            verify_payload(""),
            Err(BrCodeError::PayloadTooSmall { .. })
        ));
    }

    #[test]
    fn test_streaming_matches_direct() {
        let part1 = b"000201";
        let part2 = b"26330014br.gov.bcb.pix6304";
        let combined = b"00020126330014br.gov.bcb.pix6304";

        let mut streaming = StreamingCrc16::new();
        streaming.update(part1);
        streaming.update(part2);
        assert_eq!(streaming.finalize(), crc16(combined));
    }

    #[test]
    fn test_streaming_reset() {
        let data = b"payload under test";

        let mut hasher = StreamingCrc16::new();
        hasher.update(data);
        let first = hasher.finalize();

        let mut hasher = StreamingCrc16::new();
        hasher.update(b"unrelated bytes");
        hasher.reset();
        hasher.update(data);
        assert_eq!(hasher.finalize(), first);
    }
}
