//! Little-endian hex byte encoding for 32-bit fields.
//!
//! `address` and `command` values are written as four whitespace-separated
//! hexadecimal bytes, least-significant byte first: `0x0000_0415` is
//! `15 04 00 00`. Decoding accepts either letter case and leading zeros as
//! long as each token fits one byte; encoding always emits upper-case,
//! zero-padded two-digit tokens.

use super::error::HexError;
use super::layout;

/// Decode four little-endian hex byte tokens into a `u32`.
///
/// # Examples
/// ```
/// use irfile_core::decode_le_hex32;
///
/// assert_eq!(decode_le_hex32("15 04 00 00")?, 0x0415);
/// # Ok::<(), irfile_core::HexError>(())
/// ```
pub fn decode_le_hex32(text: &str) -> Result<u32, HexError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != layout::HEX32_BYTES {
        return Err(HexError::ByteCount {
            count: tokens.len(),
        });
    }

    let mut bytes = [0u8; layout::HEX32_BYTES];
    for (slot, token) in bytes.iter_mut().zip(tokens) {
        *slot = decode_hex_byte(token)?;
    }
    Ok(u32::from_le_bytes(bytes))
}

/// Encode a `u32` as four upper-case little-endian hex byte tokens.
///
/// # Examples
/// ```
/// use irfile_core::encode_le_hex32;
///
/// assert_eq!(encode_le_hex32(0x0415), "15 04 00 00");
/// ```
pub fn encode_le_hex32(value: u32) -> String {
    let [b0, b1, b2, b3] = value.to_le_bytes();
    format!("{b0:02X} {b1:02X} {b2:02X} {b3:02X}")
}

fn decode_hex_byte(token: &str) -> Result<u8, HexError> {
    // from_str_radix tolerates a leading sign, the file format does not.
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit {
            token: token.to_string(),
        });
    }
    u8::from_str_radix(token, 16).map_err(|source| HexError::InvalidByte {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_le_hex32, encode_le_hex32};
    use crate::format::error::HexError;

    #[test]
    fn decode_little_endian_order() {
        assert_eq!(decode_le_hex32("01 02 03 04").unwrap(), 0x0403_0201);
        assert_eq!(decode_le_hex32("FF FF FF FF").unwrap(), u32::MAX);
        assert_eq!(decode_le_hex32("00 00 00 00").unwrap(), 0);
    }

    #[test]
    fn decode_accepts_lower_case_and_extra_whitespace() {
        assert_eq!(decode_le_hex32("  ab\tcd  ef 01 ").unwrap(), 0x01ef_cdab);
    }

    #[test]
    fn decode_accepts_short_and_zero_padded_tokens() {
        assert_eq!(decode_le_hex32("F 0 00F 0").unwrap(), 0x000f_000f);
    }

    #[test]
    fn decode_wrong_token_count() {
        let err = decode_le_hex32("00 00 00").unwrap_err();
        assert!(matches!(err, HexError::ByteCount { count: 3 }));

        let err = decode_le_hex32("00 00 00 00 00").unwrap_err();
        assert!(matches!(err, HexError::ByteCount { count: 5 }));

        let err = decode_le_hex32("").unwrap_err();
        assert!(matches!(err, HexError::ByteCount { count: 0 }));
    }

    #[test]
    fn decode_invalid_digit() {
        let err = decode_le_hex32("ZZ 00 00 00").unwrap_err();
        assert!(matches!(err, HexError::InvalidDigit { ref token } if token == "ZZ"));
    }

    #[test]
    fn decode_rejects_sign() {
        let err = decode_le_hex32("+1 00 00 00").unwrap_err();
        assert!(matches!(err, HexError::InvalidDigit { .. }));
    }

    #[test]
    fn decode_byte_overflow() {
        let err = decode_le_hex32("100 00 00 00").unwrap_err();
        assert!(matches!(err, HexError::InvalidByte { .. }));
        assert!(err.to_string().contains("\"100\""));
    }

    #[test]
    fn encode_upper_case_zero_padded() {
        assert_eq!(encode_le_hex32(0), "00 00 00 00");
        assert_eq!(encode_le_hex32(0x15), "15 00 00 00");
        assert_eq!(encode_le_hex32(0xdead_beef), "EF BE AD DE");
    }

    #[test]
    fn encode_then_decode_is_identity() {
        for value in [0, 1, 0xff, 0x100, 0x00ff_00ff, 0x8000_0000, u32::MAX] {
            assert_eq!(decode_le_hex32(&encode_le_hex32(value)).unwrap(), value);
        }
    }

    #[test]
    fn decode_then_encode_normalizes() {
        let value = decode_le_hex32("a 0b Cc 00").unwrap();
        assert_eq!(encode_le_hex32(value), "0A 0B CC 00");
    }
}
