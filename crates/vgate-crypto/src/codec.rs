//! Base64/hex decode helpers
//!
//! Thin wrappers over the `base64` and `hex` crates that fold their error
//! types into the parse taxonomy, keeping the underlying diagnostic as the
//! cause.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use vgate_core::{ParseError, ParseResult};

/// Decode standard-alphabet base64 (padding required).
pub fn decode_base64(input: &str) -> ParseResult<Vec<u8>> {
    STANDARD
        .decode(input)
        .map_err(|e| ParseError::invalid_format_with(format!("invalid base64: {input:?}"), e))
}

/// Encode bytes as standard-alphabet base64.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a hex string. Odd length or non-hex characters fail.
pub fn decode_hex(input: &str) -> ParseResult<Vec<u8>> {
    hex::decode(input)
        .map_err(|e| ParseError::invalid_format_with(format!("invalid hex: {input:?}"), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgate_core::ParseReason;

    #[test]
    fn test_base64_empty_decodes_to_empty() {
        assert_eq!(decode_base64("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"all your base are belong to us";
        assert_eq!(decode_base64(&encode_base64(data)).unwrap(), data);
    }

    #[test]
    fn test_base64_rejects_garbage() {
        let err = decode_base64("not valid base64!!!").unwrap_err();
        assert_eq!(err.reason(), ParseReason::InvalidFormat);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_hex_empty_decodes_to_empty() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_decodes_bytes() {
        assert_eq!(decode_hex("00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_hex_rejects_odd_length() {
        let err = decode_hex("abc").unwrap_err();
        assert_eq!(err.reason(), ParseReason::InvalidFormat);
    }

    #[test]
    fn test_hex_rejects_non_hex_characters() {
        let err = decode_hex("zz").unwrap_err();
        assert_eq!(err.reason(), ParseReason::InvalidFormat);
    }
}
