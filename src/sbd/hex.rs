//! # Hex Input Handling
//!
//! Validates the 100-character hexadecimal input and converts it to and
//! from the raw 50-byte payload.

use super::layout::{RawBytes, SBD_HEX_INPUT_LEN, SBD_PAYLOAD_SIZE};
use crate::error::{DecoderError, Result};

/// Validate a candidate telemetry input string
///
/// Accepts only strings of exactly 100 hexadecimal characters
/// (case-insensitive). The original ground software checked only an upper
/// bound and let short inputs fail deep inside field extraction; the
/// exact-length check here is what keeps every later offset access in
/// bounds.
///
/// # Errors
///
/// Returns error if:
/// - Length is not exactly 100 characters
/// - Any character is outside `[0-9a-fA-F]`
pub fn validate(input: &str) -> Result<()> {
    if input.len() != SBD_HEX_INPUT_LEN {
        return Err(DecoderError::InvalidLength {
            expected: SBD_HEX_INPUT_LEN,
            actual: input.len(),
        });
    }

    for (position, character) in input.chars().enumerate() {
        if !character.is_ascii_hexdigit() {
            return Err(DecoderError::InvalidCharacter { character, position });
        }
    }

    Ok(())
}

/// Convert a validated hex string into the raw 50-byte payload
///
/// Characters are paired left-to-right and each pair parsed as a base-16
/// unsigned byte.
///
/// # Errors
///
/// Returns error if validation fails. `MalformedHexPair` is defensive
/// only; it cannot fire on input that passed [`validate`].
pub fn decode_hex(input: &str) -> Result<RawBytes> {
    validate(input)?;

    let mut bytes = [0u8; SBD_PAYLOAD_SIZE];
    for (index, byte) in bytes.iter_mut().enumerate() {
        let pair = &input[index * 2..index * 2 + 2];
        *byte = u8::from_str_radix(pair, 16).map_err(|_| {
            DecoderError::MalformedHexPair {
                pair: pair.to_string(),
                index,
            }
        })?;
    }

    Ok(bytes)
}

/// Encode bytes as an uppercase hex string
///
/// Companion of [`decode_hex`]; used for the hex echo line and the
/// round-trip property.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push_str(&format!("{:02X}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> String {
        "AB".repeat(SBD_PAYLOAD_SIZE)
    }

    #[test]
    fn test_validate_accepts_exact_length() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        let input = "aB".repeat(SBD_PAYLOAD_SIZE);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_input() {
        // The original's `> 100` check let these through; we must not
        let result = validate(&"AB".repeat(49));
        match result {
            Err(DecoderError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 100);
                assert_eq!(actual, 98);
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_long_input() {
        assert!(matches!(
            validate(&"AB".repeat(51)),
            Err(DecoderError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        assert!(matches!(
            validate(""),
            Err(DecoderError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_hex_character() {
        let mut input = valid_input();
        input.replace_range(42..43, "G");
        match validate(&input) {
            Err(DecoderError::InvalidCharacter { character, position }) => {
                assert_eq!(character, 'G');
                assert_eq!(position, 42);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_hex_pairs_left_to_right() {
        let mut input = String::from("0102FF");
        input.push_str(&"00".repeat(SBD_PAYLOAD_SIZE - 3));
        let bytes = decode_hex(&input).unwrap();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[1], 0x02);
        assert_eq!(bytes[2], 0xFF);
        assert_eq!(bytes[3], 0x00);
    }

    #[test]
    fn test_hex_round_trip() {
        let mut original = [0u8; SBD_PAYLOAD_SIZE];
        for (i, byte) in original.iter_mut().enumerate() {
            *byte = (i * 5 + 3) as u8;
        }

        let hex = encode_hex(&original);
        let decoded = decode_hex(&hex).unwrap();
        assert_eq!(decoded, original);

        // Round trip is case-insensitive
        let decoded_lower = decode_hex(&hex.to_lowercase()).unwrap();
        assert_eq!(decoded_lower, original);
    }

    #[test]
    fn test_encode_hex_zero_padded() {
        assert_eq!(encode_hex(&[0x00, 0x0A, 0xF0]), "000AF0");
    }
}
