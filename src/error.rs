//! # Error Types
//!
//! Custom error types for the RockBLOCK decoder using `thiserror`.

use thiserror::Error;

/// Main error type for the RockBLOCK decoder
#[derive(Debug, Error)]
pub enum DecoderError {
    /// Input is not exactly 100 hexadecimal characters (50 bytes)
    #[error("invalid input length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input contains a character outside `[0-9a-fA-F]`
    #[error("invalid character '{character}' at position {position}: input must be hexadecimal")]
    InvalidCharacter { character: char, position: usize },

    /// A two-character pair could not be parsed as a base-16 byte
    ///
    /// Defensive only: validation rejects non-hex characters before any
    /// pair is parsed.
    #[error("malformed hex pair \"{pair}\" at byte index {index}")]
    MalformedHexPair { pair: String, index: usize },

    /// A field read past the end of the payload
    ///
    /// Contract violation: cannot occur once the input passed exact-length
    /// validation.
    #[error("byte offset {offset} out of range for {len}-byte payload")]
    OutOfRange { offset: usize, len: usize },

    /// A RockBLOCK message body is missing an essential field
    #[error("message body is missing the \"{0}\" field")]
    MissingField(&'static str),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the RockBLOCK decoder
pub type Result<T> = std::result::Result<T, DecoderError>;
