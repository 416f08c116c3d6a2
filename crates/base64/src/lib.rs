//! Base64 encoding and decoding utilities.
//!
//! This crate provides the standard-alphabet base64 codec used by
//! `whimsy-buffers`:
//! - Standard base64 with `=` padding
//! - "Pretty" output with a `\r\n` after every 80 encoded characters
//! - Lenient decoding that skips whitespace but rejects any other
//!   character outside the alphabet
//!
//! # Example
//!
//! ```
//! use whimsy_base64::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, LINE_WIDTH, PAD};
pub use from_base64::from_base64;
pub use to_base64::{to_base64, to_base64_pretty};

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains a character that is neither part of the
    /// alphabet, padding, nor whitespace. Carries its byte offset.
    InvalidBase64String(usize),
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidBase64String(offset) => {
                write!(f, "INVALID_BASE64_STRING at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for Base64Error {}
