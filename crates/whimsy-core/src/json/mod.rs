//! The whimsy JSON text dialect.
//!
//! Standard JSON, plus three tags recognized at the start of a string
//! value: `@` marks a note, `=` a base64 blob and `#` a hex blob. Strings
//! are neither escaped on output nor unescaped on input: a backslash only
//! protects the character after it from ending the string.

mod decoder;
mod encoder;

use std::str::FromStr;

use whimsy_buffers::ByteStream;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;

use crate::{Error, Note, Result, Value};

/// Builds the value for the body of a string literal, honoring the tags.
///
/// A blob whose payload does not decode cleanly keeps the bytes decoded
/// before the fault (hex) or none at all (base64).
pub(crate) fn decode_tagged_string(body: &str) -> Value {
    if let Some(note) = body.strip_prefix('@') {
        Value::from(Note::parse(note))
    } else if let Some(b64) = body.strip_prefix('=') {
        let mut blob = ByteStream::new();
        blob.base64_decode(b64);
        Value::from(blob)
    } else if let Some(hex) = body.strip_prefix('#') {
        let mut blob = ByteStream::new();
        blob.hex_decode(hex);
        Value::from(blob)
    } else {
        Value::from(body)
    }
}

impl Value {
    /// Parses a JSON document.
    pub fn from_json(text: &str) -> Result<Value> {
        JsonDecoder::new(text).decode()
    }

    /// Compact JSON: `[1, 2]`, `{"k": v}`.
    pub fn to_json(&self) -> String {
        JsonEncoder::new(false).encode(self)
    }

    /// JSON with one element per line and four spaces of indentation per
    /// nesting level.
    pub fn to_json_pretty(&self) -> String {
        JsonEncoder::new(true).encode(self)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Value::from_json(s)
    }
}
