//! Text rendering of a stream: display format and the base64 front-end.

use std::fmt;

use log::trace;
use whimsy_base64::{from_base64, to_base64, to_base64_pretty};

use crate::ByteStream;

/// Text encoding used when a stream is rendered without an explicit choice.
///
/// The last decode operation applied to a stream sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Hex,
    Base64,
}

impl ByteStream {
    pub fn display_format(&self) -> DisplayFormat {
        self.format
    }

    pub fn set_display_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    /// Renders the whole stream as standard base64.
    pub fn base64_encode(&self, pretty: bool) -> String {
        if pretty {
            to_base64_pretty(&self.bytes)
        } else {
            to_base64(&self.bytes)
        }
    }

    /// Appends the bytes decoded from base64 `text` and switches the display
    /// format to base64. Returns the number of bytes appended.
    ///
    /// Whitespace is skipped. Any other character outside the alphabet
    /// aborts the decode: nothing is appended and 0 is returned.
    ///
    /// ```
    /// use whimsy_buffers::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// assert_eq!(stream.base64_decode("aGk="), 2);
    /// assert_eq!(stream.base64_decode("a*k="), 0);
    /// assert_eq!(stream.as_slice(), b"hi");
    /// ```
    pub fn base64_decode(&mut self, text: &str) -> usize {
        self.format = DisplayFormat::Base64;
        match from_base64(text) {
            Ok(decoded) => {
                self.bytes.extend_from_slice(&decoded);
                decoded.len()
            }
            Err(err) => {
                trace!("base64 decode aborted: {err}");
                0
            }
        }
    }

    /// Renders the stream in `format`.
    pub fn encode(&self, format: DisplayFormat, pretty: bool) -> String {
        match format {
            DisplayFormat::Hex => self.hex_encode(pretty),
            DisplayFormat::Base64 => self.base64_encode(pretty),
        }
    }
}

impl fmt::Display for ByteStream {
    /// Pretty rendering in the stream's current display format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(self.format, true))
    }
}
