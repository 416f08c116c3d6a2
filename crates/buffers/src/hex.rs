//! Spaced uppercase hex text.
//!
//! Each byte prints as two uppercase digits followed by a space. The pretty
//! form additionally breaks the line after every 32nd byte.

use crate::{ByteStream, DisplayFormat};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes per line in pretty output.
const BYTES_PER_LINE: usize = 32;

/// Encodes `bytes` as spaced hex.
///
/// ```
/// use whimsy_buffers::to_hex;
///
/// assert_eq!(to_hex(&[0x00, 0xab, 0x7f], false), "00 AB 7F ");
/// ```
pub fn to_hex(bytes: &[u8], pretty: bool) -> String {
    let breaks = if pretty { bytes.len() / BYTES_PER_LINE * 2 } else { 0 };
    let mut out = String::with_capacity(bytes.len() * 3 + breaks);
    for (i, &byte) in bytes.iter().enumerate() {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        out.push(' ');
        if pretty && (i + 1) % BYTES_PER_LINE == 0 {
            out.push_str("\r\n");
        }
    }
    out
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes hex digit pairs from `text` and appends the bytes to `out`.
///
/// Spaces, tabs and line breaks are skipped, also between the two digits of
/// a pair. Decoding stops silently at the first other character; a digit
/// left without its partner is dropped. Returns the number of bytes
/// appended.
///
/// ```
/// use whimsy_buffers::from_hex;
///
/// let mut out = Vec::new();
/// assert_eq!(from_hex("de AD\r\nbe-ef", &mut out), 3);
/// assert_eq!(out, [0xde, 0xad, 0xbe]);
/// ```
pub fn from_hex(text: &str, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    let mut high: Option<u8> = None;
    for &c in text.as_bytes() {
        if matches!(c, b' ' | b'\t' | b'\r' | b'\n') {
            continue;
        }
        let Some(digit) = nibble(c) else {
            break;
        };
        match high.take() {
            Some(h) => out.push((h << 4) | digit),
            None => high = Some(digit),
        }
    }
    out.len() - start
}

impl ByteStream {
    /// Renders the whole stream as spaced hex.
    pub fn hex_encode(&self, pretty: bool) -> String {
        to_hex(&self.bytes, pretty)
    }

    /// Appends the bytes decoded from `text` and switches the display format
    /// to hex. Returns the number of bytes appended.
    ///
    /// ```
    /// use whimsy_buffers::{ByteStream, DisplayFormat};
    ///
    /// let mut stream = ByteStream::from(vec![0x01]);
    /// assert_eq!(stream.hex_decode("02 03"), 2);
    /// assert_eq!(stream.as_slice(), &[0x01, 0x02, 0x03]);
    /// assert_eq!(stream.display_format(), DisplayFormat::Hex);
    /// ```
    pub fn hex_decode(&mut self, text: &str) -> usize {
        self.format = DisplayFormat::Hex;
        from_hex(text, &mut self.bytes)
    }
}
