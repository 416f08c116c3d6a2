//! Lenient standard base64 decoding.

use crate::Base64Error;

const PADDING: i8 = -2;
const WHITESPACE: i8 = -3;
const INVALID: i8 = -1;

/// Reverse lookup table: alphabet characters map to their sextet, the rest
/// to one of the negative markers above.
static TABLE: [i8; 256] = {
    let mut table = [INVALID; 256];
    let alphabet = crate::constants::ALPHABET_BYTES;
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    table[b'=' as usize] = PADDING;
    table[b' ' as usize] = WHITESPACE;
    table[b'\t' as usize] = WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table[b'\r' as usize] = WHITESPACE;
    table
};

/// Decodes a standard base64 string.
///
/// Whitespace anywhere in the input is skipped. Any other character outside
/// the alphabet aborts decoding with [`Base64Error::InvalidBase64String`];
/// nothing is returned for the groups decoded before it. The first group
/// carrying `=` padding ends the input, and a trailing group of fewer than
/// four characters is ignored.
///
/// # Example
///
/// ```
/// use whimsy_base64::from_base64;
///
/// assert_eq!(from_base64("aGVs\r\nbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVs!G8=").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let mut buf = Vec::with_capacity(encoded.len() / 4 * 3);
    let mut pack: u32 = 0;
    let mut chars = 0;
    let mut padding = 0;

    for (i, &byte) in encoded.as_bytes().iter().enumerate() {
        let code = TABLE[byte as usize];
        match code {
            WHITESPACE => continue,
            INVALID => return Err(Base64Error::InvalidBase64String(i)),
            _ => {}
        }

        pack <<= 6;
        if code == PADDING {
            padding += 1;
        } else {
            pack |= code as u32;
        }

        chars += 1;
        if chars == 4 {
            let group = [(pack >> 16) as u8, (pack >> 8) as u8, pack as u8];
            let take = 3usize.saturating_sub(padding);
            buf.extend_from_slice(&group[..take]);
            if padding != 0 {
                break;
            }
            pack = 0;
            chars = 0;
        }
    }

    Ok(buf)
}
