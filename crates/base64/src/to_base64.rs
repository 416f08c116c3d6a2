//! Standard base64 encoding functions.

use crate::constants::{ALPHABET_BYTES, LINE_WIDTH, PAD};

/// Pre-computed two-character lookup table for base64 encoding.
/// Each entry is two bytes (big-endian) representing two base64 characters.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use whimsy_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    encode(uint8, false)
}

/// Encodes a byte slice to base64, inserting `\r\n` after every 80th
/// output character (the line break follows a full line even when it is
/// the last one).
///
/// ```
/// use whimsy_base64::to_base64_pretty;
///
/// let encoded = to_base64_pretty(&[0u8; 60]);
/// assert_eq!(encoded.len(), 82);
/// assert!(encoded.ends_with("\r\n"));
/// ```
pub fn to_base64_pretty(uint8: &[u8]) -> String {
    encode(uint8, true)
}

fn encode(uint8: &[u8], pretty: bool) -> String {
    let length = uint8.len();
    let groups = (length + 2) / 3;
    let mut out = String::with_capacity(groups * 4 + (groups * 4 / LINE_WIDTH) * 2);

    let extra_length = length % 3;
    let base_length = length - extra_length;
    let mut line = 0;

    let mut i = 0;
    while i < base_length {
        let o1 = uint8[i];
        let o2 = uint8[i + 1];
        let o3 = uint8[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        out.push(TABLE2[v1][0] as char);
        out.push(TABLE2[v1][1] as char);
        out.push(TABLE2[v2][0] as char);
        out.push(TABLE2[v2][1] as char);
        i += 3;

        if pretty {
            line = wrap(&mut out, line);
        }
    }

    if extra_length == 0 {
        return out;
    }

    if extra_length == 1 {
        let o1 = uint8[base_length];
        let v1 = (o1 as usize) << 4;
        out.push(TABLE2[v1][0] as char);
        out.push(TABLE2[v1][1] as char);
        out.push(PAD);
        out.push(PAD);
    } else {
        // extra_length == 2
        let o1 = uint8[base_length];
        let o2 = uint8[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        out.push(TABLE2[v1][0] as char);
        out.push(TABLE2[v1][1] as char);
        out.push(ALPHABET_BYTES[v2] as char);
        out.push(PAD);
    }

    if pretty {
        wrap(&mut out, line);
    }

    out
}

#[inline]
fn wrap(out: &mut String, line: usize) -> usize {
    let line = line + 4;
    if line == LINE_WIDTH {
        out.push_str("\r\n");
        0
    } else {
        line
    }
}
