//! MIDI variable-length quantities.
//!
//! A quantity is stored as 7-bit groups, most significant first. Every byte
//! except the last has its high bit set. Four bytes carry at most 28 bits.

use crate::{BufferError, ByteStream};

/// Largest value representable in a four byte variable-length quantity.
pub const MIDI_VAR_LEN_MAX: u32 = 0x0fff_ffff;

const MAX_BYTES: usize = 4;

impl ByteStream {
    /// Appends `value` as a MIDI variable-length quantity of one to four
    /// bytes. Bits above the 28th are discarded.
    ///
    /// ```
    /// use whimsy_buffers::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.add_midi_var_len(0x40).add_midi_var_len(0x3fff);
    /// assert_eq!(stream.as_slice(), &[0x40, 0xff, 0x7f]);
    /// ```
    pub fn add_midi_var_len(&mut self, value: u32) -> &mut Self {
        let value = value & MIDI_VAR_LEN_MAX;
        let mut groups = [0u8; MAX_BYTES];
        let mut n = 0;
        let mut rest = value;
        loop {
            groups[n] = (rest & 0x7f) as u8;
            n += 1;
            rest >>= 7;
            if rest == 0 {
                break;
            }
        }
        for i in (0..n).rev() {
            let continuation = if i == 0 { 0x00 } else { 0x80 };
            self.bytes.push(groups[i] | continuation);
        }
        self
    }

    /// Reads a MIDI variable-length quantity at the cursor.
    ///
    /// At most four bytes are consumed; the fourth byte ends the quantity
    /// whatever its high bit. Running out of bytes before the final byte is
    /// an error and leaves the cursor where it was.
    pub fn get_midi_var_len(&mut self) -> Result<u32, BufferError> {
        let mut value: u32 = 0;
        let mut x = self.cursor;
        for i in 0..MAX_BYTES {
            let Some(&byte) = self.bytes.get(x) else {
                return Err(BufferError::ArrayOutOfBounds {
                    offset: x + 1,
                    len: self.bytes.len(),
                });
            };
            x += 1;
            value = (value << 7) | u32::from(byte & 0x7f);
            if byte & 0x80 == 0 || i == MAX_BYTES - 1 {
                break;
            }
        }
        self.cursor = x;
        Ok(value)
    }
}
