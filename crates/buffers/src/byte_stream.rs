//! Growable byte buffer with a read cursor.

use crate::{BufferError, Chunk, DisplayFormat, Primitive};

/// An ordered, growable sequence of bytes with a read cursor.
///
/// Writes always append at the end. Reads copy bytes starting at the cursor
/// and advance it; a read that would need more bytes than are stored fails
/// with [`BufferError::ArrayOutOfBounds`] and leaves the cursor untouched.
/// The cursor never exceeds the stored length.
///
/// # Example
///
/// ```
/// use whimsy_buffers::ByteStream;
///
/// let mut stream = ByteStream::new();
/// stream.add_int_little_endian(-2).add_word_big_endian(0xbeef);
///
/// assert_eq!(stream.get_int_little_endian().unwrap(), -2);
/// assert_eq!(stream.get_word_big_endian().unwrap(), 0xbeef);
/// assert_eq!(stream.tell(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteStream {
    pub(crate) bytes: Vec<u8>,
    /// Read position, always `<= bytes.len()`.
    pub(crate) cursor: usize,
    pub(crate) format: DisplayFormat,
}

impl ByteStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Number of stored bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Drops every byte and rewinds the cursor.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.cursor = 0;
    }

    /// Number of bytes between the cursor and the end of the stream.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    // -----------------------------------------------------------------------
    // Appending
    // -----------------------------------------------------------------------

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.bytes.push(byte);
        self
    }

    /// Appends every byte of `slice`.
    pub fn push_slice(&mut self, slice: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(slice);
        self
    }

    /// Appends one item: a byte, a string, a byte slice or another stream.
    pub fn add<C: Chunk + ?Sized>(&mut self, chunk: &C) -> &mut Self {
        chunk.append_to(&mut self.bytes);
        self
    }

    /// Appends a mixed list of items in order.
    ///
    /// ```
    /// use whimsy_buffers::ByteStream;
    ///
    /// let tail = ByteStream::from(vec![0xffu8]);
    /// let mut stream = ByteStream::new();
    /// stream.add_items(&[&0x01u8, &"ab", &tail]);
    /// assert_eq!(stream.as_slice(), &[0x01, b'a', b'b', 0xff]);
    /// ```
    pub fn add_items(&mut self, items: &[&dyn Chunk]) -> &mut Self {
        for item in items {
            item.append_to(&mut self.bytes);
        }
        self
    }

    /// Appends the raw bytes of `value` in host byte order.
    pub fn add_variable<T: Primitive>(&mut self, value: T) -> &mut Self {
        value.append_ne(&mut self.bytes);
        self
    }

    pub fn add_variable_big_endian<T: Primitive>(&mut self, value: T) -> &mut Self {
        value.append_be(&mut self.bytes);
        self
    }

    pub fn add_variable_little_endian<T: Primitive>(&mut self, value: T) -> &mut Self {
        value.append_le(&mut self.bytes);
        self
    }

    /// Appends a 32-bit integer in host byte order.
    pub fn add_int(&mut self, number: i32) -> &mut Self {
        self.add_variable(number)
    }

    pub fn add_int_big_endian(&mut self, number: i32) -> &mut Self {
        self.add_variable_big_endian(number)
    }

    pub fn add_int_little_endian(&mut self, number: i32) -> &mut Self {
        self.add_variable_little_endian(number)
    }

    /// Appends a 16-bit word in host byte order.
    pub fn add_word(&mut self, number: u16) -> &mut Self {
        self.add_variable(number)
    }

    pub fn add_word_big_endian(&mut self, number: u16) -> &mut Self {
        self.add_variable_big_endian(number)
    }

    pub fn add_word_little_endian(&mut self, number: u16) -> &mut Self {
        self.add_variable_little_endian(number)
    }

    // -----------------------------------------------------------------------
    // Cursor reads
    // -----------------------------------------------------------------------

    /// Checks that `n` more bytes are available from the current cursor.
    #[inline]
    pub(crate) fn check(&self, n: usize) -> Result<(), BufferError> {
        match self.cursor.checked_add(n) {
            Some(offset) if offset <= self.bytes.len() => Ok(()),
            offset => Err(BufferError::ArrayOutOfBounds {
                offset: offset.unwrap_or(usize::MAX),
                len: self.bytes.len(),
            }),
        }
    }

    /// Returns the next `size` bytes and advances the cursor past them.
    pub fn get_bytes(&mut self, size: usize) -> Result<&[u8], BufferError> {
        self.check(size)?;
        let x = self.cursor;
        self.cursor += size;
        Ok(&self.bytes[x..x + size])
    }

    /// Reads `T::SIZE` bytes in host byte order.
    pub fn get_variable<T: Primitive>(&mut self) -> Result<T, BufferError> {
        self.get_bytes(T::SIZE).map(T::from_ne_slice)
    }

    pub fn get_variable_big_endian<T: Primitive>(&mut self) -> Result<T, BufferError> {
        self.get_bytes(T::SIZE).map(T::from_be_slice)
    }

    pub fn get_variable_little_endian<T: Primitive>(&mut self) -> Result<T, BufferError> {
        self.get_bytes(T::SIZE).map(T::from_le_slice)
    }

    /// Reads a 32-bit integer in host byte order.
    pub fn get_int(&mut self) -> Result<i32, BufferError> {
        self.get_variable()
    }

    pub fn get_int_big_endian(&mut self) -> Result<i32, BufferError> {
        self.get_variable_big_endian()
    }

    pub fn get_int_little_endian(&mut self) -> Result<i32, BufferError> {
        self.get_variable_little_endian()
    }

    /// Reads a 16-bit word in host byte order.
    pub fn get_word(&mut self) -> Result<u16, BufferError> {
        self.get_variable()
    }

    pub fn get_word_big_endian(&mut self) -> Result<u16, BufferError> {
        self.get_variable_big_endian()
    }

    pub fn get_word_little_endian(&mut self) -> Result<u16, BufferError> {
        self.get_variable_little_endian()
    }

    // -----------------------------------------------------------------------
    // Cursor positioning
    // -----------------------------------------------------------------------

    /// Moves the cursor back to the first byte.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Places the cursor at `pos`, which must address a stored byte.
    pub fn seek_set(&mut self, pos: usize) -> Result<(), BufferError> {
        if pos >= self.bytes.len() {
            return Err(BufferError::ArrayOutOfBounds {
                offset: pos,
                len: self.bytes.len(),
            });
        }
        self.cursor = pos;
        Ok(())
    }

    /// Moves the cursor `offset` bytes forward; the new position must
    /// address a stored byte.
    pub fn seek_cur(&mut self, offset: usize) -> Result<(), BufferError> {
        let pos = self
            .cursor
            .checked_add(offset)
            .ok_or(BufferError::ArrayOutOfBounds {
                offset: usize::MAX,
                len: self.bytes.len(),
            })?;
        self.seek_set(pos)
    }

    /// Current cursor position.
    pub fn tell(&self) -> usize {
        self.cursor
    }
}

impl PartialEq for ByteStream {
    /// Streams are equal when they hold the same bytes; cursor and display
    /// format are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteStream {}

impl From<Vec<u8>> for ByteStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            ..Self::default()
        }
    }
}

impl From<&[u8]> for ByteStream {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read_bytes() {
        let mut stream = ByteStream::new();
        stream.push(0x01).push(0x02).push(0x03);
        assert_eq!(stream.get_variable::<u8>().unwrap(), 0x01);
        assert_eq!(stream.get_bytes(2).unwrap(), &[0x02, 0x03]);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_big_endian_layout() {
        let mut stream = ByteStream::new();
        stream.add_int_big_endian(0x0102_0304).add_word_big_endian(0x0506);
        assert_eq!(stream.as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut stream = ByteStream::new();
        stream.add_int_little_endian(0x0102_0304).add_word_little_endian(0x0506);
        assert_eq!(stream.as_slice(), &[0x04, 0x03, 0x02, 0x01, 0x06, 0x05]);
    }

    #[test]
    fn test_native_order_matches_host() {
        let mut stream = ByteStream::new();
        stream.add_int(-123_456).add_word(0xbeef);
        let mut expected = (-123_456i32).to_ne_bytes().to_vec();
        expected.extend_from_slice(&0xbeefu16.to_ne_bytes());
        assert_eq!(stream.as_slice(), expected.as_slice());

        assert_eq!(stream.get_int().unwrap(), -123_456);
        assert_eq!(stream.get_word().unwrap(), 0xbeef);
    }

    #[test]
    fn test_opposite_order_reads() {
        let mut stream = ByteStream::new();
        stream.add_int_big_endian(-7).add_word_little_endian(0x1234);
        assert_eq!(stream.get_int_big_endian().unwrap(), -7);
        assert_eq!(stream.get_word_little_endian().unwrap(), 0x1234);
    }

    #[test]
    fn test_variable_roundtrip() {
        let mut stream = ByteStream::new();
        stream
            .add_variable(1.5f64)
            .add_variable_big_endian(-9_999_999_999i64)
            .add_variable_little_endian(0.25f32);
        assert_eq!(stream.len(), 20);
        assert_eq!(stream.get_variable::<f64>().unwrap(), 1.5);
        assert_eq!(stream.get_variable_big_endian::<i64>().unwrap(), -9_999_999_999);
        assert_eq!(stream.get_variable_little_endian::<f32>().unwrap(), 0.25);
    }

    #[test]
    fn test_read_past_end_fails_without_moving() {
        let mut stream = ByteStream::from(vec![0x01, 0x02, 0x03]);
        assert!(matches!(
            stream.get_int(),
            Err(BufferError::ArrayOutOfBounds { offset: 4, len: 3 })
        ));
        assert_eq!(stream.tell(), 0);

        stream.seek_set(2).unwrap();
        assert!(stream.get_word().is_err());
        assert_eq!(stream.tell(), 2);
        assert_eq!(stream.get_variable::<u8>().unwrap(), 0x03);
        assert!(stream.get_variable::<u8>().is_err());
    }

    #[test]
    fn test_seek() {
        let mut stream = ByteStream::from(vec![10, 20, 30, 40]);
        stream.seek_set(1).unwrap();
        assert_eq!(stream.tell(), 1);
        stream.seek_cur(2).unwrap();
        assert_eq!(stream.get_variable::<u8>().unwrap(), 40);

        stream.rewind();
        assert_eq!(stream.tell(), 0);
        assert!(stream.seek_set(4).is_err());
        assert!(stream.seek_cur(4).is_err());
        assert_eq!(stream.tell(), 0);
    }

    #[test]
    fn test_huge_offsets_are_out_of_bounds() {
        let mut stream = ByteStream::from(vec![1, 2, 3]);
        stream.seek_set(1).unwrap();
        assert!(matches!(
            stream.seek_cur(usize::MAX),
            Err(BufferError::ArrayOutOfBounds { len: 3, .. })
        ));
        assert!(matches!(
            stream.get_bytes(usize::MAX),
            Err(BufferError::ArrayOutOfBounds { len: 3, .. })
        ));
        assert_eq!(stream.tell(), 1);
    }

    #[test]
    fn test_seek_on_empty_stream_fails() {
        let mut stream = ByteStream::new();
        assert!(stream.seek_set(0).is_err());
    }

    #[test]
    fn test_add_items_mixed() {
        let inner = ByteStream::from(&b"xy"[..]);
        let mut stream = ByteStream::new();
        stream
            .add_items(&[&0x00u8, &"MTrk", &inner, &[1u8, 2u8]])
            .add(&String::from("!"));
        assert_eq!(stream.as_slice(), b"\x00MTrkxy\x01\x02!");
    }

    #[test]
    fn test_added_stream_ignores_its_cursor() {
        let mut inner = ByteStream::from(vec![1, 2, 3]);
        inner.seek_set(2).unwrap();
        let mut stream = ByteStream::new();
        stream.add(&inner);
        assert_eq!(stream.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_clear_rewinds() {
        let mut stream = ByteStream::from(vec![1, 2, 3]);
        stream.seek_set(2).unwrap();
        stream.clear();
        assert!(stream.is_empty());
        assert_eq!(stream.tell(), 0);
    }

    #[test]
    fn test_equality_ignores_cursor() {
        let a = ByteStream::from(vec![1, 2]);
        let mut b = ByteStream::from(vec![1, 2]);
        b.seek_set(1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ByteStream::from(vec![1]));
    }
}
