//! Items accepted by [`ByteStream::add`](crate::ByteStream::add) and
//! [`ByteStream::add_items`](crate::ByteStream::add_items).

use crate::ByteStream;

/// Something that appends raw bytes to a stream: a single byte, a string
/// (its UTF-8 bytes, no terminator), a byte slice or array, or another
/// stream (its whole content, regardless of that stream's cursor).
pub trait Chunk {
    fn append_to(&self, out: &mut Vec<u8>);
}

impl Chunk for u8 {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }
}

impl Chunk for str {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Chunk for String {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Chunk for [u8] {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl<const N: usize> Chunk for [u8; N] {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Chunk for Vec<u8> {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Chunk for ByteStream {
    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_slice());
    }
}

impl<T: Chunk + ?Sized> Chunk for &T {
    fn append_to(&self, out: &mut Vec<u8>) {
        (**self).append_to(out);
    }
}
