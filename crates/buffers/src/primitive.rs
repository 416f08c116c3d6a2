//! Fixed-size values that can be copied in and out of a byte stream.

/// A fixed-size value with a raw byte representation.
///
/// Implemented for every integer width and both float widths. `SIZE` bytes
/// are written per value; the `*_slice` constructors read exactly `SIZE`
/// bytes from the front of the slice they are given.
pub trait Primitive: Copy {
    const SIZE: usize;

    /// Appends the value in host byte order.
    fn append_ne(self, out: &mut Vec<u8>);
    /// Appends the value most significant byte first.
    fn append_be(self, out: &mut Vec<u8>);
    /// Appends the value least significant byte first.
    fn append_le(self, out: &mut Vec<u8>);

    fn from_ne_slice(bytes: &[u8]) -> Self;
    fn from_be_slice(bytes: &[u8]) -> Self;
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn append_ne(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn append_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            #[inline]
            fn append_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn from_ne_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_ne_bytes(raw)
            }

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_be_bytes(raw)
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_le_bytes(raw)
            }
        }
    )*};
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(<u8 as Primitive>::SIZE, 1);
        assert_eq!(<i16 as Primitive>::SIZE, 2);
        assert_eq!(<f32 as Primitive>::SIZE, 4);
        assert_eq!(<u64 as Primitive>::SIZE, 8);
        assert_eq!(<i128 as Primitive>::SIZE, 16);
    }

    #[test]
    fn test_explicit_orders() {
        let mut be = Vec::new();
        0x0102_0304u32.append_be(&mut be);
        assert_eq!(be, [0x01, 0x02, 0x03, 0x04]);

        let mut le = Vec::new();
        0x0102_0304u32.append_le(&mut le);
        assert_eq!(le, [0x04, 0x03, 0x02, 0x01]);

        assert_eq!(u32::from_be_slice(&be), 0x0102_0304);
        assert_eq!(u32::from_le_slice(&le), 0x0102_0304);
    }

    #[test]
    fn test_native_matches_host() {
        let mut ne = Vec::new();
        (-2i16).append_ne(&mut ne);
        assert_eq!(ne, (-2i16).to_ne_bytes());
        assert_eq!(i16::from_ne_slice(&ne), -2);
    }

    #[test]
    fn test_reads_only_leading_bytes() {
        let bytes = [0x3f, 0xc0, 0x00, 0x00, 0xff, 0xff];
        assert_eq!(f32::from_be_slice(&bytes), 1.5);
    }
}
