//! Coercion of a value to every other kind.

use std::collections::BTreeMap;

use log::trace;
use whimsy_buffers::ByteStream;

use super::{Kind, Value};
use crate::{Error, Note, Result};

impl Value {
    fn invalid(&self, to: Kind) -> Error {
        Error::InvalidConversion {
            from: self.kind(),
            to,
        }
    }

    /// First element of an array or effect, which every scalar coercion
    /// recurses into.
    fn first_element(&self, to: Kind) -> Result<Value> {
        self.as_array()
            .and_then(|items| items.first().cloned())
            .ok_or_else(|| self.invalid(to))
    }

    /// Integer view shared by the integer coercions; callers narrow it.
    fn integer(&self, to: Kind) -> Result<i64> {
        Ok(match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Nibble(n) => i64::from((*n).min(15)),
            Value::Byte(n) => i64::from(*n),
            Value::Word(n) => i64::from(*n),
            Value::Int32(n) => i64::from(*n),
            Value::Int64(n) => *n,
            Value::Float32(f) => *f as i64,
            Value::Float64(f) => *f as i64,
            Value::Note(note) => i64::from(note.value()),
            Value::String(s) => parse_int_prefix(&s.borrow()),
            Value::Array(_) | Value::Effect(_) => self.first_element(to)?.integer(to)?,
            Value::HashTable(_) | Value::BinaryBlob(_) => return Err(self.invalid(to)),
        })
    }

    fn floating(&self, to: Kind) -> Result<f64> {
        Ok(match self {
            Value::Float32(f) => f64::from(*f),
            Value::Float64(f) => *f,
            Value::String(s) => parse_float_prefix(&s.borrow()),
            Value::Array(_) | Value::Effect(_) => self.first_element(to)?.floating(to)?,
            _ => self.integer(to)? as f64,
        })
    }

    pub fn bool_value(&self) -> Result<bool> {
        Ok(match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Float32(f) => *f != 0.0,
            Value::Float64(f) => *f != 0.0,
            Value::String(s) => {
                let s = s.borrow();
                s.eq_ignore_ascii_case("true") || s.as_str() == "1"
            }
            Value::Array(_) | Value::Effect(_) => self.first_element(Kind::Bool)?.bool_value()?,
            _ => self.integer(Kind::Bool)? != 0,
        })
    }

    /// Integer value clamped to `0..=15`.
    pub fn nibble_value(&self) -> Result<u8> {
        Ok(self.integer(Kind::Nibble)?.clamp(0, 15) as u8)
    }

    pub fn byte_value(&self) -> Result<u8> {
        Ok(self.integer(Kind::Byte)? as u8)
    }

    pub fn word_value(&self) -> Result<u16> {
        Ok(self.integer(Kind::Word)? as u16)
    }

    pub fn int_value(&self) -> Result<i32> {
        Ok(self.integer(Kind::Int32)? as i32)
    }

    pub fn long_value(&self) -> Result<i64> {
        self.integer(Kind::Int64)
    }

    pub fn float_value(&self) -> Result<f32> {
        Ok(self.floating(Kind::Float32)? as f32)
    }

    pub fn double_value(&self) -> Result<f64> {
        self.floating(Kind::Float64)
    }

    /// Strings are parsed as note names; other kinds go through their byte
    /// value.
    pub fn note_value(&self) -> Result<Note> {
        match self {
            Value::Note(note) => Ok(*note),
            Value::String(s) => Ok(Note::parse(&s.borrow())),
            _ => Ok(Note::from_byte(self.byte_value()?)),
        }
    }

    /// Elements of an array or effect; any other value is wrapped as the
    /// single element.
    pub fn array_value(&self) -> Vec<Value> {
        match self.as_array() {
            Some(items) => items.clone(),
            None => vec![self.clone()],
        }
    }

    /// Entries of a map; empty for every other kind.
    pub fn hash_table_value(&self) -> BTreeMap<String, Value> {
        self.as_hash_table()
            .map(|map| map.clone())
            .unwrap_or_default()
    }

    /// Raw byte image of the value.
    ///
    /// Scalars use one fixed-width encoding per kind in host byte order:
    /// one byte for bool, nibble, byte and note, then the natural width of
    /// every other number. Strings give their UTF-8 bytes, arrays and
    /// effects the concatenation of their elements' images and null an
    /// empty blob. Maps have no byte image.
    pub fn binary_blob_value(&self) -> Result<ByteStream> {
        let mut out = ByteStream::new();
        self.append_bytes(&mut out)?;
        Ok(out)
    }

    fn append_bytes(&self, out: &mut ByteStream) -> Result<()> {
        match self {
            Value::Null => {}
            Value::Bool(b) => {
                out.push(u8::from(*b));
            }
            Value::Nibble(n) => {
                out.push((*n).min(15));
            }
            Value::Byte(n) => {
                out.push(*n);
            }
            Value::Note(note) => {
                out.push(note.value());
            }
            Value::Word(n) => {
                out.add_variable(*n);
            }
            Value::Int32(n) => {
                out.add_variable(*n);
            }
            Value::Int64(n) => {
                out.add_variable(*n);
            }
            Value::Float32(f) => {
                out.add_variable(*f);
            }
            Value::Float64(f) => {
                out.add_variable(*f);
            }
            Value::String(s) => {
                out.add(s.borrow().as_str());
            }
            Value::BinaryBlob(blob) => {
                out.add(&*blob.borrow());
            }
            Value::Array(items) | Value::Effect(items) => {
                for item in items.borrow().iter() {
                    item.append_bytes(out)?;
                }
            }
            Value::HashTable(_) => return Err(self.invalid(Kind::BinaryBlob)),
        }
        Ok(())
    }

    /// Typed extraction through [`FromValue`].
    ///
    /// ```
    /// use whimsy_core::Value;
    ///
    /// let v = Value::from("42abc");
    /// assert_eq!(v.value::<i32>().unwrap(), 42);
    /// assert_eq!(v.value::<String>().unwrap(), "42abc");
    /// ```
    pub fn value<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }

    /// Replaces this value with its coercion to `target`.
    ///
    /// Converting to the current kind does nothing; converting null, or
    /// converting to null, leaves null. A note target that yields the null
    /// note also leaves null. On error the value is unchanged.
    pub fn convert(&mut self, target: Kind) -> Result<()> {
        let from = self.kind();
        if target == Kind::GenericPointer {
            return Err(self.invalid(target));
        }
        if target == from {
            return Ok(());
        }
        if from == Kind::Null || target == Kind::Null {
            *self = Value::Null;
            return Ok(());
        }

        let converted = match target {
            Kind::Bool => Value::Bool(self.bool_value()?),
            Kind::Nibble => Value::Nibble(self.nibble_value()?),
            Kind::Byte => Value::Byte(self.byte_value()?),
            Kind::Word => Value::Word(self.word_value()?),
            Kind::Int32 => Value::Int32(self.int_value()?),
            Kind::Int64 => Value::Int64(self.long_value()?),
            Kind::Float32 => Value::Float32(self.float_value()?),
            Kind::Float64 => Value::Float64(self.double_value()?),
            Kind::Note => Value::from(self.note_value()?),
            Kind::String => Value::from(self.string_value()),
            Kind::Array => Value::from(self.array_value()),
            Kind::Effect => Value::effect(self.array_value()),
            Kind::HashTable => Value::from(self.hash_table_value()),
            Kind::BinaryBlob => Value::from(self.binary_blob_value()?),
            Kind::Null | Kind::GenericPointer => unreachable!("handled above"),
        };
        trace!("converted {from} to {}", converted.kind());
        *self = converted;
        Ok(())
    }
}

/// Leading decimal integer of `s`: optional whitespace and sign, then
/// digits up to the first non-digit. No digits gives 0; overflow saturates.
fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut n: i64 = 0;
    for c in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(c - b'0');
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
    }
    n
}

/// Longest leading decimal floating point literal of `s`, or 0.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Types that can be extracted from a [`Value`] by coercion.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $method:ident),* $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                value.$method()
            }
        }
    )*};
}

impl_from_value!(
    bool => bool_value,
    u8 => byte_value,
    u16 => word_value,
    i32 => int_value,
    i64 => long_value,
    f32 => float_value,
    f64 => double_value,
    Note => note_value,
    ByteStream => binary_blob_value,
);

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.string_value())
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.array_value())
    }
}

impl FromValue for BTreeMap<String, Value> {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.hash_table_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_null_coerces_to_zero() {
        let v = Value::Null;
        assert!(!v.bool_value().unwrap());
        assert_eq!(v.int_value().unwrap(), 0);
        assert_eq!(v.double_value().unwrap(), 0.0);
        assert_eq!(v.string_value(), "-");
        assert!(v.binary_blob_value().unwrap().is_empty());
    }

    #[test]
    fn test_numeric_narrowing_truncates() {
        let v = Value::from(0x1_2345i32);
        assert_eq!(v.word_value().unwrap(), 0x2345);
        assert_eq!(v.byte_value().unwrap(), 0x45);
        assert_eq!(Value::from(-1i32).word_value().unwrap(), 0xffff);
        assert_eq!(Value::from(3.99).int_value().unwrap(), 3);
        assert_eq!(Value::from(-3.99f32).long_value().unwrap(), -3);
    }

    #[test]
    fn test_string_integer_prefix() {
        assert_eq!(parse_int_prefix("  -42xyz"), -42);
        assert_eq!(parse_int_prefix("+7"), 7);
        assert_eq!(parse_int_prefix("abc"), 0);
        assert_eq!(parse_int_prefix("99999999999999999999"), i64::MAX);
        assert_eq!(Value::from("12.9").int_value().unwrap(), 12);
    }

    #[test]
    fn test_string_float_prefix() {
        assert_eq!(parse_float_prefix("3.25 apples"), 3.25);
        assert_eq!(parse_float_prefix("-1e3x"), -1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("7."), 7.0);
        assert_eq!(parse_float_prefix("."), 0.0);
        assert_eq!(parse_float_prefix("-"), 0.0);
    }

    #[test]
    fn test_string_to_bool() {
        assert!(Value::from("TRUE").bool_value().unwrap());
        assert!(Value::from("1").bool_value().unwrap());
        assert!(!Value::from("yes").bool_value().unwrap());
        assert!(!Value::from("10").bool_value().unwrap());
    }

    #[test]
    fn test_note_coerces_to_raw_byte() {
        let v = Value::from(Note::parse("A-4"));
        assert_eq!(v.int_value().unwrap(), 57);
        assert_eq!(Value::from(Note::STOP).byte_value().unwrap(), 254);
        assert_eq!(v.string_value(), "A-4");
    }

    #[test]
    fn test_note_value_from_other_kinds() {
        assert_eq!(Value::from("C#3").note_value().unwrap(), Note::parse("C#3"));
        assert_eq!(Value::from(57).note_value().unwrap().to_string(), "A-4");
    }

    #[test]
    fn test_nibble_clamps_both_ways() {
        assert_eq!(Value::from(-5).nibble_value().unwrap(), 0);
        assert_eq!(Value::from(300).nibble_value().unwrap(), 15);
        assert_eq!(Value::from(-0.5).nibble_value().unwrap(), 0);
        assert_eq!(Value::from(9u8).nibble_value().unwrap(), 9);
    }

    #[test]
    fn test_array_recurses_into_first_element() {
        let v = Value::from(vec![Value::from("8"), Value::from(1)]);
        assert_eq!(v.int_value().unwrap(), 8);
        assert_eq!(Value::effect(vec![Value::from(2.5)]).double_value().unwrap(), 2.5);
    }

    #[test]
    fn test_empty_array_to_scalar_fails() {
        let err = Value::from(Vec::new()).int_value().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConversion);
        assert!(Value::effect(vec![]).bool_value().is_err());
    }

    #[test]
    fn test_map_to_scalar_fails() {
        let map: Value = [("a", Value::from(1))].into_iter().collect();
        assert!(map.int_value().is_err());
        assert!(map.binary_blob_value().is_err());
    }

    #[test]
    fn test_array_and_map_views() {
        assert_eq!(Value::from(5).array_value().len(), 1);
        assert!(Value::from(5).hash_table_value().is_empty());
    }

    #[test]
    fn test_binary_image_one_encoding_per_kind() {
        assert_eq!(Value::from(true).binary_blob_value().unwrap().as_slice(), &[1]);
        assert_eq!(Value::from(0x0102u16).binary_blob_value().unwrap().len(), 2);
        assert_eq!(
            Value::from(7i32).binary_blob_value().unwrap().as_slice(),
            &7i32.to_ne_bytes()
        );
        assert_eq!(Value::from(1i64).binary_blob_value().unwrap().len(), 8);
        assert_eq!(Value::from(1.0f32).binary_blob_value().unwrap().len(), 4);
        assert_eq!(Value::from("ab").binary_blob_value().unwrap().as_slice(), b"ab");

        let list = Value::from(vec![Value::from(1u8), Value::from("z")]);
        assert_eq!(list.binary_blob_value().unwrap().as_slice(), &[1, b'z']);
    }

    #[test]
    fn test_convert_replaces_kind() {
        let mut v = Value::from("17");
        v.convert(Kind::Int32).unwrap();
        assert!(matches!(v, Value::Int32(17)));
        v.convert(Kind::Float64).unwrap();
        assert!(matches!(v, Value::Float64(f) if f == 17.0));
        v.convert(Kind::Array).unwrap();
        assert_eq!(v.size(), 1);
    }

    #[test]
    fn test_convert_null_cases() {
        let mut v = Value::Null;
        v.convert(Kind::Int32).unwrap();
        assert!(v.is_null());

        let mut v = Value::from("x");
        v.convert(Kind::Null).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_convert_to_pointer_fails() {
        let mut v = Value::from(1);
        let err = v.convert(Kind::GenericPointer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConversion);
        assert!(matches!(v, Value::Int32(1)));
    }

    #[test]
    fn test_convert_failure_leaves_value() {
        let mut v = Value::from(Vec::new());
        assert!(v.convert(Kind::Int32).is_err());
        assert_eq!(v.kind(), Kind::Array);
    }

    #[test]
    fn test_convert_invalid_note_string_becomes_null() {
        let mut v = Value::from("not a note");
        v.convert(Kind::Note).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_typed_extraction() {
        let v = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(v.value::<Vec<Value>>().unwrap().len(), 2);
        assert_eq!(v.value::<u8>().unwrap(), 1);
        assert_eq!(Value::from(0.5).value::<f32>().unwrap(), 0.5);
    }
}
