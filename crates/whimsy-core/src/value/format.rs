//! Human-readable rendering.

use std::fmt::{self, Write};

use super::Value;

/// Number representation used by [`Value::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringFormat {
    #[default]
    Normal,
    /// Integers as zero-padded lowercase hex at their natural width, floats
    /// with four decimals.
    Hex,
}

impl Value {
    /// Text form of the value.
    ///
    /// Null prints as `-`, notes by name, arrays as `[a, b]` and maps as
    /// `{k: v}`. Blobs and effects have no text form and give an empty
    /// string.
    pub fn string_value(&self) -> String {
        self.format(StringFormat::Normal)
    }

    /// Text form of the value with numbers rendered per `format`.
    ///
    /// ```
    /// use whimsy_core::{StringFormat, Value};
    ///
    /// let v = Value::from(vec![Value::from(255u8), Value::from(-1), Value::from(0.5)]);
    /// assert_eq!(v.format(StringFormat::Hex), "[ff, ffffffff, 0.5000]");
    /// ```
    pub fn format(&self, format: StringFormat) -> String {
        let mut out = String::new();
        self.write_text(&mut out, format);
        out
    }

    fn write_text(&self, out: &mut String, format: StringFormat) {
        let hex = format == StringFormat::Hex;
        // Writing into a String cannot fail.
        let _ = match self {
            Value::Null => out.write_str("-"),
            Value::Bool(b) if hex => out.write_str(if *b { "1" } else { "0" }),
            Value::Bool(b) => write!(out, "{b}"),
            Value::Nibble(n) if hex => write!(out, "{:x}", (*n).min(15)),
            Value::Nibble(n) => write!(out, "{}", (*n).min(15)),
            Value::Byte(n) if hex => write!(out, "{n:02x}"),
            Value::Byte(n) => write!(out, "{n}"),
            Value::Word(n) if hex => write!(out, "{n:04x}"),
            Value::Word(n) => write!(out, "{n}"),
            Value::Int32(n) if hex => write!(out, "{n:08x}"),
            Value::Int32(n) => write!(out, "{n}"),
            Value::Int64(n) if hex => write!(out, "{n:016x}"),
            Value::Int64(n) => write!(out, "{n}"),
            Value::Float32(f) if hex => write!(out, "{f:.4}"),
            Value::Float32(f) => write!(out, "{f}"),
            Value::Float64(f) if hex => write!(out, "{f:.4}"),
            Value::Float64(f) => write!(out, "{f}"),
            Value::Note(note) => write!(out, "{note}"),
            Value::String(s) => out.write_str(&s.borrow()),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_text(out, format);
                }
                out.write_str("]")
            }
            Value::HashTable(map) => {
                out.push('{');
                for (i, (key, item)) in map.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(key);
                    out.push_str(": ");
                    item.write_text(out, format);
                }
                out.write_str("}")
            }
            Value::BinaryBlob(_) | Value::Effect(_) => Ok(()),
        };
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteStream, Note};

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.string_value(), "-");
        assert_eq!(Value::from(false).string_value(), "false");
        assert_eq!(Value::from(-12).string_value(), "-12");
        assert_eq!(Value::from(2.5).string_value(), "2.5");
        assert_eq!(Value::from(Note::parse("G#2")).string_value(), "G#2");
        assert_eq!(Value::from("as is").string_value(), "as is");
    }

    #[test]
    fn test_containers() {
        let v = Value::from(vec![Value::from(1), Value::from("a"), Value::Null]);
        assert_eq!(v.string_value(), "[1, a, -]");

        let map: Value = [("b", Value::from(2)), ("a", v)].into_iter().collect();
        assert_eq!(map.to_string(), "{a: [1, a, -], b: 2}");
    }

    #[test]
    fn test_blob_and_effect_have_no_text() {
        assert_eq!(Value::from(ByteStream::from(vec![1])).string_value(), "");
        assert_eq!(Value::effect(vec![Value::from(1)]).string_value(), "");
    }

    #[test]
    fn test_hex_widths() {
        assert_eq!(Value::from(true).format(StringFormat::Hex), "1");
        assert_eq!(Value::nibble(11).format(StringFormat::Hex), "b");
        assert_eq!(Value::from(10u8).format(StringFormat::Hex), "0a");
        assert_eq!(Value::from(0xbeu16).format(StringFormat::Hex), "00be");
        assert_eq!(Value::from(255).format(StringFormat::Hex), "000000ff");
        assert_eq!(Value::from(-2i64).format(StringFormat::Hex), "fffffffffffffffe");
        assert_eq!(Value::from(1.0f32 / 3.0).format(StringFormat::Hex), "0.3333");
        assert_eq!(Value::from("x").format(StringFormat::Hex), "x");
    }
}
