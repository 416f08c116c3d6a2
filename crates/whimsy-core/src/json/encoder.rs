//! `JsonEncoder`: writes [`Value`] as whimsy JSON text.

use whimsy_buffers::DisplayFormat;

use crate::Value;

const INDENT: &str = "    ";

/// Serializer in compact (`[1, 2]`) or pretty (one element per line,
/// four-space indentation) layout.
///
/// Strings are written as they are, without escaping. Notes become `"@C-4"`
/// strings and blobs become `"=base64"` or `"#hex"` strings according to
/// their display format. Non-finite floats are written as `null`.
pub struct JsonEncoder {
    pretty: bool,
    out: String,
}

impl JsonEncoder {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            out: String::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> String {
        self.out.clear();
        self.write_any(value, 0);
        std::mem::take(&mut self.out)
    }

    pub fn write_any(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Nibble(n) => self.write_integer(i64::from((*n).min(15))),
            Value::Byte(n) => self.write_integer(i64::from(*n)),
            Value::Word(n) => self.write_integer(i64::from(*n)),
            Value::Int32(n) => self.write_integer(i64::from(*n)),
            Value::Int64(n) => self.write_integer(*n),
            Value::Float32(f) => self.write_float(f64::from(*f)),
            Value::Float64(f) => self.write_float(*f),
            Value::Note(note) => {
                self.out.push_str("\"@");
                self.out.push_str(&note.to_string());
                self.out.push('"');
            }
            Value::String(s) => self.write_str(&s.borrow()),
            Value::BinaryBlob(blob) => {
                let blob = blob.borrow();
                let (tag, body) = match blob.display_format() {
                    DisplayFormat::Base64 => ('=', blob.base64_encode(self.pretty)),
                    DisplayFormat::Hex => ('#', blob.hex_encode(self.pretty)),
                };
                self.out.push('"');
                self.out.push(tag);
                self.out.push_str(&body);
                self.out.push('"');
            }
            Value::Array(items) | Value::Effect(items) => {
                let items = items.borrow();
                self.write_container('[', ']', items.len(), depth, |encoder, i| {
                    encoder.write_any(&items[i], depth + 1);
                });
            }
            Value::HashTable(map) => {
                let map = map.borrow();
                let entries: Vec<(&String, &Value)> = map.iter().collect();
                self.write_container('{', '}', entries.len(), depth, |encoder, i| {
                    let (key, item) = entries[i];
                    encoder.write_str(key);
                    encoder.out.push_str(": ");
                    encoder.write_any(item, depth + 1);
                });
            }
        }
    }

    fn write_container(
        &mut self,
        open: char,
        close: char,
        len: usize,
        depth: usize,
        mut write_item: impl FnMut(&mut Self, usize),
    ) {
        self.out.push(open);
        if len == 0 {
            self.out.push(close);
            return;
        }
        for i in 0..len {
            if i > 0 {
                self.out.push(',');
                if !self.pretty {
                    self.out.push(' ');
                }
            }
            if self.pretty {
                self.newline(depth + 1);
            }
            write_item(self, i);
        }
        if self.pretty {
            self.newline(depth);
        }
        self.out.push(close);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(s);
        self.out.push('"');
    }

    pub fn write_integer(&mut self, n: i64) {
        self.out.push_str(&n.to_string());
    }

    /// Shortest text that parses back to the same `f64`, always with a
    /// fraction or exponent so it reads back as a float.
    pub fn write_float(&mut self, f: f64) {
        if f.is_finite() {
            self.out.push_str(&format!("{f:?}"));
        } else {
            self.out.push_str("null");
        }
    }
}
