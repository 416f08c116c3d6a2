//! Conversions to and from [`serde_json::Value`].
//!
//! Notes and blobs cross the boundary as the tagged strings of the whimsy
//! JSON dialect (`"@C-4"`, `"=base64"`, `"#hex"`), and tagged strings coming
//! from serde_json are decoded back the same way the text parser does.

use whimsy_buffers::{ByteStream, DisplayFormat};

use super::Value;
use crate::json::decode_tagged_string;

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Nibble(n) => serde_json::json!((*n).min(15)),
            Value::Byte(n) => serde_json::json!(n),
            Value::Word(n) => serde_json::json!(n),
            Value::Int32(n) => serde_json::json!(n),
            Value::Int64(n) => serde_json::json!(n),
            Value::Float32(f) => float(f64::from(*f)),
            Value::Float64(f) => float(*f),
            Value::Note(note) => serde_json::Value::String(format!("@{note}")),
            Value::String(s) => serde_json::Value::String(s.borrow().clone()),
            Value::Array(items) | Value::Effect(items) => serde_json::Value::Array(
                items.borrow().iter().map(serde_json::Value::from).collect(),
            ),
            Value::HashTable(map) => serde_json::Value::Object(
                map.borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::BinaryBlob(blob) => serde_json::Value::String(tagged_blob(&blob.borrow())),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        serde_json::Value::from(&v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => decode_tagged_string(&s),
            serde_json::Value::Array(arr) => arr.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(obj) => obj
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        }
    }
}

fn float(f: f64) -> serde_json::Value {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn tagged_blob(blob: &ByteStream) -> String {
    match blob.display_format() {
        DisplayFormat::Base64 => format!("={}", blob.base64_encode(false)),
        DisplayFormat::Hex => format!("#{}", blob.hex_encode(false)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Kind, Note};

    #[test]
    fn test_to_serde() {
        let mut v = Value::Null;
        *v.at_key("n") = Value::from(3);
        *v.at_key("f") = Value::from(0.5);
        *v.at_key("note") = Value::from(Note::parse("C#3"));
        *v.at_key("list") = Value::from(vec![Value::from(true), Value::Null]);
        let mut blob = ByteStream::new();
        blob.base64_decode("aGk=");
        *v.at_key("blob") = Value::from(blob);

        assert_eq!(
            serde_json::Value::from(&v),
            json!({
                "blob": "=aGk=",
                "f": 0.5,
                "list": [true, null],
                "n": 3,
                "note": "@C#3",
            })
        );
    }

    #[test]
    fn test_from_serde() {
        let v = Value::from(json!({
            "big": 1.5,
            "hex": "#0A 0B",
            "n": -4,
            "note": "@A-4",
            "plain": "text",
        }));
        assert_eq!(v.get_key("big").unwrap().kind(), Kind::Float64);
        assert_eq!(v.get_key("n").unwrap().kind(), Kind::Int64);
        assert_eq!(v.get_key("note").unwrap().note_value().unwrap().value(), 57);
        assert_eq!(
            v.get_key("hex").unwrap().as_binary_blob().unwrap().as_slice(),
            &[0x0a, 0x0b]
        );
        assert_eq!(v.get_key("plain"), Some(Value::from("text")));
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(serde_json::Value::from(Value::from(f64::NAN)), json!(null));
    }

    #[test]
    fn test_serde_roundtrip_keeps_structure() {
        let text = r#"{"a": [1, 2.5, "@xxx"], "b": {"c": null}}"#;
        let v: Value = text.parse().unwrap();
        let back = Value::from(serde_json::Value::from(&v));
        assert_eq!(back, v);
    }
}
