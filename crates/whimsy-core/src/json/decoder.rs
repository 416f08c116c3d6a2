//! `JsonDecoder`: recursive-descent parser producing [`Value`].

use std::collections::BTreeMap;

use log::debug;

use super::decode_tagged_string;
use crate::{Error, Result, Value};

/// Number grammar positions, named after what was consumed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Minus,
    Zero,
    Integer,
    Dot,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
}

impl NumberState {
    fn step(self, c: u8) -> Option<NumberState> {
        use NumberState::*;
        Some(match (self, c) {
            (Start, b'-') => Minus,
            (Start | Minus, b'0') => Zero,
            (Start | Minus, b'1'..=b'9') => Integer,
            (Integer, b'0'..=b'9') => Integer,
            (Zero | Integer, b'.') => Dot,
            (Dot | Fraction, b'0'..=b'9') => Fraction,
            (Zero | Integer | Fraction, b'e' | b'E') => Exponent,
            (Exponent, b'+' | b'-') => ExponentSign,
            (Exponent | ExponentSign | ExponentDigits, b'0'..=b'9') => ExponentDigits,
            _ => return None,
        })
    }
}

/// Parser state: the input and the read position `x`.
///
/// ```
/// use whimsy_core::json::JsonDecoder;
///
/// let value = JsonDecoder::new(r#"{"a": 1, "b": [1, 2, 3]}"#).decode().unwrap();
/// assert_eq!(value.get_key("a").unwrap().long_value().unwrap(), 1);
/// assert_eq!(value.get_key("b").unwrap().size(), 3);
/// ```
pub struct JsonDecoder<'a> {
    text: &'a str,
    data: &'a [u8],
    pub x: usize,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            data: text.as_bytes(),
            x: 0,
        }
    }

    /// Parses the whole input as one value; only whitespace may follow it.
    pub fn decode(&mut self) -> Result<Value> {
        self.x = 0;
        let result = self.read_document();
        if let Err(err) = &result {
            debug!("JSON parse failed: {err}");
        }
        result
    }

    fn read_document(&mut self) -> Result<Value> {
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(self.error("unexpected characters after value"));
        }
        Ok(value)
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::ParserSyntaxError {
            offset: self.x,
            reason,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    pub fn read_any(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some(b'"') => Ok(decode_tagged_string(self.read_str()?)),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(b't') => self.read_keyword("true", Value::Bool(true)),
            Some(b'f') => self.read_keyword("false", Value::Bool(false)),
            Some(b'n') => self.read_keyword("null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.read_num(),
            Some(_) => Err(self.error("unexpected character")),
        }
    }

    fn read_keyword(&mut self, keyword: &str, value: Value) -> Result<Value> {
        if !self.data[self.x..].starts_with(keyword.as_bytes()) {
            return Err(self.error("invalid literal"));
        }
        self.x += keyword.len();
        Ok(value)
    }

    /// Reads a number. Integers become `Int64`, falling back to `Float64`
    /// when they overflow; fractions and exponents become `Float64`.
    pub fn read_num(&mut self) -> Result<Value> {
        let start = self.x;
        let mut state = NumberState::Start;
        while let Some(next) = self.peek().and_then(|c| state.step(c)) {
            state = next;
            self.x += 1;
        }

        let literal = &self.text[start..self.x];
        match state {
            NumberState::Zero | NumberState::Integer => Ok(match literal.parse::<i64>() {
                Ok(n) => Value::Int64(n),
                Err(_) => Value::Float64(self.parse_float(literal, start)?),
            }),
            NumberState::Fraction | NumberState::ExponentDigits => {
                Ok(Value::Float64(self.parse_float(literal, start)?))
            }
            _ => Err(self.error("malformed number")),
        }
    }

    fn parse_float(&self, literal: &str, start: usize) -> Result<f64> {
        literal.parse().map_err(|_| Error::ParserSyntaxError {
            offset: start,
            reason: "malformed number",
        })
    }

    /// Reads a string literal and returns its raw body. A backslash keeps
    /// the character after it from closing the string; both are kept.
    pub fn read_str(&mut self) -> Result<&'a str> {
        if self.peek() != Some(b'"') {
            return Err(self.error("expected string"));
        }
        self.x += 1;
        let x0 = self.x;
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated string")),
                Some(b'"') => break,
                Some(b'\\') => self.x += 2,
                Some(_) => self.x += 1,
            }
        }
        let text = self.text;
        let body = &text[x0..self.x];
        self.x += 1;
        Ok(body)
    }

    pub fn read_arr(&mut self) -> Result<Value> {
        if self.peek() != Some(b'[') {
            return Err(self.error("expected '['"));
        }
        self.x += 1;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
            return Ok(Value::from(items));
        }
        loop {
            items.push(self.read_any()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    return Ok(Value::from(items));
                }
                Some(_) => return Err(self.error("expected ',' or ']'")),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    pub fn read_obj(&mut self) -> Result<Value> {
        if self.peek() != Some(b'{') {
            return Err(self.error("expected '{'"));
        }
        self.x += 1;
        let mut map = BTreeMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            return Ok(Value::from(map));
        }
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                None => return Err(self.error("unterminated object")),
                Some(_) => return Err(self.error("expected string key")),
            }
            let key = self.read_str()?.to_string();
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error("expected ':'"));
            }
            self.x += 1;
            let value = self.read_any()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    return Ok(Value::from(map));
                }
                Some(_) => return Err(self.error("expected ',' or '}'")),
                None => return Err(self.error("unterminated object")),
            }
        }
    }
}
