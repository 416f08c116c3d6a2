//! Equality and ordering between values.

use std::cmp::Ordering;

use super::Value;
use crate::{Error, Result};

impl Value {
    /// Structural equality.
    ///
    /// Numeric kinds (bool, the integers and the floats) compare by value in
    /// double precision whatever their widths. Strings, notes and blobs
    /// compare by content, arrays and effects element by element and maps
    /// entry by entry. Two nulls are equal; any other pair of kinds is not.
    pub fn is_equal_than(&self, other: &Value) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => *a.borrow() == *b.borrow(),
            (Value::Note(a), Value::Note(b)) => a == b,
            (Value::BinaryBlob(a), Value::BinaryBlob(b)) => *a.borrow() == *b.borrow(),
            (Value::Array(a) | Value::Effect(a), Value::Array(b) | Value::Effect(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.is_equal_than(y))
            }
            (Value::HashTable(a), Value::HashTable(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.is_equal_than(vb))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Fails with [`Error::NotComparable`] unless both values are numeric or
    /// both are strings.
    pub fn is_lower_than(&self, other: &Value) -> Result<bool> {
        Ok(self.ordering(other)? == Some(Ordering::Less))
    }

    /// Fails with [`Error::NotComparable`] unless both values are numeric or
    /// both are strings.
    pub fn is_greater_than(&self, other: &Value) -> Result<bool> {
        Ok(self.ordering(other)? == Some(Ordering::Greater))
    }

    /// `None` when a NaN is involved.
    fn ordering(&self, other: &Value) -> Result<Option<Ordering>> {
        if let (Value::String(a), Value::String(b)) = (self, other) {
            return Ok(Some(a.borrow().as_bytes().cmp(b.borrow().as_bytes())));
        }
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(Error::NotComparable {
                lhs: self.kind(),
                rhs: other.kind(),
            }),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            Value::Nibble(n) => Some(f64::from((*n).min(15))),
            Value::Byte(n) => Some(f64::from(*n)),
            Value::Word(n) => Some(f64::from(*n)),
            Value::Int32(n) => Some(f64::from(*n)),
            Value::Int64(n) => Some(*n as f64),
            Value::Float32(f) => Some(f64::from(*f)),
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_than(other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_equal_than(other) {
            return Some(Ordering::Equal);
        }
        self.ordering(other).ok().flatten()
    }
}
