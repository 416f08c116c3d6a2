use log::warn;

use super::{Kind, Value};

impl Value {
    /// Deep-merges `other` into this value.
    ///
    /// Maps merge key by key, recursing into slots present on both sides.
    /// An array or effect absorbs the elements of another array or effect,
    /// or `other` itself as one new element. In every other case this value becomes a copy of
    /// `other`, sharing its payload.
    ///
    /// No borrow of this value's payload is held while `other` is read, so
    /// `other` may alias this value or any of its slots. A container of
    /// `other` that is mutably borrowed elsewhere for the duration of the
    /// call (as when this value is a slot handed out by `other.at(..)`)
    /// cannot be read and is skipped with a warning.
    ///
    /// ```
    /// use whimsy_core::Value;
    ///
    /// let mut base: Value = r#"{"a": {"x": 1}, "list": [1]}"#.parse().unwrap();
    /// let patch: Value = r#"{"a": {"y": 2}, "list": [2, 3]}"#.parse().unwrap();
    /// base.merge(&patch);
    /// assert_eq!(base.to_json(), r#"{"a": {"x": 1, "y": 2}, "list": [1, 2, 3]}"#);
    /// ```
    pub fn merge(&mut self, other: &Value) -> &mut Self {
        match (self.kind(), other) {
            (Kind::HashTable, Value::HashTable(entries)) => {
                let entries: Vec<(String, Value)> = match entries.try_borrow() {
                    Ok(entries) => entries
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                    Err(_) => {
                        warn!("merge skipped: source map is already mutably borrowed");
                        return self;
                    }
                };
                for (key, value) in entries {
                    let mut slot = self.at_key(&key).clone();
                    slot.merge(&value);
                    *self.at_key(&key) = slot;
                }
            }
            (Kind::Array | Kind::Effect, Value::Array(items) | Value::Effect(items)) => {
                let items = match items.try_borrow() {
                    Ok(items) => items.clone(),
                    Err(_) => {
                        warn!("merge skipped: source array is already mutably borrowed");
                        return self;
                    }
                };
                if let Some(mut mine) = self.as_array_mut() {
                    mine.extend(items);
                }
            }
            (Kind::Array | Kind::Effect, _) => {
                if let Some(mut mine) = self.as_array_mut() {
                    mine.push(other.clone());
                }
            }
            _ => *self = other.clone(),
        }
        self
    }
}
