//! Indexing by position and by key.

use std::cell::RefMut;
use std::rc::Rc;

use super::Value;

impl Value {
    /// Slot `index` of this array or effect, growing it with nulls as
    /// needed. Any other value is first replaced by an empty array.
    ///
    /// The returned guard borrows the shared payload mutably; drop it
    /// before touching other copies of this value.
    ///
    /// ```
    /// use whimsy_core::Value;
    ///
    /// let mut v = Value::Null;
    /// *v.at(3) = Value::from("last");
    /// assert_eq!(v.to_json(), r#"[null, null, null, "last"]"#);
    /// ```
    pub fn at(&mut self, index: usize) -> RefMut<'_, Value> {
        if !matches!(self, Value::Array(_) | Value::Effect(_)) {
            *self = Value::Array(Rc::default());
        }
        let (Value::Array(items) | Value::Effect(items)) = self else {
            unreachable!("value was just made an array");
        };
        let mut items = items.borrow_mut();
        if items.len() <= index {
            items.resize(index + 1, Value::Null);
        }
        RefMut::map(items, |items| &mut items[index])
    }

    /// Slot `key` of this map, inserting null if absent. Any other value is
    /// first replaced by an empty map.
    pub fn at_key(&mut self, key: &str) -> RefMut<'_, Value> {
        if !matches!(self, Value::HashTable(_)) {
            *self = Value::HashTable(Rc::default());
        }
        let Value::HashTable(map) = self else {
            unreachable!("value was just made a map");
        };
        RefMut::map(map.borrow_mut(), |map| {
            map.entry(key.to_string()).or_default()
        })
    }

    /// Element `index` of an array or effect, without growing it.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.as_array().and_then(|items| items.get(index).cloned())
    }

    /// Entry `key` of a map, without inserting it.
    pub fn get_key(&self, key: &str) -> Option<Value> {
        self.as_hash_table().and_then(|map| map.get(key).cloned())
    }

    pub fn key_exists(&self, key: &str) -> bool {
        self.as_hash_table()
            .is_some_and(|map| map.contains_key(key))
    }

    pub fn index_exists(&self, index: usize) -> bool {
        self.as_array().is_some_and(|items| index < items.len())
    }
}
