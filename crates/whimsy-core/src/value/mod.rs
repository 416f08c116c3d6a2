//! [`Value`]: the dynamically-typed container.

mod coerce;
mod compare;
mod format;
mod index;
mod interop;
mod kind;
mod merge;

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;

use whimsy_buffers::ByteStream;

use crate::Note;

pub use coerce::FromValue;
pub use format::StringFormat;
pub use kind::{Kind, UnknownKind};

/// Heap payload shared by every clone of a value.
pub type Shared<T> = Rc<RefCell<T>>;

fn shared<T>(payload: T) -> Shared<T> {
    Rc::new(RefCell::new(payload))
}

/// A dynamically-typed value.
///
/// Scalars are stored inline. Strings, arrays, maps, blobs and effects are
/// held through a [`Shared`] handle, so `clone()` is O(1) and both copies
/// see each other's mutations. Maps iterate in key order.
///
/// ```
/// use whimsy_core::Value;
///
/// let list = Value::from(vec![Value::from(1), Value::from(2)]);
/// let alias = list.clone();
/// alias.as_array_mut().unwrap().push(Value::from(3));
/// assert_eq!(list.size(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Meant to hold `0..=15`; [`Value::nibble`] clamps on construction.
    /// The payload is unchecked here, so readers clamp it again.
    Nibble(u8),
    Byte(u8),
    Word(u16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Note(Note),
    String(Shared<String>),
    Array(Shared<Vec<Value>>),
    HashTable(Shared<BTreeMap<String, Value>>),
    BinaryBlob(Shared<ByteStream>),
    Effect(Shared<Vec<Value>>),
}

impl Value {
    pub const NULL: Value = Value::Null;

    /// A nibble, clamping `n` to `0..=15`.
    pub fn nibble(n: u8) -> Value {
        Value::Nibble(n.min(15))
    }

    pub fn effect(params: Vec<Value>) -> Value {
        Value::Effect(shared(params))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Nibble(_) => Kind::Nibble,
            Value::Byte(_) => Kind::Byte,
            Value::Word(_) => Kind::Word,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::Note(_) => Kind::Note,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::HashTable(_) => Kind::HashTable,
            Value::BinaryBlob(_) => Kind::BinaryBlob,
            Value::Effect(_) => Kind::Effect,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Element count of an array, map or effect, byte count of a string or
    /// blob, 0 for null and 1 for any scalar.
    pub fn size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::String(s) => s.borrow().len(),
            Value::Array(items) | Value::Effect(items) => items.borrow().len(),
            Value::HashTable(map) => map.borrow().len(),
            Value::BinaryBlob(blob) => blob.borrow().len(),
            _ => 1,
        }
    }

    /// Whether both values hold the same shared payload.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) | (Value::Effect(a), Value::Effect(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::HashTable(a), Value::HashTable(b)) => Rc::ptr_eq(a, b),
            (Value::BinaryBlob(a), Value::BinaryBlob(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Borrowing accessors
    // -----------------------------------------------------------------------

    pub fn as_str(&self) -> Option<Ref<'_, String>> {
        match self {
            Value::String(s) => Some(s.borrow()),
            _ => None,
        }
    }

    /// Elements of an array or effect.
    pub fn as_array(&self) -> Option<Ref<'_, Vec<Value>>> {
        match self {
            Value::Array(items) | Value::Effect(items) => Some(items.borrow()),
            _ => None,
        }
    }

    pub fn as_array_mut(&self) -> Option<RefMut<'_, Vec<Value>>> {
        match self {
            Value::Array(items) | Value::Effect(items) => Some(items.borrow_mut()),
            _ => None,
        }
    }

    pub fn as_hash_table(&self) -> Option<Ref<'_, BTreeMap<String, Value>>> {
        match self {
            Value::HashTable(map) => Some(map.borrow()),
            _ => None,
        }
    }

    pub fn as_hash_table_mut(&self) -> Option<RefMut<'_, BTreeMap<String, Value>>> {
        match self {
            Value::HashTable(map) => Some(map.borrow_mut()),
            _ => None,
        }
    }

    pub fn as_binary_blob(&self) -> Option<Ref<'_, ByteStream>> {
        match self {
            Value::BinaryBlob(blob) => Some(blob.borrow()),
            _ => None,
        }
    }

    pub fn as_binary_blob_mut(&self) -> Option<RefMut<'_, ByteStream>> {
        match self {
            Value::BinaryBlob(blob) => Some(blob.borrow_mut()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Byte(n)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Word(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float32(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float64(n)
    }
}

impl From<Note> for Value {
    /// The null note becomes [`Value::Null`].
    fn from(note: Note) -> Self {
        if note.is_null() {
            Value::Null
        } else {
            Value::Note(note)
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(shared(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(shared(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(shared(items))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::HashTable(shared(map))
    }
}

impl From<ByteStream> for Value {
    fn from(blob: ByteStream) -> Self {
        Value::BinaryBlob(shared(blob))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect::<BTreeMap<_, _>>(),
        )
    }
}
