use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Discriminant of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    /// 4-bit unsigned integer, always within `0..=15`.
    Nibble,
    Byte,
    Word,
    Int32,
    Int64,
    Float32,
    Float64,
    Note,
    String,
    Array,
    HashTable,
    BinaryBlob,
    /// Array-shaped payload carrying effect parameters.
    Effect,
    /// Reserved; never a valid conversion target.
    GenericPointer,
}

const NAMES: [(Kind, &str); 16] = [
    (Kind::Null, "null"),
    (Kind::Bool, "bool"),
    (Kind::Nibble, "nibble"),
    (Kind::Byte, "byte"),
    (Kind::Word, "word"),
    (Kind::Int32, "int"),
    (Kind::Int64, "long"),
    (Kind::Float32, "float"),
    (Kind::Float64, "double"),
    (Kind::Note, "note"),
    (Kind::String, "string"),
    (Kind::Array, "array"),
    (Kind::HashTable, "hashtable"),
    (Kind::BinaryBlob, "binaryblob"),
    (Kind::Effect, "effect"),
    (Kind::GenericPointer, "pointer"),
];

impl Kind {
    pub fn name(self) -> &'static str {
        NAMES[self as usize].1
    }

    /// Kinds compared numerically: bool, the integer widths and the floats.
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating_point()
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::Bool | Kind::Nibble | Kind::Byte | Kind::Word | Kind::Int32 | Kind::Int64
        )
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    /// Kinds whose payload lives on the heap and is shared between clones.
    pub fn uses_shared_payload(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Array | Kind::HashTable | Kind::BinaryBlob | Kind::Effect
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kind name: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    /// Looks a kind up by name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(kind, _)| *kind)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
