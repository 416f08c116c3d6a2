//! Dynamically-typed values for whimsy.
//!
//! [`Value`] holds a scalar, a [`Note`], a string, an array, a string-keyed
//! map or a binary blob ([`ByteStream`]). Heap payloads are shared between
//! clones: copying a value is O(1) and mutation through one copy is visible
//! through all of them.
//!
//! Values coerce between kinds, compare, deep-merge, and round-trip through
//! a JSON text dialect where `"@C#4"` is a note, `"=..."` a base64 blob and
//! `"#..."` a hex blob.
//!
//! # Example
//!
//! ```
//! use whimsy_core::{Kind, Value};
//!
//! let mut song: Value = r#"{"tempo": 120, "lead": ["@A-4", "@xxx"]}"#.parse().unwrap();
//! assert_eq!(song.at_key("tempo").int_value().unwrap(), 120);
//!
//! *song.at_key("title") = Value::from("intro");
//! assert_eq!(
//!     song.to_json(),
//!     r#"{"lead": ["@A-4", "@xxx"], "tempo": 120, "title": "intro"}"#
//! );
//!
//! let mut tempo = song.get_key("tempo").unwrap();
//! tempo.convert(Kind::String).unwrap();
//! assert_eq!(tempo.as_str().unwrap().as_str(), "120");
//! ```

mod error;
pub mod json;
mod note;
pub mod value;

pub use error::{Error, ErrorKind};
pub use note::Note;
pub use value::{FromValue, Kind, StringFormat, Value};
pub use whimsy_buffers::{ByteStream, DisplayFormat};

pub type Result<T> = std::result::Result<T, Error>;
