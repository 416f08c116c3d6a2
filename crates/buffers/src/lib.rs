//! Binary buffers for whimsy.
//!
//! [`ByteStream`] is a growable byte sequence with a read cursor. Bytes are
//! appended at the end and read back from the cursor, with typed primitive
//! I/O in native, big-endian or little-endian order, MIDI variable-length
//! quantities, hex and base64 text codecs and raw file dump/load.
//!
//! # Example
//!
//! ```
//! use whimsy_buffers::ByteStream;
//!
//! let mut stream = ByteStream::new();
//! stream.add_word_big_endian(0x0102).add_midi_var_len(255);
//! assert_eq!(stream.as_slice(), &[0x01, 0x02, 0x81, 0x7f]);
//!
//! assert_eq!(stream.get_word_big_endian().unwrap(), 0x0102);
//! assert_eq!(stream.get_midi_var_len().unwrap(), 255);
//! assert!(stream.get_midi_var_len().is_err());
//! ```

mod byte_stream;
mod chunk;
mod file;
mod format;
mod hex;
mod midi;
mod primitive;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use byte_stream::ByteStream;
pub use chunk::Chunk;
pub use format::DisplayFormat;
pub use hex::{from_hex, to_hex};
pub use midi::MIDI_VAR_LEN_MAX;
pub use primitive::Primitive;

/// Errors raised by [`ByteStream`] operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// A read or seek needed the stream to extend to `offset`, but it only
    /// holds `len` bytes.
    #[error("offset {offset} is out of bounds for a stream of {len} bytes")]
    ArrayOutOfBounds { offset: usize, len: usize },
    #[error("could not open {} for reading: {source}", .path.display())]
    CouldNotOpenFileForReading {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open {} for writing: {source}", .path.display())]
    CouldNotOpenFileForWriting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Builds a [`ByteStream`] from a mixed list of bytes, strings, byte slices
/// and other streams, appending each item in order.
///
/// ```
/// use whimsy_buffers::{byte_stream, ByteStream};
///
/// let header = byte_stream!["MThd"];
/// let stream = byte_stream![header, 0x00u8, [0x06u8, 0x00]];
/// assert_eq!(stream.as_slice(), b"MThd\x00\x06\x00");
/// ```
#[macro_export]
macro_rules! byte_stream {
    () => {
        $crate::ByteStream::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut stream = $crate::ByteStream::new();
        $(
            stream.add(&$item);
        )+
        stream
    }};
}
