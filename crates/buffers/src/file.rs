//! Raw, headerless file dump and load.

use std::fs;
use std::path::Path;

use log::debug;

use crate::{BufferError, ByteStream};

impl ByteStream {
    /// Replaces the stream's content with the bytes of the file at `path`
    /// and rewinds the cursor. Returns the number of bytes read.
    ///
    /// On failure the stream is left unchanged.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<usize, BufferError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BufferError::CouldNotOpenFileForReading {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        self.bytes = bytes;
        self.cursor = 0;
        Ok(self.bytes.len())
    }

    /// Writes the stream's entire content to `path`, creating or truncating
    /// the file. Returns the number of bytes written.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<usize, BufferError> {
        let path = path.as_ref();
        fs::write(path, &self.bytes).map_err(|source| {
            BufferError::CouldNotOpenFileForWriting {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(self.bytes.len())
    }
}
