use thiserror::Error;
use whimsy_buffers::BufferError;

use crate::Kind;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("invalid conversion from {from} to {to}")]
    InvalidConversion { from: Kind, to: Kind },
    #[error("{lhs} and {rhs} are not comparable")]
    NotComparable { lhs: Kind, rhs: Kind },
    #[error("syntax error at offset {offset}: {reason}")]
    ParserSyntaxError { offset: usize, reason: &'static str },
}

/// Failure categories shared by every whimsy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArrayOutOfBounds,
    InvalidConversion,
    NotComparable,
    ParserSyntaxError,
    CouldNotOpenFileForReading,
    CouldNotOpenFileForWriting,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Buffer(BufferError::ArrayOutOfBounds { .. }) => ErrorKind::ArrayOutOfBounds,
            Error::Buffer(BufferError::CouldNotOpenFileForReading { .. }) => {
                ErrorKind::CouldNotOpenFileForReading
            }
            Error::Buffer(BufferError::CouldNotOpenFileForWriting { .. }) => {
                ErrorKind::CouldNotOpenFileForWriting
            }
            Error::InvalidConversion { .. } => ErrorKind::InvalidConversion,
            Error::NotComparable { .. } => ErrorKind::NotComparable,
            Error::ParserSyntaxError { .. } => ErrorKind::ParserSyntaxError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteStream;

    #[test]
    fn test_kind_of_buffer_errors() {
        let err: Error = ByteStream::new().get_int().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::ArrayOutOfBounds);

        let err: Error = ByteStream::new()
            .read_file("/definitely/not/here.bin")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::CouldNotOpenFileForReading);
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidConversion {
            from: Kind::HashTable,
            to: Kind::Int32,
        };
        assert_eq!(err.to_string(), "invalid conversion from hashtable to int");
        assert_eq!(err.kind(), ErrorKind::InvalidConversion);

        let err = Error::ParserSyntaxError {
            offset: 3,
            reason: "expected ':'",
        };
        assert_eq!(err.to_string(), "syntax error at offset 3: expected ':'");
    }
}
