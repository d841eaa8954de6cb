//! Error types for bufrs.

use std::fmt;

/// Errors that can occur during stream operations.
#[derive(Debug)]
pub enum StreamError {
    /// An I/O error reported by the wrapped endpoint.
    Io(std::io::Error),

    /// An offset/length pair fell outside the bounds of a buffer.
    OutOfRange {
        /// The requested starting offset.
        offset: usize,
        /// The requested length.
        len: usize,
        /// The actual size of the buffer.
        size: usize,
    },

    /// The operation is not valid in the stream's current state.
    IllegalState {
        /// Description of the violated precondition.
        message: &'static str,
    },

    /// A buffer would have to grow past the maximum allowed size.
    Overflow {
        /// The capacity that was requested.
        requested: usize,
        /// The maximum allowed capacity.
        max: usize,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "io error: {}", e),
            StreamError::OutOfRange { offset, len, size } => {
                write!(
                    f,
                    "range out of bounds: offset {} + len {} exceeds size {}",
                    offset, len, size
                )
            }
            StreamError::IllegalState { message } => {
                write!(f, "illegal state: {}", message)
            }
            StreamError::Overflow { requested, max } => {
                write!(f, "buffer overflow: {} bytes requested (max {})", requested, max)
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        StreamError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: StreamError = io_err.into();
        matches!(err, StreamError::Io(_));
    }

    #[test]
    fn test_display() {
        let err = StreamError::OutOfRange {
            offset: 4,
            len: 10,
            size: 8,
        };
        assert!(err.to_string().contains("out of bounds"));

        let err = StreamError::Overflow {
            requested: 100,
            max: 50,
        };
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_source_chains_io() {
        use std::error::Error;

        let err = StreamError::from(std::io::Error::new(std::io::ErrorKind::Other, "inner"));
        assert!(err.source().is_some());

        let err = StreamError::IllegalState { message: "closed" };
        assert!(err.source().is_none());
    }
}
