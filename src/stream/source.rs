//! The Source trait - the byte-producing capability contract.

use crate::error::StreamError;

/// An object capable of producing bytes on demand.
///
/// Implementors provide the bulk [`Source::read`] primitive; every other
/// operation has a default defined in terms of it. End of stream is
/// reported as a typed absence rather than a sentinel value: `read`
/// returns `Ok(None)` once no more data will ever be available, and
/// `Ok(Some(0))` only when the destination slice is empty. The same
/// convention applies to every implementation in this crate.
///
/// Sources never own the caller's buffer; a call copies at most
/// `buf.len()` bytes and reports how many it copied.
///
/// # Example
///
/// ```
/// use bufrs::{MemorySource, Source, StreamError};
///
/// let mut source = MemorySource::new(&b"abc"[..]);
/// let mut buf = [0u8; 2];
///
/// assert_eq!(source.read(&mut buf)?, Some(2));
/// assert_eq!(&buf, b"ab");
/// assert_eq!(source.read(&mut buf)?, Some(1));
/// assert_eq!(source.read(&mut buf)?, None);
/// # Ok::<(), StreamError>(())
/// ```
pub trait Source {
    /// Reads up to `buf.len()` bytes into `buf`.
    ///
    /// Returns the number of bytes read, or `None` at end of stream.
    /// May block on the underlying medium. A short read is not an error;
    /// callers that need an exact count must loop.
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, StreamError>;

    /// Reads a single byte, or `None` at end of stream.
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        let mut byte = [0u8; 1];
        match self.read(&mut byte)? {
            Some(n) if n > 0 => Ok(Some(byte[0])),
            _ => Ok(None),
        }
    }

    /// Reads up to `len` bytes into `buf[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// Fails with [`StreamError::OutOfRange`] when `offset + len` exceeds
    /// `buf.len()`; no bytes are transferred in that case.
    fn read_at(
        &mut self,
        buf: &mut [u8],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError> {
        let size = buf.len();
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or(StreamError::OutOfRange { offset, len, size })?;
        self.read(&mut buf[offset..end])
    }

    /// Consumes and discards up to `n` bytes.
    ///
    /// Short underlying reads are tolerated: the default implementation
    /// loops until `n` bytes are gone or end of stream is reached, and
    /// returns the count actually skipped.
    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        let mut scratch = [0u8; 1024];
        let mut skipped = 0u64;
        while skipped < n {
            let want = (n - skipped).min(scratch.len() as u64) as usize;
            match self.read(&mut scratch[..want])? {
                Some(read) if read > 0 => skipped += read as u64,
                _ => break,
            }
        }
        Ok(skipped)
    }

    /// Returns the number of bytes servable without touching the
    /// underlying medium. Defaults to 0 for sources with no staging.
    fn available(&self) -> usize {
        0
    }

    /// Whether this source supports [`Source::mark`] and [`Source::reset`].
    fn mark_supported(&self) -> bool {
        false
    }

    /// Records the current position as a checkpoint.
    ///
    /// `read_limit` is the number of bytes that may be read past the
    /// checkpoint before it becomes invalid. The default does nothing.
    fn mark(&mut self, read_limit: usize) {
        let _ = read_limit;
    }

    /// Rewinds to the most recent checkpoint.
    ///
    /// # Errors
    ///
    /// Fails with [`StreamError::IllegalState`] when marking is
    /// unsupported, no mark was set, or the mark has been invalidated.
    fn reset(&mut self) -> Result<(), StreamError> {
        Err(StreamError::IllegalState {
            message: "mark/reset not supported",
        })
    }

    /// Releases the source. Idempotent; a second call is a no-op.
    fn close(&mut self) -> Result<(), StreamError> {
        Ok(())
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, StreamError> {
        (**self).read(buf)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        (**self).read_byte()
    }

    fn read_at(
        &mut self,
        buf: &mut [u8],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, StreamError> {
        (**self).read_at(buf, offset, len)
    }

    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        (**self).skip(n)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }

    fn mark(&mut self, read_limit: usize) {
        (**self).mark(read_limit)
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        (**self).reset()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A source that hands out one byte per call.
    struct OneByteAtATime {
        remaining: u8,
    }

    impl Source for OneByteAtATime {
        fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, StreamError> {
            if buf.is_empty() {
                return Ok(Some(0));
            }
            if self.remaining == 0 {
                return Ok(None);
            }
            buf[0] = self.remaining;
            self.remaining -= 1;
            Ok(Some(1))
        }
    }

    #[test]
    fn test_read_byte_default() {
        let mut source = OneByteAtATime { remaining: 2 };
        assert_eq!(source.read_byte().unwrap(), Some(2));
        assert_eq!(source.read_byte().unwrap(), Some(1));
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_skip_loops_over_short_reads() {
        let mut source = OneByteAtATime { remaining: 5 };
        assert_eq!(source.skip(3).unwrap(), 3);
        assert_eq!(source.read_byte().unwrap(), Some(2));
    }

    #[test]
    fn test_skip_stops_at_end_of_stream() {
        let mut source = OneByteAtATime { remaining: 2 };
        assert_eq!(source.skip(10).unwrap(), 2);
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_read_at_rejects_bad_range() {
        let mut source = OneByteAtATime { remaining: 2 };
        let mut buf = [0u8; 4];
        let err = source.read_at(&mut buf, 2, 3).unwrap_err();
        matches!(err, StreamError::OutOfRange { .. });
        // Nothing was consumed by the rejected call
        assert_eq!(source.read_byte().unwrap(), Some(2));
    }

    #[test]
    fn test_read_at_overflowing_range() {
        let mut source = OneByteAtATime { remaining: 1 };
        let mut buf = [0u8; 4];
        assert!(source.read_at(&mut buf, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_reset_unsupported_by_default() {
        let mut source = OneByteAtATime { remaining: 1 };
        assert!(!source.mark_supported());
        assert!(source.reset().is_err());
    }

    #[test]
    fn test_boxed_source_forwards() {
        let mut boxed: Box<dyn Source> = Box::new(OneByteAtATime { remaining: 1 });
        assert_eq!(boxed.read_byte().unwrap(), Some(1));
        assert_eq!(boxed.read_byte().unwrap(), None);
    }
}
