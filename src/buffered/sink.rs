//! The BufferedSink decorator - write-behind buffering.

use crate::error::StreamError;
use crate::stream::Sink;

use super::DEFAULT_BUFFER_SIZE;

/// A [`Sink`] decorator that stages writes in a fixed-capacity buffer.
///
/// Bytes accumulate in the internal buffer; the wrapped sink is invoked
/// only when the buffer fills, on [`Sink::flush`], or on [`Sink::close`].
/// The decorator exclusively owns the wrapped sink and closes it exactly
/// once. A buffer flush always leaves the occupancy at 0.
///
/// # Example
///
/// ```
/// use bufrs::{BufferedSink, MemorySink, Sink, StreamError};
///
/// let mut sink = BufferedSink::with_capacity(MemorySink::new(), 4);
/// sink.write(b"ab")?;
/// assert!(sink.get_ref().is_empty()); // still staged
///
/// sink.write(b"cd")?; // buffer full: pushed through
/// assert_eq!(sink.get_ref().as_slice(), b"abcd");
/// # Ok::<(), StreamError>(())
/// ```
#[derive(Debug)]
pub struct BufferedSink<S> {
    inner: S,
    buf: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl<S: Sink> BufferedSink<S> {
    /// Wraps `inner` with the default buffer capacity.
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_BUFFER_SIZE)
    }

    /// Wraps `inner` with the given buffer capacity (at least 1).
    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            buf: vec![0; capacity.max(1)],
            pos: 0,
            closed: false,
        }
    }

    /// Returns a reference to the wrapped sink.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped sink.
    ///
    /// Writing to the wrapped sink directly reorders it relative to the
    /// staged bytes.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the decorator, discarding any staged bytes.
    ///
    /// Call [`Sink::flush`] first to push them through.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns the capacity of the internal buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of staged bytes not yet pushed through.
    pub fn staged(&self) -> usize {
        self.pos
    }

    fn check_open(&self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::IllegalState {
                message: "sink is closed",
            });
        }
        Ok(())
    }

    /// Writes the staged bytes to the wrapped sink and empties the buffer.
    fn flush_staged(&mut self) -> Result<(), StreamError> {
        if self.pos > 0 {
            let staged = self.pos;
            self.pos = 0;
            self.inner.write(&self.buf[..staged])?;
        }
        Ok(())
    }
}

impl<S: Sink> Sink for BufferedSink<S> {
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
        self.check_open()?;
        // Oversized payloads skip the staging copy entirely
        if buf.len() >= self.buf.len() {
            self.flush_staged()?;
            return self.inner.write(buf);
        }
        let mut offset = 0;
        while offset < buf.len() {
            let n = (self.buf.len() - self.pos).min(buf.len() - offset);
            self.buf[self.pos..self.pos + n].copy_from_slice(&buf[offset..offset + n]);
            self.pos += n;
            offset += n;
            if self.pos == self.buf.len() {
                self.flush_staged()?;
            }
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        self.check_open()?;
        self.buf[self.pos] = byte;
        self.pos += 1;
        if self.pos == self.buf.len() {
            self.flush_staged()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        self.check_open()?;
        self.flush_staged()?;
        self.inner.flush()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // The wrapped sink is closed even when the final flush fails;
        // the first error wins
        let flushed = self.flush_staged();
        let closed = self.inner.close();
        flushed.and(closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;

    #[test]
    fn test_writes_stay_staged_until_full() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 4);
        sink.write_byte(b'a').unwrap();
        sink.write_byte(b'b').unwrap();
        assert!(sink.get_ref().is_empty());
        assert_eq!(sink.staged(), 2);
    }

    #[test]
    fn test_flush_on_full_buffer() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 2);
        sink.write_byte(b'x').unwrap();
        sink.write_byte(b'y').unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"xy");
        assert_eq!(sink.staged(), 0);
    }

    #[test]
    fn test_bulk_write_flushes_mid_copy() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 4);
        sink.write(b"ab").unwrap();
        sink.write(b"cde").unwrap(); // crosses the capacity boundary
        assert_eq!(sink.get_ref().as_slice(), b"abcd");
        assert_eq!(sink.staged(), 1);
        sink.flush().unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"abcde");
    }

    #[test]
    fn test_oversized_write_bypasses_buffer() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 4);
        sink.write(b"ab").unwrap();
        sink.write(b"0123456789").unwrap();
        // Staged bytes flushed first, then the payload written directly
        assert_eq!(sink.get_ref().as_slice(), b"ab0123456789");
        assert_eq!(sink.staged(), 0);
    }

    #[test]
    fn test_flush_pushes_partial_buffer() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 8);
        sink.write(b"abc").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"abc");
        assert_eq!(sink.staged(), 0);
    }

    #[test]
    fn test_close_flushes_staged_bytes() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 64);
        sink.write(b"short").unwrap();
        sink.close().unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"short");
    }

    #[test]
    fn test_close_idempotent_and_write_after_close_fails() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 8);
        sink.write(b"once").unwrap();
        sink.close().unwrap();
        sink.close().unwrap();
        assert!(sink.write(b"more").is_err());
        assert!(sink.write_byte(b'!').is_err());
        assert!(sink.flush().is_err());
        assert_eq!(sink.get_ref().as_slice(), b"once");
    }

    #[test]
    fn test_chained_decorators() {
        let inner = BufferedSink::with_capacity(MemorySink::new(), 2);
        let mut outer = BufferedSink::with_capacity(inner, 3);
        outer.write(b"chained bytes").unwrap();
        outer.flush().unwrap();
        assert_eq!(outer.get_ref().get_ref().as_slice(), b"chained bytes");
    }

    #[test]
    fn test_write_range_through_decorator() {
        let mut sink = BufferedSink::with_capacity(MemorySink::new(), 8);
        sink.write_range(b"abcdef", 1, 3).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"bcd");

        assert!(sink.write_range(b"abc", 2, 5).is_err());
    }
}
