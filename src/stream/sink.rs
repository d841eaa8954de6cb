//! The Sink trait - the byte-consuming capability contract.

use crate::error::StreamError;

/// An object capable of consuming bytes on demand.
///
/// Implementors provide the bulk [`Sink::write`] primitive; the
/// single-byte and range overloads default to it. `flush` pushes staged
/// data toward the eventual destination and is a no-op for sinks with no
/// staging buffer. `close` is idempotent: a second call must not fault or
/// release the wrapped resource twice.
pub trait Sink {
    /// Writes all of `buf` to the sink.
    ///
    /// # Errors
    ///
    /// Fails with [`StreamError::Io`] when the underlying medium rejects
    /// the write, or [`StreamError::IllegalState`] after close.
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError>;

    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        self.write(&[byte])
    }

    /// Writes `buf[offset..offset + len]` to the sink.
    ///
    /// # Errors
    ///
    /// Fails with [`StreamError::OutOfRange`] when `offset + len` exceeds
    /// `buf.len()`; no partial write is performed in that case.
    fn write_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), StreamError> {
        let size = buf.len();
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or(StreamError::OutOfRange { offset, len, size })?;
        self.write(&buf[offset..end])
    }

    /// Pushes staged data to the eventual destination.
    ///
    /// No-op for sinks with no staging buffer.
    fn flush(&mut self) -> Result<(), StreamError> {
        Ok(())
    }

    /// Flushes and releases the sink. Idempotent.
    fn close(&mut self) -> Result<(), StreamError> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
        (**self).write(buf)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        (**self).write_byte(byte)
    }

    fn write_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), StreamError> {
        (**self).write_range(buf, offset, len)
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        (**self).flush()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
}
