//! The CharSink trait - the character-consuming capability contract.

use crate::error::StreamError;

/// An object capable of consuming characters on demand.
///
/// The character twin of [`crate::Sink`]. Implementors provide the bulk
/// [`CharSink::write`] primitive; the single-character, string, and range
/// overloads default to it. Concrete sinks override [`CharSink::write_str`]
/// when they can take a `&str` without the intermediate copy.
pub trait CharSink {
    /// Writes all of `buf` to the sink.
    fn write(&mut self, buf: &[char]) -> Result<(), StreamError>;

    /// Writes a single character.
    fn write_char(&mut self, c: char) -> Result<(), StreamError> {
        self.write(&[c])
    }

    /// Writes every character of `s`.
    fn write_str(&mut self, s: &str) -> Result<(), StreamError> {
        let chars: Vec<char> = s.chars().collect();
        self.write(&chars)
    }

    /// Writes `buf[offset..offset + len]` to the sink.
    ///
    /// # Errors
    ///
    /// Fails with [`StreamError::OutOfRange`] when `offset + len` exceeds
    /// `buf.len()`; no partial write is performed in that case.
    fn write_range(&mut self, buf: &[char], offset: usize, len: usize) -> Result<(), StreamError> {
        let size = buf.len();
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or(StreamError::OutOfRange { offset, len, size })?;
        self.write(&buf[offset..end])
    }

    /// Pushes staged characters to the eventual destination.
    fn flush(&mut self) -> Result<(), StreamError> {
        Ok(())
    }

    /// Flushes and releases the sink. Idempotent.
    fn close(&mut self) -> Result<(), StreamError> {
        Ok(())
    }
}

impl<C: CharSink + ?Sized> CharSink for Box<C> {
    fn write(&mut self, buf: &[char]) -> Result<(), StreamError> {
        (**self).write(buf)
    }

    fn write_char(&mut self, c: char) -> Result<(), StreamError> {
        (**self).write_char(c)
    }

    fn write_str(&mut self, s: &str) -> Result<(), StreamError> {
        (**self).write_str(s)
    }

    fn write_range(&mut self, buf: &[char], offset: usize, len: usize) -> Result<(), StreamError> {
        (**self).write_range(buf, offset, len)
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        (**self).flush()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
}
