//! The MemorySink type - a growable in-memory byte accumulator.

use bytes::Bytes;

use crate::error::StreamError;
use crate::stream::Sink;

/// Initial capacity used by [`MemorySink::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

/// Largest capacity a [`MemorySink`] will grow to.
pub const MAX_CAPACITY: usize = 1 << 30; // 1 GiB

/// A dynamically growing byte buffer usable as a [`Sink`].
///
/// Capacity only grows, never shrinks. A write that would exceed the
/// current capacity grows the storage to `max(capacity * 2, needed)`
/// before any byte is copied; a write is never truncated silently.
/// Growth past [`MAX_CAPACITY`] fails with [`StreamError::Overflow`].
///
/// `flush` and `close` are no-ops: there is no external destination to
/// synchronize or release.
///
/// # Example
///
/// ```
/// use bufrs::{MemorySink, Sink, StreamError};
///
/// let mut sink = MemorySink::new();
/// sink.write(b"hello")?;
/// sink.write_byte(b'!')?;
///
/// assert_eq!(sink.to_vec(), b"hello!");
/// # Ok::<(), StreamError>(())
/// ```
#[derive(Debug)]
pub struct MemorySink {
    buf: Vec<u8>,
    count: usize,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Creates a sink with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates a sink with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            count: 0,
        }
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the occupied bytes as a borrowed slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.count]
    }

    /// Returns a copy of exactly the occupied prefix, never the full
    /// backing capacity.
    pub fn to_vec(&self) -> Vec<u8> {
        self.buf[..self.count].to_vec()
    }

    /// Returns the occupied prefix as [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Writes the occupied prefix to another sink.
    pub fn write_to<S: Sink>(&self, out: &mut S) -> Result<(), StreamError> {
        out.write(self.as_slice())
    }

    /// Discards the accumulated bytes without releasing or shrinking the
    /// backing storage, so the sink can be reused.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Grows the backing storage to hold at least `needed` bytes.
    fn ensure_capacity(&mut self, needed: usize) -> Result<(), StreamError> {
        if needed <= self.buf.len() {
            return Ok(());
        }
        if needed > MAX_CAPACITY {
            return Err(StreamError::Overflow {
                requested: needed,
                max: MAX_CAPACITY,
            });
        }
        let new_capacity = (self.buf.len().saturating_mul(2))
            .max(needed)
            .min(MAX_CAPACITY);
        self.buf.resize(new_capacity, 0);
        Ok(())
    }
}

impl Sink for MemorySink {
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
        let needed = self
            .count
            .checked_add(buf.len())
            .ok_or(StreamError::Overflow {
                requested: usize::MAX,
                max: MAX_CAPACITY,
            })?;
        self.ensure_capacity(needed)?;
        self.buf[self.count..needed].copy_from_slice(buf);
        self.count = needed;
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        if self.count == self.buf.len() {
            self.ensure_capacity(self.count + 1)?;
        }
        self.buf[self.count] = byte;
        self.count += 1;
        Ok(())
    }
}
