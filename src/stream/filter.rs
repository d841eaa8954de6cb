//! The FilterSink decorator base.

use crate::error::StreamError;
use crate::stream::Sink;

/// A sink decorator that forwards every operation to the sink it wraps.
///
/// `FilterSink` exclusively owns one wrapped sink and changes nothing
/// about its behavior. It exists as a base for layered decorators: a
/// wrapper holds a `FilterSink` (or wraps one), intercepts only the
/// operations it cares about, and inherits flush/close semantics for the
/// rest. Chains built this way are directional and acyclic, since each
/// wrapper owns exactly one child by value.
///
/// # Example
///
/// A counting decorator that intercepts `write` and forwards everything
/// else:
///
/// ```
/// use bufrs::{FilterSink, MemorySink, Sink, StreamError};
///
/// struct CountingSink<S> {
///     inner: FilterSink<S>,
///     written: u64,
/// }
///
/// impl<S: Sink> Sink for CountingSink<S> {
///     fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
///         self.written += buf.len() as u64;
///         self.inner.write(buf)
///     }
///
///     fn flush(&mut self) -> Result<(), StreamError> {
///         self.inner.flush()
///     }
///
///     fn close(&mut self) -> Result<(), StreamError> {
///         self.inner.close()
///     }
/// }
///
/// let mut sink = CountingSink {
///     inner: FilterSink::new(MemorySink::new()),
///     written: 0,
/// };
/// sink.write(b"12345")?;
/// assert_eq!(sink.written, 5);
/// # Ok::<(), StreamError>(())
/// ```
#[derive(Debug)]
pub struct FilterSink<S> {
    inner: S,
}

impl<S> FilterSink<S> {
    /// Wraps `inner`, taking exclusive ownership of it.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the wrapped sink.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped sink.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the decorator, returning the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for FilterSink<S> {
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
        self.inner.write(buf)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        self.inner.write_byte(byte)
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        self.inner.flush()
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;

    #[test]
    fn test_forwards_writes() {
        let mut filter = FilterSink::new(MemorySink::new());
        filter.write(b"pass").unwrap();
        filter.write_byte(b'!').unwrap();
        assert_eq!(filter.get_ref().as_slice(), b"pass!");
    }

    #[test]
    fn test_forwards_flush_and_close() {
        let mut filter = FilterSink::new(MemorySink::new());
        filter.write(b"x").unwrap();
        filter.flush().unwrap();
        filter.close().unwrap();
        filter.close().unwrap();
    }

    #[test]
    fn test_into_inner() {
        let mut filter = FilterSink::new(MemorySink::new());
        filter.write(b"kept").unwrap();
        let sink = filter.into_inner();
        assert_eq!(sink.as_slice(), b"kept");
    }

    #[test]
    fn test_nested_filters() {
        // Chains are explicitly supported: a filter over a filter
        let mut chain = FilterSink::new(FilterSink::new(MemorySink::new()));
        chain.write(b"deep").unwrap();
        assert_eq!(chain.get_ref().get_ref().as_slice(), b"deep");
    }
}
