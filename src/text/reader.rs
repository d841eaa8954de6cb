//! The BufferedReader decorator - char read-ahead buffering with line splitting.

use crate::buffered::DEFAULT_BUFFER_SIZE;
use crate::error::StreamError;
use crate::text::CharSource;

/// Largest size the internal buffer may grow to while honoring a mark.
const MAX_BUFFER_SIZE: usize = 1 << 28; // 256 Mi chars

#[derive(Debug, Clone, Copy)]
struct Mark {
    position: usize,
    limit: usize,
}

/// A [`CharSource`] decorator that buffers an underlying character source.
///
/// The character twin of [`crate::BufferedSource`], with the same
/// mark/reset behavior (the marked region survives refills by sliding or
/// growing; reading past the budget invalidates the mark and `reset`
/// then fails), plus line-oriented reading via
/// [`BufferedReader::read_line`].
///
/// # Example
///
/// ```
/// use bufrs::{BufferedReader, StringReader, StreamError};
///
/// let mut reader = BufferedReader::new(StringReader::new("one\ntwo\r\nthree"));
/// assert_eq!(reader.read_line()?.as_deref(), Some("one"));
/// assert_eq!(reader.read_line()?.as_deref(), Some("two"));
/// assert_eq!(reader.read_line()?.as_deref(), Some("three"));
/// assert_eq!(reader.read_line()?, None);
/// # Ok::<(), StreamError>(())
/// ```
#[derive(Debug)]
pub struct BufferedReader<R> {
    inner: R,
    buf: Vec<char>,
    pos: usize,
    count: usize,
    mark: Option<Mark>,
    closed: bool,
}

impl<R: CharSource> BufferedReader<R> {
    /// Wraps `inner` with the default buffer capacity.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_BUFFER_SIZE)
    }

    /// Wraps `inner` with the given buffer capacity (at least 1).
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buf: vec!['\0'; capacity.max(1)],
            pos: 0,
            count: 0,
            mark: None,
            closed: false,
        }
    }

    /// Returns a reference to the wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the decorator, discarding any staged characters.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn check_open(&self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::IllegalState {
                message: "reader is closed",
            });
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<Option<usize>, StreamError> {
        match self.mark {
            None => {
                self.pos = 0;
                self.count = 0;
            }
            Some(mark) => {
                if self.pos - mark.position >= mark.limit {
                    self.mark = None;
                    self.pos = 0;
                    self.count = 0;
                } else if mark.position > 0 {
                    self.buf.copy_within(mark.position..self.count, 0);
                    self.pos -= mark.position;
                    self.count -= mark.position;
                    self.mark = Some(Mark {
                        position: 0,
                        limit: mark.limit,
                    });
                } else if self.count == self.buf.len() {
                    let new_len = self
                        .buf
                        .len()
                        .saturating_mul(2)
                        .min(mark.limit)
                        .min(MAX_BUFFER_SIZE);
                    if new_len <= self.buf.len() {
                        return Err(StreamError::Overflow {
                            requested: mark.limit,
                            max: MAX_BUFFER_SIZE,
                        });
                    }
                    self.buf.resize(new_len, '\0');
                }
            }
        }

        match self.inner.read(&mut self.buf[self.count..])? {
            Some(n) if n > 0 => {
                self.count += n;
                Ok(Some(n))
            }
            _ => Ok(None),
        }
    }

    /// Reads one line of text.
    ///
    /// A line is terminated by `\n`, `\r`, or `\r\n`; the terminator is
    /// recognized but never included in the result. Returns `None` when
    /// zero characters were read before end of stream; a line that is
    /// empty but terminated comes back as `Some("")`.
    pub fn read_line(&mut self) -> Result<Option<String>, StreamError> {
        self.check_open()?;
        let mut line = String::new();
        loop {
            if self.pos == self.count && self.fill()?.is_none() {
                return if line.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(line))
                };
            }
            let c = self.buf[self.pos];
            self.pos += 1;
            match c {
                '\n' => return Ok(Some(line)),
                '\r' => {
                    // A '\r' at the end of the staged region peeks across
                    // a refill to swallow the '\n' of a "\r\n" pair
                    if self.pos == self.count {
                        self.fill()?;
                    }
                    if self.pos < self.count && self.buf[self.pos] == '\n' {
                        self.pos += 1;
                    }
                    return Ok(Some(line));
                }
                _ => line.push(c),
            }
        }
    }
}

impl<R: CharSource> CharSource for BufferedReader<R> {
    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, StreamError> {
        self.check_open()?;
        if buf.is_empty() {
            return Ok(Some(0));
        }
        if self.pos == self.count {
            if buf.len() >= self.buf.len() && self.mark.is_none() {
                return self.inner.read(buf);
            }
            if self.fill()?.is_none() {
                return Ok(None);
            }
        }
        let n = (self.count - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(Some(n))
    }

    fn read_char(&mut self) -> Result<Option<char>, StreamError> {
        self.check_open()?;
        if self.pos == self.count && self.fill()?.is_none() {
            return Ok(None);
        }
        let c = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(c))
    }

    fn skip(&mut self, n: u64) -> Result<u64, StreamError> {
        self.check_open()?;
        let mut skipped = 0u64;
        while skipped < n {
            let staged = (self.count - self.pos) as u64;
            if staged == 0 {
                if self.fill()?.is_none() {
                    break;
                }
                continue;
            }
            let step = staged.min(n - skipped);
            self.pos += step as usize;
            skipped += step;
        }
        Ok(skipped)
    }

    fn ready(&self) -> bool {
        !self.closed && (self.pos < self.count || self.inner.ready())
    }

    fn mark_supported(&self) -> bool {
        true
    }

    fn mark(&mut self, read_limit: usize) {
        self.mark = Some(Mark {
            position: self.pos,
            limit: read_limit,
        });
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.check_open()?;
        match self.mark {
            Some(mark) if self.pos - mark.position <= mark.limit => {
                self.pos = mark.position;
                Ok(())
            }
            Some(_) => {
                self.mark = None;
                Err(StreamError::IllegalState {
                    message: "mark invalidated by reading past its limit",
                })
            }
            None => Err(StreamError::IllegalState {
                message: "reset without a valid mark",
            }),
        }
    }

    fn close(&mut self) -> Result<(), StreamError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.buf = Vec::new();
        self.pos = 0;
        self.count = 0;
        self.mark = None;
        self.inner.close()
    }
}
