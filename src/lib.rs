//! bufrs
//!
//! Composable buffered stream I/O for Rust.
//!
//! `bufrs` moves flat sequences of bytes or characters between a source or
//! sink and a caller-supplied buffer, optionally staging that movement
//! through an internal buffer. It is designed as a small set of composable
//! primitives:
//!
//! - [`Source`] / [`Sink`] - minimal byte read/write capability contracts
//! - [`BufferedSource`] / [`BufferedSink`] - read-ahead and write-behind
//!   decorators with mark/reset checkpointing
//! - [`MemorySource`] / [`MemorySink`] - in-memory endpoints (bounded
//!   source, growable accumulator)
//! - [`CharSource`] / [`CharSink`] and their decorators and string-backed
//!   endpoints for character streams
//!
//! The crate intentionally:
//! - does NOT do asynchronous or multiplexed I/O
//! - does NOT manage concurrency (callers serialize access)
//! - does NOT frame, compress, or transform the data
//! - does NOT assume any particular endpoint (file, socket, memory)
//!
//! It only does one thing: **stage bytes/chars between an endpoint and you**
//!
//! # End of stream
//!
//! Instead of a sentinel integer, every source reports end of stream as a
//! typed absence: bulk reads return `Ok(None)` once no more data will ever
//! be produced, and `Ok(Some(0))` only when the destination slice is empty.
//!
//! # Reading
//!
//! ```
//! use bufrs::{BufferedSource, MemorySource, Source, StreamError};
//!
//! fn main() -> Result<(), StreamError> {
//!     let source = MemorySource::new(&b"hello world"[..]);
//!     let mut buffered = BufferedSource::with_capacity(source, 4);
//!
//!     let mut buf = [0u8; 5];
//!     while let Some(n) = buffered.read(&mut buf)? {
//!         println!("got {} bytes", n);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Writing
//!
//! ```
//! use bufrs::{BufferedSink, MemorySink, Sink, StreamError};
//!
//! fn main() -> Result<(), StreamError> {
//!     let mut sink = BufferedSink::new(MemorySink::new());
//!     sink.write(b"staged until flush or close")?;
//!     sink.flush()?;
//!
//!     assert_eq!(sink.get_ref().as_slice(), b"staged until flush or close");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffered;
mod error;
mod memory;
mod stream;
mod text;

//
// Public surface (intentionally tiny)
//

pub use buffered::{BufferedSink, BufferedSource, DEFAULT_BUFFER_SIZE};
pub use error::StreamError;
pub use memory::{DEFAULT_INITIAL_CAPACITY, MemorySink, MemorySource};
pub use stream::{FilterSink, Sink, Source};
pub use text::{
    BufferedReader, BufferedWriter, CharSink, CharSource, LINE_SEPARATOR, StringReader,
    StringWriter,
};
