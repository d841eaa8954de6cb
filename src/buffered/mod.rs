//! Buffering decorators for byte streams.
//!
//! - [`BufferedSource`] - read-ahead buffering with mark/reset
//! - [`BufferedSink`] - write-behind buffering
//!
//! Both wrap any conforming [`crate::Source`]/[`crate::Sink`], including
//! another decorator; chains are explicitly supported.

mod sink;
mod source;

pub use sink::BufferedSink;
pub use source::BufferedSource;

/// Default internal buffer capacity for the buffering decorators.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;
