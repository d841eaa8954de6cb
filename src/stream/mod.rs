//! Byte stream capability contracts.
//!
//! - [`Source`] - produce bytes into a caller buffer
//! - [`Sink`] - consume bytes from a caller buffer
//! - [`FilterSink`] - forwarding decorator base for layered sinks

mod filter;
mod sink;
mod source;

pub use filter::FilterSink;
pub use sink::Sink;
pub use source::Source;
