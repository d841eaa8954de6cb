//! In-memory byte endpoints.
//!
//! - [`MemorySource`] - a fixed byte sequence exposed as a readable
//!   source with always-valid mark/reset
//! - [`MemorySink`] - a growable byte accumulator usable as a sink

mod sink;
mod source;

pub use sink::{DEFAULT_INITIAL_CAPACITY, MemorySink};
pub use source::MemorySource;
