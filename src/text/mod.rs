//! Character stream contracts, decorators, and string-backed endpoints.
//!
//! - [`CharSource`] / [`CharSink`] - character capability contracts
//! - [`BufferedReader`] / [`BufferedWriter`] - buffering decorators with
//!   mark/reset, line splitting, and append chaining
//! - [`StringReader`] / [`StringWriter`] - string-backed endpoints

mod reader;
mod sink;
mod source;
mod string_reader;
mod string_writer;
mod writer;

pub use reader::BufferedReader;
pub use sink::CharSink;
pub use source::CharSource;
pub use string_reader::StringReader;
pub use string_writer::StringWriter;
pub use writer::{BufferedWriter, LINE_SEPARATOR};
