//! Read text line by line and write it back out with line numbers.
//!
//! Run with:
//!     cargo run --example line_numbering

use bufrs::{BufferedReader, BufferedWriter, CharSink, StringReader, StringWriter, StreamError};

const POEM: &str = "The buffer fills,\r\nthe buffer drains,\ronly the bytes\nremain.";

fn main() -> Result<(), StreamError> {
    let mut reader = BufferedReader::with_capacity(StringReader::new(POEM), 16);
    let mut writer = BufferedWriter::new(StringWriter::new());

    let mut number = 1;
    while let Some(line) = reader.read_line()? {
        writer
            .append_str(&format!("{:>3} | ", number))?
            .append_str(&line)?
            .new_line()?;
        number += 1;
    }
    writer.flush()?;

    print!("{}", writer.get_ref());
    Ok(())
}
