//! Write bytes through the buffered stack, then read them back.
//!
//! Run with:
//!     cargo run --example roundtrip

use bufrs::{BufferedSink, BufferedSource, MemorySink, MemorySource, Sink, Source, StreamError};

fn main() -> Result<(), StreamError> {
    let payload: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();

    // Stage writes through a small buffer into a growable accumulator
    let mut sink = BufferedSink::with_capacity(MemorySink::new(), 512);
    sink.write(&payload)?;
    sink.close()?;

    let stored = sink.get_ref().to_vec();
    println!("wrote {} bytes", stored.len());

    // Read them back through a read-ahead decorator
    let mut source = BufferedSource::with_capacity(MemorySource::new(stored), 512);
    let mut drained = Vec::new();
    let mut buf = [0u8; 300];
    while let Some(n) = source.read(&mut buf)? {
        drained.extend_from_slice(&buf[..n]);
    }
    source.close()?;

    println!("read back {} bytes", drained.len());
    assert_eq!(drained, payload);
    println!("round-trip ok");
    Ok(())
}
