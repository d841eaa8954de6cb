#![no_main]

use libfuzzer_sys::fuzz_target;

use bufrs::{BufferedSink, BufferedSource, MemorySink, MemorySource, Sink, Source};

fuzz_target!(|data: Vec<u8>| {
    // Test with various staging capacities
    for capacity in [1usize, 2, 3, 7, 64, 8192] {
        // Write path: stage through a write-behind decorator
        let mut sink = BufferedSink::with_capacity(MemorySink::with_capacity(1), capacity);
        let mut offset = 0;
        while offset < data.len() {
            // Vary slice sizes deterministically from the data itself
            let step = (data[offset] as usize % 37 + 1).min(data.len() - offset);
            sink.write(&data[offset..offset + step]).unwrap();
            offset += step;
        }
        sink.close().unwrap();

        // Verify: everything written arrived, in order
        let stored = sink.get_ref().to_vec();
        assert_eq!(stored, data, "write path must preserve bytes");

        // Read path: drain through a read-ahead decorator
        let mut source = BufferedSource::with_capacity(MemorySource::new(stored), capacity);
        let mut drained = Vec::with_capacity(data.len());
        let mut buf = [0u8; 11];
        while let Some(n) = source.read(&mut buf).unwrap() {
            drained.extend_from_slice(&buf[..n]);
        }
        assert_eq!(drained, data, "read path must preserve bytes");

        // Verify: available never exceeds what remains
        let mut source = BufferedSource::with_capacity(MemorySource::new(data.clone()), capacity);
        let mut remaining = data.len();
        while let Some(byte) = source.read_byte().unwrap() {
            let _ = byte;
            remaining -= 1;
            assert!(source.available() <= remaining);
        }
        assert_eq!(remaining, 0);
    }

    // Mark/reset: the marked prefix must replay identically
    if !data.is_empty() {
        let budget = data[0] as usize % 64;
        let mut source = BufferedSource::with_capacity(MemorySource::new(data.clone()), 4);
        source.mark(budget);

        let mut first = vec![0u8; budget];
        let mut got = 0;
        while got < budget {
            match source.read(&mut first[got..]).unwrap() {
                Some(n) => got += n,
                None => break,
            }
        }
        source.reset().unwrap();

        let mut second = vec![0u8; got];
        let mut again = 0;
        while again < got {
            match source.read(&mut second[again..]).unwrap() {
                Some(n) => again += n,
                None => break,
            }
        }
        assert_eq!(first[..got], second[..], "reset must replay the same bytes");
    }
});
