//! Benchmarks for bufrs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bufrs::{BufferedSink, BufferedSource, MemorySink, MemorySource, Sink, Source};

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("reads");

    for size in [64 * 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));

        // Single-byte reads straight off the endpoint
        group.bench_with_input(format!("direct_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut source = MemorySource::new(data.clone());
                let mut total = 0usize;
                while let Some(_byte) = source.read_byte().unwrap() {
                    total += 1;
                }
                black_box(total)
            });
        });

        // Single-byte reads through the read-ahead decorator
        group.bench_with_input(format!("buffered_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut source = BufferedSource::new(MemorySource::new(data.clone()));
                let mut total = 0usize;
                while let Some(_byte) = source.read_byte().unwrap() {
                    total += 1;
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("writes");
    let size = 1024 * 1024; // 1 MB

    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("single_bytes_direct", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            for i in 0..size {
                sink.write_byte((i % 256) as u8).unwrap();
            }
            black_box(sink.len())
        });
    });

    group.bench_function("single_bytes_buffered", |b| {
        b.iter(|| {
            let mut sink = BufferedSink::new(MemorySink::new());
            for i in 0..size {
                sink.write_byte((i % 256) as u8).unwrap();
            }
            sink.flush().unwrap();
            black_box(sink.get_ref().len())
        });
    });

    group.bench_function("bulk_slices_buffered", |b| {
        let chunk = vec![0xA5u8; 1024];
        b.iter(|| {
            let mut sink = BufferedSink::new(MemorySink::new());
            for _ in 0..(size / chunk.len()) {
                sink.write(black_box(&chunk)).unwrap();
            }
            sink.flush().unwrap();
            black_box(sink.get_ref().len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reads, bench_writes);
criterion_main!(benches);
