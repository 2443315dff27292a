//! Stream read/write benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use ironstream_core::channel::{MemoryChannel, MemorySource};
use ironstream_core::stream::Stream;
use ironstream_core::types::ByteOrder;
use std::hint::black_box;
use std::io::SeekFrom;

fn benchmark_primitive_reads(c: &mut Criterion) {
    let mut stream = Stream::new(MemorySource::new(vec![0u8; 4096])).unwrap();

    c.bench_function("read_u64_normal", |b| {
        b.iter(|| {
            stream.seek_read(SeekFrom::Start(0)).unwrap();
            black_box(stream.read::<u64>().unwrap())
        })
    });

    let mut reversed = Stream::with_byte_order(
        MemorySource::new(vec![0u8; 4096]),
        ByteOrder::Reverse,
        ByteOrder::Normal,
    )
    .unwrap();

    c.bench_function("read_u64_reverse", |b| {
        b.iter(|| {
            reversed.seek_read(SeekFrom::Start(0)).unwrap();
            black_box(reversed.read::<u64>().unwrap())
        })
    });
}

fn benchmark_primitive_writes(c: &mut Criterion) {
    let mut stream = Stream::new(MemoryChannel::with_data(vec![0u8; 4096])).unwrap();

    c.bench_function("write_u64", |b| {
        b.iter(|| {
            stream.seek_write(0).unwrap();
            stream
                .write(&black_box(0x0123_4567_89AB_CDEFu64))
                .unwrap();
        })
    });
}

criterion_group!(benches, benchmark_primitive_reads, benchmark_primitive_writes);
criterion_main!(benches);
