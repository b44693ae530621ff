//! Benchmark decoding the length and data offset of minimal and overlong prefixes.

use commonware_vlpstr::{data, len, Prefix, Write};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

fn bench_len(c: &mut Criterion) {
    let prefixes = [
        ("direct", Prefix::minimal(6)),
        ("one_byte", Prefix::minimal(200)),
        ("four_bytes", Prefix::minimal(u32::MAX as u64)),
        ("eight_bytes", Prefix::minimal(u64::MAX)),
        ("overlong", Prefix::fixed(10, 7).unwrap()),
    ];
    for (name, prefix) in prefixes {
        let mut buf = Vec::new();
        prefix.write(&mut buf);
        c.bench_function(&format!("{}/len/{}", module_path!(), name), |b| {
            b.iter(|| len(black_box(&buf)).unwrap());
        });
        c.bench_function(&format!("{}/data/{}", module_path!(), name), |b| {
            b.iter(|| data(black_box(&buf)).unwrap());
        });
    }
}

criterion_group!(benches, bench_len);
