use criterion::criterion_main;

mod len;

criterion_main!(import::benches, len::benches);
