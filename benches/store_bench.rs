//! Benchmarks for hashkv store operations

use bytes::Bytes;
use criterion::{criterion_group, criterion_main, Criterion};
use hashkv::{Config, Store};
use tempfile::TempDir;

fn store_benchmarks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(Config::builder().dir(temp_dir.path()).build()).unwrap();
    let value = Bytes::from(vec![0xA5u8; 1024]);

    c.bench_function("put_1kib", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            store
                .put(&format!("bench.key.{}", i % 1000), value.clone())
                .unwrap();
        })
    });

    store.put("bench.read", value.clone()).unwrap();
    c.bench_function("get_1kib", |b| {
        b.iter(|| store.get("bench.read").unwrap());
    });

    c.bench_function("contains_hit", |b| {
        b.iter(|| store.contains("bench.read").unwrap());
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
