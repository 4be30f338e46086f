//! CityHash one-shot benchmarks.
//!
//! Run: `cargo bench -p hashes --bench cityhash`

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::fast::cityhash::{
  Hash32Band, Hash64Band, hash32, hash64, hash64_with_seed, hash64_with_seeds, kernel_name_for_len32,
  kernel_name_for_len64,
};

mod common;

fn oneshot(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("cityhash/oneshot");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("hash32", len), data, |b, d| {
      b.iter(|| black_box(hash32(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("hash64", len), data, |b, d| {
      b.iter(|| black_box(hash64(black_box(d))))
    });
  }

  group.finish();
}

fn seeded(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("cityhash/seeded");

  for (len, data) in inputs.iter().filter(|(len, _)| *len <= 1024) {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("hash64_with_seed", len), data, |b, d| {
      b.iter(|| black_box(hash64_with_seed(black_box(d), black_box(0x0123_4567_89ab_cdef))))
    });
    group.bench_with_input(BenchmarkId::new("hash64_with_seeds", len), data, |b, d| {
      b.iter(|| black_box(hash64_with_seeds(black_box(d), black_box(1), black_box(2))))
    });
  }

  group.finish();
}

/// One input at the upper edge of every bounded band, named by kernel.
fn bands(c: &mut Criterion) {
  let mut group = c.benchmark_group("cityhash/bands");

  for band in Hash32Band::ALL {
    let len = band.max_len().unwrap_or(256);
    let data = common::pseudo_random_bytes(len, 0x5EED);
    common::set_throughput(&mut group, len);
    group.bench_with_input(BenchmarkId::new(kernel_name_for_len32(len), len), &data, |b, d| {
      b.iter(|| black_box(hash32(black_box(d))))
    });
  }

  for band in Hash64Band::ALL {
    let len = band.max_len().unwrap_or(256);
    let data = common::pseudo_random_bytes(len, 0x5EED);
    common::set_throughput(&mut group, len);
    group.bench_with_input(BenchmarkId::new(kernel_name_for_len64(len), len), &data, |b, d| {
      b.iter(|| black_box(hash64(black_box(d))))
    });
  }

  group.finish();
}

criterion_group!(benches, oneshot, seeded, bands);
criterion_main!(benches);
