//! Criterion benchmarks for the C ABI entry points, called through the rlib.
//!
//! Measures the cost of raw-part validation and the panic guard on top of
//! the kernel itself.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use zerocount_bench::reference_profile;

fn bench_ffi_tail_zero_count(c: &mut Criterion) {
    let buf = reference_profile(42).build().unwrap();

    let mut group = c.benchmark_group("ffi_tail_zero_count");
    group.bench_function("unchecked", |b| {
        b.iter(|| {
            black_box(zerocount_ffi::tail_zero_count(
                black_box(buf.as_ptr()),
                black_box(buf.len()),
            ))
        });
    });
    group.bench_function("checked", |b| {
        let mut out = 0u64;
        b.iter(|| {
            let rc = zerocount_ffi::tail_zero_count_checked(
                black_box(buf.as_ptr()),
                black_box(buf.len()),
                &mut out,
            );
            black_box((rc, out))
        });
    });
    group.finish();
}

fn bench_ffi_empty_call(c: &mut Criterion) {
    c.bench_function("ffi_tail_zero_count_empty", |b| {
        b.iter(|| black_box(zerocount_ffi::tail_zero_count(std::ptr::null(), black_box(0))));
    });
}

criterion_group!(benches, bench_ffi_tail_zero_count, bench_ffi_empty_call);
criterion_main!(benches);
