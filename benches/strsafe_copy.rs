use core::ffi::c_char;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use safestrings::capacity::copy_bounded_bytes;
use safestrings::copy::{copy_bounded, copy_bounded_n};
use std::time::Duration;

unsafe extern "C" {
    #[link_name = "strncpy"]
    fn libc_strncpy(dest: *mut c_char, src: *const c_char, n: usize) -> *mut c_char;
    #[link_name = "strlcpy"]
    fn libc_strlcpy(dest: *mut c_char, src: *const c_char, size: usize) -> usize;
}

fn configure_group_for_len(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    len: usize,
) {
    if len >= 1 << 16 {
        group.sample_size(30);
        group.warm_up_time(Duration::from_millis(250));
        group.measurement_time(Duration::from_millis(700));
    } else {
        group.sample_size(40);
        group.warm_up_time(Duration::from_millis(200));
        group.measurement_time(Duration::from_millis(500));
    }
}

fn make_c_string(len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len + 1];
    for (i, b) in out[..len].iter_mut().enumerate() {
        *b = b'a' + ((i * 7 + len * 11 + 3) % 23) as u8;
    }
    out
}

fn copy_benches(c: &mut Criterion) {
    let sizes = [31usize, 256, 4096, 1 << 16];
    let mut group = c.benchmark_group("copy_bounded");

    for len in sizes {
        // "fit" copies the whole source, "truncate" stops at half of it.
        let cases = [("fit", len + 1), ("truncate", (len / 2).max(1))];
        for (mode, cap) in cases {
            let src = make_c_string(len);
            let mut dst = vec![0xAAu8; cap];
            let label = format!("size_{len}_{mode}");

            configure_group_for_len(&mut group, len);
            group.throughput(Throughput::Bytes(cap as u64));

            group.bench_with_input(BenchmarkId::new("libc_strncpy", &label), &cap, |b, &cap| {
                b.iter(|| unsafe {
                    libc_strncpy(
                        black_box(dst.as_mut_ptr() as *mut c_char),
                        black_box(src.as_ptr() as *const c_char),
                        black_box(cap),
                    );
                    // strncpy does not terminate on truncation.
                    *dst.as_mut_ptr().add(cap - 1) = 0;
                    black_box(core::ptr::read_volatile(dst.as_ptr()));
                });
            });

            group.bench_with_input(BenchmarkId::new("libc_strlcpy", &label), &cap, |b, &cap| {
                b.iter(|| unsafe {
                    black_box(libc_strlcpy(
                        black_box(dst.as_mut_ptr() as *mut c_char),
                        black_box(src.as_ptr() as *const c_char),
                        black_box(cap),
                    ));
                    black_box(core::ptr::read_volatile(dst.as_ptr()));
                });
            });

            group.bench_with_input(BenchmarkId::new("safestrings", &label), &cap, |b, &cap| {
                b.iter(|| {
                    let _ = black_box(copy_bounded(black_box(dst.as_mut_slice()), black_box(cap), black_box(src.as_slice())));
                    black_box(unsafe { core::ptr::read_volatile(dst.as_ptr()) });
                });
            });
        }
    }

    group.finish();
}

fn copy_n_benches(c: &mut Criterion) {
    let sizes = [31usize, 256, 4096];
    let mut group = c.benchmark_group("copy_bounded_n");

    for len in sizes {
        let src = make_c_string(len);
        let limit = (len / 3).max(1);
        let mut dst = vec![0xAAu8; len + 1];
        let label = format!("size_{len}_limit_{limit}");

        configure_group_for_len(&mut group, len);
        group.throughput(Throughput::Bytes(limit as u64));

        group.bench_with_input(BenchmarkId::new("safestrings", &label), &limit, |b, &limit| {
            b.iter(|| {
                let _ = black_box(copy_bounded_n(
                    black_box(dst.as_mut_slice()),
                    black_box(len + 1),
                    black_box(src.as_slice()),
                    black_box(limit),
                ));
            });
        });

        group.bench_with_input(BenchmarkId::new("safestrings_bytes", &label), &limit, |b, _| {
            b.iter(|| {
                let _ = black_box(copy_bounded_bytes(
                    black_box(dst.as_mut_slice()),
                    black_box(len + 1),
                    black_box(src.as_slice()),
                ));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, copy_benches, copy_n_benches);
criterion_main!(benches);
