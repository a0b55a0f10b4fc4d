//! Benchmark suite for icon extraction
//!
//! Measures the structured PE walk against the byte-scanning ripper, which
//! is the hot path for files without a usable resource table.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use iconeko_benches::{generate_blob, generate_dib, generate_pe, generate_png, sizes};
use iconeko_types::file::{extract, rip_icons, synthesize_icon};
use std::hint::black_box;

/// Benchmark the structured path with growing icon counts
fn bench_structured_extract(c: &mut Criterion) {
	let mut group = c.benchmark_group("extract_structured");

	for count in [1usize, 8, 64] {
		let icons: Vec<Vec<u8>> = (0..count)
			.map(|i| if i % 2 == 0 { generate_png(32, 512) } else { generate_dib(32, 8) })
			.collect();
		let image = generate_pe(&icons);

		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("pe32", count), &image, |b, image| {
			b.iter(|| extract(black_box(image)));
		});
	}

	group.finish();
}

/// Benchmark the ripper over blobs of increasing size
fn bench_rip(c: &mut Criterion) {
	let mut group = c.benchmark_group("rip");
	let images = vec![generate_png(48, 2048), generate_dib(32, 32), generate_dib(16, 4)];

	let test_sizes = [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)];

	for (name, size) in test_sizes {
		let blob = generate_blob(size, &images);

		group.throughput(Throughput::Bytes(size as u64));
		group.bench_with_input(BenchmarkId::new("embedded", name), &blob, |b, blob| {
			b.iter(|| rip_icons(black_box(blob)));
		});
	}

	// Worst case: nothing to find, every offset is probed
	let empty = generate_blob(sizes::MEDIUM, &[]);
	group.throughput(Throughput::Bytes(empty.len() as u64));
	group.bench_function("no_match", |b| {
		b.iter(|| rip_icons(black_box(&empty)));
	});

	group.finish();
}

/// Benchmark wrapping DIBs into single-image ICO files
fn bench_synthesize(c: &mut Criterion) {
	let mut group = c.benchmark_group("synthesize_icon");

	for (side, bpp) in [(16, 4u16), (32, 8), (48, 32), (256, 32)] {
		let dib = generate_dib(side, bpp);

		group.throughput(Throughput::Bytes(dib.len() as u64));
		group.bench_with_input(
			BenchmarkId::new("dib", format!("{side}x{side}x{bpp}")),
			&dib,
			|b, dib| {
				b.iter(|| synthesize_icon(black_box(dib)));
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_structured_extract, bench_rip, bench_synthesize);
criterion_main!(benches);
