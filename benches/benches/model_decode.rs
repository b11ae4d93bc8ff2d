//! Benchmark suite for model decoding
//!
//! Measures vertex stream walking, face group parsing and BSP descent over
//! synthetic models.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sfx_benches::{
	generate_bsp_stream, generate_face_group_stream, generate_model, generate_vertex_stream, sizes,
};
use sfx_types::model::{Model, decode_faces, decode_frame};
use std::hint::black_box;

/// Benchmark static vertex lists of increasing size
fn bench_static_frames(c: &mut Criterion) {
	let mut group = c.benchmark_group("vertex_static");

	for count in [sizes::SMALL_VERTICES, sizes::MEDIUM_VERTICES, sizes::LARGE_VERTICES] {
		let data = generate_vertex_stream(count, 1);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("decode_frame", count), &data, |b, data| {
			b.iter(|| black_box(decode_frame(black_box(data), 0, 0)));
		});
	}

	group.finish();
}

/// Benchmark frame selection through an AnimatedList
fn bench_animated_frames(c: &mut Criterion) {
	let mut group = c.benchmark_group("vertex_animated");
	let data = generate_vertex_stream(sizes::MEDIUM_VERTICES, 32);

	for frame in [0, 15, 31] {
		group.bench_with_input(BenchmarkId::new("decode_frame", frame), &frame, |b, &frame| {
			b.iter(|| black_box(decode_frame(&data, 0, black_box(frame))));
		});
	}

	group.finish();
}

/// Benchmark a single face group
fn bench_face_group(c: &mut Criterion) {
	let mut group = c.benchmark_group("face_group");

	for faces in [16usize, 128, 1024] {
		let data = generate_face_group_stream(faces, sizes::LARGE_VERTICES);
		group.throughput(Throughput::Elements(faces as u64));
		group.bench_with_input(BenchmarkId::new("decode_faces", faces), &data, |b, data| {
			b.iter(|| black_box(decode_faces(black_box(data), 0)));
		});
	}

	group.finish();
}

/// Benchmark BSP descent over complete trees
fn bench_bsp_tree(c: &mut Criterion) {
	let mut group = c.benchmark_group("bsp_tree");

	for depth in sizes::BSP_DEPTHS {
		let data = generate_bsp_stream(depth, 4, sizes::MEDIUM_VERTICES);
		let nodes = (1u64 << depth) - 1;
		group.throughput(Throughput::Elements(nodes));
		group.bench_with_input(BenchmarkId::new("decode_faces", depth), &data, |b, data| {
			b.iter(|| black_box(decode_faces(black_box(data), 0)));
		});
	}

	group.finish();
}

/// Benchmark full model construction and draw batch assembly
fn bench_model(c: &mut Criterion) {
	let mut group = c.benchmark_group("model");
	let (data, faces_offset) = generate_model(sizes::MEDIUM_VERTICES, 8, 5);

	group.bench_function("new", |b| {
		b.iter(|| black_box(Model::new(black_box(data.as_slice()), 0, faces_offset)));
	});

	let Ok(model) = Model::new(data.as_slice(), 0, faces_offset) else {
		eprintln!("Warning: synthetic model failed to decode");
		group.finish();
		return;
	};

	group.bench_function("draw_batches", |b| {
		b.iter(|| black_box(model.draw_batches()));
	});

	group.bench_function("reload_frame", |b| {
		let mut model = model.clone();
		let mut frame = 0;
		b.iter(|| {
			frame = (frame + 1) % 8;
			black_box(model.reload_frame(frame))
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_static_frames,
	bench_animated_frames,
	bench_face_group,
	bench_bsp_tree,
	bench_model
);
criterion_main!(benches);
