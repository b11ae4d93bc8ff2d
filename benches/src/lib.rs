//! Benchmark helper utilities for sfx-rs
//!
//! Generators for synthetic vertex and face streams. Real cartridge images are
//! not redistributable, so every benchmark decodes data assembled here.

/// Byte stream of a static or animated model vertex list.
///
/// With `frames > 1` the stream opens with an AnimatedList whose entries point
/// at one Plain16 point list per frame; frame `k` shifts every X coordinate by
/// `k`. Lists longer than 255 points are split across several commands.
pub fn generate_vertex_stream(vertex_count: usize, frames: u8) -> Vec<u8> {
	if frames <= 1 {
		let mut data = Vec::new();
		push_points(&mut data, vertex_count, 0);
		data.push(0x0C);
		return data;
	}

	let mut data = vec![0x1C, frames];
	let table = data.len();
	data.resize(table + usize::from(frames) * 2, 0);

	for frame in 0..usize::from(frames) {
		let entry = table + frame * 2;
		let start = data.len();
		push_points(&mut data, vertex_count, frame as i16);
		data.push(0x0C);

		// entry + relative + 1 lands on the frame's first command
		let relative = (start - entry - 1) as u16;
		data[entry..entry + 2].copy_from_slice(&relative.to_le_bytes());
	}
	data
}

fn push_points(data: &mut Vec<u8>, vertex_count: usize, shift: i16) {
	let mut index = 0usize;
	while index < vertex_count {
		let count = (vertex_count - index).min(255);
		data.push(0x08);
		data.push(count as u8);
		for i in index..index + count {
			let x = (i % 200) as i16 - 100 + shift;
			let y = ((i * 7) % 200) as i16 - 100;
			let z = ((i * 13) % 200) as i16 - 100;
			for coordinate in [x, y, z] {
				data.extend_from_slice(&coordinate.to_le_bytes());
			}
		}
		index += count;
	}
}

/// Face records of one group without the leading command, ending in the
/// 0xFF sentinel. Faces are triangles over consecutive vertices.
pub fn generate_face_records(face_count: usize, vertex_count: usize) -> Vec<u8> {
	let modulus = vertex_count.clamp(1, 256);
	let mut data = Vec::with_capacity(face_count * 9 + 1);
	for i in 0..face_count {
		data.extend_from_slice(&[3, i as u8, (i % 16) as u8, 0, 0, 0x7F]);
		for corner in 0..3 {
			data.push(((i + corner) % modulus) as u8);
		}
	}
	data.push(0xFF);
	data
}

/// Face stream holding a single face group.
pub fn generate_face_group_stream(face_count: usize, vertex_count: usize) -> Vec<u8> {
	let mut data = vec![0x14];
	data.extend(generate_face_records(face_count, vertex_count));
	data
}

/// Face stream holding a complete BSP tree of the given depth.
///
/// Branches sit on every level but the last, which holds leaves. Every node
/// references the same face group of `faces_per_group` faces, appended after
/// the tree.
pub fn generate_bsp_stream(depth: usize, faces_per_group: usize, vertex_count: usize) -> Vec<u8> {
	let mut data = vec![0x3C];
	let mut group_fields = Vec::new();
	write_node(&mut data, 1, depth.max(1), &mut group_fields);

	let group = data.len();
	data.extend(generate_face_records(faces_per_group, vertex_count));
	for field in group_fields {
		let relative = (group - (field + 2)) as u16;
		data[field..field + 2].copy_from_slice(&relative.to_le_bytes());
	}
	data
}

fn write_node(data: &mut Vec<u8>, level: usize, depth: usize, group_fields: &mut Vec<usize>) {
	if level == depth {
		data.push(0x44);
		group_fields.push(data.len());
		data.extend_from_slice(&[0, 0]);
		return;
	}

	data.extend_from_slice(&[0x28, level as u8]);
	group_fields.push(data.len());
	data.extend_from_slice(&[0, 0, 1]);
	write_node(data, level + 1, depth, group_fields);
	write_node(data, level + 1, depth, group_fields);
}

/// Complete model image: the vertex stream at offset 0 followed by the face
/// stream. Returns the image and the face stream offset.
pub fn generate_model(vertex_count: usize, frames: u8, bsp_depth: usize) -> (Vec<u8>, usize) {
	let mut data = generate_vertex_stream(vertex_count, frames);
	let faces_offset = data.len();
	data.extend(generate_bsp_stream(bsp_depth, 8, vertex_count));
	(data, faces_offset)
}

/// Common benchmark sizes for synthetic models
pub mod sizes {
	/// Small ship: 24 vertices
	pub const SMALL_VERTICES: usize = 24;
	/// Typical boss part: 120 vertices
	pub const MEDIUM_VERTICES: usize = 120;
	/// Upper bound of byte-addressable vertex indices
	pub const LARGE_VERTICES: usize = 256;
	/// BSP depths exercised by the tree benchmarks
	pub const BSP_DEPTHS: [usize; 3] = [2, 5, 8];
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_vertex_stream() {
		let data = generate_vertex_stream(300, 1);
		// two commands (255 + 45 points) plus End
		assert_eq!(data.len(), 2 + 255 * 6 + 2 + 45 * 6 + 1);
		assert_eq!(data[0], 0x08);
		assert_eq!(data[1], 255);
		assert_eq!(*data.last().unwrap(), 0x0C);
	}

	#[test]
	fn test_animated_vertex_stream_entries() {
		let data = generate_vertex_stream(4, 3);
		assert_eq!(&data[..2], &[0x1C, 3]);
		for frame in 0..3 {
			let entry = 2 + frame * 2;
			let relative = u16::from_le_bytes([data[entry], data[entry + 1]]) as usize;
			assert_eq!(data[entry + relative + 1], 0x08);
		}
	}

	#[test]
	fn test_bsp_stream_node_count() {
		let data = generate_bsp_stream(3, 2, 8);
		assert_eq!(data[0], 0x3C);
		// 3 branches of 5 bytes, 4 leaves of 3 bytes
		let group = 1 + 3 * 5 + 4 * 3;
		assert_eq!(data.len(), group + 2 * 9 + 1);
		assert_eq!(data[1], 0x28);
		assert_eq!(data[group - 3], 0x44);
	}

	#[test]
	fn test_face_records_stay_in_range() {
		let data = generate_face_records(10, 4);
		assert_eq!(data.len(), 10 * 9 + 1);
		for face in data[..90].chunks_exact(9) {
			assert!(face[6..].iter().all(|&v| v < 4));
		}
	}
}
