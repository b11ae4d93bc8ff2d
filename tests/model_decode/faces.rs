//! Face stream properties

use sfx_rs::prelude::*;
use sfx_rs::sfx_types::model::decode_face_group;

#[test_log::test]
fn face_group_example() {
	let faces = decode_face_group(&[3, 1, 2, 10, 10, 10, 0, 1, 2, 0xFF], 0).unwrap();
	assert_eq!(
		faces,
		vec![Face {
			num_verts: 3,
			face_id: 1,
			color: 2,
			normal: [10, 10, 10],
			verts: vec![0, 1, 2],
		}]
	);
}

#[test]
fn sentinel_is_never_a_face() {
	for sentinel in [0xFE, 0xFF] {
		let mut data = super::triangle_group(4);
		data[9] = sentinel;
		data.extend(super::triangle_group(5));
		let faces = decode_face_group(&data, 0).unwrap();
		assert_eq!(faces.len(), 1);
		assert_eq!(faces[0].face_id, 4);
	}
}

#[test]
fn large_face_counts_are_real_faces() {
	// 0xFD is still a face size, not a terminator
	let mut data = vec![0xFD, 0, 0, 0, 0, 0];
	data.extend(std::iter::repeat_n(0u8, 0xFD));
	data.push(0xFF);
	let faces = decode_face_group(&data, 0).unwrap();
	assert_eq!(faces.len(), 1);
	assert_eq!(faces[0].verts.len(), 0xFD);
}

#[test]
fn primitives_follow_vertex_count() {
	let data = [
		0x14, //
		4, 0, 0, 0, 0, 0, 0, 1, 2, 3, //
		2, 1, 0, 0, 0, 0, 0, 1, //
		1, 2, 0, 0, 0, 0, 0, //
		0xFF,
	];
	let set = decode_faces(&data, 0).unwrap();
	let primitives: Vec<Primitive> = set.faces().iter().map(Face::primitive).collect();
	assert_eq!(primitives, vec![Primitive::TriangleFan, Primitive::Lines, Primitive::Points]);
}

#[test]
fn unknown_face_command_is_fatal() {
	let err = decode_faces(&[0x0C], 0).unwrap_err();
	assert!(matches!(
		err,
		ModelError::UnknownCommand {
			stream: StreamKind::Face,
			byte: 0x0C,
			..
		}
	));
}

#[test]
fn face_group_limit_is_configurable() {
	let mut data = Vec::new();
	for id in 0..6 {
		data.extend(super::triangle_group(id).into_iter().take(9));
	}
	data.push(0xFF);

	let config = ParseConfig::new(8, 5);
	let err = sfx_rs::sfx_types::model::decode_face_group_with_config(&data, 0, &config).unwrap_err();
	assert!(matches!(
		err,
		ModelError::IterationLimitExceeded {
			limit: 5,
			..
		}
	));
	assert_eq!(decode_face_group(&data, 0).unwrap().len(), 6);
}
