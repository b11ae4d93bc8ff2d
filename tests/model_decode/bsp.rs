//! BSP traversal properties

use sfx_rs::prelude::*;

#[test_log::test]
fn leaf_example() {
	let mut data = vec![0x3C, 0x44, 0x05, 0x00, 0, 0, 0, 0, 0];
	data.extend(super::triangle_group(9));
	let set = decode_faces(&data, 0).unwrap();
	assert_eq!(set.len(), 1);
	assert_eq!(set.faces()[0].face_id, 9);
}

#[test]
fn branch_with_zero_front_offset_fails() {
	// Branch, split 0, group +1, front 0, then two null children
	let mut data = vec![0x3C, 0x28, 0x00, 0x03, 0x00, 0x00, 0x40, 0x40];
	data.extend(super::triangle_group(1));
	let err = decode_faces(&data, 0).unwrap_err();
	assert!(matches!(
		err,
		ModelError::ZeroFrontOffset {
			offset: 1
		}
	));
}

#[test]
fn union_of_every_leaf() {
	// 1: Branch group=A front=6
	// 6: Branch group=B front=1   (back of 1)
	// 11: Leaf group=C            (back of 6)
	// 14: Null                    (front of 6)
	// 15: Leaf group=A            (front of 1)
	let mut data = vec![
		0x3C, //
		0x28, 0, 0, 0, 6, //
		0x28, 1, 0, 0, 1, //
		0x44, 0, 0, //
		0x40, //
		0x44, 0, 0,
	];
	let a = data.len();
	data.extend(super::triangle_group(0xA));
	let b = data.len();
	data.extend(super::triangle_group(0xB));
	let c = data.len();
	data.extend(super::triangle_group(0xC));

	let patch = |data: &mut Vec<u8>, field: usize, target: usize| {
		let relative = (target - (field + 2)) as u16;
		data[field..field + 2].copy_from_slice(&relative.to_le_bytes());
	};
	patch(&mut data, 3, a);
	patch(&mut data, 8, b);
	patch(&mut data, 12, c);
	patch(&mut data, 16, a);

	let tree = decode_bsp_tree(&data, 1).unwrap();
	assert_eq!(tree.node_count(), 5);
	assert_eq!(tree.depth(), 3);

	let ids: Vec<u8> = decode_faces(&data, 0).unwrap().faces().iter().map(|f| f.face_id).collect();
	assert_eq!(ids, vec![0xA, 0xB, 0xC, 0xA]);
}

#[test]
fn deep_trees_are_bounded() {
	// Every branch's back child is another branch, far past any sane depth
	let depth = 300;
	let mut data = vec![0x3C];
	for _ in 0..depth {
		data.extend_from_slice(&[0x28, 0, 0x00, 0x00, 0x01]);
	}
	data.extend(std::iter::repeat_n(0x40, depth + 1));
	let group = data.len();
	data.extend(super::triangle_group(0));
	for i in 0..depth {
		let field = 1 + i * 5 + 2;
		let relative = (group - (field + 2)) as u16;
		data[field..field + 2].copy_from_slice(&relative.to_le_bytes());
	}

	let err = decode_faces(&data, 0).unwrap_err();
	assert!(matches!(
		err,
		ModelError::DepthLimitExceeded {
			depth: 64,
			..
		}
	));

	let set = decode_faces_lenient(&data);
	assert!(matches!(
		set.unwrap_err(),
		ModelError::DepthLimitExceeded {
			depth: 256,
			..
		}
	));
}

fn decode_faces_lenient(data: &[u8]) -> ModelResult<FaceSet> {
	sfx_rs::sfx_types::model::decode_faces_with_config(data, 0, &ParseConfig::lenient())
}
