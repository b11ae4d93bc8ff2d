//! ROM image and object table

use sfx_rs::prelude::*;
use sfx_rs::sfx_types::model::constants::{BANK_SIZE, COPIER_HEADER_SIZE, OBJECT_HEADER_SIZE};

const TABLE: usize = 0x100;

/// Two-bank image with an object table at 0x100: slot 0 empty, slot 1 pointing
/// into bank 1.
fn build_rom(copier_header: bool) -> Vec<u8> {
	let mut rom = vec![0u8; BANK_SIZE * 2];

	let vertices = BANK_SIZE + 0x10;
	let model = [0x38, 0x01, 8, 0, 0, 0x04, 0x01, 0, 8, 0, 0x0C];
	rom[vertices..vertices + model.len()].copy_from_slice(&model);
	let faces = vertices + model.len();
	rom[faces] = 0x14;
	let group = super::triangle_group(3);
	rom[faces + 1..faces + 1 + group.len()].copy_from_slice(&group);

	let slot = TABLE + OBJECT_HEADER_SIZE;
	rom[slot..slot + 2].copy_from_slice(&(0x8000u16 | 0x10).to_le_bytes());
	rom[slot + 2] = 2;
	rom[slot + 3..slot + 5].copy_from_slice(&(0x8000u16 | faces as u16 & 0x7FFF).to_le_bytes());

	if copier_header {
		let mut with_header = vec![0xCC; COPIER_HEADER_SIZE];
		with_header.extend(rom);
		return with_header;
	}
	rom
}

#[test]
fn loads_object_through_header() {
	let rom = Rom::from_bytes(build_rom(false));
	let objects = rom.objects(TABLE, 2).unwrap();
	assert_eq!(objects.len(), 1);
	assert_eq!(objects[0].0, 1);
	assert_eq!(objects[0].1.vertices_offset(), Some(BANK_SIZE + 0x10));

	let model = rom.load_object(TABLE, 1).unwrap();
	assert_eq!(model.vertices(), &[Vertex::new(8, 0, 0), Vertex::new(-8, 0, 0), Vertex::new(0, 8, 0)]);
	assert_eq!(model.faces().len(), 1);
	assert_eq!(model.faces()[0].face_id, 3);

	let batches = model.draw_batches().unwrap();
	assert_eq!(batches.len(), 1);
	assert_eq!(batches[0].primitive, Primitive::TriangleFan);
}

#[test]
fn copier_header_is_transparent() {
	let rom = Rom::from_bytes(build_rom(true));
	assert!(rom.has_stripped_header());
	let model = rom.load_object(TABLE, 1).unwrap();
	assert_eq!(model.vertices().len(), 3);
}

#[test]
fn empty_slot_is_reported() {
	let rom = Rom::from_bytes(build_rom(false));
	assert!(matches!(
		rom.load_object(TABLE, 0).unwrap_err(),
		ModelError::NoObject {
			index: 0
		}
	));
}

#[test]
fn missing_file() {
	let err = Rom::open("/nonexistent/rom.sfc").unwrap_err();
	assert!(matches!(err, ModelError::Io(_)));
}
