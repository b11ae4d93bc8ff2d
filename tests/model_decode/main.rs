//! Integration tests for model decoding through the `sfx-rs` facade.

mod bsp;
mod faces;
mod object_table;

/// Assembles a one-face group with the given id over vertices 0, 1, 2.
pub(crate) fn triangle_group(face_id: u8) -> Vec<u8> {
	vec![3, face_id, 1, 0, 0, 64, 0, 1, 2, 0xFF]
}
