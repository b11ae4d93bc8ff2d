//! Renderer hand-off.
//!
//! A renderer draws each face on its own: the face's vertex indices are looked
//! up in the active frame to build a small position buffer, and the face's
//! vertex count picks the primitive. Models without faces are drawn as points.

use serde::Serialize;

use crate::error::{ModelError, ModelResult};

use super::{face::FaceSet, vertex::Frame};

/// Primitive mode for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
	/// Three or more vertices, drawn as a fan around the first
	TriangleFan,
	/// Two vertices
	Lines,
	/// One vertex, or the whole vertex list of a faceless model
	Points,
}

impl Primitive {
	/// Primitive for a face with `num_verts` vertices.
	pub fn for_vertex_count(num_verts: u8) -> Self {
		match num_verts {
			3.. => Self::TriangleFan,
			2 => Self::Lines,
			_ => Self::Points,
		}
	}
}

/// Geometry for one draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawBatch {
	/// Primitive mode
	pub primitive: Primitive,
	/// Face color index, 0 for point clouds
	pub color: u8,
	/// Face normal as decoded, zero for point clouds
	pub normal: [f32; 3],
	/// Vertex positions in drawing order
	pub positions: Vec<[f32; 3]>,
}

impl DrawBatch {
	/// Number of vertices in the batch.
	pub fn vertex_count(&self) -> usize {
		self.positions.len()
	}
}

/// Builds one batch per face, or a single point batch when there are no faces.
///
/// A bare triangle list is not drawn; the model falls back to points.
///
/// # Errors
///
/// Returns [`ModelError::VertexIndexOutOfRange`] when a face references a
/// vertex the frame does not have.
pub fn build_draw_batches(frame: &Frame, faces: &FaceSet) -> ModelResult<Vec<DrawBatch>> {
	let faces = faces.faces();
	if faces.is_empty() {
		if frame.vertices.is_empty() {
			return Ok(Vec::new());
		}
		return Ok(vec![DrawBatch {
			primitive: Primitive::Points,
			color: 0,
			normal: [0.0; 3],
			positions: frame.vertices.iter().map(|v| v.to_f32()).collect(),
		}]);
	}

	faces
		.iter()
		.enumerate()
		.map(|(index, face)| {
			let positions = face
				.verts
				.iter()
				.map(|&vert| {
					frame.vertex(usize::from(vert)).map(|v| v.to_f32()).ok_or(
						ModelError::VertexIndexOutOfRange {
							face: index,
							index: vert,
							vertex_count: frame.vertex_count(),
						},
					)
				})
				.collect::<ModelResult<Vec<_>>>()?;

			Ok(DrawBatch {
				primitive: face.primitive(),
				color: face.color,
				normal: face.normal.map(f32::from),
				positions,
			})
		})
		.collect()
}
