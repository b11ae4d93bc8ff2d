//! Decoded model: one animation frame of vertices plus the face topology.

use std::sync::Arc;

use log::debug;

use crate::error::{ModelError, ModelResult};

use super::{
	draw::{DrawBatch, build_draw_batches},
	face::{Face, FaceSet, decode_faces_with_config},
	parse_config::ParseConfig,
	vertex::{Frame, Vertex, decode_frame_with_config},
};

/// A model decoded from a ROM image.
///
/// Frame 0 is decoded on construction. [`Model::reload_frame`] re-decodes the
/// vertex stream for another frame; the faces are decoded once and shared by
/// every frame.
///
/// # Examples
///
/// ```
/// use sfx_types::model::Model;
///
/// let rom = vec![
///     0x04, 0x03, 0, 0, 0, 10, 0, 0, 0, 10, 0, 0x0C, // vertices at 0
///     0x14, 3, 0, 5, 0, 0, 127, 0, 1, 2, 0xFF,       // faces at 12
/// ];
/// let model = Model::new(rom, 0, 12)?;
///
/// assert_eq!(model.vertices().len(), 3);
/// assert_eq!(model.faces().len(), 1);
/// assert_eq!(model.frame_count(), 1);
/// # Ok::<(), sfx_types::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Model {
	data: Arc<[u8]>,
	vertices_offset: usize,
	faces_offset: usize,
	config: ParseConfig,
	frame: Frame,
	faces: FaceSet,
}

impl Model {
	/// Decodes a model using the default [`ParseConfig`].
	pub fn new(
		data: impl Into<Arc<[u8]>>,
		vertices_offset: usize,
		faces_offset: usize,
	) -> ModelResult<Self> {
		Self::with_config(data, vertices_offset, faces_offset, ParseConfig::default())
	}

	/// Decodes frame 0 and the faces of a model.
	///
	/// # Errors
	///
	/// Any decode error from the vertex or face stream. With
	/// `config.validate_indices`, also [`ModelError::VertexIndexOutOfRange`].
	pub fn with_config(
		data: impl Into<Arc<[u8]>>,
		vertices_offset: usize,
		faces_offset: usize,
		config: ParseConfig,
	) -> ModelResult<Self> {
		let data = data.into();
		let frame = decode_frame_with_config(&data, vertices_offset, 0, &config)?;
		let faces = decode_faces_with_config(&data, faces_offset, &config)?;
		if config.validate_indices {
			check_indices(&frame, &faces)?;
		}

		debug!(
			"Model at 0x{vertices_offset:X}/0x{faces_offset:X}: {} vertices, {} faces, {} frames",
			frame.vertex_count(),
			faces.len(),
			frame.frame_count
		);

		Ok(Self {
			data,
			vertices_offset,
			faces_offset,
			config,
			frame,
			faces,
		})
	}

	/// Decodes another frame without touching the loaded one.
	pub fn decode_frame(&self, frame: i32) -> ModelResult<Frame> {
		let decoded = decode_frame_with_config(&self.data, self.vertices_offset, frame, &self.config)?;
		if self.config.validate_indices {
			check_indices(&decoded, &self.faces)?;
		}
		Ok(decoded)
	}

	/// Replaces the loaded vertices with those of `frame`.
	///
	/// Out-of-range frames are clamped to the nearest valid one. On error the
	/// previously loaded frame stays in place.
	pub fn reload_frame(&mut self, frame: i32) -> ModelResult<()> {
		self.frame = self.decode_frame(frame)?;
		Ok(())
	}

	/// Decodes every animation frame in order.
	pub fn frames(&self) -> ModelResult<Vec<Frame>> {
		(0..self.frame_count())
			.map(|index| self.decode_frame(i32::try_from(index).unwrap_or(i32::MAX)))
			.collect()
	}

	/// The loaded frame.
	pub fn frame(&self) -> &Frame {
		&self.frame
	}

	/// Vertices of the loaded frame.
	pub fn vertices(&self) -> &[Vertex] {
		&self.frame.vertices
	}

	/// Decoded face topology.
	pub fn face_set(&self) -> &FaceSet {
		&self.faces
	}

	/// Face records, empty when the model has no face groups.
	pub fn faces(&self) -> &[Face] {
		self.faces.faces()
	}

	/// Index of the loaded frame.
	pub fn current_frame(&self) -> usize {
		self.frame.current_frame
	}

	/// Number of animation frames, 1 for static models.
	pub fn frame_count(&self) -> usize {
		self.frame.frame_count
	}

	/// Absolute offset of the vertex stream.
	pub fn vertices_offset(&self) -> usize {
		self.vertices_offset
	}

	/// Absolute offset of the face stream.
	pub fn faces_offset(&self) -> usize {
		self.faces_offset
	}

	/// Decode limits in effect.
	pub fn config(&self) -> &ParseConfig {
		&self.config
	}

	/// Draw batches for the loaded frame.
	pub fn draw_batches(&self) -> ModelResult<Vec<DrawBatch>> {
		build_draw_batches(&self.frame, &self.faces)
	}
}

/// Checks that every face only references vertices of `frame`.
///
/// A bare triangle list is never drawn and is not checked.
fn check_indices(frame: &Frame, faces: &FaceSet) -> ModelResult<()> {
	let vertex_count = frame.vertex_count();
	for (position, face) in faces.faces().iter().enumerate() {
		if let Some(&index) = face.verts.iter().find(|&&v| usize::from(v) >= vertex_count) {
			return Err(ModelError::VertexIndexOutOfRange {
				face: position,
				index,
				vertex_count,
			});
		}
	}
	Ok(())
}
