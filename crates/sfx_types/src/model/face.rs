//! Face stream decoding.
//!
//! A face stream starts with an optional TriangleList section, followed by
//! either a FaceGroup or a BSP tree:
//!
//! ```text
//! Cmd   Name          Payload
//! ----  ------------  -------------------------------------------------
//! 0x30  TriangleList  n, n × (a,b,c) u8 vertex indices
//! 0x14  FaceGroup     face records until a num_verts byte >= 0xFE
//! 0x3C  BSPTree       BSP node tree, see [`super::bsp`]
//! ```
//!
//! ## Face Record
//!
//! ```text
//! Offset  Size       Field      Description
//! ------  ---------  ---------  --------------------------------------
//! +0x00   1          num_verts  Vertex count, 0xFE/0xFF end the group
//! +0x01   1          face_id    Face identifier
//! +0x02   1          color      Color index
//! +0x03   3          normal     Face normal, signed 8-bit x, y, z
//! +0x06   num_verts  verts      Indices into the frame's vertex list
//! ```
//!
//! A TriangleList followed by a FaceGroup or BSP tree is decoded and then
//! discarded; only a stream with nothing else after it yields triangle indices.

use log::{debug, trace, warn};
use serde::Serialize;

use crate::error::{ModelError, ModelResult, StreamKind};

use super::{
	bsp, constants,
	cursor::Cursor,
	draw::Primitive,
	parse_config::ParseConfig,
};

/// A polygon record from a face group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Face {
	/// Declared vertex count
	pub num_verts: u8,
	/// Face identifier
	pub face_id: u8,
	/// Color index
	pub color: u8,
	/// Face normal
	pub normal: [i8; 3],
	/// Vertex indices in winding order
	pub verts: Vec<u8>,
}

impl Face {
	/// Primitive a renderer draws this face with.
	pub fn primitive(&self) -> Primitive {
		Primitive::for_vertex_count(self.num_verts)
	}

	fn read(cursor: &mut Cursor<'_>, num_verts: u8) -> ModelResult<Self> {
		let face_id = cursor.read_u8()?;
		let color = cursor.read_u8()?;
		let normal = [cursor.read_i8()?, cursor.read_i8()?, cursor.read_i8()?];
		let verts = cursor.read_bytes(usize::from(num_verts))?.to_vec();

		Ok(Self {
			num_verts,
			face_id,
			color,
			normal,
			verts,
		})
	}
}

impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Face(id={}, color={}, n={:?}, verts={:?})",
			self.face_id, self.color, self.normal, self.verts
		)
	}
}

/// Face stream command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceCommand {
	/// Face record list
	FaceGroup = constants::FACE_GROUP,
	/// Flat triangle index list
	TriangleList = constants::FACE_TRIANGLE_LIST,
	/// BSP tree of face groups
	BspTree = constants::FACE_BSP_TREE,
}

impl FaceCommand {
	/// Decodes a command byte read at `offset`.
	///
	/// # Errors
	///
	/// Returns [`ModelError::UnknownCommand`] for any byte outside the command set.
	pub fn from_byte(byte: u8, offset: usize) -> ModelResult<Self> {
		match byte {
			constants::FACE_GROUP => Ok(Self::FaceGroup),
			constants::FACE_TRIANGLE_LIST => Ok(Self::TriangleList),
			constants::FACE_BSP_TREE => Ok(Self::BspTree),
			_ => Err(ModelError::unknown_command(StreamKind::Face, byte, offset)),
		}
	}

	/// The command byte.
	pub const fn to_byte(self) -> u8 {
		self as u8
	}
}

/// Decoded face topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum FaceSet {
	/// Flat triangle list, three vertex indices per triangle
	TriangleIndices(Vec<[u8; 3]>),
	/// Face records from a face group or every leaf of a BSP tree
	Faces(Vec<Face>),
}

impl FaceSet {
	/// Face records, empty for a bare triangle list.
	pub fn faces(&self) -> &[Face] {
		match self {
			Self::Faces(faces) => faces,
			Self::TriangleIndices(_) => &[],
		}
	}

	/// Triangle indices, if this is a bare triangle list.
	pub fn triangle_indices(&self) -> Option<&[[u8; 3]]> {
		match self {
			Self::TriangleIndices(triangles) => Some(triangles),
			Self::Faces(_) => None,
		}
	}

	/// Number of faces or triangles.
	pub fn len(&self) -> usize {
		match self {
			Self::TriangleIndices(triangles) => triangles.len(),
			Self::Faces(faces) => faces.len(),
		}
	}

	/// Returns `true` if nothing was decoded.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Largest vertex index referenced, if any.
	pub fn max_vertex_index(&self) -> Option<u8> {
		match self {
			Self::TriangleIndices(triangles) => triangles.iter().flatten().copied().max(),
			Self::Faces(faces) => faces.iter().flat_map(|f| f.verts.iter().copied()).max(),
		}
	}
}

impl Default for FaceSet {
	fn default() -> Self {
		Self::Faces(Vec::new())
	}
}

/// Reads face records until the end-of-group sentinel.
///
/// The cursor is left just past the sentinel byte.
pub(crate) fn read_face_group(
	cursor: &mut Cursor<'_>,
	config: &ParseConfig,
) -> ModelResult<Vec<Face>> {
	let mut faces = Vec::new();

	for _ in 0..=config.max_commands {
		let offset = cursor.position();
		let num_verts = cursor.read_u8()?;
		if num_verts >= constants::FACE_GROUP_END_MIN {
			debug!("End of face group marker 0x{num_verts:02X} at 0x{offset:X}");
			return Ok(faces);
		}

		let face = Face::read(cursor, num_verts)?;
		trace!("{face} at 0x{offset:X}");
		faces.push(face);
	}

	Err(ModelError::IterationLimitExceeded {
		limit: config.max_commands,
		offset: cursor.position(),
	})
}

/// Reads a counted list of index triples.
pub(crate) fn read_triangle_list(cursor: &mut Cursor<'_>) -> ModelResult<Vec<[u8; 3]>> {
	let count = usize::from(cursor.read_u8()?);
	let bytes = cursor.read_bytes(count * 3)?;
	Ok(bytes.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect())
}

/// Decodes a bare face group (no leading command byte) at `offset` using the
/// default [`ParseConfig`].
///
/// # Examples
///
/// ```
/// use sfx_types::model::decode_face_group;
///
/// let data = [3, 1, 2, 10, 10, 10, 0, 1, 2, 0xFF];
/// let faces = decode_face_group(&data, 0).unwrap();
///
/// assert_eq!(faces.len(), 1);
/// assert_eq!(faces[0].verts, vec![0, 1, 2]);
/// ```
pub fn decode_face_group(data: &[u8], offset: usize) -> ModelResult<Vec<Face>> {
	decode_face_group_with_config(data, offset, &ParseConfig::default())
}

/// Decodes a bare face group at `offset`, allowing at most
/// `config.max_commands` faces.
pub fn decode_face_group_with_config(
	data: &[u8],
	offset: usize,
	config: &ParseConfig,
) -> ModelResult<Vec<Face>> {
	read_face_group(&mut Cursor::new(data, offset), config)
}

/// Decodes the face stream at `faces_offset` using the default [`ParseConfig`].
///
/// See [`decode_faces_with_config`].
pub fn decode_faces(data: &[u8], faces_offset: usize) -> ModelResult<FaceSet> {
	decode_faces_with_config(data, faces_offset, &ParseConfig::default())
}

/// Decodes the face stream at `faces_offset`.
///
/// BSP trees are flattened into the union of every face group reachable from
/// the root, in traversal order; no view-dependent selection is made.
///
/// # Errors
///
/// - [`ModelError::UnknownCommand`] for a leading byte outside the face command
///   set, or an unknown BSP node tag
/// - [`ModelError::OutOfBounds`] when a read or face group offset leaves the buffer
/// - [`ModelError::ZeroFrontOffset`] and [`ModelError::DepthLimitExceeded`] for
///   malformed BSP trees
/// - [`ModelError::IterationLimitExceeded`] for unterminated face groups
pub fn decode_faces_with_config(
	data: &[u8],
	faces_offset: usize,
	config: &ParseConfig,
) -> ModelResult<FaceSet> {
	let mut cursor = Cursor::new(data, faces_offset);
	let faces = read_face_stream(&mut cursor, config)?;
	debug!("{} faces loaded from 0x{faces_offset:X}", faces.len());
	Ok(faces)
}

fn read_face_stream(cursor: &mut Cursor<'_>, config: &ParseConfig) -> ModelResult<FaceSet> {
	let offset = cursor.position();
	match FaceCommand::from_byte(cursor.read_u8()?, offset)? {
		FaceCommand::FaceGroup => read_face_group(cursor, config).map(FaceSet::Faces),
		FaceCommand::BspTree => {
			let tree = bsp::read_bsp_tree(cursor, config)?;
			Ok(FaceSet::Faces(tree.into_faces()))
		}
		FaceCommand::TriangleList => {
			let triangles = read_triangle_list(cursor)?;
			let grouped = matches!(
				cursor.peek_u8(),
				Ok(constants::FACE_GROUP | constants::FACE_BSP_TREE)
			);
			if !grouped {
				return Ok(FaceSet::TriangleIndices(triangles));
			}

			warn!(
				"Discarding {} triangles at 0x{offset:X} in favour of the following face data",
				triangles.len()
			);
			read_face_stream(cursor, config)
		}
	}
}
