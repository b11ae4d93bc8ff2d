//! Error types for model decoding and ROM access.

use std::fmt;

use thiserror::Error;

/// The byte stream a command or tag byte was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
	/// Vertex stream (point lists, animation tables, jumps)
	Vertex,
	/// Face stream (triangle lists, face groups, BSP tree marker)
	Face,
	/// A node tag inside a BSP tree
	BspNode,
}

impl fmt::Display for StreamKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Vertex => write!(f, "vertex command"),
			Self::Face => write!(f, "face command"),
			Self::BspNode => write!(f, "BSP node type"),
		}
	}
}

/// Errors that can occur when decoding model data from a ROM image
#[derive(Debug, Error)]
pub enum ModelError {
	/// Unrecognized command or tag byte
	#[error("Unknown {stream} 0x{byte:02X} at offset 0x{offset:X}")]
	UnknownCommand {
		/// Stream the byte was read from
		stream: StreamKind,
		/// Offending byte value
		byte: u8,
		/// Absolute offset of the byte
		offset: usize,
	},

	/// Read or jump target outside the buffer
	#[error("Out of bounds: {needed} bytes at offset 0x{offset:X}, buffer is 0x{len:X} bytes")]
	OutOfBounds {
		/// Offset the access started at
		offset: usize,
		/// Number of bytes required
		needed: usize,
		/// Total buffer length
		len: usize,
	},

	/// Branch node whose front child offset is zero
	#[error("Front branch offset of 0 in BSP node at offset 0x{offset:X}")]
	ZeroFrontOffset {
		/// Offset of the branch node tag
		offset: usize,
	},

	/// Animation table declaring zero frames
	#[error("Animated vertex list at offset 0x{offset:X} has no frames")]
	EmptyAnimation {
		/// Offset of the animation command
		offset: usize,
	},

	/// BSP recursion went deeper than the configured limit
	#[error("BSP depth limit {depth} exceeded at offset 0x{offset:X}")]
	DepthLimitExceeded {
		/// Configured depth limit
		depth: usize,
		/// Offset of the node that would exceed it
		offset: usize,
	},

	/// Too many commands or records in one stream
	#[error("Iteration limit {limit} exceeded at offset 0x{offset:X}")]
	IterationLimitExceeded {
		/// Configured limit
		limit: usize,
		/// Cursor offset when the limit was hit
		offset: usize,
	},

	/// Face references a vertex the active frame does not have
	#[error("Face {face} references vertex {index}, but only {vertex_count} vertices are loaded")]
	VertexIndexOutOfRange {
		/// Position of the face in the face list
		face: usize,
		/// Offending vertex index
		index: u8,
		/// Number of vertices in the active frame
		vertex_count: usize,
	},

	/// Object header slot is empty
	#[error("Object {index} has no data (stored bank is 0)")]
	NoObject {
		/// Object index in the header table
		index: usize,
	},

	/// Object header record lies outside the ROM
	#[error("Object header {index} at offset 0x{offset:X} is outside the ROM")]
	HeaderOutOfRange {
		/// Object index in the header table
		index: usize,
		/// Absolute offset of the record
		offset: usize,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl ModelError {
	/// Creates an [`ModelError::UnknownCommand`] error.
	pub fn unknown_command(stream: StreamKind, byte: u8, offset: usize) -> Self {
		Self::UnknownCommand {
			stream,
			byte,
			offset,
		}
	}

	/// Returns `true` for the unknown command/tag family of errors.
	pub fn is_unknown_command(&self) -> bool {
		matches!(self, Self::UnknownCommand { .. })
	}

	/// Returns `true` if the error is an out-of-bounds access.
	pub fn is_out_of_bounds(&self) -> bool {
		matches!(self, Self::OutOfBounds { .. })
	}
}

/// Result type alias using [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;
