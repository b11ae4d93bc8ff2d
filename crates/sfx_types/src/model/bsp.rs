//! BSP tree decoding.
//!
//! ## Node Layout
//!
//! ```text
//! Tag   Name    Payload
//! ----  ------  ------------------------------------------------------------
//! 0x28  Branch  split u8, group u16 LE, front u8, back node, front node
//! 0x40  Null    -
//! 0x44  Leaf    group u16 LE
//! ```
//!
//! `group` is relative to the position just past the group field. The face
//! group it points to is read out of line and the tree walk resumes right after
//! the field. The back child follows the branch header in-stream and the front
//! child follows the back subtree.
//!
//! A renderer tests the camera against the splitting triangle and
//! draws only one side. That test is view-dependent, so the decoder walks both
//! children and collects every face group.

use log::trace;
use serde::Serialize;

use crate::error::{ModelError, ModelResult, StreamKind};

use super::{
	constants,
	cursor::Cursor,
	face::{Face, read_face_group},
	parse_config::ParseConfig,
};

/// BSP node tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
	/// Splitting triangle with two children
	Branch = constants::NODE_BRANCH,
	/// Empty subtree
	Null = constants::NODE_NULL,
	/// Face group only
	Leaf = constants::NODE_LEAF,
}

impl NodeType {
	/// Decodes a node tag read at `offset`.
	///
	/// # Errors
	///
	/// Returns [`ModelError::UnknownCommand`] for any byte outside the tag set.
	pub fn from_byte(byte: u8, offset: usize) -> ModelResult<Self> {
		match byte {
			constants::NODE_BRANCH => Ok(Self::Branch),
			constants::NODE_NULL => Ok(Self::Null),
			constants::NODE_LEAF => Ok(Self::Leaf),
			_ => Err(ModelError::unknown_command(StreamKind::BspNode, byte, offset)),
		}
	}
}

/// A decoded BSP node with the faces of its face group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BspNode {
	/// Splitting node
	Branch {
		/// Absolute offset of the node tag
		offset: usize,
		/// Index of the splitting triangle, only meaningful to a view-dependent renderer
		splitting_triangle: u8,
		/// Absolute offset of the face group
		group_offset: usize,
		/// Encoded front child offset
		front_offset: u8,
		/// Faces of this node's group
		faces: Vec<Face>,
		/// Subtree behind the splitting plane
		back: Box<BspNode>,
		/// Subtree in front of the splitting plane
		front: Box<BspNode>,
	},
	/// Terminal node with a face group
	Leaf {
		/// Absolute offset of the node tag
		offset: usize,
		/// Absolute offset of the face group
		group_offset: usize,
		/// Faces of this node's group
		faces: Vec<Face>,
	},
	/// Empty subtree
	Null {
		/// Absolute offset of the node tag
		offset: usize,
	},
}

impl BspNode {
	/// Absolute offset of the node tag.
	pub fn offset(&self) -> usize {
		match self {
			Self::Branch {
				offset,
				..
			}
			| Self::Leaf {
				offset,
				..
			}
			| Self::Null {
				offset,
			} => *offset,
		}
	}

	/// Tag of this node.
	pub fn node_type(&self) -> NodeType {
		match self {
			Self::Branch {
				..
			} => NodeType::Branch,
			Self::Leaf {
				..
			} => NodeType::Leaf,
			Self::Null {
				..
			} => NodeType::Null,
		}
	}

	/// Number of nodes in this subtree.
	pub fn node_count(&self) -> usize {
		match self {
			Self::Branch {
				back,
				front,
				..
			} => 1 + back.node_count() + front.node_count(),
			Self::Leaf {
				..
			}
			| Self::Null {
				..
			} => 1,
		}
	}

	/// Height of this subtree, 1 for a single node.
	pub fn depth(&self) -> usize {
		match self {
			Self::Branch {
				back,
				front,
				..
			} => 1 + back.depth().max(front.depth()),
			Self::Leaf {
				..
			}
			| Self::Null {
				..
			} => 1,
		}
	}

	/// Every face in the subtree, in traversal order: a node's own group, then
	/// its back subtree, then its front subtree.
	pub fn into_faces(self) -> Vec<Face> {
		let mut faces = Vec::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			match node {
				Self::Branch {
					faces: group,
					back,
					front,
					..
				} => {
					faces.extend(group);
					stack.push(*front);
					stack.push(*back);
				}
				Self::Leaf {
					faces: group,
					..
				} => faces.extend(group),
				Self::Null {
					..
				} => {}
			}
		}
		faces
	}
}

/// Decodes a BSP tree whose root node tag is at `offset` using the default
/// [`ParseConfig`].
pub fn decode_bsp_tree(data: &[u8], offset: usize) -> ModelResult<BspNode> {
	decode_bsp_tree_with_config(data, offset, &ParseConfig::default())
}

/// Decodes a BSP tree whose root node tag is at `offset`.
///
/// # Errors
///
/// - [`ModelError::UnknownCommand`] for an unknown node tag
/// - [`ModelError::ZeroFrontOffset`] for a branch whose front offset is 0
/// - [`ModelError::DepthLimitExceeded`] past `config.max_bsp_depth` levels
/// - [`ModelError::OutOfBounds`] for reads or face group offsets outside the buffer
pub fn decode_bsp_tree_with_config(
	data: &[u8],
	offset: usize,
	config: &ParseConfig,
) -> ModelResult<BspNode> {
	read_bsp_tree(&mut Cursor::new(data, offset), config)
}

pub(crate) fn read_bsp_tree(cursor: &mut Cursor<'_>, config: &ParseConfig) -> ModelResult<BspNode> {
	let walker = TreeWalker {
		config,
	};
	walker.node(cursor, 0)
}

/// Children follow their parent in-stream, so node offsets strictly increase
/// during a walk and the depth limit alone bounds it.
struct TreeWalker<'c> {
	config: &'c ParseConfig,
}

impl TreeWalker<'_> {
	fn node(&self, cursor: &mut Cursor<'_>, depth: usize) -> ModelResult<BspNode> {
		let offset = cursor.position();
		if depth >= self.config.max_bsp_depth {
			return Err(ModelError::DepthLimitExceeded {
				depth: self.config.max_bsp_depth,
				offset,
			});
		}

		match NodeType::from_byte(cursor.read_u8()?, offset)? {
			NodeType::Null => {
				trace!("Null node at 0x{offset:X}");
				Ok(BspNode::Null {
					offset,
				})
			}
			NodeType::Leaf => {
				let (group_offset, faces) = self.face_group(cursor)?;
				trace!("Leaf at 0x{offset:X}: group 0x{group_offset:X}, {} faces", faces.len());
				Ok(BspNode::Leaf {
					offset,
					group_offset,
					faces,
				})
			}
			NodeType::Branch => {
				let splitting_triangle = cursor.read_u8()?;
				let (group_offset, faces) = self.face_group(cursor)?;
				let front_offset = cursor.read_u8()?;
				trace!(
					"Branch at 0x{offset:X}: split tri {splitting_triangle}, group 0x{group_offset:X}, front offset {front_offset}"
				);
				let back = self.node(cursor, depth + 1)?;
				// Zero cannot be told apart from a missing front child
				if front_offset == 0 {
					return Err(ModelError::ZeroFrontOffset {
						offset,
					});
				}
				let front = self.node(cursor, depth + 1)?;
				Ok(BspNode::Branch {
					offset,
					splitting_triangle,
					group_offset,
					front_offset,
					faces,
					back: Box::new(back),
					front: Box::new(front),
				})
			}
		}
	}

	/// Reads a relative face group offset and decodes the group out of line.
	fn face_group(&self, cursor: &mut Cursor<'_>) -> ModelResult<(usize, Vec<Face>)> {
		let relative = cursor.read_u16()?;
		let mut group = cursor.forked(usize::from(relative))?;
		let group_offset = group.position();
		let faces = read_face_group(&mut group, self.config)?;
		Ok((group_offset, faces))
	}
}
