//! Model format constants.
//!
//! Command bytes for the vertex and face streams, BSP node tags, sentinels and
//! the object header layout.

/// Vertex stream: list of 8-bit points
pub const VERTEX_PLAIN: u8 = 0x04;

/// Vertex stream: list of 16-bit points
pub const VERTEX_PLAIN16: u8 = 0x08;

/// Vertex stream: end of point data
pub const VERTEX_END: u8 = 0x0C;

/// Vertex stream: animation frame table
pub const VERTEX_ANIMATED_LIST: u8 = 0x1C;

/// Vertex stream: relative jump
pub const VERTEX_JUMP: u8 = 0x20;

/// Vertex stream: list of 16-bit points, each followed by its X mirror
pub const VERTEX_X_FLIPPED16: u8 = 0x34;

/// Vertex stream: list of 8-bit points, each followed by its X mirror
pub const VERTEX_X_FLIPPED: u8 = 0x38;

/// Face stream: face group
pub const FACE_GROUP: u8 = 0x14;

/// Face stream: flat triangle index list
pub const FACE_TRIANGLE_LIST: u8 = 0x30;

/// Face stream: BSP tree
pub const FACE_BSP_TREE: u8 = 0x3C;

/// BSP node: splitting triangle with back and front children
pub const NODE_BRANCH: u8 = 0x28;

/// BSP node: empty subtree
pub const NODE_NULL: u8 = 0x40;

/// BSP node: face group only
pub const NODE_LEAF: u8 = 0x44;

/// Smallest `num_verts` value that terminates a face group
pub const FACE_GROUP_END_MIN: u8 = 0xFE;

/// Size of one object header record
pub const OBJECT_HEADER_SIZE: usize = 0x1C;

/// Size of one cartridge bank
pub const BANK_SIZE: usize = 0x8000;

/// Size of the copier header some ROM dumps carry
pub const COPIER_HEADER_SIZE: usize = 0x200;
