//! Prelude module for `sfx_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use sfx_types::prelude::*;
//!
//! let frame = decode_frame(&[0x04, 0x01, 1, 2, 3, 0x0C], 0, 0).unwrap();
//! assert_eq!(frame.vertices, vec![Vertex::new(1, 2, 3)]);
//! ```

#[doc(inline)]
pub use crate::{
	ModelError,
	ModelResult,
	StreamKind,

	// Model types
	model::{
		BspNode, DrawBatch, Face, FaceSet, Frame, Model, NodeType, ParseConfig, Primitive, Vertex,
		decode_bsp_tree, decode_faces, decode_frame,
	},

	// ROM types
	rom::{ObjectHeader, Rom},
};

// Re-export the model module for advanced usage
#[doc(inline)]
pub use crate::model;
