//! This module is separated into its own crate to keep the public facade of `sfx-rs` thin, and should not be used directly.

/// `use sfx_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sfx_types for convenience
pub use sfx_types;

// Re-export commonly used types at crate root
pub use sfx_types::{
	ModelError, ModelResult,
	model::{FaceSet, Frame, Model, ParseConfig},
	rom::{ObjectHeader, Rom},
};
