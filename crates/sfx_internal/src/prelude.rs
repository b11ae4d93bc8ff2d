//! Prelude module for `sfx_internal`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```rust
//! use sfx_internal::prelude::*;
//!
//! let data = vec![0x04, 0x01, 1, 2, 3, 0x0C, 0x14, 0xFF];
//! let model = Model::new(data, 0, 6).unwrap();
//!
//! assert_eq!(model.vertices(), &[Vertex::new(1, 2, 3)]);
//! assert!(model.faces().is_empty());
//! ```

// Re-export everything from sfx_types::prelude
#[doc(inline)]
pub use sfx_types::prelude::*;

// Re-export the entire sfx_types module for advanced usage
#[doc(inline)]
pub use sfx_types;
