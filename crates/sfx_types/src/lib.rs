//! This crate decodes Super FX era 3D model data from cartridge ROM images.
//!
//! # Model Data
//!
//! - **Vertex stream**: command-tagged point lists with optional X mirroring,
//!   jumps and per-frame animation tables
//! - **Face stream**: triangle index lists, face groups and BSP trees of face groups
//! - **Object table**: fixed-size headers mapping objects to bank-relative stream
//!   addresses
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use sfx_types::prelude::*;
//!
//! # fn main() -> Result<(), ModelError> {
//! let rom = Rom::open("starfox.sfc")?;
//! let model = Model::new(rom.data(), 0x66001, 0x66042)?;
//!
//! for batch in model.draw_batches()? {
//!     println!("{:?} with {} vertices", batch.primitive, batch.vertex_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or decode streams directly:
//!
//! ```
//! use sfx_types::model::decode_frame;
//!
//! let frame = decode_frame(&[0x38, 0x01, 5, 6, 7, 0x0C], 0, 0).unwrap();
//! assert_eq!(frame.vertices[1].x, -5);
//! ```

mod error;

pub mod model;
pub mod rom;

/// `use sfx_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{ModelError, ModelResult, StreamKind};
