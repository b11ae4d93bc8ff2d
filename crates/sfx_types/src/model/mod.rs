//! Super FX model format support.
//!
//! Models are stored as two independent byte streams somewhere in the ROM image:
//! a **vertex stream** and a **face stream**. Both are sequences of command
//! bytes with variable-length payloads. Offsets inside the streams are relative
//! to the position they are read from, so a model can only be decoded against
//! the full ROM image.
//!
//! # Vertex Stream
//!
//! Point lists of 8-bit or 16-bit signed coordinates, optionally mirrored across
//! X, plus Jump and AnimatedList commands that redirect the cursor. An
//! AnimatedList holds one u16 offset per frame; decoding a frame follows that
//! frame's entry. See [`vertex`] for the command table.
//!
//! # Face Stream
//!
//! An optional triangle index list, then either a single face group or a BSP
//! tree whose nodes point at face groups. See [`face`] and [`bsp`].
//!
//! # Decoding
//!
//! Decoding is fail-fast: an unknown command byte or a read outside the buffer
//! aborts the whole call. Structural limits from [`ParseConfig`] bound BSP depth
//! and command counts so malformed data cannot hang the decoder.
//!
//! ## Decoding a model
//!
//! ```no_run
//! use sfx_types::{model::Model, rom::Rom};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rom = Rom::open("starfox.sfc")?;
//! let mut model = Model::new(rom.data(), 0x66001, 0x66042)?;
//!
//! println!("{} vertices, {} faces", model.vertices().len(), model.faces().len());
//!
//! if model.frame_count() > 1 {
//!     model.reload_frame(1)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding streams directly
//!
//! ```
//! use sfx_types::model::{FaceSet, decode_faces, decode_frame};
//!
//! let data = [0x38, 0x01, 5, 6, 7, 0x0C, 0x14, 0xFF];
//!
//! let frame = decode_frame(&data, 0, 0).unwrap();
//! assert_eq!(frame.vertex_count(), 2);
//!
//! let faces = decode_faces(&data, 6).unwrap();
//! assert_eq!(faces, FaceSet::Faces(Vec::new()));
//! ```

pub mod bsp;
pub mod constants;
pub mod cursor;
pub mod draw;
pub mod face;
pub mod object;
pub mod parse_config;
pub mod vertex;

pub use self::bsp::{BspNode, NodeType, decode_bsp_tree, decode_bsp_tree_with_config};
pub use self::cursor::Cursor;
pub use self::draw::{DrawBatch, Primitive, build_draw_batches};
pub use self::face::{
	Face, FaceCommand, FaceSet, decode_face_group, decode_face_group_with_config, decode_faces,
	decode_faces_with_config,
};
pub use self::object::Model;
pub use self::parse_config::ParseConfig;
pub use self::vertex::{
	Frame, Vertex, VertexCommand, clamp_frame, decode_frame, decode_frame_with_config,
};
