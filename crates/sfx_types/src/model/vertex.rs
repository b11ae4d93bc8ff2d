//! Vertex stream decoding.
//!
//! The vertex stream is a sequence of command bytes, each followed by its
//! payload, terminated by an End command:
//!
//! ```text
//! Cmd   Name          Payload                          Effect
//! ----  ------------  -------------------------------  -----------------------------
//! 0x04  Plain         n, n × (x,y,z) i8                append points
//! 0x08  Plain16       n, n × (x,y,z) i16 LE            append points
//! 0x0C  End           -                                stop
//! 0x1C  AnimatedList  n, n × u16 LE frame offsets      select frame, jump to it
//! 0x20  Jump          u16 LE offset                    jump, no points
//! 0x34  XFlipped16    n, n × (x,y,z) i16 LE            append point and (-x,y,z)
//! 0x38  XFlipped      n, n × (x,y,z) i8                append point and (-x,y,z)
//! ```
//!
//! Jumps are relative to the position of the offset field itself, plus one:
//! `target = field_position + offset + 1`. For AnimatedList the field is the
//! selected entry of the frame table.

use log::{debug, trace};
use serde::Serialize;

use crate::error::{ModelError, ModelResult, StreamKind};

use super::{constants, cursor::Cursor, parse_config::ParseConfig};

/// A decoded model point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex {
	/// X coordinate
	pub x: i16,
	/// Y coordinate
	pub y: i16,
	/// Z coordinate
	pub z: i16,
}

impl Vertex {
	/// Creates a vertex from its components.
	pub const fn new(x: i16, y: i16, z: i16) -> Self {
		Self {
			x,
			y,
			z,
		}
	}

	/// Returns the vertex reflected across the YZ plane.
	///
	/// `i16::MIN` saturates to `i16::MAX`.
	pub const fn mirrored_x(self) -> Self {
		Self {
			x: self.x.saturating_neg(),
			y: self.y,
			z: self.z,
		}
	}

	/// Components as an array.
	pub const fn to_array(self) -> [i16; 3] {
		[self.x, self.y, self.z]
	}

	/// Components as floats, ready for a vertex buffer.
	pub fn to_f32(self) -> [f32; 3] {
		[f32::from(self.x), f32::from(self.y), f32::from(self.z)]
	}
}

impl From<(i16, i16, i16)> for Vertex {
	fn from((x, y, z): (i16, i16, i16)) -> Self {
		Self::new(x, y, z)
	}
}

impl std::fmt::Display for Vertex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {})", self.x, self.y, self.z)
	}
}

/// Vertex stream command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VertexCommand {
	/// 8-bit point list
	Plain = constants::VERTEX_PLAIN,
	/// 16-bit point list
	Plain16 = constants::VERTEX_PLAIN16,
	/// End of stream
	End = constants::VERTEX_END,
	/// Animation frame table
	AnimatedList = constants::VERTEX_ANIMATED_LIST,
	/// Relative jump
	Jump = constants::VERTEX_JUMP,
	/// 16-bit point list with X mirrors
	XFlipped16 = constants::VERTEX_X_FLIPPED16,
	/// 8-bit point list with X mirrors
	XFlipped = constants::VERTEX_X_FLIPPED,
}

impl VertexCommand {
	/// Decodes a command byte read at `offset`.
	///
	/// # Errors
	///
	/// Returns [`ModelError::UnknownCommand`] for any byte outside the command set.
	pub fn from_byte(byte: u8, offset: usize) -> ModelResult<Self> {
		let command = match byte {
			constants::VERTEX_PLAIN => Self::Plain,
			constants::VERTEX_PLAIN16 => Self::Plain16,
			constants::VERTEX_END => Self::End,
			constants::VERTEX_ANIMATED_LIST => Self::AnimatedList,
			constants::VERTEX_JUMP => Self::Jump,
			constants::VERTEX_X_FLIPPED16 => Self::XFlipped16,
			constants::VERTEX_X_FLIPPED => Self::XFlipped,
			_ => return Err(ModelError::unknown_command(StreamKind::Vertex, byte, offset)),
		};
		Ok(command)
	}

	/// The command byte.
	pub const fn to_byte(self) -> u8 {
		self as u8
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointWidth {
	Byte,
	Word,
}

impl PointWidth {
	fn read(self, cursor: &mut Cursor<'_>) -> ModelResult<i16> {
		match self {
			Self::Byte => cursor.read_i8().map(i16::from),
			Self::Word => cursor.read_i16(),
		}
	}

	fn read_vertex(self, cursor: &mut Cursor<'_>) -> ModelResult<Vertex> {
		let x = self.read(cursor)?;
		let y = self.read(cursor)?;
		let z = self.read(cursor)?;
		Ok(Vertex::new(x, y, z))
	}
}

/// Reads a counted point list, appending each point and optionally its X mirror.
fn read_points(
	cursor: &mut Cursor<'_>,
	width: PointWidth,
	mirror: bool,
	vertices: &mut Vec<Vertex>,
) -> ModelResult<()> {
	let count = usize::from(cursor.read_u8()?);
	vertices.reserve(if mirror { count * 2 } else { count });
	for _ in 0..count {
		let vertex = width.read_vertex(cursor)?;
		vertices.push(vertex);
		if mirror {
			vertices.push(vertex.mirrored_x());
		}
	}
	Ok(())
}

/// Vertices of one animation frame plus the frame selection that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
	/// Points in decode order; a vertex index is a position in this list
	pub vertices: Vec<Vertex>,
	/// Selected frame, clamped into `0..frame_count`
	pub current_frame: usize,
	/// Number of frames in the animation table, 1 for static models
	pub frame_count: usize,
}

impl Frame {
	fn static_model() -> Self {
		Self {
			vertices: Vec::new(),
			current_frame: 0,
			frame_count: 1,
		}
	}

	/// Number of decoded vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Returns `true` if the stream carried an animation table.
	pub fn is_animated(&self) -> bool {
		self.frame_count > 1
	}

	/// Flattened `x, y, z` coordinates, three per vertex.
	pub fn flat_coordinates(&self) -> Vec<i16> {
		self.vertices.iter().flat_map(|v| v.to_array()).collect()
	}

	/// Looks up a vertex by index.
	pub fn vertex(&self, index: usize) -> Option<Vertex> {
		self.vertices.get(index).copied()
	}
}

/// Clamps a requested frame into `0..frame_count`.
///
/// `frame_count` must be at least 1.
pub fn clamp_frame(requested: i32, frame_count: usize) -> usize {
	let last = i64::try_from(frame_count.saturating_sub(1)).unwrap_or(i64::MAX);
	// non-negative after the clamp
	i64::from(requested).clamp(0, last) as usize
}

/// Decodes one animation frame using the default [`ParseConfig`].
///
/// See [`decode_frame_with_config`].
pub fn decode_frame(data: &[u8], vertices_offset: usize, requested_frame: i32) -> ModelResult<Frame> {
	decode_frame_with_config(data, vertices_offset, requested_frame, &ParseConfig::default())
}

/// Decodes the vertex stream at `vertices_offset` for one animation frame.
///
/// Decoding always restarts from `vertices_offset`: which jump targets are taken
/// depends on the requested frame, so no state is carried between calls.
/// Requests outside the animation table are clamped to the nearest frame.
///
/// # Errors
///
/// - [`ModelError::UnknownCommand`] for a byte outside the command set
/// - [`ModelError::OutOfBounds`] when a read or jump leaves the buffer
/// - [`ModelError::EmptyAnimation`] for an animation table with no frames
/// - [`ModelError::IterationLimitExceeded`] after `config.max_commands` commands
///   without an End command
///
/// # Examples
///
/// ```
/// use sfx_types::model::{Vertex, decode_frame};
///
/// let data = [0x04, 0x02, 10, 20, 30, 0xF6, 0xEC, 0xE2, 0x0C];
/// let frame = decode_frame(&data, 0, 0).unwrap();
///
/// assert_eq!(frame.vertices, vec![Vertex::new(10, 20, 30), Vertex::new(-10, -20, -30)]);
/// assert_eq!(frame.frame_count, 1);
/// ```
pub fn decode_frame_with_config(
	data: &[u8],
	vertices_offset: usize,
	requested_frame: i32,
	config: &ParseConfig,
) -> ModelResult<Frame> {
	let mut cursor = Cursor::new(data, vertices_offset);
	let mut frame = Frame::static_model();

	for _ in 0..config.max_commands {
		let offset = cursor.position();
		let command = VertexCommand::from_byte(cursor.read_u8()?, offset)?;
		trace!("vertex command {command:?} at 0x{offset:X}");

		match command {
			VertexCommand::Plain => {
				read_points(&mut cursor, PointWidth::Byte, false, &mut frame.vertices)?;
			}
			VertexCommand::Plain16 => {
				read_points(&mut cursor, PointWidth::Word, false, &mut frame.vertices)?;
			}
			VertexCommand::XFlipped => {
				read_points(&mut cursor, PointWidth::Byte, true, &mut frame.vertices)?;
			}
			VertexCommand::XFlipped16 => {
				read_points(&mut cursor, PointWidth::Word, true, &mut frame.vertices)?;
			}
			VertexCommand::End => {
				debug!(
					"{} vertices loaded from 0x{vertices_offset:X} (frame {}/{})",
					frame.vertices.len(),
					frame.current_frame,
					frame.frame_count
				);
				return Ok(frame);
			}
			VertexCommand::AnimatedList => {
				let frame_count = cursor.read_u8()?;
				if frame_count == 0 {
					return Err(ModelError::EmptyAnimation {
						offset,
					});
				}
				frame.frame_count = usize::from(frame_count);
				frame.current_frame = clamp_frame(requested_frame, frame.frame_count);

				cursor.advance(frame.current_frame * 2)?;
				jump(&mut cursor)?;
			}
			VertexCommand::Jump => jump(&mut cursor)?,
		}
	}

	Err(ModelError::IterationLimitExceeded {
		limit: config.max_commands,
		offset: cursor.position(),
	})
}

/// Follows the u16 offset under the cursor: `position += offset + 1`.
///
/// The offset is treated as unsigned; it is unknown whether the hardware
/// allows backward jumps.
fn jump(cursor: &mut Cursor<'_>) -> ModelResult<()> {
	let relative = cursor.peek_u16()?;
	cursor.advance(usize::from(relative) + 1)
}
