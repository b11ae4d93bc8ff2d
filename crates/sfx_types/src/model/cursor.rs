//! Bounds-checked read cursor over a ROM image.
//!
//! Every decode pass owns its own [`Cursor`]. Out-of-line structures (face groups
//! referenced from BSP nodes) are read by copying the cursor, so the parent
//! position is restored simply by dropping the copy.

use crate::error::{ModelError, ModelResult};

/// A read position into an immutable byte buffer.
///
/// # Examples
///
/// ```
/// use sfx_types::model::Cursor;
///
/// let data = [0x04, 0x34, 0x12, 0xFF];
/// let mut cursor = Cursor::new(&data, 0);
///
/// assert_eq!(cursor.read_u8().unwrap(), 0x04);
/// assert_eq!(cursor.read_u16().unwrap(), 0x1234);
/// assert_eq!(cursor.read_i8().unwrap(), -1);
/// assert!(cursor.read_u8().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> Cursor<'a> {
	/// Creates a cursor at an absolute position.
	///
	/// The position is not validated until the first read.
	#[inline]
	pub const fn new(data: &'a [u8], position: usize) -> Self {
		Self {
			data,
			position,
		}
	}

	/// Current absolute position.
	#[inline]
	pub const fn position(&self) -> usize {
		self.position
	}

	/// Length of the underlying buffer.
	#[inline]
	pub const fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if no bytes remain at the current position.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.position >= self.data.len()
	}

	fn out_of_bounds(&self, offset: usize, needed: usize) -> ModelError {
		ModelError::OutOfBounds {
			offset,
			needed,
			len: self.data.len(),
		}
	}

	/// Returns `count` bytes at `offset` without moving.
	pub fn bytes_at(&self, offset: usize, count: usize) -> ModelResult<&'a [u8]> {
		offset
			.checked_add(count)
			.and_then(|end| self.data.get(offset..end))
			.ok_or_else(|| self.out_of_bounds(offset, count))
	}

	/// Reads `count` bytes and advances past them.
	pub fn read_bytes(&mut self, count: usize) -> ModelResult<&'a [u8]> {
		let bytes = self.bytes_at(self.position, count)?;
		self.position += count;
		Ok(bytes)
	}

	/// Peeks at the byte under the cursor.
	pub fn peek_u8(&self) -> ModelResult<u8> {
		self.bytes_at(self.position, 1).map(|b| b[0])
	}

	/// Peeks at a little-endian u16 under the cursor.
	pub fn peek_u16(&self) -> ModelResult<u16> {
		self.bytes_at(self.position, 2).map(|b| u16::from_le_bytes([b[0], b[1]]))
	}

	/// Reads an unsigned byte.
	#[inline]
	pub fn read_u8(&mut self) -> ModelResult<u8> {
		self.read_bytes(1).map(|b| b[0])
	}

	/// Reads a signed byte.
	#[inline]
	pub fn read_i8(&mut self) -> ModelResult<i8> {
		self.read_u8().map(|b| b as i8)
	}

	/// Reads a little-endian u16.
	#[inline]
	pub fn read_u16(&mut self) -> ModelResult<u16> {
		self.read_bytes(2).map(|b| u16::from_le_bytes([b[0], b[1]]))
	}

	/// Reads a little-endian i16.
	#[inline]
	pub fn read_i16(&mut self) -> ModelResult<i16> {
		self.read_bytes(2).map(|b| i16::from_le_bytes([b[0], b[1]]))
	}

	/// Moves forward by `count` bytes.
	///
	/// The new position must address at least one byte of the buffer: every jump
	/// in the model encoding lands on something that is read next.
	pub fn advance(&mut self, count: usize) -> ModelResult<()> {
		let target = self
			.position
			.checked_add(count)
			.ok_or_else(|| self.out_of_bounds(self.position, count))?;
		if target >= self.data.len() {
			return Err(self.out_of_bounds(target, 1));
		}
		self.position = target;
		Ok(())
	}

	/// Returns a copy of this cursor moved forward by `count` bytes.
	pub fn forked(&self, count: usize) -> ModelResult<Self> {
		let mut fork = *self;
		fork.advance(count)?;
		Ok(fork)
	}
}
