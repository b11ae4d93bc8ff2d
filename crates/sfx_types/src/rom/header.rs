//! Object header records.

use std::fmt::Formatter;

use serde::Serialize;

use crate::{
	error::{ModelError, ModelResult},
	model::constants::{BANK_SIZE, OBJECT_HEADER_SIZE},
};

/// Number of header bytes after the two pointers and the bank.
pub const EXTRA_SIZE: usize = OBJECT_HEADER_SIZE - 5;

/// One record of the object header table.
///
/// ```text
/// Offset  Size  Field             Description
/// ------  ----  ----------------  ------------------------------------------
/// 0x00    2     vertices_pointer  Bank-relative address of the vertex stream
/// 0x02    1     bank              Stored bank, bank index + 1; 0 = no object
/// 0x03    2     faces_pointer     Bank-relative address of the face stream
/// 0x05    23    extra             Remaining fields, kept as raw bytes
/// ```
///
/// Pointers are CPU addresses within a bank (0x8000-0xFFFF); only the low 15
/// bits select the byte in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectHeader {
	/// Address of the vertex stream inside the bank
	pub vertices_pointer: u16,
	/// Stored bank number
	pub bank: u8,
	/// Address of the face stream inside the bank
	pub faces_pointer: u16,
	/// Remaining record bytes
	pub extra: [u8; EXTRA_SIZE],
}

impl ObjectHeader {
	/// Parses a record from the start of `data`.
	pub fn from_bytes(data: &[u8]) -> ModelResult<Self> {
		if data.len() < OBJECT_HEADER_SIZE {
			return Err(ModelError::OutOfBounds {
				offset: 0,
				needed: OBJECT_HEADER_SIZE,
				len: data.len(),
			});
		}

		let vertices_pointer = u16::from_le_bytes([data[0], data[1]]);
		let bank = data[2];
		let faces_pointer = u16::from_le_bytes([data[3], data[4]]);
		let mut extra = [0u8; EXTRA_SIZE];
		extra.copy_from_slice(&data[5..OBJECT_HEADER_SIZE]);

		Ok(Self {
			vertices_pointer,
			bank,
			faces_pointer,
			extra,
		})
	}

	/// Serializes the record.
	pub fn to_bytes(&self) -> [u8; OBJECT_HEADER_SIZE] {
		let mut buffer = [0u8; OBJECT_HEADER_SIZE];
		buffer[0..2].copy_from_slice(&self.vertices_pointer.to_le_bytes());
		buffer[2] = self.bank;
		buffer[3..5].copy_from_slice(&self.faces_pointer.to_le_bytes());
		buffer[5..].copy_from_slice(&self.extra);
		buffer
	}

	/// Returns `true` if this slot holds no object.
	pub fn is_empty(&self) -> bool {
		self.bank == 0
	}

	/// Zero-based bank index, `None` for empty slots.
	pub fn bank_index(&self) -> Option<usize> {
		usize::from(self.bank).checked_sub(1)
	}

	fn resolve(&self, pointer: u16) -> Option<usize> {
		self.bank_index().map(|bank| bank * BANK_SIZE + (usize::from(pointer) & (BANK_SIZE - 1)))
	}

	/// Absolute ROM offset of the vertex stream.
	pub fn vertices_offset(&self) -> Option<usize> {
		self.resolve(self.vertices_pointer)
	}

	/// Absolute ROM offset of the face stream.
	pub fn faces_offset(&self) -> Option<usize> {
		self.resolve(self.faces_pointer)
	}
}

impl std::fmt::Display for ObjectHeader {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match (self.vertices_offset(), self.faces_offset()) {
			(Some(vertices), Some(faces)) => write!(
				f,
				"Object {{ bank: {}, vertices: 0x{vertices:X}, faces: 0x{faces:X} }}",
				self.bank
			),
			_ => write!(f, "Object {{ empty }}"),
		}
	}
}

impl TryFrom<&[u8]> for ObjectHeader {
	type Error = ModelError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
