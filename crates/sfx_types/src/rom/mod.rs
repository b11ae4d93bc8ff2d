//! Cartridge ROM image access.
//!
//! A [`Rom`] is an immutable, cheaply clonable byte buffer. Models decode
//! against the whole image because stream offsets are absolute.
//!
//! # Copier Headers
//!
//! Dumps made with cartridge copiers carry a 512-byte header in front of the
//! actual image. Such files are 0x200 bytes longer than a multiple of the bank
//! size; [`Rom::from_bytes`] detects and strips the header so offsets match the
//! cartridge address space.
//!
//! # Object Table
//!
//! Objects are described by a table of fixed-size [`ObjectHeader`] records whose
//! location depends on the game. Given the table offset, [`Rom::object_header`]
//! reads a record and [`Rom::load_object`] decodes the model it points to.

use std::{path::Path, sync::Arc};

use log::debug;

use crate::{
	error::{ModelError, ModelResult},
	model::{
		Model, ParseConfig,
		constants::{BANK_SIZE, COPIER_HEADER_SIZE, OBJECT_HEADER_SIZE},
	},
};

pub mod header;

pub use self::header::ObjectHeader;

/// A loaded ROM image.
#[derive(Debug, Clone)]
pub struct Rom {
	data: Arc<[u8]>,
	stripped_header: bool,
}

impl Rom {
	/// Reads a ROM image from disk, stripping a copier header if present.
	pub fn open<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
		let data = std::fs::read(path)?;
		Ok(Self::from_bytes(data))
	}

	/// Wraps a ROM image, stripping a copier header if present.
	pub fn from_bytes(mut data: Vec<u8>) -> Self {
		let stripped_header = data.len() % BANK_SIZE == COPIER_HEADER_SIZE;
		if stripped_header {
			debug!("Stripping 0x{COPIER_HEADER_SIZE:X}-byte copier header");
			data.drain(..COPIER_HEADER_SIZE);
		}

		Self {
			data: data.into(),
			stripped_header,
		}
	}

	/// Wraps bytes as-is.
	pub fn from_bytes_raw(data: impl Into<Arc<[u8]>>) -> Self {
		Self {
			data: data.into(),
			stripped_header: false,
		}
	}

	/// Shared handle to the image bytes.
	pub fn data(&self) -> Arc<[u8]> {
		Arc::clone(&self.data)
	}

	/// Image bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.data
	}

	/// Image size in bytes.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` for an empty image.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns `true` if a copier header was removed on load.
	pub fn has_stripped_header(&self) -> bool {
		self.stripped_header
	}

	/// Reads object header `index` of the table at `table_offset`.
	///
	/// # Errors
	///
	/// Returns [`ModelError::HeaderOutOfRange`] if the record is not fully inside
	/// the image.
	pub fn object_header(&self, table_offset: usize, index: usize) -> ModelResult<ObjectHeader> {
		let offset = index
			.checked_mul(OBJECT_HEADER_SIZE)
			.and_then(|relative| table_offset.checked_add(relative));
		let record = offset
			.and_then(|start| self.data.get(start..start.checked_add(OBJECT_HEADER_SIZE)?))
			.ok_or(ModelError::HeaderOutOfRange {
				index,
				offset: offset.unwrap_or(usize::MAX),
			})?;
		ObjectHeader::from_bytes(record)
	}

	/// Reads `count` object headers, skipping empty slots.
	pub fn objects(
		&self,
		table_offset: usize,
		count: usize,
	) -> ModelResult<Vec<(usize, ObjectHeader)>> {
		let mut objects = Vec::new();
		for index in 0..count {
			let header = self.object_header(table_offset, index)?;
			if !header.is_empty() {
				objects.push((index, header));
			}
		}
		Ok(objects)
	}

	/// Decodes the model of object `index` using the default [`ParseConfig`].
	pub fn load_object(&self, table_offset: usize, index: usize) -> ModelResult<Model> {
		self.load_object_with_config(table_offset, index, ParseConfig::default())
	}

	/// Decodes the model of object `index`.
	///
	/// # Errors
	///
	/// [`ModelError::NoObject`] for empty slots, plus any header or decode error.
	pub fn load_object_with_config(
		&self,
		table_offset: usize,
		index: usize,
		config: ParseConfig,
	) -> ModelResult<Model> {
		let header = self.object_header(table_offset, index)?;
		let (Some(vertices), Some(faces)) = (header.vertices_offset(), header.faces_offset()) else {
			return Err(ModelError::NoObject {
				index,
			});
		};
		debug!("Loading object {index}: {header}");
		Model::with_config(self.data(), vertices, faces, config)
	}
}

impl From<Vec<u8>> for Rom {
	fn from(value: Vec<u8>) -> Self {
		Self::from_bytes(value)
	}
}
