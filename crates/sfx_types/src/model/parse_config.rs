//! Decode limits for model parsing.
//!
//! The model encoding is pointer-relative, so malformed data can describe
//! arbitrarily deep trees or unbounded command runs. These limits turn such
//! input into an error instead of a hang or a stack overflow.

/// Configuration for decoding vertex and face streams.
///
/// # Presets
///
/// - `default()`: 64 BSP levels, 4096 commands, index validation on
/// - `lenient()`: 256 BSP levels, 65536 commands, index validation off
/// - `strict()`: 32 BSP levels, 1024 commands, index validation on
///
/// # Examples
///
/// ```
/// use sfx_types::model::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert_eq!(config.max_bsp_depth, 64);
///
/// let config = ParseConfig::new(16, 256);
/// assert!(config.validate_indices);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
	/// Maximum nesting depth of BSP nodes
	pub max_bsp_depth: usize,
	/// Maximum number of vertex commands per frame, and of faces per face group
	pub max_commands: usize,
	/// Reject faces whose vertex indices exceed the active frame's vertex count
	pub validate_indices: bool,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			max_bsp_depth: 64,
			max_commands: 4096,
			validate_indices: true,
		}
	}
}

impl ParseConfig {
	/// Create a configuration with custom limits and index validation enabled.
	pub fn new(max_bsp_depth: usize, max_commands: usize) -> Self {
		Self {
			max_bsp_depth,
			max_commands,
			validate_indices: true,
		}
	}

	/// Higher limits, no index validation. Useful when probing unknown offsets.
	pub fn lenient() -> Self {
		Self {
			max_bsp_depth: 256,
			max_commands: 65536,
			validate_indices: false,
		}
	}

	/// Lower limits for known-small models.
	pub fn strict() -> Self {
		Self {
			max_bsp_depth: 32,
			max_commands: 1024,
			validate_indices: true,
		}
	}

	/// Returns a copy with index validation switched on or off.
	pub fn with_index_validation(mut self, validate: bool) -> Self {
		self.validate_indices = validate;
		self
	}
}
