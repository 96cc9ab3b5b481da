//! Buffer identity and the attribute snapshot a registry reports for it.

use std::fmt;
use std::path::PathBuf;

/// Opaque identity of a registry-owned buffer.
///
/// Stable for the buffer's lifetime and never reused after it is killed, so
/// marks can be matched across refreshes by identity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u64);

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Live attributes of a buffer at the moment they were queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
	/// Buffer name as shown in the name column.
	pub name: String,
	pub read_only: bool,
	/// Unsaved changes are pending.
	pub modified: bool,
	/// Content size in bytes.
	pub size: u64,
	/// Mode or kind label (`Rust`, `Shell`, `Dired`).
	pub kind: String,
	/// Backing file, if the buffer visits one.
	pub path: Option<PathBuf>,
}

impl Attributes {
	/// Attributes for a buffer with no backing file.
	pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			read_only: false,
			modified: false,
			size: 0,
			kind: kind.into(),
			path: None,
		}
	}

	pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = Some(path.into());
		self
	}

	pub fn with_size(mut self, size: u64) -> Self {
		self.size = size;
		self
	}

	pub fn with_read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	pub fn with_modified(mut self, modified: bool) -> Self {
		self.modified = modified;
		self
	}

	pub fn has_path(&self) -> bool {
		self.path.is_some()
	}
}
