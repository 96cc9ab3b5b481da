//! Error types for menu commands, registry persistence and option loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::resource::ResourceId;

/// Errors from single-row menu commands.
///
/// These abort only the command that raised them; the view stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
	/// The cursor is not on a row.
	#[error("no buffer on this line")]
	NoCurrentEntry,

	/// The row's buffer was killed after the last refresh.
	#[error("buffer {name} has been killed")]
	ResourceKilled {
		/// Name cached on the row.
		name: String,
	},

	/// The id does not belong to any row of this view.
	#[error("buffer {0} is not listed")]
	UnknownResource(ResourceId),
}

/// Result type for menu commands.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Why a registry failed to write a buffer.
#[derive(Debug, Error)]
pub enum PersistError {
	/// The buffer does not visit a file.
	#[error("no backing file")]
	NoBackingPath,

	/// The buffer is read-only.
	#[error("buffer is read-only")]
	ReadOnly,

	/// Writing the backing file failed.
	#[error("write failed: {0}")]
	Io(#[from] std::io::Error),

	/// Registry-specific failure (save hook error, remote rejected).
	#[error("{0}")]
	Failed(String),
}

/// Errors that can occur when loading menu options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A column width is outside its accepted range.
	#[error("invalid width for {field}: {value}")]
	InvalidWidth {
		/// Option name as written in the file.
		field: &'static str,
		value: usize,
	},
}
