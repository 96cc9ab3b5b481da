//! Serializable menu options.
//!
//! Everything a user can put in a TOML file lives here. Runtime-only hooks
//! (custom sources, predicates, comparators) are attached through
//! [`ViewConfig`](crate::ViewConfig).

use std::path::Path;

use bufmenu_buffer_display::{ColumnWidths, PathDisplay, SizeFormat};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// User-facing menu options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuOptions {
	/// List only buffers that visit a file.
	pub files_only: bool,
	/// Order by the current display context instead of the global order.
	pub use_context_ordering: bool,
	/// Built-in sort applied after each refresh.
	pub sort: Option<SortSpec>,
	pub columns: ColumnOptions,
	pub path_display: PathDisplay,
}

impl MenuOptions {
	/// Parses and validates options from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let options: Self = toml::from_str(text)?;
		options.validate()?;
		Ok(options)
	}

	/// Reads options from a TOML file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		let columns = &self.columns;
		if columns.min_name_width == 0 {
			return Err(ConfigError::InvalidWidth {
				field: "min_name_width",
				value: columns.min_name_width,
			});
		}
		if columns.available_width < 8 {
			return Err(ConfigError::InvalidWidth {
				field: "available_width",
				value: columns.available_width,
			});
		}
		Ok(())
	}
}

/// Column layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnOptions {
	pub min_name_width: usize,
	pub size_width: usize,
	pub kind_width: usize,
	/// Width of the surface the table is drawn on.
	pub available_width: usize,
	pub size_format: SizeFormat,
}

impl Default for ColumnOptions {
	fn default() -> Self {
		let widths = ColumnWidths::default();
		Self {
			min_name_width: widths.min_name,
			size_width: widths.size,
			kind_width: widths.kind,
			available_width: widths.available,
			size_format: SizeFormat::default(),
		}
	}
}

impl ColumnOptions {
	pub fn widths(&self) -> ColumnWidths {
		ColumnWidths {
			min_name: self.min_name_width,
			size: self.size_width,
			kind: self.kind_width,
			available: self.available_width,
		}
	}
}

/// A built-in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSpec {
	pub key: SortKey,
	#[serde(default)]
	pub descending: bool,
}

/// Cached column a built-in sort compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
	Name,
	Size,
	Kind,
	Path,
}
