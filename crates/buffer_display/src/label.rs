//! Size and path label formatting.

use std::path::Path;

use bytesize::ByteSize;

/// How the size column renders byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SizeFormat {
	/// Plain integer byte count.
	#[default]
	Bytes,
	/// Human-readable units (`1.2 KiB`).
	Human,
}

/// Formats a byte count for the size column.
pub fn format_size(bytes: u64, format: SizeFormat) -> String {
	match format {
		SizeFormat::Bytes => bytes.to_string(),
		SizeFormat::Human => ByteSize::b(bytes).to_string(),
	}
}

/// Label formatting mode for backing paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PathDisplay {
	/// Preserve the path text exactly as stored.
	#[default]
	AsProvided,
	/// Display only the last path segment.
	FileName,
	/// Display a path relative to the working directory when possible.
	Relative,
}

/// Rendering context for path labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathDisplayContext<'a> {
	pub mode: PathDisplay,
	pub working_dir: Option<&'a Path>,
}

/// Formats a backing path for the file column. Buffers without a path get an
/// empty label.
pub fn format_path_label(path: Option<&Path>, context: PathDisplayContext<'_>) -> String {
	let Some(path) = path else {
		return String::new();
	};

	match context.mode {
		PathDisplay::AsProvided => path.display().to_string(),
		PathDisplay::FileName => path
			.file_name()
			.map(|name| name.to_string_lossy().to_string())
			.unwrap_or_else(|| path.display().to_string()),
		PathDisplay::Relative => {
			if path.is_absolute()
				&& let Some(working_dir) = context.working_dir
				&& let Ok(rel) = path.strip_prefix(working_dir)
			{
				return rel.display().to_string();
			}
			path.display().to_string()
		}
	}
}
