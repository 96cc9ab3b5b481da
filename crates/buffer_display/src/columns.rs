//! Column-width policy and row layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the three status flag columns plus the separator after them.
pub const FLAG_COLUMNS: usize = 4;

const ELLIPSIS: char = '…';

/// Configured lower bounds and the space available to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
	/// The name column never shrinks below this.
	pub min_name: usize,
	/// Minimum width of the right-aligned size column.
	pub size: usize,
	/// Fixed width of the kind column.
	pub kind: usize,
	/// Total display width available to the table.
	pub available: usize,
}

impl Default for ColumnWidths {
	fn default() -> Self {
		Self {
			min_name: 19,
			size: 7,
			kind: 16,
			available: 80,
		}
	}
}

/// Resolved column widths for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
	pub name: usize,
	pub size: usize,
	pub kind: usize,
}

impl ColumnSpec {
	/// Computes widths from the labels of one snapshot.
	pub fn compute<'a>(
		names: impl IntoIterator<Item = &'a str>,
		size_labels: impl IntoIterator<Item = &'a str>,
		widths: ColumnWidths,
	) -> Self {
		let longest_name = names.into_iter().map(display_width).max().unwrap_or(0);
		let longest_size = size_labels.into_iter().map(display_width).max().unwrap_or(0);
		Self {
			name: name_column_width(longest_name, widths),
			size: size_column_width(longest_size, widths),
			kind: widths.kind,
		}
	}

	/// Column titles laid out with the same widths as the rows.
	pub fn header(&self) -> String {
		self.format_row(['C', 'R', 'M'], "Name", "Size", "Kind", "File")
	}

	/// Lays out one row. Trailing whitespace is dropped.
	pub fn format_row(&self, flags: [char; 3], name: &str, size: &str, kind: &str, path: &str) -> String {
		let mut line = String::with_capacity(FLAG_COLUMNS + self.name + self.size + self.kind + path.len() + 3);
		line.extend(flags);
		line.push(' ');
		line.push_str(&pad_end(&fit_to_width(name, self.name), self.name));
		line.push(' ');
		line.push_str(&pad_start(size, self.size));
		line.push(' ');
		line.push_str(&pad_end(&fit_to_width(kind, self.kind), self.kind));
		line.push(' ');
		line.push_str(path);
		let trimmed = line.trim_end().len();
		line.truncate(trimmed);
		line
	}
}

/// Name column width: the longest name, capped at a quarter of the
/// available width, and never below the configured minimum.
pub fn name_column_width(longest: usize, widths: ColumnWidths) -> usize {
	widths.min_name.max(longest.min(widths.available / 4))
}

/// Size column width: wide enough for the longest label.
pub fn size_column_width(longest: usize, widths: ColumnWidths) -> usize {
	widths.size.max(longest)
}

/// Terminal display width of `text`.
pub fn display_width(text: &str) -> usize {
	UnicodeWidthStr::width(text)
}

/// Fits `text` into `width` display columns, replacing the overflow with an
/// ellipsis.
pub fn fit_to_width(text: &str, width: usize) -> String {
	if display_width(text) <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - 1;
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w > budget {
			break;
		}
		used += w;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	out
}

/// Left-aligns `text` in a field of `width` display columns.
pub fn pad_end(text: &str, width: usize) -> String {
	let fill = width.saturating_sub(display_width(text));
	let mut out = String::with_capacity(text.len() + fill);
	out.push_str(text);
	out.extend(std::iter::repeat_n(' ', fill));
	out
}

/// Right-aligns `text` in a field of `width` display columns.
pub fn pad_start(text: &str, width: usize) -> String {
	let fill = width.saturating_sub(display_width(text));
	let mut out = String::with_capacity(text.len() + fill);
	out.extend(std::iter::repeat_n(' ', fill));
	out.push_str(text);
	out
}
