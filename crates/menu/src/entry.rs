//! Rows of the menu table.

use std::path::PathBuf;

use crate::mark::Mark;
use crate::resource::{Attributes, ResourceId};

/// Display data cached from the registry at the last refresh.
///
/// Sorting and rendering read this snapshot, never live state, so the order
/// of a table is stable until the next refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub name: String,
	pub read_only: bool,
	pub modified: bool,
	pub size: u64,
	pub kind: String,
	pub path: Option<PathBuf>,
	/// The buffer that was active when the view was built.
	pub origin: bool,
}

impl Row {
	pub fn new(attributes: Attributes, origin: bool) -> Self {
		let Attributes {
			name,
			read_only,
			modified,
			size,
			kind,
			path,
		} = attributes;
		Self {
			name,
			read_only,
			modified,
			size,
			kind,
			path,
			origin,
		}
	}

	/// Re-reads the read-only and modified flags without touching the columns
	/// the table may be sorted by.
	pub fn sync_flags(&mut self, attributes: &Attributes) {
		self.read_only = attributes.read_only;
		self.modified = attributes.modified;
	}
}

/// One row: a buffer reference, its pending mark and its cached display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	id: ResourceId,
	mark: Mark,
	row: Row,
}

impl Entry {
	pub fn new(id: ResourceId, mark: Mark, row: Row) -> Self {
		Self { id, mark, row }
	}

	pub fn id(&self) -> ResourceId {
		self.id
	}

	pub fn mark(&self) -> Mark {
		self.mark
	}

	pub fn row(&self) -> &Row {
		&self.row
	}

	pub(crate) fn row_mut(&mut self) -> &mut Row {
		&mut self.row
	}

	/// Overwrites the current mark.
	pub fn set_mark(&mut self, mark: Mark) {
		self.mark = mark;
	}

	/// Returns the row to the unmarked state. The modified flag keeps showing
	/// through [`Entry::status_flags`].
	pub fn clear_mark(&mut self) {
		self.mark = Mark::None;
	}

	/// The three status glyphs shown before the name.
	///
	/// Column one shows `D` for a pending kill, otherwise `.` for the origin
	/// buffer or `>` for a display mark. Column two shows `%` when read-only.
	/// Column three shows `S` for a pending save, otherwise `*` when modified.
	pub fn status_flags(&self) -> [char; 3] {
		let current = match self.mark {
			Mark::Delete => 'D',
			_ if self.row.origin => '.',
			Mark::Display => '>',
			_ => ' ',
		};
		let read_only = if self.row.read_only { '%' } else { ' ' };
		let modified = match self.mark {
			Mark::Save => 'S',
			_ if self.row.modified => '*',
			_ => ' ',
		};
		[current, read_only, modified]
	}
}
