//! Presentation surface the menu calls outward.

use bufmenu_buffer_display::ColumnSpec;

use crate::resource::ResourceId;
use crate::view::Selection;

/// One laid-out table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
	pub id: ResourceId,
	pub flags: [char; 3],
	/// The full line, laid out with the [`ColumnSpec`] passed alongside.
	pub text: String,
	/// The cursor is on this row.
	pub current: bool,
}

/// Whatever draws the table and shows buffers.
pub trait Host {
	/// Draws the table. `columns.header()` gives the matching title line.
	fn render(&mut self, rows: &[RenderedRow], columns: &ColumnSpec);

	/// Shows the selected buffers, splitting space per
	/// [`Selection::share`].
	fn open_panes(&mut self, selection: &Selection);

	/// Surfaces a non-fatal problem to the user.
	fn report_warning(&mut self, message: &str);
}
