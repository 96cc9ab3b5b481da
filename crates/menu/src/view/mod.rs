//! The menu view: an ordered table of rows over a live registry.
//!
//! Rows are rebuilt wholesale on every [`MenuView::refresh`]. Marks survive a
//! rebuild by buffer identity, never by row position, so a snapshot that
//! reorders or shrinks cannot move a mark onto the wrong buffer.
//!
//! Rows are dropped lazily. A killed buffer keeps its row until the next
//! refresh or execute pass notices it; single-row commands on such a row fail
//! with [`MenuError::ResourceKilled`].

mod commands;
mod execute;
mod select;

use bufmenu_buffer_display::{ColumnSpec, PathDisplayContext, format_path_label, format_size};
pub use execute::{ExecuteFailure, ExecuteReport};
use rustc_hash::FxHashMap;
pub use select::{PaneTarget, Selection};
use tracing::debug;

use crate::config::ViewConfig;
use crate::entry::{Entry, Row};
use crate::error::{MenuError, Result};
use crate::host::{Host, RenderedRow};
use crate::mark::Mark;
use crate::registry::Registry;
use crate::resource::ResourceId;
use crate::snapshot;

/// An interactive list of buffers with pending per-row actions.
#[derive(Debug)]
pub struct MenuView {
	entries: Vec<Entry>,
	config: ViewConfig,
	/// Buffer that was active when the view was opened.
	origin: Option<ResourceId>,
	/// Buffer the view itself is displayed in; never listed, never killed.
	own: Option<ResourceId>,
	/// Row index in `0..=entries.len()`. `entries.len()` is past the last row.
	cursor: usize,
}

impl MenuView {
	/// Opens a view over `registry` and builds its first snapshot.
	///
	/// The registry's active buffer becomes the origin, marked `.` in the
	/// table and protected from kills.
	pub fn open(registry: &dyn Registry, config: ViewConfig, own: Option<ResourceId>) -> Self {
		let origin = registry.active().filter(|&id| Some(id) != own);
		let mut view = Self {
			entries: Vec::new(),
			config,
			origin,
			own,
			cursor: 0,
		};
		view.refresh(registry);
		view
	}

	/// Rebuilds every row from a fresh snapshot.
	///
	/// Marks carry over by identity. The cursor stays on the same buffer when
	/// it is still listed, otherwise on the same index clamped to the table.
	pub fn refresh(&mut self, registry: &dyn Registry) {
		let carried: FxHashMap<ResourceId, Mark> = self
			.entries
			.iter()
			.filter(|entry| !entry.mark().is_none())
			.map(|entry| (entry.id(), entry.mark()))
			.collect();
		let origin = self
			.entries
			.iter()
			.find(|entry| entry.row().origin)
			.map(Entry::id)
			.or(self.origin);
		let focus = self.entries.get(self.cursor).map(Entry::id);

		let mut entries: Vec<Entry> = snapshot::build(registry, &self.config, self.own)
			.into_iter()
			.map(|item| {
				let mark = carried.get(&item.id).copied().unwrap_or_default();
				Entry::new(item.id, mark, Row::new(item.attributes, Some(item.id) == origin))
			})
			.collect();
		self.config.sort(&mut entries);

		self.cursor = focus
			.and_then(|id| entries.iter().position(|entry| entry.id() == id))
			.unwrap_or_else(|| self.cursor.min(entries.len()));
		self.origin = origin;

		debug!(entries = entries.len(), carried = carried.len(), "buffer menu refreshed");
		self.entries = entries;
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn config(&self) -> &ViewConfig {
		&self.config
	}

	pub fn config_mut(&mut self) -> &mut ViewConfig {
		&mut self.config
	}

	pub fn origin(&self) -> Option<ResourceId> {
		self.origin
	}

	pub fn own(&self) -> Option<ResourceId> {
		self.own
	}

	/// Row index of the cursor; equal to [`MenuView::len`] past the last row.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Moves the cursor, clamped to `0..=len`.
	pub fn move_to(&mut self, index: usize) {
		self.cursor = index.min(self.entries.len());
	}

	pub fn next_line(&mut self, count: usize) {
		self.move_to(self.cursor.saturating_add(count));
	}

	pub fn previous_line(&mut self, count: usize) {
		self.cursor = self.cursor.saturating_sub(count);
	}

	/// Moves the cursor to the row listing `id`.
	pub fn move_to_resource(&mut self, id: ResourceId) -> Result<()> {
		self.cursor = self.index_of(id).ok_or(MenuError::UnknownResource(id))?;
		Ok(())
	}

	pub fn index_of(&self, id: ResourceId) -> Option<usize> {
		self.entries.iter().position(|entry| entry.id() == id)
	}

	pub fn current_entry(&self) -> Result<&Entry> {
		self.entries.get(self.cursor).ok_or(MenuError::NoCurrentEntry)
	}

	/// The buffer on the cursor row, checked for liveness.
	pub fn current_resource(&self, registry: &dyn Registry) -> Result<ResourceId> {
		let entry = self.current_entry()?;
		if registry.is_live(entry.id()) {
			Ok(entry.id())
		} else {
			Err(MenuError::ResourceKilled {
				name: entry.row().name.clone(),
			})
		}
	}

	/// Returns true if execute must never kill `id`.
	pub fn is_protected(&self, id: ResourceId) -> bool {
		Some(id) == self.origin || Some(id) == self.own
	}

	/// Lays out the table from the cached rows.
	pub fn layout(&self) -> (ColumnSpec, Vec<RenderedRow>) {
		let columns = &self.config.options.columns;
		let sizes: Vec<String> = self
			.entries
			.iter()
			.map(|entry| format_size(entry.row().size, columns.size_format))
			.collect();
		let spec = ColumnSpec::compute(
			self.entries.iter().map(|entry| entry.row().name.as_str()),
			sizes.iter().map(String::as_str),
			columns.widths(),
		);
		let path_context = PathDisplayContext {
			mode: self.config.options.path_display,
			working_dir: self.config.working_dir.as_deref(),
		};

		let rows = self
			.entries
			.iter()
			.zip(&sizes)
			.enumerate()
			.map(|(index, (entry, size))| {
				let row = entry.row();
				let flags = entry.status_flags();
				let path = format_path_label(row.path.as_deref(), path_context);
				RenderedRow {
					id: entry.id(),
					flags,
					text: spec.format_row(flags, &row.name, size, &row.kind, &path),
					current: index == self.cursor,
				}
			})
			.collect();
		(spec, rows)
	}

	/// Hands the laid-out table to the host.
	pub fn render(&self, host: &mut dyn Host) {
		let (spec, rows) = self.layout();
		host.render(&rows, &spec);
	}

	/// Re-reads the flags of the row at `index` from the registry.
	fn sync_flags(&mut self, registry: &dyn Registry, index: usize) {
		if let Some(entry) = self.entries.get_mut(index)
			&& let Some(attributes) = registry.attributes(entry.id())
		{
			entry.row_mut().sync_flags(&attributes);
		}
	}
}
