//! Single-row and counted commands on the cursor.

use tracing::trace;

use super::MenuView;
use crate::error::{MenuError, Result};
use crate::mark::{Mark, MarkKind};
use crate::registry::Registry;
use crate::resource::ResourceId;

impl MenuView {
	/// Marks `count` rows for display alongside the selected buffer, moving
	/// down after each. See [`MenuView::mark_delete`] for count handling.
	pub fn mark_display(&mut self, registry: &dyn Registry, count: isize) -> Result<usize> {
		self.mark_span(registry, Mark::Display, count)
	}

	/// Marks `count` rows to be saved by the next execute.
	pub fn mark_save(&mut self, registry: &dyn Registry, count: isize) -> Result<usize> {
		self.mark_span(registry, Mark::Save, count)
	}

	/// Marks `count` rows to be killed by the next execute.
	///
	/// A positive count marks the cursor row and moves down, repeating until
	/// `count` live rows are marked. A negative count moves up first, then
	/// marks, and stops at the first row. Rows whose buffer is already dead
	/// are passed over without counting. Zero counts as one. Returns the
	/// number of rows marked.
	pub fn mark_delete(&mut self, registry: &dyn Registry, count: isize) -> Result<usize> {
		self.mark_span(registry, Mark::Delete, count)
	}

	fn mark_span(&mut self, registry: &dyn Registry, mark: Mark, count: isize) -> Result<usize> {
		let count = if count == 0 { 1 } else { count };
		let mut remaining = count.unsigned_abs();
		let mut marked = 0;

		if count > 0 {
			if self.cursor >= self.entries.len() {
				return Err(MenuError::NoCurrentEntry);
			}
			while remaining > 0 && self.cursor < self.entries.len() {
				let entry = &mut self.entries[self.cursor];
				if registry.is_live(entry.id()) {
					entry.set_mark(mark);
					marked += 1;
					remaining -= 1;
				}
				self.cursor += 1;
			}
		} else {
			while remaining > 0 && self.cursor > 0 {
				self.cursor -= 1;
				let entry = &mut self.entries[self.cursor];
				if registry.is_live(entry.id()) {
					entry.set_mark(mark);
					marked += 1;
					remaining -= 1;
				}
			}
		}

		if remaining > 0 {
			trace!(?mark, remaining, "mark span stopped at table edge");
		}
		Ok(marked)
	}

	/// Clears the mark on the cursor row and moves down.
	pub fn unmark(&mut self, registry: &dyn Registry) -> Result<()> {
		self.current_entry()?;
		self.clear_at(registry, self.cursor);
		self.cursor += 1;
		Ok(())
	}

	/// Moves up one row and clears its mark. The cursor stays on that row.
	pub fn unmark_backward(&mut self, registry: &dyn Registry) -> Result<()> {
		if self.entries.is_empty() {
			return Err(MenuError::NoCurrentEntry);
		}
		self.cursor = self.cursor.saturating_sub(1);
		self.clear_at(registry, self.cursor);
		Ok(())
	}

	fn clear_at(&mut self, registry: &dyn Registry, index: usize) {
		self.entries[index].clear_mark();
		self.sync_flags(registry, index);
	}

	/// Clears every mark of `kind`. Returns how many rows changed.
	pub fn unmark_all(&mut self, kind: MarkKind) -> usize {
		let mut cleared = 0;
		for entry in &mut self.entries {
			if kind.matches(entry.mark()) {
				entry.clear_mark();
				cleared += 1;
			}
		}
		cleared
	}

	/// Live buffers carrying a mark of `kind`, in display order.
	pub fn marked(&self, registry: &dyn Registry, kind: MarkKind) -> Vec<ResourceId> {
		self.entries
			.iter()
			.filter(|entry| kind.matches(entry.mark()) && registry.is_live(entry.id()))
			.map(|entry| entry.id())
			.collect()
	}

	/// Flips the read-only flag of the cursor buffer. Returns the new value.
	pub fn toggle_read_only(&mut self, registry: &mut dyn Registry) -> Result<bool> {
		let id = self.current_resource(registry)?;
		let read_only = !registry
			.attributes(id)
			.map_or(self.entries[self.cursor].row().read_only, |attributes| attributes.read_only);
		registry.set_read_only(id, read_only);
		self.sync_flags(registry, self.cursor);
		Ok(read_only)
	}

	/// Clears the modified flag of the cursor buffer without saving it.
	pub fn set_not_modified(&mut self, registry: &mut dyn Registry) -> Result<()> {
		let id = self.current_resource(registry)?;
		registry.set_modified(id, false);
		self.sync_flags(registry, self.cursor);
		Ok(())
	}

	/// Buries the cursor buffer: the registry moves it to the end of its
	/// ordering and its row moves to the end of this table. No refresh.
	///
	/// The cursor stays on the same index, which now shows the next row.
	pub fn bury(&mut self, registry: &mut dyn Registry) -> Result<ResourceId> {
		let id = self.current_resource(registry)?;
		registry.deprioritize(id);
		let entry = self.entries.remove(self.cursor);
		self.entries.push(entry);
		Ok(id)
	}
}
