//! Batch application of Save and Delete marks.

use tracing::{debug, info, warn};

use super::MenuView;
use crate::error::PersistError;
use crate::host::Host;
use crate::mark::Mark;
use crate::registry::Registry;
use crate::resource::ResourceId;

/// A save that failed during [`MenuView::execute`].
#[derive(Debug)]
pub struct ExecuteFailure {
	pub id: ResourceId,
	/// Row name at the time of the failure.
	pub name: String,
	pub error: PersistError,
}

/// Outcome of one execute pass.
#[derive(Debug, Default)]
pub struct ExecuteReport {
	pub saved: usize,
	pub destroyed: usize,
	/// Rows dropped because their buffer was already dead.
	pub dropped: usize,
	/// Kills the registry declined; those rows keep their Delete mark.
	pub refused: usize,
	pub failures: Vec<ExecuteFailure>,
}

impl ExecuteReport {
	/// Returns true if the pass touched neither the registry nor the table.
	pub fn is_noop(&self) -> bool {
		self.saved == 0
			&& self.destroyed == 0
			&& self.dropped == 0
			&& self.refused == 0
			&& self.failures.is_empty()
	}
}

impl MenuView {
	/// Applies every Save and Delete mark in one front-to-back pass.
	///
	/// Liveness is re-queried before each step because a save or kill may
	/// take other buffers down with it. Rows of dead buffers are dropped.
	/// A failed save is reported through [`Host::report_warning`] and the
	/// pass continues; its row stays, unmarked. A refused kill leaves the row
	/// and its mark in place without a warning. The origin buffer and the
	/// view's own buffer are never killed.
	pub fn execute(&mut self, registry: &mut dyn Registry, host: &mut dyn Host) -> ExecuteReport {
		let mut report = ExecuteReport::default();
		let mut cursor = self.cursor;
		let mut index = 0;

		while index < self.entries.len() {
			let id = self.entries[index].id();
			if !registry.is_live(id) {
				self.drop_row(index, &mut cursor);
				report.dropped += 1;
				continue;
			}

			if self.entries[index].mark() == Mark::Save {
				let name = self.entries[index].row().name.clone();
				match registry.persist(id) {
					Ok(()) => {
						debug!(?id, name = %name, "saved buffer");
						report.saved += 1;
					}
					Err(error) => {
						warn!(?id, name = %name, error = %error, "buffer save failed");
						host.report_warning(&format!("Error saving {name}: {error}"));
						report.failures.push(ExecuteFailure { id, name, error });
					}
				}
				self.entries[index].clear_mark();
				self.sync_flags(registry, index);

				if !registry.is_live(id) {
					self.drop_row(index, &mut cursor);
					report.dropped += 1;
					continue;
				}
			}

			if self.entries[index].mark() == Mark::Delete && !self.is_protected(id) {
				if registry.destroy(id) {
					debug!(?id, "killed buffer");
					self.drop_row(index, &mut cursor);
					report.destroyed += 1;
					continue;
				}
				report.refused += 1;
			}

			index += 1;
		}

		self.cursor = cursor.min(self.entries.len());
		info!(
			saved = report.saved,
			destroyed = report.destroyed,
			dropped = report.dropped,
			refused = report.refused,
			failed = report.failures.len(),
			"buffer menu executed"
		);
		report
	}

	/// Removes a row, keeping `cursor` on the same row when it sits below.
	fn drop_row(&mut self, index: usize, cursor: &mut usize) {
		self.entries.remove(index);
		if index < *cursor {
			*cursor -= 1;
		}
	}
}
