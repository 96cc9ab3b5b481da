//! Choosing which buffers to show.

use super::MenuView;
use crate::error::Result;
use crate::host::Host;
use crate::mark::{Mark, MarkKind};
use crate::registry::Registry;
use crate::resource::ResourceId;

/// Where the selected buffer is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneTarget {
	/// Replace the menu's pane, splitting it for every Display-marked row.
	#[default]
	ThisPane,
	/// Show the buffer in another pane, keeping the menu visible.
	OtherPane,
	/// Show the buffer as the only pane.
	OnlyPane,
	/// Show the buffer and the origin buffer side by side.
	SplitWithOrigin,
}

/// Buffers to show and how to lay them out.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
	pub primary: ResourceId,
	/// Shown alongside the primary, in table order.
	pub others: Vec<ResourceId>,
	pub target: PaneTarget,
}

impl Selection {
	/// Fraction of the available space each pane gets.
	pub fn share(&self) -> f64 {
		1.0 / (1 + self.others.len()) as f64
	}

	/// Asks the host to create the panes.
	pub fn open(&self, host: &mut dyn Host) {
		host.open_panes(self);
	}
}

impl MenuView {
	/// Selects the cursor buffer plus every Display-marked buffer.
	pub fn select(&mut self, registry: &dyn Registry) -> Result<Selection> {
		self.select_with(registry, PaneTarget::ThisPane)
	}

	/// Selects the cursor buffer for `target`.
	///
	/// Display marks are consumed by every target, including the ones that
	/// show only the primary.
	pub fn select_with(&mut self, registry: &dyn Registry, target: PaneTarget) -> Result<Selection> {
		let primary = self.current_resource(registry)?;
		let others = match target {
			PaneTarget::ThisPane => self
				.entries
				.iter()
				.filter(|entry| entry.mark() == Mark::Display)
				.map(|entry| entry.id())
				.filter(|&id| id != primary && registry.is_live(id))
				.collect(),
			PaneTarget::SplitWithOrigin => self
				.origin
				.filter(|&id| id != primary && registry.is_live(id))
				.into_iter()
				.collect(),
			PaneTarget::OtherPane | PaneTarget::OnlyPane => Vec::new(),
		};
		self.unmark_all(MarkKind::Display);

		Ok(Selection {
			primary,
			others,
			target,
		})
	}
}
