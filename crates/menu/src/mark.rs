//! Pending per-row intent.
//!
//! A row carries at most one mark. Setting a mark overwrites whatever was
//! there, so Save and Delete are mutually exclusive: the last command wins.

/// Pending action on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
	#[default]
	None,
	/// Show the buffer alongside the selected one.
	Display,
	/// Save on the next execute.
	Save,
	/// Kill on the next execute.
	Delete,
}

impl Mark {
	pub fn is_none(self) -> bool {
		self == Mark::None
	}
}

/// Filter for bulk mark operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
	Display,
	Save,
	Delete,
	/// Every mark regardless of kind.
	Any,
}

impl MarkKind {
	/// Returns true if `mark` is set and falls under this kind.
	pub fn matches(self, mark: Mark) -> bool {
		match self {
			MarkKind::Display => mark == Mark::Display,
			MarkKind::Save => mark == Mark::Save,
			MarkKind::Delete => mark == Mark::Delete,
			MarkKind::Any => !mark.is_none(),
		}
	}
}
