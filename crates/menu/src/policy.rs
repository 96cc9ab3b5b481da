//! Inclusion and ordering decisions.
//!
//! Pure functions over registry answers and cached rows; nothing here mutates
//! a view.

use std::cmp::Ordering;

use crate::config::ViewConfig;
use crate::entry::Entry;
use crate::options::{SortKey, SortSpec};
use crate::registry::Registry;
use crate::resource::{Attributes, ResourceId};

/// Decides whether a live buffer from a filtered source gets a row.
///
/// Internal buffers are hidden unless they visit a file. `files_only` hides
/// every buffer without a file, and a configured predicate must also accept.
pub fn is_listed(registry: &dyn Registry, id: ResourceId, attributes: &Attributes, config: &ViewConfig) -> bool {
	if registry.is_internal_name(&attributes.name) && !attributes.has_path() {
		return false;
	}
	if config.options.files_only && !attributes.has_path() {
		return false;
	}
	config.accepts(id, attributes)
}

/// Compares two rows by a built-in sort key.
pub fn compare(spec: SortSpec, a: &Entry, b: &Entry) -> Ordering {
	let ordering = match spec.key {
		SortKey::Name => a.row().name.cmp(&b.row().name),
		SortKey::Size => a.row().size.cmp(&b.row().size),
		SortKey::Kind => a.row().kind.cmp(&b.row().kind),
		SortKey::Path => by_path(a, b),
	};
	if spec.descending { ordering.reverse() } else { ordering }
}

/// Largest buffers first, by the size cached at the last refresh.
pub fn by_size_descending(a: &Entry, b: &Entry) -> Ordering {
	b.row().size.cmp(&a.row().size)
}

/// Rows with a file sort before rows without one.
fn by_path(a: &Entry, b: &Entry) -> Ordering {
	match (&a.row().path, &b.row().path) {
		(Some(a), Some(b)) => a.cmp(b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
