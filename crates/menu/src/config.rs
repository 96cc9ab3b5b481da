//! Per-view configuration: serializable options plus runtime hooks.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use crate::entry::Entry;
use crate::options::MenuOptions;
use crate::policy;
use crate::registry::Registry;
use crate::resource::{Attributes, ResourceId};

type SourceFn = Box<dyn Fn(&dyn Registry) -> Vec<ResourceId>>;
type FilterFn = Box<dyn Fn(ResourceId, &Attributes) -> bool>;
type CompareFn = Box<dyn Fn(&Entry, &Entry) -> Ordering>;

/// Where a refresh gets its candidate buffers from.
pub enum ResourceSource {
	/// The registry's own ordering, filtered.
	Registry,
	/// A caller-supplied function, filtered like the registry ordering.
	Callable(SourceFn),
	/// An explicit list. Listed as given: no hidden-name, files-only or
	/// predicate filtering.
	List(Vec<ResourceId>),
}

impl fmt::Debug for ResourceSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Registry => f.write_str("Registry"),
			Self::Callable(_) => f.write_str("Callable(..)"),
			Self::List(ids) => f.debug_tuple("List").field(ids).finish(),
		}
	}
}

/// Configuration of one [`MenuView`](crate::MenuView).
pub struct ViewConfig {
	pub options: MenuOptions,
	/// Base for relative path labels.
	pub working_dir: Option<PathBuf>,
	source: ResourceSource,
	filter: Option<FilterFn>,
	comparator: Option<CompareFn>,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self::new(MenuOptions::default())
	}
}

impl fmt::Debug for ViewConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewConfig")
			.field("options", &self.options)
			.field("working_dir", &self.working_dir)
			.field("source", &self.source)
			.field("filter", &self.filter.is_some())
			.field("comparator", &self.comparator.is_some())
			.finish()
	}
}

impl ViewConfig {
	pub fn new(options: MenuOptions) -> Self {
		Self {
			options,
			working_dir: None,
			source: ResourceSource::Registry,
			filter: None,
			comparator: None,
		}
	}

	/// Lists exactly these buffers, in this order.
	pub fn with_list(mut self, ids: Vec<ResourceId>) -> Self {
		self.source = ResourceSource::List(ids);
		self
	}

	/// Pulls candidates from `source` on every refresh.
	pub fn with_source(mut self, source: impl Fn(&dyn Registry) -> Vec<ResourceId> + 'static) -> Self {
		self.source = ResourceSource::Callable(Box::new(source));
		self
	}

	/// Adds a predicate every filtered candidate must satisfy.
	pub fn with_filter(mut self, filter: impl Fn(ResourceId, &Attributes) -> bool + 'static) -> Self {
		self.filter = Some(Box::new(filter));
		self
	}

	/// Orders rows with `compare`, taking precedence over `options.sort`.
	pub fn with_comparator(mut self, compare: impl Fn(&Entry, &Entry) -> Ordering + 'static) -> Self {
		self.comparator = Some(Box::new(compare));
		self
	}

	pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.working_dir = Some(dir.into());
		self
	}

	pub fn source(&self) -> &ResourceSource {
		&self.source
	}

	/// Runs the configured predicate; accepts everything when none is set.
	pub fn accepts(&self, id: ResourceId, attributes: &Attributes) -> bool {
		self.filter.as_ref().is_none_or(|filter| filter(id, attributes))
	}

	/// Sorts rows in place. A no-op when neither a comparator nor a built-in
	/// sort is configured, which leaves registry order untouched.
	pub fn sort(&self, entries: &mut [Entry]) {
		if let Some(compare) = &self.comparator {
			entries.sort_by(|a, b| compare(a, b));
		} else if let Some(spec) = self.options.sort {
			entries.sort_by(|a, b| policy::compare(spec, a, b));
		}
	}
}
