//! Builds the ordered list of buffers a refresh turns into rows.

use rustc_hash::FxHashSet;

use crate::config::{ResourceSource, ViewConfig};
use crate::policy;
use crate::registry::Registry;
use crate::resource::{Attributes, ResourceId};

/// A live buffer and its attributes as queried during one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotItem {
	pub id: ResourceId,
	pub attributes: Attributes,
}

/// Collects the buffers a view lists, in source order.
///
/// Dead buffers, repeated identities and `own` (the view's backing buffer)
/// are always dropped. Filtering applies to the registry ordering and to
/// callable sources, never to an explicit list.
pub fn build(registry: &dyn Registry, config: &ViewConfig, own: Option<ResourceId>) -> Vec<SnapshotItem> {
	let (candidates, explicit) = match config.source() {
		ResourceSource::Registry => (default_order(registry, config.options.use_context_ordering), false),
		ResourceSource::Callable(source) => (source(registry), false),
		ResourceSource::List(ids) => (ids.clone(), true),
	};

	let mut seen = FxHashSet::default();
	candidates
		.into_iter()
		.filter(|&id| Some(id) != own && seen.insert(id))
		.filter_map(|id| {
			let attributes = registry.attributes(id).filter(|_| registry.is_live(id))?;
			(explicit || policy::is_listed(registry, id, &attributes, config)).then_some(SnapshotItem { id, attributes })
		})
		.collect()
}

/// The registry ordering, or the display context's ordering with every other
/// buffer appended in global order.
fn default_order(registry: &dyn Registry, use_context: bool) -> Vec<ResourceId> {
	let global = registry.enumerate();
	if !use_context {
		return global;
	}

	let mut ordered = registry.context_resources();
	let touched: FxHashSet<ResourceId> = ordered.iter().copied().collect();
	ordered.extend(global.into_iter().filter(|id| !touched.contains(id)));
	ordered
}
