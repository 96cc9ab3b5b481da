//! The narrow capability surface the menu needs from whatever owns buffers.
//!
//! The registry is the sole arbiter of buffer lifetime. Any call below may
//! kill other buffers as a side effect (a save hook closing a companion
//! buffer, a kill cascading to indirect buffers), so callers re-query
//! [`Registry::is_live`] instead of trusting an earlier answer.

use crate::error::PersistError;
use crate::resource::{Attributes, ResourceId};

/// Buffer owner consumed by [`MenuView`](crate::MenuView).
pub trait Registry {
	/// All live buffers in the registry's global order, most recently used
	/// first.
	fn enumerate(&self) -> Vec<ResourceId>;

	/// Buffers touched in the current display context (frame, workspace),
	/// most recently used first.
	///
	/// Registries without per-context bookkeeping report the global order.
	fn context_resources(&self) -> Vec<ResourceId> {
		self.enumerate()
	}

	fn is_live(&self, id: ResourceId) -> bool;

	/// Current attributes, or `None` once the buffer is dead.
	fn attributes(&self, id: ResourceId) -> Option<Attributes>;

	/// The buffer the user was working in, if any.
	fn active(&self) -> Option<ResourceId>;

	/// Naming convention for internal buffers that stay out of listings
	/// unless they visit a file.
	fn is_internal_name(&self, name: &str) -> bool {
		name.starts_with(' ')
	}

	/// Writes the buffer to its backing store.
	fn persist(&mut self, id: ResourceId) -> Result<(), PersistError>;

	/// Kills the buffer. Returns `false` when the registry declines (busy,
	/// or the user refused a confirmation the registry owns).
	fn destroy(&mut self, id: ResourceId) -> bool;

	/// Moves the buffer to the least-recently-used end of the global order.
	fn deprioritize(&mut self, id: ResourceId);

	fn set_read_only(&mut self, id: ResourceId, read_only: bool);

	fn set_modified(&mut self, id: ResourceId, modified: bool);
}
