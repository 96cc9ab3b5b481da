//! In-memory registry and recording host.
//!
//! Reference implementations of [`Registry`] and [`Host`] for tests and the
//! scripted driver. The registry can be told to fail saves, refuse kills, and
//! take other buffers down with a kill.

use bufmenu_buffer_display::ColumnSpec;

use crate::error::PersistError;
use crate::host::{Host, RenderedRow};
use crate::registry::Registry;
use crate::resource::{Attributes, ResourceId};
use crate::view::Selection;

#[derive(Debug, Clone)]
struct Session {
	id: ResourceId,
	attributes: Attributes,
	save_failure: Option<String>,
	refuse_kill: bool,
	/// Killed together with this session.
	dependents: Vec<ResourceId>,
	/// Killed as a side effect of saving this session.
	closes_on_save: Vec<ResourceId>,
}

/// Registry calls that changed state, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallLog {
	pub persisted: Vec<ResourceId>,
	pub destroyed: Vec<ResourceId>,
	pub deprioritized: Vec<ResourceId>,
}

impl CallLog {
	pub fn is_empty(&self) -> bool {
		self.persisted.is_empty() && self.destroyed.is_empty() && self.deprioritized.is_empty()
	}
}

/// Registry backed by an ordered vector of sessions.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
	/// Global order, most recently used first.
	sessions: Vec<Session>,
	context: Vec<ResourceId>,
	active: Option<ResourceId>,
	next_id: u64,
	calls: CallLog,
}

impl MemoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a session at the least-recently-used end.
	pub fn insert(&mut self, attributes: Attributes) -> ResourceId {
		self.next_id += 1;
		let id = ResourceId(self.next_id);
		self.sessions.push(Session {
			id,
			attributes,
			save_failure: None,
			refuse_kill: false,
			dependents: Vec::new(),
			closes_on_save: Vec::new(),
		});
		id
	}

	/// Adds a session without a backing file.
	pub fn open(&mut self, name: &str) -> ResourceId {
		self.insert(Attributes::new(name, "Fundamental"))
	}

	/// Adds a file-visiting session.
	pub fn open_file(&mut self, name: &str, path: &str, size: u64) -> ResourceId {
		self.insert(Attributes::new(name, "Text").with_path(path).with_size(size))
	}

	/// Makes `id` active, raising it to the front of the global order and of
	/// the display context.
	pub fn select(&mut self, id: ResourceId) {
		if let Some(pos) = self.position(id) {
			let session = self.sessions.remove(pos);
			self.sessions.insert(0, session);
			self.active = Some(id);
			self.context.retain(|&other| other != id);
			self.context.insert(0, id);
		}
	}

	/// Records `id` as touched in the display context without raising it
	/// globally.
	pub fn touch(&mut self, id: ResourceId) {
		if self.is_live(id) && !self.context.contains(&id) {
			self.context.push(id);
		}
	}

	pub fn attributes_mut(&mut self, id: ResourceId) -> Option<&mut Attributes> {
		self.session_mut(id).map(|session| &mut session.attributes)
	}

	/// Every save of `id` fails with `reason`.
	pub fn fail_saves(&mut self, id: ResourceId, reason: impl Into<String>) {
		if let Some(session) = self.session_mut(id) {
			session.save_failure = Some(reason.into());
		}
	}

	/// Every kill of `id` is declined.
	pub fn refuse_kills(&mut self, id: ResourceId) {
		if let Some(session) = self.session_mut(id) {
			session.refuse_kill = true;
		}
	}

	/// Killing `id` also kills `dependent`.
	pub fn kill_with(&mut self, id: ResourceId, dependent: ResourceId) {
		if let Some(session) = self.session_mut(id) {
			session.dependents.push(dependent);
		}
	}

	/// Saving `id` kills `victim`.
	pub fn close_on_save(&mut self, id: ResourceId, victim: ResourceId) {
		if let Some(session) = self.session_mut(id) {
			session.closes_on_save.push(victim);
		}
	}

	/// Kills `id` from outside any menu, ignoring refusal.
	pub fn kill(&mut self, id: ResourceId) -> bool {
		let Some(pos) = self.position(id) else {
			return false;
		};
		let session = self.sessions.remove(pos);
		self.context.retain(|&other| other != id);
		if self.active == Some(id) {
			self.active = self.sessions.first().map(|session| session.id);
		}
		for dependent in session.dependents {
			self.kill(dependent);
		}
		true
	}

	/// Looks up a live session by name.
	pub fn find(&self, name: &str) -> Option<ResourceId> {
		self.sessions
			.iter()
			.find(|session| session.attributes.name == name)
			.map(|session| session.id)
	}

	pub fn calls(&self) -> &CallLog {
		&self.calls
	}

	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}

	fn position(&self, id: ResourceId) -> Option<usize> {
		self.sessions.iter().position(|session| session.id == id)
	}

	fn session(&self, id: ResourceId) -> Option<&Session> {
		self.sessions.iter().find(|session| session.id == id)
	}

	fn session_mut(&mut self, id: ResourceId) -> Option<&mut Session> {
		self.sessions.iter_mut().find(|session| session.id == id)
	}
}

impl Registry for MemoryRegistry {
	fn enumerate(&self) -> Vec<ResourceId> {
		self.sessions.iter().map(|session| session.id).collect()
	}

	fn context_resources(&self) -> Vec<ResourceId> {
		self.context.clone()
	}

	fn is_live(&self, id: ResourceId) -> bool {
		self.position(id).is_some()
	}

	fn attributes(&self, id: ResourceId) -> Option<Attributes> {
		self.session(id).map(|session| session.attributes.clone())
	}

	fn active(&self) -> Option<ResourceId> {
		self.active
	}

	fn persist(&mut self, id: ResourceId) -> Result<(), PersistError> {
		self.calls.persisted.push(id);
		let session = self
			.session_mut(id)
			.ok_or_else(|| PersistError::Failed(format!("buffer {id} is dead")))?;
		if let Some(reason) = &session.save_failure {
			return Err(PersistError::Failed(reason.clone()));
		}
		if session.attributes.path.is_none() {
			return Err(PersistError::NoBackingPath);
		}
		if session.attributes.read_only {
			return Err(PersistError::ReadOnly);
		}
		session.attributes.modified = false;
		let victims = session.closes_on_save.clone();
		for victim in victims {
			self.kill(victim);
		}
		Ok(())
	}

	fn destroy(&mut self, id: ResourceId) -> bool {
		self.calls.destroyed.push(id);
		if self.session(id).is_none_or(|session| session.refuse_kill) {
			return false;
		}
		self.kill(id)
	}

	fn deprioritize(&mut self, id: ResourceId) {
		self.calls.deprioritized.push(id);
		if let Some(pos) = self.position(id) {
			let session = self.sessions.remove(pos);
			self.sessions.push(session);
		}
	}

	fn set_read_only(&mut self, id: ResourceId, read_only: bool) {
		if let Some(attributes) = self.attributes_mut(id) {
			attributes.read_only = read_only;
		}
	}

	fn set_modified(&mut self, id: ResourceId, modified: bool) {
		if let Some(attributes) = self.attributes_mut(id) {
			attributes.modified = modified;
		}
	}
}

/// Host that records everything it is asked to do.
#[derive(Debug, Default)]
pub struct RecordingHost {
	/// Lines of the last rendered table, header first.
	pub lines: Vec<String>,
	pub selections: Vec<Selection>,
	pub warnings: Vec<String>,
}

impl RecordingHost {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Host for RecordingHost {
	fn render(&mut self, rows: &[RenderedRow], columns: &ColumnSpec) {
		self.lines.clear();
		self.lines.push(columns.header());
		self.lines.extend(rows.iter().map(|row| row.text.clone()));
	}

	fn open_panes(&mut self, selection: &Selection) {
		self.selections.push(selection.clone());
	}

	fn report_warning(&mut self, message: &str) {
		self.warnings.push(message.to_string());
	}
}
