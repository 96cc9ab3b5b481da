//! Session fixtures: a TOML description of the buffers a run starts with.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bufmenu_menu::memory::MemoryRegistry;
use bufmenu_menu::{Attributes, ResourceId};
use serde::Deserialize;
use tracing::debug;

/// Name of the buffer the menu itself lives in.
pub const OWN_BUFFER: &str = "*Buffer List*";

/// Top-level fixture document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
	/// Session made active before the menu opens.
	pub active: Option<String>,
	/// Sessions in global order, most recently used first.
	#[serde(default, rename = "session")]
	pub sessions: Vec<SessionSpec>,
}

/// One `[[session]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSpec {
	pub name: String,
	#[serde(default)]
	pub size: u64,
	#[serde(default = "default_kind")]
	pub kind: String,
	pub path: Option<PathBuf>,
	#[serde(default)]
	pub read_only: bool,
	#[serde(default)]
	pub modified: bool,
	/// Every save fails with this message.
	pub fail_save: Option<String>,
	#[serde(default)]
	pub refuse_kill: bool,
	/// Sessions killed together with this one.
	#[serde(default)]
	pub kills: Vec<String>,
	/// Sessions a save of this one takes down.
	#[serde(default)]
	pub closes_on_save: Vec<String>,
}

fn default_kind() -> String {
	"Fundamental".to_string()
}

/// A populated registry plus the menu's own buffer.
#[derive(Debug)]
pub struct Session {
	pub registry: MemoryRegistry,
	pub own: ResourceId,
}

impl Fixture {
	pub fn from_toml_str(text: &str) -> Result<Self> {
		toml::from_str(text).context("invalid session fixture")
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read session fixture {}", path.display()))?;
		Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
	}

	/// Builds the registry. Cross-references between sessions are resolved by
	/// name and must point at a session defined in the same fixture.
	pub fn build(&self) -> Result<Session> {
		let mut registry = MemoryRegistry::new();
		for spec in &self.sessions {
			if registry.find(&spec.name).is_some() {
				bail!("duplicate session name {:?}", spec.name);
			}
			let mut attributes = Attributes::new(&spec.name, &spec.kind)
				.with_size(spec.size)
				.with_read_only(spec.read_only)
				.with_modified(spec.modified);
			attributes.path = spec.path.clone();
			let id = registry.insert(attributes);
			if let Some(reason) = &spec.fail_save {
				registry.fail_saves(id, reason.clone());
			}
			if spec.refuse_kill {
				registry.refuse_kills(id);
			}
		}

		for spec in &self.sessions {
			let id = lookup(&registry, &spec.name)?;
			for name in &spec.kills {
				registry.kill_with(id, lookup(&registry, name)?);
			}
			for name in &spec.closes_on_save {
				registry.close_on_save(id, lookup(&registry, name)?);
			}
		}

		if let Some(name) = &self.active {
			let id = lookup(&registry, name).context("unknown active session")?;
			registry.select(id);
		}

		let own = registry.open(OWN_BUFFER);
		debug!(sessions = self.sessions.len(), "session fixture loaded");
		Ok(Session { registry, own })
	}
}

fn lookup(registry: &MemoryRegistry, name: &str) -> Result<ResourceId> {
	registry
		.find(name)
		.with_context(|| format!("no session named {name:?}"))
}

#[cfg(test)]
mod tests {
	use bufmenu_menu::Registry;
	use pretty_assertions::assert_eq;

	use super::*;

	const FIXTURE: &str = r#"
		active = "notes.md"

		[[session]]
		name = "main.rs"
		kind = "Rust"
		path = "/work/src/main.rs"
		size = 2048
		modified = true
		kills = ["*compilation*"]

		[[session]]
		name = "notes.md"
		path = "/work/notes.md"

		[[session]]
		name = "*compilation*"
	"#;

	#[test]
	fn builds_sessions_in_order_with_active_raised() {
		let fixture = Fixture::from_toml_str(FIXTURE).unwrap();
		let Session { registry, own } = fixture.build().unwrap();

		let names: Vec<String> = registry
			.enumerate()
			.into_iter()
			.filter_map(|id| registry.attributes(id))
			.map(|attributes| attributes.name)
			.collect();
		assert_eq!(names, ["notes.md", "main.rs", "*compilation*", OWN_BUFFER]);
		assert_eq!(registry.active(), registry.find("notes.md"));
		assert_eq!(registry.find(OWN_BUFFER), Some(own));

		let main = registry.attributes(registry.find("main.rs").unwrap()).unwrap();
		assert_eq!(main.kind, "Rust");
		assert!(main.modified);
		assert_eq!(main.size, 2048);
	}

	#[test]
	fn kills_cascade_by_name() {
		let Session { mut registry, .. } = Fixture::from_toml_str(FIXTURE).unwrap().build().unwrap();
		let main = registry.find("main.rs").unwrap();

		assert!(registry.destroy(main));
		assert_eq!(registry.find("*compilation*"), None);
	}

	#[test]
	fn unknown_reference_is_an_error() {
		let fixture = Fixture::from_toml_str(
			r#"
			[[session]]
			name = "a"
			kills = ["b"]
			"#,
		)
		.unwrap();
		let err = fixture.build().unwrap_err();
		assert!(err.to_string().contains("no session named \"b\""));
	}

	#[test]
	fn duplicate_names_are_rejected() {
		let fixture = Fixture::from_toml_str("[[session]]\nname = \"a\"\n[[session]]\nname = \"a\"").unwrap();
		assert!(fixture.build().is_err());
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(Fixture::from_toml_str("[[session]]\nname = \"a\"\ncolour = \"red\"").is_err());
	}
}
