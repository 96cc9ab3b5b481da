//! Command words the driver replays against a view.

use std::str::FromStr;

use bufmenu_menu::memory::MemoryRegistry;
use bufmenu_menu::{Host, MarkKind, MenuView, PaneTarget};
use thiserror::Error;
use tracing::debug;

/// One scripted menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Down(usize),
	Up(usize),
	Goto(usize),
	Mark(isize),
	Save(isize),
	Delete(isize),
	Unmark,
	BackupUnmark,
	UnmarkAll(MarkKind),
	ToggleReadOnly,
	NotModified,
	Bury,
	Execute,
	Refresh,
	Select(PaneTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unknown command {0:?}")]
	Unknown(String),
	#[error("bad count {value:?} in {command:?}")]
	BadCount { command: String, value: String },
	#[error("unknown mark kind {0:?} (display, save, delete, any)")]
	Kind(String),
	#[error("unknown pane target {0:?} (this, other, only, split)")]
	Target(String),
}

impl FromStr for Command {
	type Err = ParseError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let (head, arg) = match text.split_once(':') {
			Some((head, arg)) => (head, Some(arg)),
			None => (text, None),
		};
		let command = match (head, arg) {
			("goto", Some(index)) => Command::Goto(count(text, index, 0)?),
			("unmark", None) => Command::Unmark,
			("backup-unmark", None) => Command::BackupUnmark,
			("unmark-all", kind) => Command::UnmarkAll(mark_kind(kind)?),
			("toggle-ro", None) => Command::ToggleReadOnly,
			("not-modified", None) => Command::NotModified,
			("bury", None) => Command::Bury,
			("execute", None) => Command::Execute,
			("refresh", None) => Command::Refresh,
			("select", target) => Command::Select(pane_target(target)?),
			(_, None) => counted(text)?,
			_ => return Err(ParseError::Unknown(text.to_string())),
		};
		Ok(command)
	}
}

fn counted(text: &str) -> Result<Command, ParseError> {
	let split = text
		.find(|c: char| c.is_ascii_digit() || c == '-')
		.unwrap_or(text.len());
	let (word, rest) = text.split_at(split);
	let command = match word {
		"down" => Command::Down(count(text, rest, 1)?),
		"up" => Command::Up(count(text, rest, 1)?),
		"mark" => Command::Mark(count(text, rest, 1)?),
		"save" => Command::Save(count(text, rest, 1)?),
		"delete" => Command::Delete(count(text, rest, 1)?),
		_ => return Err(ParseError::Unknown(text.to_string())),
	};
	Ok(command)
}

fn count<T: FromStr>(command: &str, value: &str, default: T) -> Result<T, ParseError> {
	if value.is_empty() {
		return Ok(default);
	}
	value.parse().map_err(|_| ParseError::BadCount {
		command: command.to_string(),
		value: value.to_string(),
	})
}

fn mark_kind(kind: Option<&str>) -> Result<MarkKind, ParseError> {
	match kind {
		None | Some("any") => Ok(MarkKind::Any),
		Some("display") => Ok(MarkKind::Display),
		Some("save") => Ok(MarkKind::Save),
		Some("delete") => Ok(MarkKind::Delete),
		Some(other) => Err(ParseError::Kind(other.to_string())),
	}
}

fn pane_target(target: Option<&str>) -> Result<PaneTarget, ParseError> {
	match target {
		None | Some("this") => Ok(PaneTarget::ThisPane),
		Some("other") => Ok(PaneTarget::OtherPane),
		Some("only") => Ok(PaneTarget::OnlyPane),
		Some("split") => Ok(PaneTarget::SplitWithOrigin),
		Some(other) => Err(ParseError::Target(other.to_string())),
	}
}

/// Runs one command. Errors leave the view usable.
pub fn apply(
	command: Command,
	view: &mut MenuView,
	registry: &mut MemoryRegistry,
	host: &mut dyn Host,
) -> bufmenu_menu::Result<()> {
	debug!(?command, cursor = view.cursor(), "applying command");
	match command {
		Command::Down(n) => view.next_line(n),
		Command::Up(n) => view.previous_line(n),
		Command::Goto(index) => view.move_to(index),
		Command::Mark(n) => {
			view.mark_display(registry, n)?;
		}
		Command::Save(n) => {
			view.mark_save(registry, n)?;
		}
		Command::Delete(n) => {
			view.mark_delete(registry, n)?;
		}
		Command::Unmark => view.unmark(registry)?,
		Command::BackupUnmark => view.unmark_backward(registry)?,
		Command::UnmarkAll(kind) => {
			view.unmark_all(kind);
		}
		Command::ToggleReadOnly => {
			view.toggle_read_only(registry)?;
		}
		Command::NotModified => view.set_not_modified(registry)?,
		Command::Bury => {
			view.bury(registry)?;
		}
		Command::Execute => {
			view.execute(registry, host);
		}
		Command::Refresh => view.refresh(registry),
		Command::Select(target) => view.select_with(registry, target)?.open(host),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use bufmenu_menu::memory::RecordingHost;
	use bufmenu_menu::{Mark, MenuError, Registry, ViewConfig};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("down", Command::Down(1))]
	#[case("down3", Command::Down(3))]
	#[case("up2", Command::Up(2))]
	#[case("goto:4", Command::Goto(4))]
	#[case("mark", Command::Mark(1))]
	#[case("save2", Command::Save(2))]
	#[case("delete-2", Command::Delete(-2))]
	#[case("unmark", Command::Unmark)]
	#[case("backup-unmark", Command::BackupUnmark)]
	#[case("unmark-all", Command::UnmarkAll(MarkKind::Any))]
	#[case("unmark-all:save", Command::UnmarkAll(MarkKind::Save))]
	#[case("toggle-ro", Command::ToggleReadOnly)]
	#[case("not-modified", Command::NotModified)]
	#[case("execute", Command::Execute)]
	#[case("select", Command::Select(PaneTarget::ThisPane))]
	#[case("select:split", Command::Select(PaneTarget::SplitWithOrigin))]
	fn parses_command(#[case] text: &str, #[case] expected: Command) {
		assert_eq!(text.parse::<Command>(), Ok(expected));
	}

	#[rstest]
	#[case("jump")]
	#[case("goto")]
	#[case("down-1")]
	#[case("save2x")]
	#[case("bury:now")]
	#[case("unmark-all:hidden")]
	#[case("select:elsewhere")]
	fn rejects_command(#[case] text: &str) {
		assert!(text.parse::<Command>().is_err());
	}

	fn run(script: &[&str], registry: &mut MemoryRegistry, view: &mut MenuView, host: &mut RecordingHost) {
		for text in script {
			let command = text.parse().unwrap();
			apply(command, view, registry, host).unwrap();
		}
	}

	#[test]
	fn script_marks_and_executes() {
		let mut registry = MemoryRegistry::new();
		let a = registry.open_file("a.rs", "/work/a.rs", 10);
		let b = registry.open_file("b.rs", "/work/b.rs", 20);
		let c = registry.open_file("c.rs", "/work/c.rs", 30);
		let mut view = MenuView::open(&registry, ViewConfig::default(), None);
		let mut host = RecordingHost::new();

		run(&["save", "delete", "execute"], &mut registry, &mut view, &mut host);

		assert_eq!(registry.calls().persisted, vec![a]);
		assert!(!registry.is_live(b));
		assert_eq!(view.len(), 2);
		assert_eq!(view.index_of(c), Some(1));
	}

	#[test]
	fn select_opens_panes_through_host() {
		let mut registry = MemoryRegistry::new();
		let a = registry.open("a");
		let b = registry.open("b");
		let mut view = MenuView::open(&registry, ViewConfig::default(), None);
		let mut host = RecordingHost::new();

		run(&["down", "mark", "goto:0", "select"], &mut registry, &mut view, &mut host);

		assert_eq!(host.selections.len(), 1);
		assert_eq!(host.selections[0].primary, a);
		assert_eq!(host.selections[0].others, vec![b]);
		assert!(view.entries().iter().all(|entry| entry.mark() == Mark::None));
	}

	#[test]
	fn failing_command_reports_error_and_keeps_view() {
		let mut registry = MemoryRegistry::new();
		registry.open("a");
		let mut view = MenuView::open(&registry, ViewConfig::default(), None);
		let mut host = RecordingHost::new();

		let err = apply(Command::Goto(5), &mut view, &mut registry, &mut host)
			.and_then(|()| apply(Command::Mark(1), &mut view, &mut registry, &mut host))
			.unwrap_err();

		assert_eq!(err, MenuError::NoCurrentEntry);
		assert_eq!(view.len(), 1);
	}
}
