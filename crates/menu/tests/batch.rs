#![allow(unused_crate_dependencies)]
//! End-to-end properties of refresh and execute against the in-memory registry.

use std::collections::HashMap;

use bufmenu_menu::memory::{MemoryRegistry, RecordingHost};
use bufmenu_menu::{Mark, MarkKind, MenuView, Registry, ResourceId, ViewConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn sessions(count: usize) -> (MemoryRegistry, Vec<ResourceId>) {
	let mut registry = MemoryRegistry::new();
	let ids = (0..count)
		.map(|n| registry.open_file(&format!("file-{n}.txt"), &format!("/work/file-{n}.txt"), n as u64))
		.collect();
	(registry, ids)
}

fn ids(view: &MenuView) -> Vec<ResourceId> {
	view.entries().iter().map(|entry| entry.id()).collect()
}

#[test]
fn execute_without_save_or_delete_marks_only_drops_dead_rows() {
	init_tracing();
	let (mut registry, all) = sessions(6);
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.mark_display(&registry, 2).unwrap();
	registry.kill(all[1]);
	registry.kill(all[4]);

	let report = view.execute(&mut registry, &mut RecordingHost::new());

	assert!(registry.calls().is_empty());
	assert_eq!(report.dropped, 2);
	assert_eq!(ids(&view), vec![all[0], all[2], all[3], all[5]]);
	assert_eq!(view.entries()[0].mark(), Mark::Display);

	let again = view.execute(&mut registry, &mut RecordingHost::new());
	assert!(again.is_noop());
	assert_eq!(view.len(), 4);
}

#[test]
fn failing_saves_warn_once_each_and_leave_rows_unmarked() {
	init_tracing();
	let (mut registry, all) = sessions(4);
	for &id in &all {
		registry.fail_saves(id, "disk full");
	}
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.mark_save(&registry, 4).unwrap();

	let mut host = RecordingHost::new();
	let report = view.execute(&mut registry, &mut host);

	assert_eq!(host.warnings.len(), 4);
	assert_eq!(host.warnings[0], "Error saving file-0.txt: disk full");
	assert_eq!(report.failures.len(), 4);
	assert_eq!(report.saved, 0);
	assert_eq!(ids(&view), all);
	assert!(view.entries().iter().all(|entry| entry.mark().is_none()));
	assert_eq!(registry.calls().persisted, all);
}

#[test]
fn save_failure_does_not_stop_later_kills() {
	let (mut registry, all) = sessions(3);
	registry.fail_saves(all[0], "permission denied");
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.mark_save(&registry, 1).unwrap();
	view.mark_delete(&registry, 1).unwrap();

	let mut host = RecordingHost::new();
	let report = view.execute(&mut registry, &mut host);

	assert_eq!(report.failures.len(), 1);
	assert_eq!(report.destroyed, 1);
	assert_eq!(ids(&view), vec![all[0], all[2]]);
}

#[test]
fn delete_removes_exactly_marked_rows_in_order() {
	let (mut registry, all) = sessions(3);
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.mark_delete(&registry, 1).unwrap();
	view.next_line(1);
	view.mark_delete(&registry, 1).unwrap();

	let report = view.execute(&mut registry, &mut RecordingHost::new());

	assert_eq!(report.destroyed, 2);
	assert_eq!(ids(&view), vec![all[1]]);
	assert!(!registry.is_live(all[0]));
	assert!(!registry.is_live(all[2]));
	assert!(registry.is_live(all[1]));
}

#[test]
fn origin_and_own_buffers_are_never_killed() {
	let (mut registry, all) = sessions(3);
	let own = registry.open("*Buffer List*");
	registry.select(all[1]);
	let config = ViewConfig::default().with_list(vec![all[0], all[1], all[2]]);
	let mut view = MenuView::open(&registry, config, Some(own));
	assert_eq!(view.origin(), Some(all[1]));

	view.mark_delete(&registry, 3).unwrap();
	let report = view.execute(&mut registry, &mut RecordingHost::new());

	assert_eq!(report.destroyed, 2);
	assert!(registry.is_live(all[1]));
	assert!(registry.is_live(own));
	assert_eq!(ids(&view), vec![all[1]]);
	assert_eq!(view.entries()[0].mark(), Mark::Delete);
	assert!(!registry.calls().destroyed.contains(&all[1]));
}

#[test]
fn backward_bulk_delete_from_middle() {
	let (registry, _) = sessions(5);
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.move_to(2);

	view.mark_delete(&registry, -2).unwrap();

	let marked: Vec<usize> = view
		.entries()
		.iter()
		.enumerate()
		.filter(|(_, entry)| entry.mark() == Mark::Delete)
		.map(|(index, _)| index)
		.collect();
	assert_eq!(marked, vec![0, 1]);
	assert_eq!(view.cursor(), 0);
}

#[test]
fn marks_survive_execute_then_refresh() {
	let (mut registry, all) = sessions(4);
	let mut view = MenuView::open(&registry, ViewConfig::default(), None);
	view.mark_display(&registry, 1).unwrap();
	view.mark_delete(&registry, 1).unwrap();
	view.execute(&mut registry, &mut RecordingHost::new());

	registry.select(all[3]);
	view.refresh(&registry);

	assert_eq!(ids(&view), vec![all[3], all[0], all[2]]);
	assert_eq!(view.marked(&registry, MarkKind::Any), vec![all[0]]);
}

fn apply_mark(view: &mut MenuView, registry: &MemoryRegistry, index: usize, kind: u8) {
	if index >= view.len() {
		return;
	}
	view.move_to(index);
	let _ = match kind {
		0 => view.mark_display(registry, 1),
		1 => view.mark_save(registry, 1),
		2 => view.mark_delete(registry, 1),
		_ => view.unmark(registry).map(|()| 0),
	};
}

proptest! {
	#[test]
	fn marks_survive_refresh(
		count in 1usize..12,
		marks in prop::collection::vec((0usize..12, 0u8..4), 0..24),
		kills in prop::collection::vec(0usize..12, 0..6),
		raises in prop::collection::vec(0usize..12, 0..6),
	) {
		let (mut registry, all) = sessions(count);
		let mut view = MenuView::open(&registry, ViewConfig::default(), None);
		for (index, kind) in marks {
			apply_mark(&mut view, &registry, index, kind);
		}
		let before: HashMap<ResourceId, Mark> =
			view.entries().iter().map(|entry| (entry.id(), entry.mark())).collect();

		for index in kills {
			if let Some(&id) = all.get(index) {
				registry.kill(id);
			}
		}
		for index in raises {
			if let Some(&id) = all.get(index) {
				registry.select(id);
			}
		}
		view.refresh(&registry);

		for entry in view.entries() {
			prop_assert!(registry.is_live(entry.id()));
			prop_assert_eq!(before.get(&entry.id()).copied(), Some(entry.mark()));
		}
		prop_assert_eq!(view.len(), registry.len());
	}

	#[test]
	fn refresh_never_lists_an_identity_twice(
		count in 1usize..10,
		picks in prop::collection::vec(0usize..10, 0..30),
		kills in prop::collection::vec(0usize..10, 0..4),
	) {
		let (mut registry, all) = sessions(count);
		let list: Vec<ResourceId> = picks.iter().filter_map(|&index| all.get(index).copied()).collect();
		let mut view = MenuView::open(&registry, ViewConfig::default().with_list(list), None);

		for index in kills {
			if let Some(&id) = all.get(index) {
				registry.kill(id);
			}
		}
		view.refresh(&registry);

		let listed = ids(&view);
		let mut unique = listed.clone();
		unique.sort();
		unique.dedup();
		prop_assert_eq!(unique.len(), listed.len());
		prop_assert!(listed.iter().all(|&id| registry.is_live(id)));
	}
}
