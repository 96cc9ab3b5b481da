//! Plain-text host: tables and pane requests to one writer, warnings to
//! another.

use std::io::{self, Write};

use bufmenu_buffer_display::ColumnSpec;
use bufmenu_menu::{Host, RenderedRow, Selection};

pub struct TerminalHost<O, E> {
	out: O,
	err: E,
	/// First write error; later writes are skipped.
	failed: Option<io::Error>,
}

impl<O: Write, E: Write> TerminalHost<O, E> {
	pub fn new(out: O, err: E) -> Self {
		Self { out, err, failed: None }
	}

	/// Flushes both writers and surfaces any write error seen so far.
	pub fn finish(mut self) -> io::Result<(O, E)> {
		if let Some(error) = self.failed.take() {
			return Err(error);
		}
		self.out.flush()?;
		self.err.flush()?;
		Ok((self.out, self.err))
	}

	fn write_with(&mut self, write: impl FnOnce(&mut O, &mut E) -> io::Result<()>) {
		if self.failed.is_none()
			&& let Err(error) = write(&mut self.out, &mut self.err)
		{
			self.failed = Some(error);
		}
	}
}

impl<O: Write, E: Write> Host for TerminalHost<O, E> {
	fn render(&mut self, rows: &[RenderedRow], columns: &ColumnSpec) {
		self.write_with(|out, _| {
			writeln!(out, "{}", columns.header())?;
			for row in rows {
				writeln!(out, "{}", row.text)?;
			}
			Ok(())
		});
	}

	fn open_panes(&mut self, selection: &Selection) {
		self.write_with(|out, _| {
			write!(out, "show {}", selection.primary)?;
			for other in &selection.others {
				write!(out, " {other}")?;
			}
			writeln!(out, " [{:?}, share {:.2}]", selection.target, selection.share())
		});
	}

	fn report_warning(&mut self, message: &str) {
		self.write_with(|_, err| writeln!(err, "warning: {message}"));
	}
}

#[cfg(test)]
mod tests {
	use bufmenu_menu::memory::MemoryRegistry;
	use bufmenu_menu::{MenuView, ViewConfig};
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn renders_table_and_selection() {
		let mut registry = MemoryRegistry::new();
		registry.open_file("a.rs", "/work/a.rs", 12);
		registry.open_file("b.rs", "/work/b.rs", 7);
		let mut view = MenuView::open(&registry, ViewConfig::default(), None);
		let mut host = TerminalHost::new(Vec::new(), Vec::new());

		view.mark_display(&registry, 1).unwrap();
		view.render(&mut host);
		view.move_to(1);
		view.select(&registry).unwrap().open(&mut host);
		host.report_warning("Error saving a.rs: disk full");

		let (out, err) = host.finish().unwrap();
		let out = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = out.lines().collect();
		assert_eq!(lines.len(), 4);
		assert!(lines[0].starts_with("CRM Name"));
		assert!(lines[1].starts_with(">   a.rs"));
		assert!(lines[2].starts_with("    b.rs"));
		assert_eq!(lines[3], "show #2 #1 [ThisPane, share 0.50]");
		assert_eq!(String::from_utf8(err).unwrap(), "warning: Error saving a.rs: disk full\n");
	}
}
