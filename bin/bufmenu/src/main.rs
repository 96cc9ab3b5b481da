//! Buffer menu driver.
//!
//! Loads a session fixture, opens a menu over it, replays a command script
//! and prints the resulting table.

mod fixture;
mod script;
mod terminal;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bufmenu_menu::{Host, MenuOptions, MenuView, ViewConfig};
use clap::Parser;
use tracing::{info, warn};

use crate::fixture::{Fixture, Session};
use crate::script::Command;
use crate::terminal::TerminalHost;

/// Driver command line arguments.
#[derive(Parser, Debug)]
#[command(name = "bufmenu")]
#[command(about = "Replay buffer menu commands against a session fixture")]
struct Args {
	/// Session fixture (TOML)
	#[arg(short, long, value_name = "PATH")]
	sessions: PathBuf,

	/// Menu options (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Commands, applied in order: down[N] up[N] goto:N mark[N] save[N]
	/// delete[N] unmark backup-unmark unmark-all[:KIND] toggle-ro
	/// not-modified bury execute refresh select[:TARGET]
	#[arg(value_name = "COMMAND", allow_hyphen_values = true)]
	commands: Vec<String>,
}

fn main() -> Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let commands = args
		.commands
		.iter()
		.map(|text| text.parse::<Command>())
		.collect::<Result<Vec<_>, _>>()
		.context("invalid command script")?;

	let options = match &args.config {
		Some(path) => MenuOptions::load(path).with_context(|| format!("failed to load menu options from {}", path.display()))?,
		None => MenuOptions::default(),
	};
	let Session { mut registry, own } = Fixture::load(&args.sessions)?.build()?;
	info!(sessions = %args.sessions.display(), buffers = registry.len(), "fixture loaded");

	let mut config = ViewConfig::new(options);
	config.working_dir = std::env::current_dir().ok();
	let mut view = MenuView::open(&registry, config, Some(own));
	let mut host = TerminalHost::new(io::stdout().lock(), io::stderr().lock());

	for (text, command) in args.commands.iter().zip(commands) {
		if let Err(error) = script::apply(command, &mut view, &mut registry, &mut host) {
			warn!(command = %text, error = %error, "command failed");
			host.report_warning(&format!("{text}: {error}"));
		}
	}

	view.render(&mut host);
	host.finish().context("failed to write output")?;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("BUFMENU_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("bufmenu=debug")
		} else {
			EnvFilter::new("bufmenu=info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
