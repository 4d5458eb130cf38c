//! MathProg command-line front end.
//!
//! Parses GNU MathProg model and data files with the mathprog grammar and
//! prints syntax trees, syntax errors, highlight spans or grammar metadata.

mod cli;
mod commands;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	let status = match cli.command {
		Command::Parse { files, format } => {
			commands::parse(&files, format, &mut out)?;
			ExitCode::SUCCESS
		}
		Command::Check { files } => {
			if commands::check(&files, &mut out)? {
				ExitCode::SUCCESS
			} else {
				ExitCode::FAILURE
			}
		}
		Command::Highlight { file } => {
			commands::highlight_file(&file, &mut out)?;
			ExitCode::SUCCESS
		}
		Command::Info => {
			commands::info(&mut out)?;
			ExitCode::SUCCESS
		}
	};
	out.flush()?;
	Ok(status)
}
