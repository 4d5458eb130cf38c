use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mathprog")]
#[command(about = "Parse and inspect GNU MathProg models")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbose: u8,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the syntax tree of each file
	Parse {
		/// Model or data files
		#[arg(required = true, value_name = "FILE")]
		files: Vec<PathBuf>,

		/// Output format
		#[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Sexp)]
		format: OutputFormat,
	},
	/// Report syntax errors; exits with failure if any file has errors
	Check {
		/// Model or data files
		#[arg(required = true, value_name = "FILE")]
		files: Vec<PathBuf>,
	},
	/// Print highlight spans of a file
	Highlight {
		/// Model or data file
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
	/// Print grammar metadata
	Info,
}

/// Syntax tree output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	/// S-expression of the named nodes
	Sexp,
	/// JSON document of the named nodes with positions
	Json,
}
