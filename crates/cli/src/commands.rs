//! Subcommand implementations.
//!
//! Every command writes to the given output so it can be tested without a
//! process boundary.


use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mathprog_grammar::{
	GRAMMAR_NAME, LANGUAGE, LanguageConfig, Parser, SerializeNode, Tree, highlight, load, syntax_errors,
};
use tracing::{debug, info};

use crate::cli::OutputFormat;

/// Loads the grammar and returns a parser for it.
pub fn parser() -> Result<Parser> {
	mathprog_grammar::parser().context("Error loading Mathprog grammar")
}

fn parse_file(parser: &mut Parser, path: &Path) -> Result<(String, Tree)> {
	let source = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let tree = mathprog_grammar::parse(parser, &source)?;
	debug!(path = %path.display(), has_error = tree.root_node().has_error(), "parsed file");
	Ok((source, tree))
}

/// Prints the syntax tree of every file.
pub fn parse(files: &[impl AsRef<Path>], format: OutputFormat, out: &mut impl Write) -> Result<()> {
	let mut parser = parser()?;
	for path in files {
		let path = path.as_ref();
		let (source, tree) = parse_file(&mut parser, path)?;
		match format {
			OutputFormat::Sexp => {
				if files.len() > 1 {
					writeln!(out, "{}", path.display())?;
				}
				writeln!(out, "{}", tree.root_node().to_sexp())?;
			}
			OutputFormat::Json => {
				let doc = serde_json::json!({
					"file": path.display().to_string(),
					"root": SerializeNode(tree.root_node()),
					"errors": syntax_errors(&tree, &source),
				});
				serde_json::to_writer_pretty(&mut *out, &doc)?;
				writeln!(out)?;
			}
		}
	}
	Ok(())
}

/// Reports syntax errors as `file:line:column: message`.
///
/// Returns whether all files are free of errors.
pub fn check(files: &[impl AsRef<Path>], out: &mut impl Write) -> Result<bool> {
	let config = LanguageConfig::load()?;
	let mut parser = parser()?;
	let mut clean = true;
	for path in files {
		let path = path.as_ref();
		if !config.matches_path(path) {
			info!(path = %path.display(), "file type is not associated with {}", config.name);
		}
		let (source, tree) = parse_file(&mut parser, path)?;
		for error in syntax_errors(&tree, &source) {
			clean = false;
			writeln!(out, "{}:{}: {}", path.display(), error.location(), error.message)?;
		}
	}
	Ok(clean)
}

/// Prints one line per highlight span: `start..end scope text`.
pub fn highlight_file(path: &Path, out: &mut impl Write) -> Result<()> {
	let mut parser = parser()?;
	let (source, tree) = parse_file(&mut parser, path)?;
	for span in highlight(&tree, &source) {
		writeln!(
			out,
			"{}..{} {} {:?}",
			span.start,
			span.end,
			span.highlight.name(),
			&source[span.range()]
		)?;
	}
	Ok(())
}

/// Prints grammar and language metadata.
pub fn info(out: &mut impl Write) -> Result<()> {
	let language = load(LANGUAGE).context("Error loading Mathprog grammar")?;
	let config = LanguageConfig::load()?;
	writeln!(out, "name: {}", language.name().unwrap_or(GRAMMAR_NAME))?;
	writeln!(out, "grammar: {}", config.grammar_name())?;
	writeln!(out, "scope: {}", config.scope)?;
	writeln!(out, "abi version: {}", language.abi_version())?;
	writeln!(out, "node kinds: {}", language.node_kind_count())?;
	writeln!(out, "file types: {}", config.file_types.join(", "))?;
	Ok(())
}
