//! The mathprog language handle and its loader.
//!
//! [`LANGUAGE`] wraps the `tree_sitter_mathprog` function exported by the
//! generated parser. [`load`] runs such a loader and checks the table it
//! returns before a [`Parser`] ever sees it.

use thiserror::Error;
use tree_sitter::{LANGUAGE_VERSION, Language, MIN_COMPATIBLE_LANGUAGE_VERSION, Parser};
use tree_sitter_language::LanguageFn;

unsafe extern "C" {
	fn tree_sitter_mathprog() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for the mathprog grammar.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_mathprog) };

/// Grammar name recorded in the generated table.
pub const GRAMMAR_NAME: &str = "mathprog";

/// Errors raised while loading a grammar or registering it with a parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
	#[error("grammar loader returned a null language")]
	Null,

	#[error(
		"incompatible language version {0}, expected minimum {min}, maximum {max}",
		min = MIN_COMPATIBLE_LANGUAGE_VERSION,
		max = LANGUAGE_VERSION
	)]
	Version(usize),

	#[error("parser rejected the grammar: {0}")]
	Rejected(String),
}

impl From<tree_sitter::LanguageError> for LanguageError {
	fn from(err: tree_sitter::LanguageError) -> Self {
		Self::Rejected(err.to_string())
	}
}

/// Returns the mathprog [`Language`].
pub fn language() -> Language {
	LANGUAGE.into()
}

/// Runs `loader` and validates the grammar table it returns.
///
/// A null table and a table generated for an ABI the runtime cannot read are
/// both rejected here, so the returned language is safe to hand to a parser.
pub fn load(loader: LanguageFn) -> Result<Language, LanguageError> {
	// SAFETY: loaders only return a pointer to a static table or null.
	let raw = unsafe { (loader.into_raw())() };
	if raw.is_null() {
		tracing::warn!("grammar loader returned a null table");
		return Err(LanguageError::Null);
	}

	let language = Language::new(loader);
	let version = language.abi_version();
	if !(MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&version) {
		tracing::warn!(version, "rejected grammar table");
		return Err(LanguageError::Version(version));
	}
	tracing::debug!(
		name = language.name().unwrap_or("unknown"),
		version,
		node_kinds = language.node_kind_count(),
		"loaded grammar"
	);
	Ok(language)
}

/// Loads [`LANGUAGE`] and returns a parser for it.
pub fn parser() -> Result<Parser, LanguageError> {
	let language = load(LANGUAGE)?;
	let mut parser = Parser::new();
	parser.set_language(&language)?;
	Ok(parser)
}
