//! Language configuration.
//!
//! Editor-facing metadata for MathProg (file types, comment tokens and the
//! injection regex), read from the embedded `language.toml`.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a language configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to parse language.toml: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid injection regex: {0}")]
	Regex(#[from] regex::Error),
}

/// Embedded language.toml.
const LANGUAGE_TOML: &str = include_str!("../language.toml");

/// Start and end of a block comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockCommentTokens {
	pub start: String,
	pub end: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
	name: String,
	grammar: Option<String>,
	scope: String,
	#[serde(default)]
	file_types: Vec<String>,
	#[serde(default)]
	comment_tokens: Vec<String>,
	block_comment_tokens: Option<BlockCommentTokens>,
	injection_regex: Option<String>,
}

/// Configuration for the MathProg language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
	/// Language identifier.
	pub name: String,
	/// Grammar name. Defaults to the language name if not specified.
	pub grammar: Option<String>,
	/// TextMate-style scope, e.g. `source.mathprog`.
	pub scope: String,
	/// File extensions, without the leading dot.
	pub file_types: Vec<String>,
	pub comment_tokens: Vec<String>,
	pub block_comment_tokens: Option<BlockCommentTokens>,
	/// Regex matching injection markers such as code fence languages.
	pub injection_regex: Option<Regex>,
}

impl LanguageConfig {
	/// Loads the embedded configuration.
	pub fn load() -> Result<Self, ConfigError> {
		Self::from_toml(LANGUAGE_TOML)
	}

	/// Parses a configuration from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		let raw: RawConfig = toml::from_str(text)?;
		let injection_regex = raw.injection_regex.as_deref().map(Regex::new).transpose()?;
		Ok(Self {
			name: raw.name,
			grammar: raw.grammar,
			scope: raw.scope,
			file_types: raw.file_types,
			comment_tokens: raw.comment_tokens,
			block_comment_tokens: raw.block_comment_tokens,
			injection_regex,
		})
	}

	/// Returns the grammar name to use for loading.
	pub fn grammar_name(&self) -> &str {
		self.grammar.as_deref().unwrap_or(&self.name)
	}

	/// Whether `path` has one of the configured file extensions.
	pub fn matches_path(&self, path: &Path) -> bool {
		path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| self.file_types.iter().any(|t| t.eq_ignore_ascii_case(ext)))
	}

	/// Whether `marker` (e.g. a markdown code fence language) names this
	/// language.
	pub fn matches_injection(&self, marker: &str) -> bool {
		self.injection_regex.as_ref().is_some_and(|re| re.is_match(marker))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[test]
	fn embedded_config_loads() {
		let config = LanguageConfig::load().expect("embedded language.toml");
		assert_eq!(config.name, "mathprog");
		assert_eq!(config.grammar_name(), "mathprog");
		assert_eq!(config.scope, "source.mathprog");
		assert_eq!(config.comment_tokens, ["#"]);
		assert_eq!(
			config.block_comment_tokens,
			Some(BlockCommentTokens {
				start: "/*".to_string(),
				end: "*/".to_string(),
			})
		);
	}

	#[rstest]
	#[case("transp.mod", true)]
	#[case("models/transp.dat", true)]
	#[case("model.GMPL", true)]
	#[case("model.lp", false)]
	#[case("Makefile", false)]
	fn detects_files_by_extension(#[case] path: &str, #[case] expected: bool) {
		let config = LanguageConfig::load().expect("embedded language.toml");
		assert_eq!(config.matches_path(Path::new(path)), expected);
	}

	#[test]
	fn injection_markers() {
		let config = LanguageConfig::load().expect("embedded language.toml");
		assert!(config.matches_injection("gmpl"));
		assert!(config.matches_injection("mathprog"));
		assert!(!config.matches_injection("ampl"));
	}

	#[test]
	fn grammar_defaults_to_name() {
		let config = LanguageConfig::from_toml("name = \"gmpl\"\nscope = \"source.gmpl\"\n").expect("minimal config");
		assert_eq!(config.grammar_name(), "gmpl");
		assert!(config.file_types.is_empty());
		assert!(!config.matches_injection("gmpl"));
	}

	#[test]
	fn invalid_regex_is_an_error() {
		let err = LanguageConfig::from_toml("name = \"x\"\nscope = \"s\"\ninjection-regex = \"(\"\n").unwrap_err();
		assert!(matches!(err, ConfigError::Regex(_)));
	}

	#[test]
	fn missing_scope_is_an_error() {
		let err = LanguageConfig::from_toml("name = \"x\"\n").unwrap_err();
		assert!(err.to_string().starts_with("failed to parse language.toml"));
	}
}
