//! GNU MathProg grammar for tree-sitter
//!
//! This crate provides the mathprog grammar as a tree-sitter language, built
//! from the generated `src/parser.c` and the external scanner in
//! `src/scanner.c`, together with helpers for the trees it produces.
//!
//! # Architecture
//!
//! * [`language`]: The [`LANGUAGE`] loader and its validation
//! * [`syntax`]: Parsing, syntax error collection and tree serialization
//! * [`highlight`]: Scope classification of tokens
//! * [`config`]: Language metadata from the embedded `language.toml`
//!
//! # Usage
//!
//! ```ignore
//! let language = mathprog_grammar::load(mathprog_grammar::LANGUAGE)
//!     .expect("Error loading Mathprog grammar");
//! let mut parser = tree_sitter::Parser::new();
//! parser.set_language(&language)?;
//! let tree = parser.parse("set I; param c{I} >= 0;", None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

pub mod config;
pub mod highlight;
pub mod language;
pub mod syntax;

pub use config::{BlockCommentTokens, ConfigError, LanguageConfig};
pub use highlight::{HIGHLIGHT_NAMES, Highlight, HighlightSpan, highlight};
pub use language::{GRAMMAR_NAME, LANGUAGE, LanguageError, language, load, parser};
pub use syntax::{Descendants, ParseError, SerializeNode, SyntaxError, descendants, parse, syntax_errors};
pub use tree_sitter::{Language, Node, Parser, Point, Tree};
pub use tree_sitter_language::LanguageFn;
