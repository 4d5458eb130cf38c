//! Syntax highlighting.
//!
//! Classifies the leaves of a parsed [`Tree`] into a fixed set of scope names
//! as used by editor themes.

use std::ops::Range;

use tree_sitter::{Node, Tree};

use crate::syntax::descendants;

/// Scope names, indexed by [`Highlight`].
pub const HIGHLIGHT_NAMES: &[&str] = &[
	"comment",
	"string",
	"number",
	"keyword",
	"operator",
	"function.builtin",
	"variable",
	"constant",
	"property",
	"punctuation.bracket",
	"punctuation.delimiter",
];

/// Index into [`HIGHLIGHT_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Highlight(pub u32);

impl Highlight {
	pub const COMMENT: Self = Self(0);
	pub const STRING: Self = Self(1);
	pub const NUMBER: Self = Self(2);
	pub const KEYWORD: Self = Self(3);
	pub const OPERATOR: Self = Self(4);
	pub const FUNCTION: Self = Self(5);
	pub const VARIABLE: Self = Self(6);
	pub const CONSTANT: Self = Self(7);
	pub const PROPERTY: Self = Self(8);
	pub const BRACKET: Self = Self(9);
	pub const DELIMITER: Self = Self(10);

	#[inline]
	pub fn idx(self) -> usize {
		self.0 as usize
	}

	pub fn name(self) -> &'static str {
		HIGHLIGHT_NAMES[self.idx()]
	}
}

/// A highlighted byte range.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HighlightSpan {
	pub start: usize,
	pub end: usize,
	#[serde(serialize_with = "serialize_highlight")]
	pub highlight: Highlight,
}

impl HighlightSpan {
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}
}

fn serialize_highlight<S: serde::Serializer>(highlight: &Highlight, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(highlight.name())
}

/// Highlights every token of `tree`, in source order.
///
/// Error and missing nodes are left unhighlighted.
pub fn highlight(tree: &Tree, source: &str) -> Vec<HighlightSpan> {
	let mut spans = Vec::new();
	for node in descendants(tree.root_node()) {
		if node.child_count() > 0 || node.is_missing() || node.is_error() || node.start_byte() == node.end_byte() {
			continue;
		}
		let Some(text) = source.get(node.byte_range()) else {
			continue;
		};
		if let Some(highlight) = classify(node, text) {
			spans.push(HighlightSpan {
				start: node.start_byte(),
				end: node.end_byte(),
				highlight,
			});
		}
	}
	tracing::trace!(spans = spans.len(), "highlighted");
	spans
}

fn classify(node: Node<'_>, text: &str) -> Option<Highlight> {
	let is_word = text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.');

	if !node.is_named() {
		let in_function_name = node.parent().is_some_and(|p| p.kind() == "function_name");
		return Some(match text {
			_ if in_function_name => Highlight::FUNCTION,
			"(" | ")" | "[" | "]" | "{" | "}" | "(tr)" => Highlight::BRACKET,
			";" | "," | ":" => Highlight::DELIMITER,
			"." | ".." => Highlight::OPERATOR,
			_ if is_word => Highlight::KEYWORD,
			_ => Highlight::OPERATOR,
		});
	}

	Some(match node.kind() {
		"comment" => Highlight::COMMENT,
		"string" | "alias" => Highlight::STRING,
		"number" => Highlight::NUMBER,
		"operator" if is_word => Highlight::KEYWORD,
		"operator" => Highlight::OPERATOR,
		"suffix" => Highlight::PROPERTY,
		"symbolic_name" | "model_object" => Highlight::VARIABLE,
		"bareword" => Highlight::CONSTANT,
		_ => return None,
	})
}
