//! Working with parsed trees.
//!
//! Tree-sitter never fails on bad input; it records `ERROR` and missing nodes
//! in the tree instead. [`syntax_errors`] turns those into a flat list, and
//! [`SerializeNode`] renders a tree for machine consumers.

use std::ops::Range;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;
use tree_sitter::{Node, Parser, Point, Tree, TreeCursor};

/// Longest error snippet quoted in a message.
const SNIPPET_LEN: usize = 24;

/// Errors that prevent a parse from producing a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("no language set on parser")]
	NoLanguage,
	#[error("parse was cancelled")]
	Cancelled,
}

/// Parses a complete source text.
///
/// Syntax errors do not fail the parse; see [`syntax_errors`].
pub fn parse(parser: &mut Parser, source: &str) -> Result<Tree, ParseError> {
	if parser.language().is_none() {
		return Err(ParseError::NoLanguage);
	}
	let _span = tracing::debug_span!("parse", bytes = source.len()).entered();
	let tree = parser.parse(source, None).ok_or(ParseError::Cancelled)?;
	tracing::debug!(has_error = tree.root_node().has_error(), "parsed");
	Ok(tree)
}

/// A syntax error found in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
	pub message: String,
	pub range: Range<usize>,
	pub start: Point,
}

impl SyntaxError {
	/// One-based `line:column` of the error start.
	pub fn location(&self) -> String {
		format!("{}:{}", self.start.row + 1, self.start.column + 1)
	}
}

impl Serialize for SyntaxError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("SyntaxError", 3)?;
		state.serialize_field("message", &self.message)?;
		state.serialize_field("range", &self.range)?;
		state.serialize_field("start", &SerializePoint(self.start))?;
		state.end()
	}
}

/// Lists the `ERROR` and missing nodes of `tree` in source order.
///
/// An `ERROR` node is reported once; nothing below it is inspected.
pub fn syntax_errors(tree: &Tree, source: &str) -> Vec<SyntaxError> {
	let mut errors = Vec::new();
	if !tree.root_node().has_error() {
		return errors;
	}

	let mut cursor = tree.walk();
	loop {
		let node = cursor.node();
		let descend = if node.is_missing() {
			errors.push(missing(node));
			false
		} else if node.is_error() {
			errors.push(unexpected(node, source));
			false
		} else {
			node.has_error()
		};

		if descend && cursor.goto_first_child() {
			continue;
		}
		while !cursor.goto_next_sibling() {
			if !cursor.goto_parent() {
				tracing::trace!(count = errors.len(), "collected syntax errors");
				return errors;
			}
		}
	}
}

fn missing(node: Node<'_>) -> SyntaxError {
	let message = if node.is_named() {
		format!("missing {}", node.kind())
	} else {
		format!("missing `{}`", node.kind())
	};
	SyntaxError {
		message,
		range: node.byte_range(),
		start: node.start_position(),
	}
}

fn unexpected(node: Node<'_>, source: &str) -> SyntaxError {
	let text = source.get(node.byte_range()).unwrap_or_default();
	let line = text.lines().next().unwrap_or_default().trim_end();
	let message = match line.char_indices().nth(SNIPPET_LEN) {
		Some((cut, _)) => format!("unexpected `{}...`", &line[..cut]),
		None if line.is_empty() => "unexpected input".to_string(),
		None => format!("unexpected `{line}`"),
	};
	SyntaxError {
		message,
		range: node.byte_range(),
		start: node.start_position(),
	}
}

/// Pre-order traversal of a node and all its descendants.
pub fn descendants(node: Node<'_>) -> Descendants<'_> {
	Descendants {
		cursor: node.walk(),
		done: false,
	}
}

/// Iterator returned by [`descendants`].
pub struct Descendants<'tree> {
	cursor: TreeCursor<'tree>,
	done: bool,
}

impl<'tree> Iterator for Descendants<'tree> {
	type Item = Node<'tree>;

	fn next(&mut self) -> Option<Node<'tree>> {
		if self.done {
			return None;
		}
		let node = self.cursor.node();
		if !self.cursor.goto_first_child() {
			while !self.cursor.goto_next_sibling() {
				if !self.cursor.goto_parent() {
					self.done = true;
					break;
				}
			}
		}
		Some(node)
	}
}

/// Serializes the named structure below a node.
///
/// Missing nodes are kept so consumers can see where recovery inserted them.
pub struct SerializeNode<'tree>(pub Node<'tree>);

impl Serialize for SerializeNode<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let node = self.0;
		let mut cursor = node.walk();
		let children: Vec<_> = node
			.children(&mut cursor)
			.filter(|c| c.is_named() || c.is_missing())
			.map(SerializeNode)
			.collect();

		let mut state = serializer.serialize_struct("Node", 6)?;
		state.serialize_field("kind", node.kind())?;
		state.serialize_field("start", &SerializePoint(node.start_position()))?;
		state.serialize_field("end", &SerializePoint(node.end_position()))?;
		state.serialize_field("range", &node.byte_range())?;
		state.serialize_field("missing", &node.is_missing())?;
		state.serialize_field("children", &children)?;
		state.end()
	}
}

struct SerializePoint(Point);

impl Serialize for SerializePoint {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("Point", 2)?;
		state.serialize_field("row", &self.0.row)?;
		state.serialize_field("column", &self.0.column)?;
		state.end()
	}
}
