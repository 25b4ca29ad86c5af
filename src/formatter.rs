//! Pretty-printer that serializes a document back into canonical source.
//!
//! One statement per line, arguments separated by `, `, pairs and lists
//! written with a space after each comma.

use crate::ast::Document;

/// Format a `Document` into source text that parses back to the same
/// document.
///
/// The source grammar has no empty list, so a built document holding one
/// (which `Document::validate` accepts) formats to `[]` and does not parse
/// back. Every document that came from `parse` round-trips.
#[must_use]
pub fn format(document: &Document) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for statement in &document.statements {
        let _ = writeln!(out, "{statement}");
    }
    out
}
