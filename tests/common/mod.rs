#![allow(dead_code)]

use dibu::{Document, SemanticError, compile, format, parse_str};

/// Root tag of an SVG document with no `size` statement.
pub const UNSIZED_HEADER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;

pub fn compile_ok(input: &str) -> String {
    compile(input).unwrap_or_else(|e| panic!("compile failed: {e}\n--- input ---\n{input}"))
}

/// Compile `input` and return the schema violation it must produce.
pub fn semantic_err(input: &str) -> SemanticError {
    let err = compile(input).expect_err("expected a semantic error");
    err.semantic()
        .cloned()
        .unwrap_or_else(|| panic!("expected a semantic error, got: {err}"))
}

/// Helper: format a document, parse it back, assert structural equality.
pub fn assert_format_roundtrip(original: &Document) {
    let formatted = format(original);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        original, &parsed,
        "document mismatch\n--- formatted ---\n{formatted}"
    );
}
