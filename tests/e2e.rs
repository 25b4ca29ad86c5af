//! End-to-end compilation of complete drawings.

mod common;

use common::{compile_ok, semantic_err};
use dibu::{Error, SemanticError, compile};

const DRAWING: &str = r#"size height=400, width=500
rectangle upper_left=(3,4), width=3, height=5
circle center=(5,6), radius=8
polyline points=[(7,6), (1,2)]
text t="polyline points=[(1,2), (3,4)]", at=(1,2)
"#;

#[test]
fn full_drawing() {
    let expected = "\
<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"500\" height=\"400\">
<rect x=\"3\" y=\"4\" height=\"5\" width=\"3\"/>
<circle cx=\"5\" cy=\"6\" r=\"8\"/>
<polyline points=\"7,6 1,2\"/>
<text x=\"1\" y=\"2\">polyline points=[(1,2), (3,4)]</text>
</svg>";
    assert_eq!(compile_ok(DRAWING), expected);
}

#[test]
fn compile_is_deterministic() {
    let first = compile_ok(DRAWING);
    for _ in 0..10 {
        assert_eq!(compile_ok(DRAWING), first);
    }
}

#[test]
fn quoted_text_body() {
    let svg = compile_ok(
        "\n    size height=300, width=200\n    text t=\"This be what I call \\\"Quote\\\"\", at=(1,2)\n    ",
    );
    assert!(svg.contains(r#"width="200" height="300""#));
    assert!(svg.contains(r#"<text x="1" y="2">This be what I call &quot;Quote&quot;</text>"#));
}

#[test]
fn trailing_size_is_still_a_duplicate() {
    let input = format!("{DRAWING}size height=8700, width=345");
    assert_eq!(semantic_err(&input), SemanticError::DuplicateSize);
}

#[test]
fn one_bad_statement_rejects_the_document() {
    let input = format!("{DRAWING}circle center=(1,1)");
    let err = compile(&input).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.span().line, 6);
}

#[test]
fn every_shape_kind() {
    let svg = compile_ok(
        "size height=100, width=100\n\
         rectangle upper_left=(0,0), width=10, height=20, stroke=\"black\"\n\
         line from=(0,0), to=(100,100), stroke-width=2\n\
         circle center=(50,50), radius=5\n\
         ellipse center=(50,50), rx=10, ry=5\n\
         polyline points=[(0,0),(10,10),(20,0)]\n\
         polygon points=[(0,0),(10,10),(20,0)], fill=\"green\"\n\
         text t=\"done\", at=(5,95), font-size=\"8\"",
    );
    let lines: Vec<_> = svg.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("<rect "));
    assert!(lines[2].starts_with("<line "));
    assert!(lines[3].starts_with("<circle "));
    assert!(lines[4].starts_with("<ellipse "));
    assert!(lines[5].starts_with("<polyline "));
    assert!(lines[6].starts_with("<polygon "));
    assert!(lines[7].starts_with("<text "));
    assert_eq!(lines[8], "</svg>");
}

#[test]
fn error_display_for_each_stage() {
    let lex = compile("circle %").unwrap_err();
    assert!(matches!(lex, Error::Lex(_)));
    assert!(lex.to_string().contains("line 1, column 8"));

    let syntax = compile("circle center=(1,1), radius=2 width=3").unwrap_err();
    assert!(syntax.semantic().is_none());
    assert!(syntax.to_string().starts_with("expected shape name, got 'width'"));

    let semantic = compile("size height=1, width=1 size height=1, width=1").unwrap_err();
    assert_eq!(semantic.to_string(), "size defined twice at line 1, column 24");
}
