//! Compiler for a small declarative drawing language that targets SVG.
//!
//! A document is a flat list of shape statements, each a shape name
//! followed by `key=value` parameters:
//!
//! ```text
//! size height=400, width=500
//! rectangle upper_left=(3,4), width=3, height=5, fill="red"
//! polyline points=[(7,6), (1,2)]
//! text t="Hello", at=(1,2)
//! ```
//!
//! Source text goes through four stages: [`tokenize`], [`parse`], the
//! [`schema`] check (run by the parser on each statement as soon as it is
//! complete), and [`render`].
//!
//! # Quick start
//!
//! ```
//! let svg = dibu::compile("circle center=(5,6), radius=8").unwrap();
//! assert!(svg.contains(r#"<circle cx="5" cy="6" r="8"/>"#));
//! ```
//!
//! ## Build a document programmatically
//!
//! ```
//! use dibu::{Document, Statement, render};
//!
//! let doc = Document::new()
//!     .statement(Statement::size(500, 400))
//!     .statement(Statement::circle((5, 6), 8).fill("red"));
//! doc.validate().unwrap();
//!
//! let svg = render(&doc);
//! assert!(svg.contains(r#"width="500" height="400""#));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod log;
pub mod parser;
pub mod render;
pub mod schema;
pub mod token;

pub use ast::{Argument, Document, ShapeKind, Statement, Value};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use render::render;
pub use schema::{ScalarKind, SemanticError, TypeShape};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering lexing, parsing, and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A syntax or schema error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// The schema violation behind this error, if it is one.
    #[must_use]
    pub const fn semantic(&self) -> Option<&SemanticError> {
        match self {
            Self::Parse(err) => err.semantic(),
            Self::Lex(_) => None,
        }
    }

    /// Where in the source the error was detected.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span,
            Self::Parse(err) => err.span,
        }
    }
}

/// Tokenize and parse source text in one step.
pub fn parse_str(input: &str) -> Result<Document, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Compile source text to an SVG document.
pub fn compile(input: &str) -> Result<String, Error> {
    let document = parse_str(input)?;
    Ok(render(&document))
}
