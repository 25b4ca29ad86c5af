use crate::ast::ShapeKind;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset from the start of the input.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// One of the eight shape names (`size`, `rectangle`, ...).
    Identifier(ShapeKind),
    /// Double-quoted string; `text` holds the decoded contents.
    String,
    /// Unsigned integer literal.
    Number(u64),
    /// Parameter name such as `upper_left` or `stroke-width`.
    Key,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Short human-readable name used in syntax errors.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "shape name",
            Self::String => "string",
            Self::Number(_) => "number",
            Self::Key => "key",
            Self::Comma => "','",
            Self::Equals => "'='",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LParen => "'('",
            Self::RParen => "')'",
        }
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
