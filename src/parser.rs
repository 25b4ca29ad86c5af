use std::fmt;

use crate::ast::{Argument, Document, ShapeKind, Statement, Value};
use crate::schema::{self, SemanticError};
use crate::token::{Span, Token, TokenKind};

/// Deepest nesting of pairs and lists accepted in one value.
const MAX_VALUE_DEPTH: usize = 64;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token that no grammar production accepts here.
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    /// Input ended in the middle of a statement.
    UnexpectedEof { expected: &'static str },
    /// Pairs or lists nested deeper than the parser accepts.
    NestingTooDeep,
    /// A complete statement that violates the schema.
    Semantic(SemanticError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, got '{found}'")
            }
            Self::UnexpectedEof { expected } => {
                write!(f, "expected {expected}, got end of input")
            }
            Self::NestingTooDeep => {
                write!(f, "values nested deeper than {MAX_VALUE_DEPTH} levels")
            }
            Self::Semantic(err) => write!(f, "{err}"),
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// The schema violation behind this error, if it is one.
    #[must_use]
    pub const fn semantic(&self) -> Option<&SemanticError> {
        match &self.kind {
            ParseErrorKind::Semantic(err) => Some(err),
            _ => None,
        }
    }

    const fn semantic_at(err: SemanticError, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Semantic(err),
            span,
        }
    }
}

/// Parse a token stream into a validated `Document`.
///
/// Each statement is checked against the schema as soon as its
/// argument list is complete, so an invalid statement stops parsing
/// before anything after it is read.
///
/// # Errors
///
/// Returns `ParseError` on syntax errors, or wrapping a
/// `SemanticError` when a statement violates the schema.
pub fn parse(tokens: &[Token]) -> Result<Document, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        let mut statements: Vec<Statement> = Vec::new();

        while self.pos < self.tokens.len() {
            let span = self.tokens[self.pos].span;
            let statement = self.parse_statement()?;

            if statement.kind == ShapeKind::Size
                && statements.iter().any(|s| s.kind == ShapeKind::Size)
            {
                crate::log::debug!(line = span.line, "rejecting second size statement");
                return Err(ParseError::semantic_at(SemanticError::DuplicateSize, span));
            }

            statements.push(statement);
        }

        Ok(Document { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.next_token("shape name")?;
        let TokenKind::Identifier(kind) = token.kind else {
            return Err(Self::unexpected(token, "shape name"));
        };
        let span = token.span;

        let arguments = self.parse_key_value_list(kind)?;
        schema::validate(kind, &arguments).map_err(|e| ParseError::semantic_at(e, span))?;

        crate::log::debug!(
            kind = kind.name(),
            arguments = arguments.len(),
            line = span.line,
            "validated statement"
        );

        Ok(Statement { kind, arguments })
    }

    fn parse_key_value_list(&mut self, kind: ShapeKind) -> Result<Vec<Argument>, ParseError> {
        let mut arguments = Vec::new();

        loop {
            let token = self.next_token("key")?;
            // Shape names are valid key text; the schema decides if they fit.
            let (TokenKind::Key | TokenKind::Identifier(_)) = token.kind else {
                return Err(Self::unexpected(token, "key"));
            };
            let key = token.text.clone();
            let key_span = token.span;

            self.expect(&TokenKind::Equals)?;
            let value = self.parse_value(0)?;

            schema::check_new_key(kind, &arguments, &key)
                .map_err(|e| ParseError::semantic_at(e, key_span))?;
            arguments.push(Argument { key, value });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        Ok(arguments)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        let token = self.next_token("value")?;
        if depth >= MAX_VALUE_DEPTH {
            return Err(ParseError {
                kind: ParseErrorKind::NestingTooDeep,
                span: token.span,
            });
        }

        match token.kind {
            TokenKind::String => Ok(Value::Str(token.text.clone())),
            TokenKind::Number(n) => Ok(Value::Int(n)),
            TokenKind::LParen => {
                let first = self.parse_value(depth + 1)?;
                self.expect(&TokenKind::Comma)?;
                let second = self.parse_value(depth + 1)?;
                self.expect(&TokenKind::RParen)?;
                Ok(Value::Pair(Box::new(first), Box::new(second)))
            }
            TokenKind::LBracket => {
                let mut items = vec![self.parse_value(depth + 1)?];
                while self.eat(&TokenKind::Comma) {
                    items.push(self.parse_value(depth + 1)?);
                }
                self.expect(&TokenKind::RBracket)?;
                Ok(Value::List(items))
            }
            _ => Err(Self::unexpected(token, "value")),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Err(ParseError {
                kind: ParseErrorKind::UnexpectedEof { expected },
                span: self.eof_span(),
            });
        };
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.tokens.get(self.pos).is_some_and(|t| t.kind == *kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        let expected = kind.describe();
        let token = self.next_token(expected)?;
        if token.kind == *kind {
            Ok(())
        } else {
            Err(Self::unexpected(token, expected))
        }
    }

    fn unexpected(token: &Token, expected: &'static str) -> ParseError {
        let found = if token.kind == TokenKind::String {
            format!("\"{}\"", token.text)
        } else {
            token.text.clone()
        };
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span: token.span,
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens.last().map_or(
            Span {
                offset: 0,
                line: 1,
                column: 1,
            },
            |last| last.span,
        )
    }
}
