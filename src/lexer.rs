use std::fmt;

use crate::ast::ShapeKind;
use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Double-quoted string not closed before a newline or end of input.
    UnterminatedString,
    /// Integer literal too large to represent.
    IntegerOverflow(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch:?}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated quoted string")
            }
            Self::IntegerOverflow(text) => {
                write!(f, "integer literal too large: {text}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize source text into a sequence of tokens.
///
/// Whitespace and newlines only separate tokens and are never emitted.
///
/// # Errors
///
/// Returns `LexError` on the first character that cannot start a token,
/// on an unterminated string, or on an integer literal that overflows.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(input).tokenize()?;
    crate::log::debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        let start = if input.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            input,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                '\n' | ' ' | '\t' | '\r' => self.advance(),
                '"' => tokens.push(self.read_string()?),
                '0'..='9' => tokens.push(self.read_number()?),
                ',' => tokens.push(self.punct(TokenKind::Comma)),
                '=' => tokens.push(self.punct(TokenKind::Equals)),
                '[' => tokens.push(self.punct(TokenKind::LBracket)),
                ']' => tokens.push(self.punct(TokenKind::RBracket)),
                '(' => tokens.push(self.punct(TokenKind::LParen)),
                ')' => tokens.push(self.punct(TokenKind::RParen)),
                c if is_word_start(c) => tokens.push(self.read_word()),
                c => {
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(c),
                        span: self.span(),
                    });
                }
            }
        }

        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn punct(&mut self, kind: TokenKind) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance();
        Token {
            kind,
            text: self.input[start..self.pos].to_string(),
            span,
        }
    }

    fn read_word(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance_while(is_word_char);
        let text = &self.input[start..self.pos];

        let kind = ShapeKind::from_name(text).map_or(TokenKind::Key, TokenKind::Identifier);
        Token {
            kind,
            text: text.to_string(),
            span,
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_digit());
        let text = &self.input[start..self.pos];

        let value = text.parse::<u64>().map_err(|_| LexError {
            kind: LexErrorKind::IntegerOverflow(text.to_string()),
            span,
        })?;

        Ok(Token {
            kind: TokenKind::Number(value),
            text: text.to_string(),
            span,
        })
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let unterminated = LexError {
            kind: LexErrorKind::UnterminatedString,
            span,
        };
        self.advance(); // opening quote

        let mut value = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => return Err(unterminated),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        None | Some('\n') => return Err(unterminated),
                        Some(escaped) => {
                            match escaped {
                                'n' => value.push('\n'),
                                't' => value.push('\t'),
                                'r' => value.push('\r'),
                                '"' | '\\' => value.push(escaped),
                                other => {
                                    value.push('\\');
                                    value.push(other);
                                }
                            }
                            self.advance();
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            text: value,
            span,
        })
    }
}
