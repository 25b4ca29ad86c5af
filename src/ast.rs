use std::fmt;

/// The eight statement kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Size,
    Rectangle,
    Line,
    Circle,
    Ellipse,
    Polyline,
    Polygon,
    Text,
}

impl ShapeKind {
    /// Every shape kind, in keyword order.
    pub const ALL: [Self; 8] = [
        Self::Size,
        Self::Rectangle,
        Self::Line,
        Self::Circle,
        Self::Ellipse,
        Self::Polyline,
        Self::Polygon,
        Self::Text,
    ];

    /// The keyword that introduces this statement in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Rectangle => "rectangle",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Text => "text",
        }
    }

    /// Look up a shape kind by its keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Decoded contents of a quoted string.
    Str(String),
    /// Unsigned integer.
    Int(u64),
    /// Parenthesised pair `(a, b)`.
    Pair(Box<Self>, Box<Self>),
    /// Bracketed list `[a, b, ...]`.
    List(Vec<Self>),
}

impl Value {
    /// Build a pair value.
    #[must_use]
    pub fn pair(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Pair(Box::new(first.into()), Box::new(second.into()))
    }

    /// Build an integer coordinate pair.
    #[must_use]
    pub fn point(x: u64, y: u64) -> Self {
        Self::pair(Self::Int(x), Self::Int(y))
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pair(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Pair(a, b) => Some((a, b)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        _ => write!(f, "{ch}")?,
                    }
                }
                f.write_str("\"")
            }
            Self::Int(n) => write!(f, "{n}"),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One `key=value` entry of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub key: String,
    pub value: Value,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A shape statement: its kind plus arguments in source order.
///
/// Keys are unique within a statement once it has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: ShapeKind,
    pub arguments: Vec<Argument>,
}

impl Statement {
    /// Value bound to `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.key == key)
            .map(|arg| &arg.value)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{arg}")?;
        }
        Ok(())
    }
}

/// A whole document: statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub statements: Vec<Statement>,
}

impl Document {
    /// Effective canvas `(width, height)`.
    ///
    /// Resolved from the last `size` statement in source order; `None`
    /// when the document has no `size` statement or its dimensions are
    /// not integers.
    #[must_use]
    pub fn canvas_size(&self) -> Option<(u64, u64)> {
        let size = self
            .statements
            .iter()
            .rev()
            .find(|stmt| stmt.kind == ShapeKind::Size)?;
        let width = size.get("width")?.as_int()?;
        let height = size.get("height")?.as_int()?;
        Some((width, height))
    }

    /// Iterate the drawable (non-`size`) statements in source order.
    pub fn shapes(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .filter(|stmt| stmt.kind != ShapeKind::Size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ShapeKind::from_name("square"), None);
    }

    #[test]
    fn value_display_uses_source_syntax() {
        let points = Value::List(vec![Value::point(1, 2), Value::point(3, 4)]);
        assert_eq!(points.to_string(), "[(1, 2), (3, 4)]");
        assert_eq!(
            Value::Str("say \"hi\"".to_string()).to_string(),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn canvas_size_uses_last_size() {
        let doc = Document {
            statements: vec![
                Statement {
                    kind: ShapeKind::Size,
                    arguments: vec![
                        Argument {
                            key: "width".to_string(),
                            value: Value::Int(10),
                        },
                        Argument {
                            key: "height".to_string(),
                            value: Value::Int(20),
                        },
                    ],
                },
                Statement {
                    kind: ShapeKind::Size,
                    arguments: vec![
                        Argument {
                            key: "height".to_string(),
                            value: Value::Int(40),
                        },
                        Argument {
                            key: "width".to_string(),
                            value: Value::Int(30),
                        },
                    ],
                },
            ],
        };
        assert_eq!(doc.canvas_size(), Some((30, 40)));
        assert_eq!(doc.shapes().count(), 0);
    }

    #[test]
    fn no_size_means_unsized_canvas() {
        assert_eq!(Document::default().canvas_size(), None);
    }
}
