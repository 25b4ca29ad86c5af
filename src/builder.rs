use crate::ast::{Argument, Document, ShapeKind, Statement, Value};
use crate::schema::{self, SemanticError};

impl Document {
    /// Create a new empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement.
    #[must_use]
    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Run the same schema checks the parser applies to source text.
    ///
    /// # Errors
    ///
    /// Returns the first `SemanticError` found, in statement order.
    pub fn validate(&self) -> Result<(), SemanticError> {
        schema::validate_document(self)
    }
}

impl Statement {
    /// Create a statement with no arguments.
    #[must_use]
    pub const fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            arguments: Vec::new(),
        }
    }

    /// Add a `key=value` argument.
    #[must_use]
    pub fn arg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.arguments.push(Argument {
            key: key.to_string(),
            value: value.into(),
        });
        self
    }

    /// `size width=.., height=..`
    #[must_use]
    pub fn size(width: u64, height: u64) -> Self {
        Self::new(ShapeKind::Size)
            .arg("height", height)
            .arg("width", width)
    }

    #[must_use]
    pub fn rectangle(upper_left: (u64, u64), width: u64, height: u64) -> Self {
        Self::new(ShapeKind::Rectangle)
            .arg("upper_left", upper_left)
            .arg("width", width)
            .arg("height", height)
    }

    #[must_use]
    pub fn line(from: (u64, u64), to: (u64, u64)) -> Self {
        Self::new(ShapeKind::Line).arg("from", from).arg("to", to)
    }

    #[must_use]
    pub fn circle(center: (u64, u64), radius: u64) -> Self {
        Self::new(ShapeKind::Circle)
            .arg("center", center)
            .arg("radius", radius)
    }

    #[must_use]
    pub fn ellipse(center: (u64, u64), rx: u64, ry: u64) -> Self {
        Self::new(ShapeKind::Ellipse)
            .arg("center", center)
            .arg("rx", rx)
            .arg("ry", ry)
    }

    #[must_use]
    pub fn polyline(points: Vec<(u64, u64)>) -> Self {
        Self::new(ShapeKind::Polyline).arg("points", points)
    }

    #[must_use]
    pub fn polygon(points: Vec<(u64, u64)>) -> Self {
        Self::new(ShapeKind::Polygon).arg("points", points)
    }

    #[must_use]
    pub fn text(t: &str, at: (u64, u64)) -> Self {
        Self::new(ShapeKind::Text).arg("t", t).arg("at", at)
    }

    #[must_use]
    pub fn fill(self, color: &str) -> Self {
        self.arg("fill", color)
    }

    #[must_use]
    pub fn stroke(self, color: &str) -> Self {
        self.arg("stroke", color)
    }

    #[must_use]
    pub fn stroke_width(self, width: u64) -> Self {
        self.arg("stroke-width", width)
    }

    /// Only valid on `text`.
    #[must_use]
    pub fn font_family(self, family: &str) -> Self {
        self.arg("font-family", family)
    }

    /// Only valid on `text`.
    #[must_use]
    pub fn font_size(self, size: &str) -> Self {
        self.arg("font-size", size)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Self::pair(a, b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
