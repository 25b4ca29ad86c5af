//! Parameter schema for every shape kind, and the checks run against it.
//!
//! Each kind has a table of required parameters and, for `text`, a table of
//! optional ones. The styling parameters in [`COMMON`] are accepted on every
//! kind. Expected values are described by [`TypeShape`], matched
//! structurally against parsed [`Value`]s.

use std::fmt;

use crate::ast::{Argument, Document, ShapeKind, Statement, Value};

/// Scalar value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    String,
}

/// Expected structure of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    Scalar(ScalarKind),
    Pair(&'static TypeShape, &'static TypeShape),
    /// Homogeneous list; an empty list matches any element shape.
    List(&'static TypeShape),
}

impl TypeShape {
    /// Whether `value` has this shape, checked recursively.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Scalar(ScalarKind::Integer), Value::Int(_))
            | (Self::Scalar(ScalarKind::String), Value::Str(_)) => true,
            (Self::Pair(a, b), Value::Pair(x, y)) => a.matches(x) && b.matches(y),
            (Self::List(elem), Value::List(items)) => items.iter().all(|item| elem.matches(item)),
            _ => false,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ScalarKind::Integer) => f.write_str("integer"),
            Self::Scalar(ScalarKind::String) => f.write_str("string"),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
            Self::List(elem) => write!(f, "[{elem}]"),
        }
    }
}

/// A named parameter and the shape its value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub shape: TypeShape,
}

const fn param(name: &'static str, shape: TypeShape) -> Param {
    Param { name, shape }
}

pub const INTEGER: TypeShape = TypeShape::Scalar(ScalarKind::Integer);
pub const STRING: TypeShape = TypeShape::Scalar(ScalarKind::String);
pub const POINT: TypeShape = TypeShape::Pair(&INTEGER, &INTEGER);
pub const POINTS: TypeShape = TypeShape::List(&POINT);

/// Styling parameters valid on every shape kind, in attribute order.
pub const COMMON: &[Param] = &[
    param("fill", STRING),
    param("stroke", STRING),
    param("stroke-width", INTEGER),
];

const SIZE: &[Param] = &[param("height", INTEGER), param("width", INTEGER)];
const RECTANGLE: &[Param] = &[
    param("upper_left", POINT),
    param("height", INTEGER),
    param("width", INTEGER),
];
const LINE: &[Param] = &[param("from", POINT), param("to", POINT)];
const CIRCLE: &[Param] = &[param("center", POINT), param("radius", INTEGER)];
const ELLIPSE: &[Param] = &[
    param("center", POINT),
    param("rx", INTEGER),
    param("ry", INTEGER),
];
const POLY: &[Param] = &[param("points", POINTS)];
const TEXT: &[Param] = &[param("t", STRING), param("at", POINT)];
const TEXT_OPTIONAL: &[Param] = &[param("font-family", STRING), param("font-size", STRING)];

/// Parameters that must be present on a statement of `kind`.
#[must_use]
pub const fn required(kind: ShapeKind) -> &'static [Param] {
    match kind {
        ShapeKind::Size => SIZE,
        ShapeKind::Rectangle => RECTANGLE,
        ShapeKind::Line => LINE,
        ShapeKind::Circle => CIRCLE,
        ShapeKind::Ellipse => ELLIPSE,
        ShapeKind::Polyline | ShapeKind::Polygon => POLY,
        ShapeKind::Text => TEXT,
    }
}

/// Parameters a statement of `kind` may carry beyond the required ones.
#[must_use]
pub const fn optional(kind: ShapeKind) -> Option<&'static [Param]> {
    match kind {
        ShapeKind::Text => Some(TEXT_OPTIONAL),
        _ => None,
    }
}

/// Expected shape for `key` on `kind`.
///
/// Tables are searched in order: common, required, optional.
#[must_use]
pub fn lookup(kind: ShapeKind, key: &str) -> Option<TypeShape> {
    let tables = [Some(COMMON), Some(required(kind)), optional(kind)];
    tables
        .into_iter()
        .flatten()
        .flatten()
        .find(|p| p.name == key)
        .map(|p| p.shape)
}

/// A statement that is well-formed but violates the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("parameters {} need to be defined for {kind}", .missing.join(", "))]
    MissingParameters {
        kind: ShapeKind,
        missing: Vec<&'static str>,
    },
    #[error("unknown parameter {key} for {kind}")]
    UnknownParameter { kind: ShapeKind, key: String },
    #[error("parameter {key} for {kind} must be {expected}, got {actual}")]
    TypeMismatch {
        kind: ShapeKind,
        key: String,
        expected: TypeShape,
        actual: String,
    },
    #[error("parameter {key} defined twice for {kind}")]
    DuplicateKey { kind: ShapeKind, key: String },
    #[error("size defined twice")]
    DuplicateSize,
}

/// Check a statement's arguments against the schema for `kind`.
///
/// Missing required parameters are reported first; after that every
/// argument is checked in order and the first unknown or mistyped one
/// fails the statement.
///
/// # Errors
///
/// Returns `MissingParameters`, `UnknownParameter` or `TypeMismatch`.
pub fn validate(kind: ShapeKind, arguments: &[Argument]) -> Result<(), SemanticError> {
    let missing: Vec<&'static str> = required(kind)
        .iter()
        .filter(|p| !arguments.iter().any(|arg| arg.key == p.name))
        .map(|p| p.name)
        .collect();
    if !missing.is_empty() {
        return Err(SemanticError::MissingParameters { kind, missing });
    }

    for arg in arguments {
        let expected = lookup(kind, &arg.key).ok_or_else(|| SemanticError::UnknownParameter {
            kind,
            key: arg.key.clone(),
        })?;
        if !expected.matches(&arg.value) {
            return Err(SemanticError::TypeMismatch {
                kind,
                key: arg.key.clone(),
                expected,
                actual: arg.value.to_string(),
            });
        }
    }

    Ok(())
}

/// Reject `key` if it already appears in `existing`.
///
/// # Errors
///
/// Returns `DuplicateKey` naming the repeated key.
pub fn check_new_key(
    kind: ShapeKind,
    existing: &[Argument],
    key: &str,
) -> Result<(), SemanticError> {
    if existing.iter().any(|arg| arg.key == key) {
        return Err(SemanticError::DuplicateKey {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Run every statement-level check on a single statement.
///
/// # Errors
///
/// Returns the first `SemanticError` found.
pub fn validate_statement(statement: &Statement) -> Result<(), SemanticError> {
    for (i, arg) in statement.arguments.iter().enumerate() {
        check_new_key(statement.kind, &statement.arguments[..i], &arg.key)?;
    }
    validate(statement.kind, &statement.arguments)
}

/// Validate a whole document, including the single-`size` rule.
///
/// # Errors
///
/// Returns the first `SemanticError` found, in statement order.
pub fn validate_document(document: &Document) -> Result<(), SemanticError> {
    let mut seen_size = false;
    for statement in &document.statements {
        validate_statement(statement)?;
        if statement.kind == ShapeKind::Size {
            if seen_size {
                return Err(SemanticError::DuplicateSize);
            }
            seen_size = true;
        }
    }
    Ok(())
}
