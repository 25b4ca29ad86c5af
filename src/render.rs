//! SVG output for a validated document.
//!
//! Each drawable statement becomes one element line inside the root
//! `<svg>` tag; the last `size` statement, if any, sets the root's
//! `width` and `height`.

use std::fmt::{Display, Write as _};

use crate::ast::{Document, ShapeKind, Statement, Value};
use crate::schema::COMMON;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Render a document to SVG text.
///
/// Elements appear in source order. The document is expected to have
/// passed schema validation; attributes whose values are missing or
/// mistyped are left out rather than reported.
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = String::new();

    let _ = write!(out, "<svg xmlns=\"{SVG_NAMESPACE}\" version=\"1.1\"");
    if let Some((width, height)) = document.canvas_size() {
        crate::log::debug!(width, height, "canvas size");
        let _ = write!(out, " width=\"{width}\" height=\"{height}\"");
    }
    out.push_str(">\n");

    let elements: Vec<String> = document
        .statements
        .iter()
        .filter_map(render_element)
        .collect();
    out.push_str(&elements.join("\n"));

    out.push_str("\n</svg>");
    out
}

/// Markup for one statement; `None` for `size`, which has no element.
fn render_element(statement: &Statement) -> Option<String> {
    let mut out = String::new();

    match statement.kind {
        ShapeKind::Size => return None,
        ShapeKind::Rectangle => {
            out.push_str("<rect");
            point_attrs(&mut out, ("x", "y"), statement.get("upper_left"));
            value_attr(&mut out, "height", statement.get("height"));
            value_attr(&mut out, "width", statement.get("width"));
        }
        ShapeKind::Line => {
            out.push_str("<line");
            point_attrs(&mut out, ("x1", "y1"), statement.get("from"));
            point_attrs(&mut out, ("x2", "y2"), statement.get("to"));
        }
        ShapeKind::Circle => {
            out.push_str("<circle");
            point_attrs(&mut out, ("cx", "cy"), statement.get("center"));
            value_attr(&mut out, "r", statement.get("radius"));
        }
        ShapeKind::Ellipse => {
            out.push_str("<ellipse");
            point_attrs(&mut out, ("cx", "cy"), statement.get("center"));
            value_attr(&mut out, "rx", statement.get("rx"));
            value_attr(&mut out, "ry", statement.get("ry"));
        }
        ShapeKind::Polyline | ShapeKind::Polygon => {
            out.push('<');
            out.push_str(statement.kind.name());
            if let Some(points) = statement.get("points").and_then(Value::as_list) {
                attr(&mut out, "points", points_list(points));
            }
        }
        ShapeKind::Text => {
            out.push_str("<text");
            point_attrs(&mut out, ("x", "y"), statement.get("at"));
            value_attr(&mut out, "font-family", statement.get("font-family"));
            value_attr(&mut out, "font-size", statement.get("font-size"));
        }
    }

    for param in COMMON {
        value_attr(&mut out, param.name, statement.get(param.name));
    }

    if statement.kind == ShapeKind::Text {
        let body = statement.get("t").and_then(Value::as_str).unwrap_or_default();
        let _ = write!(out, ">{}</text>", escape_xml(body));
    } else {
        out.push_str("/>");
    }

    Some(out)
}

fn attr(out: &mut String, name: &str, value: impl Display) {
    let _ = write!(out, " {name}=\"{value}\"");
}

/// Write a scalar value as an attribute, escaping strings.
fn value_attr(out: &mut String, name: &str, value: Option<&Value>) {
    match value {
        Some(Value::Int(n)) => attr(out, name, n),
        Some(Value::Str(s)) => attr(out, name, escape_xml(s)),
        _ => {}
    }
}

fn point_attrs(out: &mut String, (x_name, y_name): (&str, &str), value: Option<&Value>) {
    if let Some((x, y)) = value.and_then(point) {
        attr(out, x_name, x);
        attr(out, y_name, y);
    }
}

fn point(value: &Value) -> Option<(u64, u64)> {
    let (x, y) = value.as_pair()?;
    Some((x.as_int()?, y.as_int()?))
}

/// Space-separated `x,y` pairs, as SVG `points` expects.
fn points_list(points: &[Value]) -> String {
    points
        .iter()
        .filter_map(point)
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Argument;

    fn statement(kind: ShapeKind, args: Vec<(&str, Value)>) -> Statement {
        Statement {
            kind,
            arguments: args
                .into_iter()
                .map(|(key, value)| Argument {
                    key: key.to_string(),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_document() {
        assert_eq!(
            render(&Document::default()),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\n</svg>"
        );
    }

    #[test]
    fn rect_attribute_order() {
        let rect = statement(
            ShapeKind::Rectangle,
            vec![
                ("width", Value::Int(3)),
                ("upper_left", Value::point(3, 4)),
                ("stroke-width", Value::Int(2)),
                ("fill", Value::Str("red".to_string())),
                ("height", Value::Int(5)),
            ],
        );
        assert_eq!(
            render_element(&rect).as_deref(),
            Some(r#"<rect x="3" y="4" height="5" width="3" fill="red" stroke-width="2"/>"#)
        );
    }

    #[test]
    fn polygon_points() {
        let polygon = statement(
            ShapeKind::Polygon,
            vec![(
                "points",
                Value::List(vec![Value::point(0, 0), Value::point(4, 0), Value::point(2, 3)]),
            )],
        );
        assert_eq!(
            render_element(&polygon).as_deref(),
            Some(r#"<polygon points="0,0 4,0 2,3"/>"#)
        );
    }

    #[test]
    fn text_escapes_markup() {
        let text = statement(
            ShapeKind::Text,
            vec![
                ("t", Value::Str("a < b & \"c\"".to_string())),
                ("at", Value::point(1, 2)),
                ("font-family", Value::Str("serif".to_string())),
            ],
        );
        assert_eq!(
            render_element(&text).as_deref(),
            Some(r#"<text x="1" y="2" font-family="serif">a &lt; b &amp; &quot;c&quot;</text>"#)
        );
    }

    #[test]
    fn size_has_no_element() {
        let size = statement(
            ShapeKind::Size,
            vec![("height", Value::Int(1)), ("width", Value::Int(2))],
        );
        assert_eq!(render_element(&size), None);
    }
}
