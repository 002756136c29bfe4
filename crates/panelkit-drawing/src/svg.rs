//! SVG serializer for compiled drawings.
//!
//! The document's viewBox is exactly the compiled canvas, so external
//! consumers (printers, design tools) can rely on every coordinate and
//! stroke width being expressed in the compiled unit. Serialization ignores
//! the viewer's transform: exports always reflect the untransformed, "fit"
//! diagram.

use std::fmt::Write as _;

use panelkit_core::constants::STROKE_WIDTH;

use crate::primitives::{Primitive, VectorDrawing};

/// Serializes a drawing to an SVG document.
pub fn to_svg(drawing: &VectorDrawing) -> String {
    let mut out = String::with_capacity(1024);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = drawing.width,
        h = drawing.height,
    );

    for primitive in &drawing.primitives {
        match primitive {
            Primitive::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let _ = write!(
                    out,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    x, y, width, height, color, STROKE_WIDTH,
                );
            }
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => {
                let _ = write!(
                    out,
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    x1, y1, x2, y2, color, STROKE_WIDTH,
                );
            }
            Primitive::Polygon { points, color } => {
                let mut attr = String::new();
                for (i, (px, py)) in points.iter().enumerate() {
                    if i > 0 {
                        attr.push(' ');
                    }
                    let _ = write!(attr, "{},{}", px, py);
                }
                let _ = write!(out, "  <polygon points=\"{}\" fill=\"{}\"/>\n", attr, color);
            }
            Primitive::Text {
                x,
                y,
                content,
                size,
                rotation,
                color,
            } => {
                let _ = write!(
                    out,
                    "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\" font-family=\"sans-serif\" text-anchor=\"middle\"",
                    x, y, color, size,
                );
                if let Some(deg) = rotation {
                    let _ = write!(out, " transform=\"rotate({} {} {})\"", deg, x, y);
                }
                let _ = write!(out, ">{}</text>\n", escape(content));
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

/// Escapes text content for XML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
