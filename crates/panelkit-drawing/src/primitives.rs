//! Drawing primitives.
//!
//! Coordinates are absolute, in the compiled unit (centimeters), with the
//! origin at the top-left of the canvas and +Y pointing down, matching the
//! SVG coordinate system the drawing ultimately serializes to.

use serde::{Deserialize, Serialize};

use panelkit_core::Rgb;

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned rectangle outline (not filled).
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Stroke color.
        color: Rgb,
    },
    /// Straight line segment.
    Line {
        /// Start x.
        x1: f64,
        /// Start y.
        y1: f64,
        /// End x.
        x2: f64,
        /// End y.
        y2: f64,
        /// Stroke color.
        color: Rgb,
    },
    /// Filled polygon. Used for dimension arrowheads.
    Polygon {
        /// Vertices in draw order.
        points: Vec<(f64, f64)>,
        /// Fill color.
        color: Rgb,
    },
    /// Text label, anchored at its center point.
    Text {
        /// Anchor x.
        x: f64,
        /// Anchor y.
        y: f64,
        /// Label content.
        content: String,
        /// Font size in drawing units.
        size: f64,
        /// Optional rotation in degrees around the anchor point.
        rotation: Option<f64>,
        /// Fill color.
        color: Rgb,
    },
}

/// A compiled panel drawing: canvas size plus an ordered primitive list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDrawing {
    /// Logical canvas width in drawing units.
    pub width: f64,
    /// Logical canvas height in drawing units.
    pub height: f64,
    /// Primitives in paint order.
    pub primitives: Vec<Primitive>,
}

impl VectorDrawing {
    /// Creates an empty drawing with the given canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Number of line primitives, across all colors.
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count()
    }

    /// Iterator over the text labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}
