//! Dimension annotator.
//!
//! Emits one horizontal double-arrow callout per section below the panel
//! and a single vertical double-arrow for the overall height to the left of
//! it. Labels are plain integers in the compiled unit (centimeters) with no
//! suffix: the diagram is read by a technician laying out physical sheet
//! material, not as a general-purpose measurement tool.

use panelkit_core::constants::{
    ARROW_HALF_WIDTH, ARROW_LENGTH, DIM_FONT_SIZE, DIM_LABEL_GAP, DIM_LINE_GAP, HEIGHT_DIM_INSET,
    MARGIN,
};
use panelkit_core::StrokeColors;

use crate::primitives::{Primitive, VectorDrawing};

/// Emits all dimension callouts for a panel.
pub(crate) fn emit_callouts(
    section_widths: &[f64],
    panel_height: f64,
    colors: &StrokeColors,
    drawing: &mut VectorDrawing,
) {
    let dim_y = MARGIN + panel_height + DIM_LINE_GAP;

    let mut x = MARGIN;
    for width in section_widths {
        let left = x;
        let right = x + width;
        x = right;

        drawing.primitives.push(Primitive::Line {
            x1: left,
            y1: dim_y,
            x2: right,
            y2: dim_y,
            color: colors.dimension,
        });
        drawing
            .primitives
            .push(arrowhead_left(left, dim_y, colors));
        drawing
            .primitives
            .push(arrowhead_right(right, dim_y, colors));
        drawing.primitives.push(Primitive::Text {
            x: (left + right) / 2.0,
            y: dim_y + DIM_LABEL_GAP,
            content: format_units(*width),
            size: DIM_FONT_SIZE,
            rotation: None,
            color: colors.dimension,
        });
    }

    let dim_x = MARGIN - HEIGHT_DIM_INSET;
    let top = MARGIN;
    let bottom = MARGIN + panel_height;

    drawing.primitives.push(Primitive::Line {
        x1: dim_x,
        y1: top,
        x2: dim_x,
        y2: bottom,
        color: colors.dimension,
    });
    drawing.primitives.push(arrowhead_up(dim_x, top, colors));
    drawing
        .primitives
        .push(arrowhead_down(dim_x, bottom, colors));
    drawing.primitives.push(Primitive::Text {
        x: dim_x,
        y: (top + bottom) / 2.0,
        content: format_units(panel_height),
        size: DIM_FONT_SIZE,
        rotation: Some(-90.0),
        color: colors.dimension,
    });
}

/// Renders a width/height value as the integer label printed on the arrow.
fn format_units(units: f64) -> String {
    format!("{}", units.round() as i64)
}

fn arrowhead_left(tip_x: f64, y: f64, colors: &StrokeColors) -> Primitive {
    Primitive::Polygon {
        points: vec![
            (tip_x, y),
            (tip_x + ARROW_LENGTH, y - ARROW_HALF_WIDTH),
            (tip_x + ARROW_LENGTH, y + ARROW_HALF_WIDTH),
        ],
        color: colors.dimension,
    }
}

fn arrowhead_right(tip_x: f64, y: f64, colors: &StrokeColors) -> Primitive {
    Primitive::Polygon {
        points: vec![
            (tip_x, y),
            (tip_x - ARROW_LENGTH, y - ARROW_HALF_WIDTH),
            (tip_x - ARROW_LENGTH, y + ARROW_HALF_WIDTH),
        ],
        color: colors.dimension,
    }
}

fn arrowhead_up(x: f64, tip_y: f64, colors: &StrokeColors) -> Primitive {
    Primitive::Polygon {
        points: vec![
            (x, tip_y),
            (x - ARROW_HALF_WIDTH, tip_y + ARROW_LENGTH),
            (x + ARROW_HALF_WIDTH, tip_y + ARROW_LENGTH),
        ],
        color: colors.dimension,
    }
}

fn arrowhead_down(x: f64, tip_y: f64, colors: &StrokeColors) -> Primitive {
    Primitive::Polygon {
        points: vec![
            (x, tip_y),
            (x - ARROW_HALF_WIDTH, tip_y - ARROW_LENGTH),
            (x + ARROW_HALF_WIDTH, tip_y - ARROW_LENGTH),
        ],
        color: colors.dimension,
    }
}
