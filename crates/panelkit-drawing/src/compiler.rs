//! Layout geometry compiler.
//!
//! Turns a [`LayoutModel`] into a [`VectorDrawing`]: panel outline, section
//! dividers, door cutouts, and dimension callouts, in that paint order.

use panelkit_core::constants::{DIM_EXTRA_BOTTOM, MARGIN, UNITS_PER_METER};
use panelkit_core::{LayoutModel, StrokeColors};

use crate::dimensions;
use crate::doors;
use crate::primitives::{Primitive, VectorDrawing};

/// Compiles a layout into a vector drawing.
///
/// Pure and deterministic: identical `(layout, colors)` inputs yield an
/// identical primitive list. The canvas is sized
/// `(Σ section widths · 100 + 2·MARGIN) × (height · 100 + 2·MARGIN + DIM_EXTRA_BOTTOM)`
/// so the dimension callouts below and left of the panel always fit.
pub fn compile(layout: &LayoutModel, colors: &StrokeColors) -> VectorDrawing {
    let section_widths: Vec<f64> = layout
        .sections
        .iter()
        .map(|s| s.width * UNITS_PER_METER)
        .collect();
    let panel_width: f64 = section_widths.iter().sum();
    let panel_height = layout.height * UNITS_PER_METER;

    let mut drawing = VectorDrawing::new(
        panel_width + 2.0 * MARGIN,
        panel_height + 2.0 * MARGIN + DIM_EXTRA_BOTTOM,
    );

    drawing.primitives.push(Primitive::Rect {
        x: MARGIN,
        y: MARGIN,
        width: panel_width,
        height: panel_height,
        color: colors.stroke,
    });

    emit_dividers(layout, &section_widths, panel_height, colors, &mut drawing);
    doors::emit_cutouts(layout, panel_height, colors, &mut drawing);
    dimensions::emit_callouts(&section_widths, panel_height, colors, &mut drawing);

    drawing
}

/// Emits a vertical divider at every boundary between two adjacent sections
/// where neither side is a door. Boundaries touching a door section are left
/// open: the door's own cutout edges already mark them.
fn emit_dividers(
    layout: &LayoutModel,
    section_widths: &[f64],
    panel_height: f64,
    colors: &StrokeColors,
    drawing: &mut VectorDrawing,
) {
    let mut x = MARGIN;
    for (i, width) in section_widths.iter().enumerate() {
        x += width;
        let Some(next) = layout.sections.get(i + 1) else {
            break;
        };
        if layout.sections[i].is_door || next.is_door {
            continue;
        }
        drawing.primitives.push(Primitive::Line {
            x1: x,
            y1: MARGIN,
            x2: x,
            y2: MARGIN + panel_height,
            color: colors.divider,
        });
    }
}
