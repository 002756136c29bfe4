//! Door cutout resolver.
//!
//! Upstream data carries door cutouts in two encodings that both remain in
//! circulation:
//!
//! - an absolute `doors` list of rectangles positioned from the panel's
//!   left edge (takes precedence when present and non-empty);
//! - per-section fields, themselves split between the current convention
//!   (`door_height`, measured up from the panel bottom) and the legacy one
//!   (`door_offset`, measured down from the panel top).
//!
//! Whatever the source, a door renders as the same three segments: left
//! edge, right edge, and top edge of the opening, the vertical edges
//! running down to the panel's bottom. A door-flagged section with neither
//! offset field gets no cutout at all; that is a data anomaly we log and
//! absorb, never an error.
//!
//! The two per-section fields are not algebraically inverse if the panel
//! height changed between model versions. A record carrying both uses
//! `door_height` unconditionally, matching the upstream behavior. Known
//! data-migration hazard; do not "fix" it here.

use panelkit_core::constants::{MARGIN, UNITS_PER_METER};
use panelkit_core::{Door, LayoutModel, Section, StrokeColors};

use crate::primitives::{Primitive, VectorDrawing};

/// Which encoding a layout's doors arrive in.
enum DoorEncoding<'a> {
    /// Absolute rectangles from `layout.doors`.
    Absolute(&'a [Door]),
    /// Per-section `is_door` flags and offset fields.
    PerSection(&'a [Section]),
}

impl<'a> DoorEncoding<'a> {
    fn of(layout: &'a LayoutModel) -> Self {
        match &layout.doors {
            Some(doors) if !doors.is_empty() => Self::Absolute(doors),
            _ => Self::PerSection(&layout.sections),
        }
    }
}

/// Emits the cutout segments for every door in the layout.
pub(crate) fn emit_cutouts(
    layout: &LayoutModel,
    panel_height: f64,
    colors: &StrokeColors,
    drawing: &mut VectorDrawing,
) {
    match DoorEncoding::of(layout) {
        DoorEncoding::Absolute(doors) => {
            for door in doors {
                let left = MARGIN + door.position * UNITS_PER_METER;
                let right = left + door.width * UNITS_PER_METER;
                let top = MARGIN + door.offset_top * UNITS_PER_METER;
                emit_door(left, right, top, panel_height, colors, drawing);
            }
        }
        DoorEncoding::PerSection(sections) => {
            let mut x = MARGIN;
            for (i, section) in sections.iter().enumerate() {
                let left = x;
                x += section.width * UNITS_PER_METER;
                if !section.is_door {
                    continue;
                }
                let Some(top) = opening_top(section, panel_height) else {
                    tracing::warn!(
                        section = i,
                        "Door-flagged section has no doorHeight or doorOffset; skipping cutout"
                    );
                    continue;
                };
                emit_door(left, x, top, panel_height, colors, drawing);
            }
        }
    }
}

/// Y coordinate of the opening's top edge, or `None` when the section
/// declares a door but no geometry for it. `door_height` wins when both
/// fields are present.
fn opening_top(section: &Section, panel_height: f64) -> Option<f64> {
    if let Some(door_height) = section.door_height {
        return Some(MARGIN + (panel_height - door_height * UNITS_PER_METER));
    }
    section
        .door_offset
        .map(|offset| MARGIN + offset * UNITS_PER_METER)
}

/// The three segments of one cutout: left edge, right edge, top edge.
fn emit_door(
    left: f64,
    right: f64,
    top: f64,
    panel_height: f64,
    colors: &StrokeColors,
    drawing: &mut VectorDrawing,
) {
    let bottom = MARGIN + panel_height;
    drawing.primitives.push(Primitive::Line {
        x1: left,
        y1: top,
        x2: left,
        y2: bottom,
        color: colors.stroke,
    });
    drawing.primitives.push(Primitive::Line {
        x1: right,
        y1: top,
        x2: right,
        y2: bottom,
        color: colors.stroke,
    });
    drawing.primitives.push(Primitive::Line {
        x1: left,
        y1: top,
        x2: right,
        y2: top,
        color: colors.stroke,
    });
}
