//! Shared drawing and viewport constants.
//!
//! The layout model is authored in meters; the compiled drawing works in
//! centimeters so that dimension labels read as whole numbers a technician
//! can transfer to sheet material directly.

/// Drawing units per meter of panel (meters to centimeters).
pub const UNITS_PER_METER: f64 = 100.0;

/// Margin around the panel outline, in drawing units. Leaves room for the
/// vertical height callout on the left side.
pub const MARGIN: f64 = 60.0;

/// Extra space below the panel for the per-section width callouts.
pub const DIM_EXTRA_BOTTOM: f64 = 40.0;

/// Gap between the panel's bottom edge and the width dimension lines.
pub const DIM_LINE_GAP: f64 = 20.0;

/// Distance from the left margin to the vertical height dimension line.
pub const HEIGHT_DIM_INSET: f64 = 30.0;

/// Gap between a width dimension line and its numeric label.
pub const DIM_LABEL_GAP: f64 = 14.0;

/// Arrowhead length along the dimension line, in drawing units.
pub const ARROW_LENGTH: f64 = 8.0;

/// Arrowhead half-width perpendicular to the dimension line.
pub const ARROW_HALF_WIDTH: f64 = 3.0;

/// Font size for dimension labels, in drawing units.
pub const DIM_FONT_SIZE: f64 = 12.0;

/// Stroke width for all drawing primitives, in drawing units.
pub const STROKE_WIDTH: f64 = 1.5;

/// Minimum viewport scale.
pub const MIN_SCALE: f64 = 0.5;

/// Maximum viewport scale.
pub const MAX_SCALE: f64 = 3.0;

/// Scale increment applied by the zoom in/out buttons.
pub const ZOOM_STEP: f64 = 0.5;
