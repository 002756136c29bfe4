//! # PanelKit Drawing
//!
//! Compiles a panel layout into a resolution-independent vector drawing.
//!
//! The whole pipeline is pure: `(LayoutModel, StrokeColors)` in, an ordered
//! primitive list out, no I/O and no ambient state. Identical inputs always
//! produce an identical primitive list, so drawings are safe to cache by
//! `(side, layout, theme)` and to compare byte-for-byte in tests.
//!
//! ## Pipeline
//!
//! ```text
//! LayoutModel ──► compile()
//!                   ├── panel outline + section dividers
//!                   ├── doors::emit_cutouts()      (both door encodings)
//!                   └── dimensions::emit_callouts() (width + height arrows)
//!                 ──► VectorDrawing ──► svg::to_svg() ──► String
//! ```

pub mod compiler;
pub mod dimensions;
pub mod doors;
pub mod primitives;
pub mod svg;

pub use compiler::compile;
pub use primitives::{Primitive, VectorDrawing};
pub use svg::to_svg;
