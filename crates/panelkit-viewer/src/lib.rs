//! # PanelKit Viewer
//!
//! The interactive layer around the pure drawing pipeline: choosing which
//! panel side to display, the pinch/pan/zoom viewport state machine, and
//! exporting the compiled drawing through the platform share facility.
//!
//! ## Architecture
//!
//! ```text
//! LayoutSource (async fetch, keyed by vehicle id)
//!   └── ViewerSession
//!         ├── SideSelector      (left/right/back, missing sides rejected)
//!         ├── drawing cache     (keyed by side + theme)
//!         └── ViewportController (live + committed transform, springs)
//!
//! export_drawing() ──► ShareHost (file write + share sheet)
//! ```

pub mod export;
pub mod session;
pub mod side_selector;
pub mod source;
pub mod viewport;

pub use export::{export_drawing, export_filename, ShareHost};
pub use session::ViewerSession;
pub use side_selector::SideSelector;
pub use source::LayoutSource;
pub use viewport::{ViewportController, ViewportTransform};
