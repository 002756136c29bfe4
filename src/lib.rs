//! # PanelKit
//!
//! Compiler and interactive viewer for truck body side-panel layouts.
//!
//! A vehicle's panel sides arrive as schematic layout models (sections with
//! optional door cutouts, in meters) from the ERP backend; PanelKit turns
//! them into dimensioned vector diagrams a technician can lay out sheet
//! material from, presents them behind a pinch/pan/zoom viewport, and
//! exports them as SVG through the platform share facility.
//!
//! ## Architecture
//!
//! PanelKit is organized as a workspace with multiple crates:
//!
//! 1. **panelkit-core** - Layout data model, theme palettes, errors, constants
//! 2. **panelkit-drawing** - Pure layout→vector compiler and SVG serializer
//! 3. **panelkit-viewer** - Side selection, viewport state machine, export
//! 4. **panelkit** - Facade library and the offline CLI binary

pub use panelkit_core::{
    Door, ExportError, LayoutError, LayoutModel, LayoutSet, Rgb, Section, Side, StrokeColors,
    ThemeMode,
};
pub use panelkit_drawing::{compile, to_svg, Primitive, VectorDrawing};
pub use panelkit_viewer::{
    export_drawing, export_filename, LayoutSource, ShareHost, SideSelector, ViewerSession,
    ViewportController, ViewportTransform,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, honoring the `RUST_LOG`
/// environment variable and defaulting to `INFO`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
