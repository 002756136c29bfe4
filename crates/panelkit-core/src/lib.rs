//! # PanelKit Core
//!
//! Core types for the truck side-panel layout viewer.
//! Provides the layout data model fetched from the ERP backend, the
//! light/dark stroke palettes, shared drawing constants, and the error
//! taxonomy used across the workspace.

pub mod constants;
pub mod error;
pub mod model;
pub mod theme;

pub use error::{ExportError, LayoutError};
pub use model::{Door, LayoutModel, LayoutSet, Section, Side};
pub use theme::{Rgb, StrokeColors, ThemeMode};
