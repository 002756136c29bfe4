//! Error handling for PanelKit
//!
//! Two failure surfaces exist in this subsystem:
//! - Selection errors (asking for a panel side the vehicle does not have),
//!   which the viewer absorbs locally and never shows to the user.
//! - Export errors (file write / share sheet), which are surfaced to the
//!   caller for user-visible reporting.
//!
//! Geometry anomalies (a door-flagged section with no offset fields) are
//! deliberately *not* errors: the compiler skips the cutout, logs a warning,
//! and produces a visually incomplete but valid drawing.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::model::Side;

/// Layout selection error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested panel side has no layout model.
    ///
    /// Recovered locally: the side selector rejects the transition and the
    /// control surface renders that option disabled.
    #[error("No layout available for side {side}")]
    MissingLayout {
        /// The side that was requested.
        side: Side,
    },
}

/// Export/share error type.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the serialized drawing to the cache location failed.
    ///
    /// Surfaced to the user as a failure notification; no automatic retry.
    #[error("Failed to write exported drawing: {0}")]
    Io(#[from] std::io::Error),

    /// The platform cannot present a share surface.
    ///
    /// The file was produced successfully, so this is reported as a milder
    /// notification than an I/O failure.
    #[error("Sharing is not available on this platform")]
    ShareUnavailable,
}
