//! Export/share adapter.
//!
//! Serializes a compiled drawing to SVG, writes it to the host's transient
//! cache location, and hands the file to the platform share facility. The
//! two I/O steps run in sequence; the share step is skipped when the write
//! fails. Exports always serialize the untransformed drawing — the
//! viewport's current scale and translation are presentation state only.
//!
//! Callers are expected to keep a single export in flight per drawing
//! (disable the trigger while one runs); nothing is enforced here. The user
//! dismissing the share sheet is a normal outcome, not an error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use panelkit_core::constants::MARGIN;
use panelkit_core::{ExportError, Side};
use panelkit_drawing::{to_svg, VectorDrawing};

/// Platform file-write and share-sheet collaborator.
#[async_trait]
pub trait ShareHost: Send + Sync {
    /// Transient cache directory for exported files.
    fn cache_dir(&self) -> PathBuf;

    /// Writes `contents` to `path`.
    async fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()>;

    /// Whether the platform can present a share surface.
    async fn is_share_available(&self) -> bool;

    /// Presents the share sheet for the file at `path`.
    async fn share(&self, path: &Path) -> std::io::Result<()>;
}

/// Computes the export filename for a drawing.
///
/// Pattern: `{hint-}layout-{side label}-{panel width}mm.svg`, the width
/// being the rounded total panel width in compiled units.
pub fn export_filename(drawing: &VectorDrawing, side: Side, task_name_hint: Option<&str>) -> String {
    let panel_width = (drawing.width - 2.0 * MARGIN).round() as i64;
    let prefix = match task_name_hint.map(slugify) {
        Some(slug) if !slug.is_empty() => format!("{}-", slug),
        _ => String::new(),
    };
    format!("{}layout-{}-{}mm.svg", prefix, side.label(), panel_width)
}

/// Serializes `drawing` and shares it through `host`.
///
/// Returns the path of the written file on success.
///
/// # Errors
/// - [`ExportError::Io`] when the file write fails (share is skipped).
/// - [`ExportError::ShareUnavailable`] when the platform has no share
///   surface; the file has already been produced at the returned-path
///   location when this is reported.
pub async fn export_drawing(
    host: &dyn ShareHost,
    drawing: &VectorDrawing,
    side: Side,
    task_name_hint: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let svg = to_svg(drawing);
    let path = host
        .cache_dir()
        .join(export_filename(drawing, side, task_name_hint));

    host.write_file(&path, &svg).await?;
    tracing::debug!(path = %path.display(), bytes = svg.len(), "Exported drawing written");

    if !host.is_share_available().await {
        tracing::warn!("Share surface unavailable; exported file kept at {}", path.display());
        return Err(ExportError::ShareUnavailable);
    }

    host.share(&path).await?;
    tracing::info!(side = %side, path = %path.display(), "Drawing shared");
    Ok(path)
}

/// Reduces a task name to a filename-safe slug.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
