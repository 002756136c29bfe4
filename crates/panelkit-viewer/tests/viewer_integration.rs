//! Integration tests for the viewer layer: session + selector + viewport
//! against a stub layout source, and the export path against a
//! tempdir-backed share host.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use panelkit_core::{
    Door, ExportError, LayoutModel, LayoutSet, Section, Side, StrokeColors, ThemeMode,
};
use panelkit_drawing::compile;
use panelkit_viewer::{
    export_drawing, LayoutSource, ShareHost, ViewerSession, ViewportTransform,
};

fn sample_layout() -> LayoutModel {
    LayoutModel {
        height: 2.5,
        sections: vec![
            Section::plain(1.0),
            Section::door_with_height(1.5, 1.8),
            Section::plain(1.0),
        ],
        doors: None,
    }
}

fn sample_set() -> LayoutSet {
    LayoutSet {
        left_side_layout: Some(sample_layout()),
        right_side_layout: Some(LayoutModel {
            height: 2.5,
            sections: vec![Section::plain(3.5)],
            doors: Some(vec![Door {
                position: 1.0,
                width: 1.5,
                offset_top: 0.7,
            }]),
        }),
        back_side_layout: None,
    }
}

struct StubSource {
    set: LayoutSet,
}

#[async_trait]
impl LayoutSource for StubSource {
    async fn fetch_layout_set(&self, _vehicle_id: &str) -> anyhow::Result<LayoutSet> {
        Ok(self.set.clone())
    }
}

struct TempShareHost {
    dir: tempfile::TempDir,
    share_available: bool,
    shares: AtomicUsize,
}

impl TempShareHost {
    fn new(share_available: bool) -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            share_available,
            shares: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ShareHost for TempShareHost {
    fn cache_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    async fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn is_share_available(&self) -> bool {
        self.share_available
    }

    async fn share(&self, _path: &Path) -> std::io::Result<()> {
        self.shares.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Host whose cache dir does not exist, so every write fails.
struct BrokenHost;

#[async_trait]
impl ShareHost for BrokenHost {
    fn cache_dir(&self) -> PathBuf {
        PathBuf::from("/nonexistent/panelkit-cache")
    }

    async fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn is_share_available(&self) -> bool {
        true
    }

    async fn share(&self, _path: &Path) -> std::io::Result<()> {
        panic!("Share must not run after a failed write");
    }
}

#[tokio::test]
async fn session_opens_from_source_and_compiles_left_side() {
    let source = StubSource { set: sample_set() };
    let mut session = ViewerSession::for_vehicle(&source, "ABC-1234", ThemeMode::Light)
        .await
        .unwrap();

    assert_eq!(session.current_side(), Side::Left);
    assert_eq!(session.available_sides(), vec![Side::Left, Side::Right]);

    let drawing = session.current_drawing().unwrap();
    assert!((drawing.width - 470.0).abs() < 1e-9);
}

#[tokio::test]
async fn selecting_missing_side_is_a_noop() {
    let source = StubSource { set: sample_set() };
    let mut session = ViewerSession::for_vehicle(&source, "ABC-1234", ThemeMode::Light)
        .await
        .unwrap();

    let before = session.current_drawing().unwrap().clone();
    assert!(session.select_side(Side::Back).is_err());
    assert_eq!(session.current_side(), Side::Left);
    assert_eq!(session.current_drawing().unwrap(), &before);
}

#[test]
fn zoom_buttons_step_and_settle() {
    let mut session = ViewerSession::new(sample_set(), ThemeMode::Light);
    session.viewport().zoom_in();
    session.viewport().zoom_in();
    assert!((session.viewport_ref().committed().scale - 2.0).abs() < 1e-9);

    while session.viewport().tick(0.016) {}
    assert!((session.viewport_ref().live().scale - 2.0).abs() < 1e-3);
}

#[test]
fn gesture_sequence_keeps_scale_in_range() {
    let mut session = ViewerSession::new(sample_set(), ThemeMode::Light);
    let vp = session.viewport();
    vp.pinch_update(8.0);
    vp.pinch_end();
    vp.zoom_out();
    while vp.tick(0.016) {}
    vp.pan_update(-40.0, 25.0);
    vp.pan_end();
    vp.reset();
    while vp.tick(0.016) {}

    let live = vp.live();
    assert_eq!(live, ViewportTransform::IDENTITY);
    assert!((0.5..=3.0).contains(&vp.committed().scale));
}

#[tokio::test]
async fn export_writes_svg_and_shares_it() {
    let host = TempShareHost::new(true);
    let drawing = compile(&sample_layout(), &StrokeColors::light());

    let path = export_drawing(&host, &drawing, Side::Left, Some("Bau 12"))
        .await
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "bau-12-layout-motorista-350mm.svg"
    );
    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(contents.starts_with("<svg "));
    assert!(contents.contains("viewBox=\"0 0 470 410\""));
    assert_eq!(host.shares.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn export_without_share_surface_still_produces_the_file() {
    let host = TempShareHost::new(false);
    let drawing = compile(&sample_layout(), &StrokeColors::light());

    let err = export_drawing(&host, &drawing, Side::Right, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::ShareUnavailable));

    // The write happened before the share check.
    let expected = host.cache_dir().join("layout-sapo-350mm.svg");
    assert!(tokio::fs::metadata(&expected).await.is_ok());
    assert_eq!(host.shares.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_write_skips_share() {
    let host = BrokenHost;
    let drawing = compile(&sample_layout(), &StrokeColors::light());

    let err = export_drawing(&host, &drawing, Side::Left, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[tokio::test]
async fn export_reflects_untransformed_drawing() {
    let host = TempShareHost::new(true);
    let mut session = ViewerSession::new(sample_set(), ThemeMode::Dark);

    // Zoom and pan first; the export must not be affected.
    session.viewport().pinch_update(2.5);
    session.viewport().pinch_end();
    session.viewport().pan_update(120.0, -30.0);
    session.viewport().pan_end();

    let side = session.current_side();
    let drawing = session.current_drawing().unwrap().clone();
    let path = export_drawing(&host, &drawing, side, None).await.unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(contents.contains("viewBox=\"0 0 470 410\""));
    assert!(!contents.contains("scale"));
}
