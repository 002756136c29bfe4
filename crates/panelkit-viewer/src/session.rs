//! Viewer session: one vehicle's layouts, the selected side, the compiled
//! drawing cache, and the viewport transform.
//!
//! A compiled drawing is a pure value of `(side, layout, colors)`, so it is
//! cached per `(side, theme)` for the session's immutable layout set and
//! recomputed lazily. Switching sides resets the viewport to identity in
//! the same step that picks the new drawing, so a frame never renders side
//! A's transform over side B's geometry.

use std::collections::HashMap;

use panelkit_core::{LayoutError, LayoutSet, Side, StrokeColors, ThemeMode};
use panelkit_drawing::{compile, VectorDrawing};

use crate::side_selector::SideSelector;
use crate::source::LayoutSource;
use crate::viewport::ViewportController;

/// Interactive state for one vehicle's panel viewer.
#[derive(Debug)]
pub struct ViewerSession {
    layout_set: LayoutSet,
    selector: SideSelector,
    theme: ThemeMode,
    colors: StrokeColors,
    viewport: ViewportController,
    cache: HashMap<(Side, ThemeMode), VectorDrawing>,
}

impl ViewerSession {
    /// Creates a session over an already-fetched layout set.
    pub fn new(layout_set: LayoutSet, theme: ThemeMode) -> Self {
        Self {
            layout_set,
            selector: SideSelector::new(),
            theme,
            colors: StrokeColors::for_mode(theme),
            viewport: ViewportController::new(),
            cache: HashMap::new(),
        }
    }

    /// Fetches the layout set for `vehicle_id` and opens a session on it.
    pub async fn for_vehicle(
        source: &dyn LayoutSource,
        vehicle_id: &str,
        theme: ThemeMode,
    ) -> anyhow::Result<Self> {
        let layout_set = source.fetch_layout_set(vehicle_id).await?;
        tracing::debug!(
            vehicle_id,
            sides = ?SideSelector::available(&layout_set),
            "Layout set fetched"
        );
        Ok(Self::new(layout_set, theme))
    }

    /// The side currently displayed.
    pub fn current_side(&self) -> Side {
        self.selector.current()
    }

    /// The sides the control surface should offer enabled.
    pub fn available_sides(&self) -> Vec<Side> {
        SideSelector::available(&self.layout_set)
    }

    /// The layout set this session was opened on.
    pub fn layout_set(&self) -> &LayoutSet {
        &self.layout_set
    }

    /// Mutable access to the viewport controller for gesture routing.
    pub fn viewport(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    /// Read access to the viewport controller.
    pub fn viewport_ref(&self) -> &ViewportController {
        &self.viewport
    }

    /// Switches the displayed side.
    ///
    /// On success the viewport snaps to identity; the new side's drawing is
    /// compiled on the next [`Self::current_drawing`] call, so transform and
    /// geometry change together. A missing side leaves everything untouched.
    pub fn select_side(&mut self, side: Side) -> Result<(), LayoutError> {
        self.selector.select(&self.layout_set, side)?;
        self.viewport.snap_identity();
        tracing::debug!(side = %side, "Side selected");
        Ok(())
    }

    /// Applies a theme change, invalidating every cached drawing.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.colors = StrokeColors::for_mode(theme);
        self.cache.clear();
        tracing::debug!(?theme, "Theme changed; drawing cache cleared");
    }

    /// The current theme mode.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// The drawing for the current side, compiled on first use and cached.
    ///
    /// `None` when the current side has no layout (possible only for the
    /// initial side; accepted transitions require one).
    pub fn current_drawing(&mut self) -> Option<&VectorDrawing> {
        let side = self.selector.current();
        let layout = self.layout_set.side(side)?;
        let key = (side, self.theme);
        if !self.cache.contains_key(&key) {
            self.cache.insert(key, compile(layout, &self.colors));
        }
        self.cache.get(&key)
    }
}
