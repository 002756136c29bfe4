//! Layout data source boundary.
//!
//! The backend supplies one [`LayoutSet`] per vehicle identifier. It is
//! fetched once per session and treated as immutable until the identifier
//! changes or the viewer is torn down.

use async_trait::async_trait;

use panelkit_core::LayoutSet;

/// Supplies panel layouts, keyed by vehicle identifier.
#[async_trait]
pub trait LayoutSource: Send + Sync {
    /// Fetches the layout set for one vehicle.
    async fn fetch_layout_set(&self, vehicle_id: &str) -> anyhow::Result<LayoutSet>;
}
