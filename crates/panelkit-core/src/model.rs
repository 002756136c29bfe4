//! Layout data model.
//!
//! A vehicle carries up to three schematic faces (left/"motorista",
//! right/"sapo", back/"traseira"), each described by a [`LayoutModel`]: a
//! panel height plus an ordered, left-to-right run of sections, some of
//! which contain door cutouts.
//!
//! Door cutouts exist in two historical encodings that both remain live in
//! upstream data:
//! - per-section fields (`door_offset` measured down from the top — legacy —
//!   or `door_height` measured up from the bottom — current);
//! - an absolute `doors` list of rectangles positioned from the panel's
//!   left edge, which takes precedence over the per-section fields.
//!
//! The model is kept as-received; reconciling the encodings is the drawing
//! crate's job. All linear fields are meters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One horizontal slice of a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section width in meters. Always positive.
    pub width: f64,
    /// Whether this section contains a door cutout.
    #[serde(default)]
    pub is_door: bool,
    /// Legacy encoding: distance from the panel's *top* edge down to the
    /// top of the door opening, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_offset: Option<f64>,
    /// Current encoding: distance from the panel's *bottom* edge up to the
    /// top of the door opening, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_height: Option<f64>,
}

impl Section {
    /// Creates a plain (non-door) section.
    pub fn plain(width: f64) -> Self {
        Self {
            width,
            is_door: false,
            door_offset: None,
            door_height: None,
        }
    }

    /// Creates a door section using the current bottom-up encoding.
    pub fn door_with_height(width: f64, door_height: f64) -> Self {
        Self {
            width,
            is_door: true,
            door_offset: None,
            door_height: Some(door_height),
        }
    }

    /// Creates a door section using the legacy top-down encoding.
    pub fn door_with_offset(width: f64, door_offset: f64) -> Self {
        Self {
            width,
            is_door: true,
            door_offset: Some(door_offset),
            door_height: None,
        }
    }
}

/// A door cutout positioned absolutely from the panel's left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Distance from the panel's left edge to the door's left edge, meters.
    pub position: f64,
    /// Door width in meters.
    pub width: f64,
    /// Distance from the panel's top edge to the top of the opening, meters.
    pub offset_top: f64,
}

/// Schematic description of one panel side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutModel {
    /// Panel height in meters.
    pub height: f64,
    /// Sections ordered left to right.
    pub sections: Vec<Section>,
    /// Absolute door rectangles. When present and non-empty, takes
    /// precedence over the sections' own door fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<Vec<Door>>,
}

impl LayoutModel {
    /// Total panel width in meters (sum of section widths).
    pub fn total_width(&self) -> f64 {
        self.sections.iter().map(|s| s.width).sum()
    }

    /// Number of sections in the panel.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether any door cutout is declared, in either encoding.
    pub fn has_doors(&self) -> bool {
        if let Some(doors) = &self.doors {
            if !doors.is_empty() {
                return true;
            }
        }
        self.sections.iter().any(|s| s.is_door)
    }
}

/// One of the three schematic faces of a vehicle body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Driver side ("motorista").
    Left,
    /// Curb side ("sapo").
    Right,
    /// Rear face ("traseira").
    Back,
}

impl Side {
    /// All sides in display order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Back];

    /// Portuguese label used in export filenames and the side buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "motorista",
            Self::Right => "sapo",
            Self::Back => "traseira",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "motorista" => Ok(Self::Left),
            "right" | "sapo" => Ok(Self::Right),
            "back" | "traseira" => Ok(Self::Back),
            _ => Err(format!("Unknown side: {}", s)),
        }
    }
}

/// The up-to-three layouts fetched for one vehicle.
///
/// Immutable for the lifetime of a viewer session. A side whose layout is
/// `None` is a "missing side" and must be unselectable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSet {
    /// Layout for the driver side, if the vehicle has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_side_layout: Option<LayoutModel>,
    /// Layout for the curb side, if the vehicle has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_side_layout: Option<LayoutModel>,
    /// Layout for the rear face, if the vehicle has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_side_layout: Option<LayoutModel>,
}

impl LayoutSet {
    /// Returns the layout for the given side, if present.
    pub fn side(&self, side: Side) -> Option<&LayoutModel> {
        match side {
            Side::Left => self.left_side_layout.as_ref(),
            Side::Right => self.right_side_layout.as_ref(),
            Side::Back => self.back_side_layout.as_ref(),
        }
    }

    /// Whether the given side carries a layout.
    pub fn has_side(&self, side: Side) -> bool {
        self.side(side).is_some()
    }
}
