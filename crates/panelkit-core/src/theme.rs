//! Stroke palettes derived from the host theme.
//!
//! The host application only tells us whether dark mode is active; this
//! module maps that to the three stroke roles the drawing uses. Colors are
//! resolved once and passed *into* the compiler so it stays pure — the
//! compiler never reads ambient theme state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Ambient light/dark mode supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// Maps the host's dark-mode flag to a theme mode.
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// The three stroke roles used by a compiled drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeColors {
    /// Panel outline and door cutout edges.
    pub stroke: Rgb,
    /// Vertical dividers between adjacent plain sections.
    pub divider: Rgb,
    /// Dimension lines, arrowheads, and labels.
    pub dimension: Rgb,
}

impl StrokeColors {
    /// Palette for light mode.
    pub fn light() -> Self {
        Self {
            stroke: Rgb(0x1f, 0x29, 0x37),
            divider: Rgb(0x6b, 0x72, 0x80),
            dimension: Rgb(0x25, 0x63, 0xeb),
        }
    }

    /// Palette for dark mode.
    pub fn dark() -> Self {
        Self {
            stroke: Rgb(0xe5, 0xe7, 0xeb),
            divider: Rgb(0x9c, 0xa3, 0xaf),
            dimension: Rgb(0x60, 0xa5, 0xfa),
        }
    }

    /// Resolves the palette for a theme mode. Deterministic: the same mode
    /// always yields the same palette.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_formatting() {
        assert_eq!(Rgb(0x1f, 0x29, 0x37).to_string(), "#1f2937");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_palettes_are_deterministic_and_distinct() {
        assert_eq!(
            StrokeColors::for_mode(ThemeMode::Light),
            StrokeColors::light()
        );
        assert_eq!(StrokeColors::for_mode(ThemeMode::Dark), StrokeColors::dark());
        assert_ne!(StrokeColors::light(), StrokeColors::dark());
    }

    #[test]
    fn test_mode_from_host_flag() {
        assert_eq!(ThemeMode::from_is_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_is_dark(false), ThemeMode::Light);
    }
}
