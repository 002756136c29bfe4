//! Side selection state machine.
//!
//! Only sides present in the fetched [`LayoutSet`] are selectable; the
//! control surface additionally renders missing sides disabled, but the
//! state machine itself rejects the transition regardless.

use panelkit_core::{LayoutError, LayoutSet, Side};

/// Tracks which panel side is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSelector {
    current: Side,
}

impl SideSelector {
    /// Creates a selector at the initial side (left).
    pub fn new() -> Self {
        Self {
            current: Side::Left,
        }
    }

    /// The currently selected side.
    pub fn current(&self) -> Side {
        self.current
    }

    /// Attempts to switch to `side`. Rejected with
    /// [`LayoutError::MissingLayout`] when the set has no layout for it, in
    /// which case the current selection is left untouched.
    pub fn select(&mut self, set: &LayoutSet, side: Side) -> Result<(), LayoutError> {
        if !set.has_side(side) {
            return Err(LayoutError::MissingLayout { side });
        }
        self.current = side;
        Ok(())
    }

    /// The sides that can currently be selected.
    pub fn available(set: &LayoutSet) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|side| set.has_side(*side))
            .collect()
    }
}

impl Default for SideSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::{LayoutModel, Section};

    fn set_with(sides: &[Side]) -> LayoutSet {
        let layout = LayoutModel {
            height: 2.0,
            sections: vec![Section::plain(2.0)],
            doors: None,
        };
        let mut set = LayoutSet::default();
        for side in sides {
            match side {
                Side::Left => set.left_side_layout = Some(layout.clone()),
                Side::Right => set.right_side_layout = Some(layout.clone()),
                Side::Back => set.back_side_layout = Some(layout.clone()),
            }
        }
        set
    }

    #[test]
    fn test_initial_side_is_left() {
        assert_eq!(SideSelector::new().current(), Side::Left);
    }

    #[test]
    fn test_select_available_side() {
        let set = set_with(&[Side::Left, Side::Back]);
        let mut selector = SideSelector::new();
        assert!(selector.select(&set, Side::Back).is_ok());
        assert_eq!(selector.current(), Side::Back);
    }

    #[test]
    fn test_missing_side_is_rejected_and_state_kept() {
        let set = set_with(&[Side::Left]);
        let mut selector = SideSelector::new();
        let err = selector.select(&set, Side::Right).unwrap_err();
        assert_eq!(err, LayoutError::MissingLayout { side: Side::Right });
        assert_eq!(selector.current(), Side::Left);
    }

    #[test]
    fn test_available_lists_present_sides_in_order() {
        let set = set_with(&[Side::Back, Side::Left]);
        assert_eq!(SideSelector::available(&set), vec![Side::Left, Side::Back]);
    }
}
