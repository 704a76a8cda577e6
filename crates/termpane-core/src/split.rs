// ABOUTME: Split axis and unit types shared by the layout engine and config.
// ABOUTME: Horizontal splits stack panes top/bottom, vertical ones side by side.

use serde::{Deserialize, Serialize};

/// Orientation of the divider line between the two children of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Divider runs horizontally: children are stacked and share the height
    Horizontal,
    /// Divider runs vertically: children sit side by side and share the width
    Vertical,
}

impl SplitKind {
    /// True when this split divides the width of the pane
    pub fn partitions_width(&self) -> bool {
        matches!(self, SplitKind::Vertical)
    }

    /// True when this split divides the height of the pane
    pub fn partitions_height(&self) -> bool {
        matches!(self, SplitKind::Horizontal)
    }
}

/// How the magnitude of a split value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitUnit {
    /// Percentage of the split axis, rounded down
    #[default]
    Percent,
    /// Fixed number of terminal cells
    Char,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_mapping() {
        assert!(SplitKind::Vertical.partitions_width());
        assert!(!SplitKind::Vertical.partitions_height());
        assert!(SplitKind::Horizontal.partitions_height());
        assert!(!SplitKind::Horizontal.partitions_width());
    }

    #[test]
    fn default_unit_is_percent() {
        assert_eq!(SplitUnit::default(), SplitUnit::Percent);
    }
}
