#![forbid(unsafe_code)]

//! Strip configuration types.

use serde::{Deserialize, Serialize};
use tabkit_core::geometry::{Rotation, Sides, Size};

/// The container edge the tab strip is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Strip along the top edge; tabs run left to right.
    #[default]
    Top,
    /// Strip along the bottom edge; tabs run left to right.
    Bottom,
    /// Strip along the left edge; tabs run top to bottom.
    Left,
    /// Strip along the right edge; tabs run top to bottom.
    Right,
}

impl Edge {
    /// Whether the main axis of this edge is horizontal.
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Alignment along the main axis.
///
/// `Near` is the left/top end of the strip, `Far` the right/bottom end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Near,
    Center,
    Far,
}

/// How tabs are sized along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingPolicy {
    /// Each tab is sized to its measured content.
    #[default]
    AutoFit,
    /// Every tab gets [`StripOptions::fixed_tab_size`].
    Fixed,
    /// Tabs divide the strip length evenly, with a minimum floor per tab
    /// and the rounding remainder absorbed by the last tab.
    Stretch,
}

/// The direction tab content flows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Content reads left to right.
    #[default]
    Right,
    /// Content is rotated 90°, reading top to bottom.
    Down,
    /// Content is rotated 90°, reading bottom to top.
    Up,
}

impl TextDirection {
    /// Whether content is rotated into a vertical flow.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !matches!(self, TextDirection::Right)
    }

    /// The rotation that maps reading-orientation rectangles into the tab.
    #[inline]
    #[must_use]
    pub const fn rotation(self) -> Rotation {
        match self {
            TextDirection::Right => Rotation::None,
            TextDirection::Down => Rotation::Clockwise,
            TextDirection::Up => Rotation::CounterClockwise,
        }
    }
}

/// Configuration of the tab strip layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    /// The container edge the strip is mounted on.
    pub edge: Edge,
    /// Sizing policy for tab main-axis extents.
    pub sizing: SizingPolicy,
    /// Alignment of the tab run within the strip. Ignored while tabs
    /// overflow; overflow forces near-anchoring.
    pub tab_alignment: Alignment,
    /// Alignment of the icon+text group inside each tab.
    pub content_alignment: Alignment,
    /// Direction tab content flows in.
    pub text_direction: TextDirection,
    /// Tab size used by [`SizingPolicy::Fixed`], authored in reading
    /// orientation (transposed for vertical text directions).
    pub fixed_tab_size: Size,
    /// Padding between a tab's border and its contents.
    pub tab_padding: Sides,
    /// Spacing between adjacent content elements (icon, text, close).
    pub content_spacing: i32,
    /// Whether close buttons are laid out inside tabs.
    pub show_close_buttons: bool,
    /// Minimum main-axis size of a stretched tab.
    pub min_stretch_size: i32,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            edge: Edge::Top,
            sizing: SizingPolicy::AutoFit,
            tab_alignment: Alignment::Near,
            content_alignment: Alignment::Near,
            text_direction: TextDirection::Right,
            fixed_tab_size: Size::new(75, 23),
            tab_padding: Sides::all(4),
            content_spacing: 3,
            show_close_buttons: false,
            min_stretch_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_axis() {
        assert!(Edge::Top.is_horizontal());
        assert!(Edge::Bottom.is_horizontal());
        assert!(!Edge::Left.is_horizontal());
        assert!(!Edge::Right.is_horizontal());
    }

    #[test]
    fn text_direction_rotation() {
        assert_eq!(TextDirection::Right.rotation(), Rotation::None);
        assert_eq!(TextDirection::Down.rotation(), Rotation::Clockwise);
        assert_eq!(TextDirection::Up.rotation(), Rotation::CounterClockwise);
        assert!(!TextDirection::Right.is_vertical());
        assert!(TextDirection::Down.is_vertical());
    }

    #[test]
    fn default_options_match_stock_appearance() {
        let opts = StripOptions::default();
        assert_eq!(opts.fixed_tab_size, Size::new(75, 23));
        assert_eq!(opts.tab_padding, Sides::all(4));
        assert_eq!(opts.content_spacing, 3);
        assert!(!opts.show_close_buttons);
    }
}
