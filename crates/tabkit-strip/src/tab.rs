#![forbid(unsafe_code)]

//! The tab record.

use tabkit_core::geometry::Rect;
use tabkit_layout::content::TabRegions;

/// Stable identifier for a tab.
///
/// Ids are assigned by the engine when a tab is created and are never
/// reused within the same engine instance, so a stale id from a removed
/// tab can never alias a live one. Interaction state stores ids, not
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TabId(u64);

impl TabId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One tab of the strip, mirroring one page of the host container.
///
/// Bounds are stored in un-scrolled container coordinates and sub-region
/// bounds in tab-local coordinates; both are recomputed wholesale by the
/// engine on every relayout, never assigned piecemeal.
#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    bounds: Rect,
    regions: TabRegions,
    has_icon: bool,
    has_text: bool,
}

impl Tab {
    pub(crate) fn new(id: TabId) -> Self {
        Self {
            id,
            bounds: Rect::default(),
            regions: TabRegions::default(),
            has_icon: false,
            has_text: false,
        }
    }

    pub(crate) fn set_layout(&mut self, bounds: Rect, regions: TabRegions) {
        self.bounds = bounds;
        self.regions = regions;
    }

    pub(crate) fn set_content_flags(&mut self, has_icon: bool, has_text: bool) {
        self.has_icon = has_icon;
        self.has_text = has_text;
    }

    /// The tab's stable id.
    #[must_use]
    pub const fn id(&self) -> TabId {
        self.id
    }

    /// Bounds in un-scrolled container coordinates.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Icon sub-region in tab-local coordinates; empty when the tab has no
    /// icon.
    #[must_use]
    pub const fn icon_bounds(&self) -> Rect {
        self.regions.icon
    }

    /// Text sub-region in tab-local coordinates; empty when the tab has no
    /// text.
    #[must_use]
    pub const fn text_bounds(&self) -> Rect {
        self.regions.text
    }

    /// Close-button sub-region in tab-local coordinates; empty when close
    /// buttons are disabled.
    #[must_use]
    pub const fn close_bounds(&self) -> Rect {
        self.regions.close
    }

    /// Whether the tab's content includes an icon.
    #[must_use]
    pub const fn has_icon(&self) -> bool {
        self.has_icon
    }

    /// Whether the tab's content includes text.
    #[must_use]
    pub const fn has_text(&self) -> bool {
        self.has_text
    }
}
