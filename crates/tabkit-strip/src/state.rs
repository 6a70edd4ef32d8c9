#![forbid(unsafe_code)]

//! Interaction state types: derived visual state, hit-test results, and
//! the events the engine reports back to its host.

use bitflags::bitflags;
use tabkit_core::geometry::Point;

use crate::tab::TabId;

bitflags! {
    /// Derived visual state of a tab or button.
    ///
    /// Always computed at query time from the engine's pointer and
    /// selection state; never stored on the tab itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemState: u8 {
        /// The item belongs to the selected page.
        const ACTIVE = 1;
        /// The pointer is over the item.
        const HOT = 2;
        /// The primary button is down on the item.
        const PRESSED = 4;
        /// The container has input focus and the item is selected.
        const FOCUSED = 8;
        /// The item cannot currently be interacted with.
        const DISABLED = 16;
    }
}

/// One of the two scroll buttons flanking an overflowing strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ScrollButton {
    /// The button at the main-axis start of the strip.
    Near,
    /// The button at the main-axis end of the strip.
    Far,
}

/// What a pointer position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// A tab body.
    Tab(TabId),
    /// The close button inside the selected tab.
    CloseButton(TabId),
    /// The near scroll button.
    NearScrollButton,
    /// The far scroll button.
    FarScrollButton,
}

/// An effect of a pointer event, reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    /// A tab was clicked (press and release on the same tab).
    TabClicked { tab: TabId, position: Point },
    /// The engine's selection mirror moved to a new tab. The host should
    /// update its authoritative selected page to match.
    SelectionChanged { tab: TabId },
    /// The close button of a tab was clicked. The host decides whether to
    /// actually remove the page.
    CloseRequested { tab: TabId },
    /// A scroll button moved the viewport to the given offset.
    Scrolled { offset: i32 },
    /// Hover or press state changed in a way a painter should redraw.
    RepaintNeeded,
}
