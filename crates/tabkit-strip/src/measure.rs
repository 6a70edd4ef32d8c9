#![forbid(unsafe_code)]

//! Content measurement.
//!
//! The engine never rasterizes text or decodes images; it asks an injected
//! [`TabMeasure`] implementation for intrinsic content extents and composes
//! tab sizes from them. Hosts supply a provider backed by their font and
//! image machinery; the stock providers here cover fixed-content hosts and
//! tests.

use rustc_hash::FxHashMap;
use tabkit_core::geometry::Size;
use unicode_width::UnicodeWidthStr;

use crate::tab::TabId;

/// Provides intrinsic content sizes for tabs and scroll buttons.
///
/// All extents are in reading orientation; the engine handles transposition
/// for vertical text directions and adds tab padding itself.
pub trait TabMeasure {
    /// Intrinsic size of the tab's icon, or `None` when it has none.
    fn icon_size(&self, tab: TabId) -> Option<Size> {
        let _ = tab;
        None
    }

    /// Extent of the tab's text for the current font, or `None` when the
    /// tab has no text.
    fn text_size(&self, tab: TabId) -> Option<Size>;

    /// Size of the configured close-button image.
    fn close_button_size(&self) -> Size {
        Size::new(16, 16)
    }

    /// Size of the scroll-button arrow imagery.
    fn scroll_button_size(&self) -> Size {
        Size::new(16, 16)
    }
}

/// A provider that reports the same text extent for every tab.
///
/// Useful for hosts whose tabs are uniform and for tests that do not care
/// about per-tab differences.
#[derive(Debug, Clone, Copy)]
pub struct UniformMeasure {
    /// Text extent reported for every tab.
    pub text: Size,
    /// Icon extent reported for every tab, if any.
    pub icon: Option<Size>,
}

impl UniformMeasure {
    /// Create a provider with the given text extent and no icons.
    #[must_use]
    pub const fn new(text: Size) -> Self {
        Self { text, icon: None }
    }
}

impl TabMeasure for UniformMeasure {
    fn icon_size(&self, _tab: TabId) -> Option<Size> {
        self.icon
    }

    fn text_size(&self, _tab: TabId) -> Option<Size> {
        Some(self.text)
    }
}

/// A provider that sizes tab labels on a monospace grid.
///
/// The text extent is the label's display width in cells times the cell
/// size. Hosts register labels as pages come and go.
#[derive(Debug, Clone)]
pub struct MonospaceMeasure {
    labels: FxHashMap<TabId, String>,
    cell: Size,
}

impl MonospaceMeasure {
    /// Create a provider with the given cell size.
    #[must_use]
    pub fn new(cell: Size) -> Self {
        Self {
            labels: FxHashMap::default(),
            cell,
        }
    }

    /// Set or replace the label for a tab.
    pub fn set_label(&mut self, tab: TabId, label: impl Into<String>) {
        self.labels.insert(tab, label.into());
    }

    /// Remove the label for a tab.
    pub fn remove_label(&mut self, tab: TabId) {
        self.labels.remove(&tab);
    }

    /// The label registered for a tab, if any.
    #[must_use]
    pub fn label(&self, tab: TabId) -> Option<&str> {
        self.labels.get(&tab).map(String::as_str)
    }
}

impl TabMeasure for MonospaceMeasure {
    fn text_size(&self, tab: TabId) -> Option<Size> {
        let label = self.labels.get(&tab)?;
        if label.is_empty() {
            return None;
        }
        let cells = label.as_str().width() as i32;
        Some(Size::new(cells * self.cell.width, self.cell.height))
    }
}
