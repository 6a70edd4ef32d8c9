#![forbid(unsafe_code)]

//! Per-tab content layout.
//!
//! Sub-regions for icon, text, and close button are computed in reading
//! orientation (as if text flowed left to right) inside the tab's padded
//! bounds, then mapped through the rotation for the configured text
//! direction into final tab-local coordinates.

use crate::options::{Alignment, StripOptions};
use tabkit_core::geometry::{Rect, Size};

/// Intrinsic content extents of one tab, in reading orientation.
///
/// `None` means the element is absent (no icon, no text, close buttons
/// disabled). Extents come from the host's measurement provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabContentMetrics {
    pub icon: Option<Size>,
    pub text: Option<Size>,
    pub close: Option<Size>,
}

/// Tab-local sub-region bounds. Absent elements have empty rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabRegions {
    pub icon: Rect,
    pub text: Rect,
    pub close: Rect,
}

/// Compose the measured size of a tab from its content metrics.
///
/// Present elements are summed along the reading axis with
/// [`StripOptions::content_spacing`] between adjacent ones; the cross
/// extent is the maximum element height. Tab padding is added, and the
/// result is transposed for vertical text directions.
#[must_use]
pub fn measured_size(metrics: &TabContentMetrics, options: &StripOptions) -> Size {
    let mut width = 0;
    let mut height = 0;

    if let Some(icon) = metrics.icon {
        width += icon.width;
        height = height.max(icon.height);
    }
    if let Some(text) = metrics.text {
        width += text.width;
        height = height.max(text.height);
    }
    if metrics.icon.is_some() && metrics.text.is_some() {
        width += options.content_spacing;
    }
    if let Some(close) = metrics.close {
        if width != 0 {
            width += options.content_spacing;
        }
        width += close.width;
        height = height.max(close.height);
    }

    let size = Size::new(width, height).expanded(options.tab_padding);
    if options.text_direction.is_vertical() {
        size.transposed()
    } else {
        size
    }
}

/// Lay out the icon/text/close sub-regions inside a tab of the given size.
///
/// The close button is pinned at the far end; the icon+text group honors
/// [`StripOptions::content_alignment`]. Elements squeezed out of space
/// collapse to 1×1 rectangles rather than negative sizes. Returned bounds
/// are tab-local, already rotated for the text direction.
#[must_use]
pub fn layout_regions(
    tab_size: Size,
    metrics: &TabContentMetrics,
    options: &StripOptions,
) -> TabRegions {
    let rotation = options.text_direction.rotation();
    let reading = if options.text_direction.is_vertical() {
        tab_size.transposed()
    } else {
        tab_size
    };
    let inner = Rect::from_size(reading).inset(options.tab_padding);
    let spacing = options.content_spacing;

    let mut close_rect = Rect::default();
    let mut avail_right = inner.right();
    if let Some(close) = metrics.close {
        let w = close.width.min(inner.width.max(0));
        let h = close.height.min(inner.height.max(0));
        close_rect = Rect::new(inner.right() - w, inner.y + (inner.height - h) / 2, w, h)
            .with_min_size(1, 1);
        avail_right = close_rect.x - spacing;
    }
    let avail_width = (avail_right - inner.x).max(0);

    let icon_width = metrics.icon.map_or(0, |s| s.width);
    let gap = if metrics.icon.is_some() && metrics.text.is_some() {
        spacing
    } else {
        0
    };
    let text_width = metrics
        .text
        .map_or(0, |s| s.width)
        .min((avail_width - icon_width - gap).max(0));
    let group_width = icon_width + gap + text_width;

    let group_x = match options.content_alignment {
        Alignment::Near => inner.x,
        Alignment::Center => inner.x + (avail_width - group_width) / 2,
        Alignment::Far => inner.x + avail_width - group_width,
    };

    let mut icon_rect = Rect::default();
    if let Some(icon) = metrics.icon {
        let w = icon.width.min(avail_width);
        let h = icon.height.min(inner.height.max(0));
        icon_rect =
            Rect::new(group_x, inner.y + (inner.height - h) / 2, w, h).with_min_size(1, 1);
    }

    let mut text_rect = Rect::default();
    if let Some(text) = metrics.text {
        let h = text.height.min(inner.height.max(0));
        text_rect = Rect::new(
            group_x + icon_width + gap,
            inner.y + (inner.height - h) / 2,
            text_width,
            h,
        )
        .with_min_size(1, 1);
    }

    let tab_rect = Rect::from_size(tab_size);
    TabRegions {
        icon: if metrics.icon.is_some() {
            icon_rect.rotate_into(tab_rect, rotation)
        } else {
            Rect::default()
        },
        text: if metrics.text.is_some() {
            text_rect.rotate_into(tab_rect, rotation)
        } else {
            Rect::default()
        },
        close: if metrics.close.is_some() {
            close_rect.rotate_into(tab_rect, rotation)
        } else {
            Rect::default()
        },
    }
}
