#![forbid(unsafe_code)]

//! The strip solver.
//!
//! [`solve`] turns container bounds, options, and per-tab measured content
//! sizes into a complete [`StripLayout`]. The result is recomputed wholesale
//! on every triggering change; nothing in it is ever patched in place.

use crate::options::{Alignment, Edge, SizingPolicy, StripOptions};
use tabkit_core::geometry::{Rect, Size};

/// The complete result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripLayout {
    /// The usable strip rectangle tabs are placed in. Excludes the scroll
    /// buttons when they are allocated.
    pub strip: Rect,
    /// The content display rectangle on the opposite side of the strip.
    pub display: Rect,
    /// Near scroll button bounds; empty when tabs fit.
    pub near_button: Rect,
    /// Far scroll button bounds; empty when tabs fit.
    pub far_button: Rect,
    /// Lower bound of the scroll offset. Zero when tabs fit, negative when
    /// they overflow.
    pub min_offset: i32,
    /// Per-tab bounds in un-scrolled container coordinates.
    pub tab_bounds: Vec<Rect>,
}

impl StripLayout {
    /// The layout of a strip with no tabs: everything collapses to empty
    /// and the display rectangle covers the whole container.
    #[must_use]
    pub fn empty(container: Rect) -> Self {
        Self {
            display: container,
            ..Self::default()
        }
    }

    /// Whether the tabs overflow the usable strip.
    #[inline]
    #[must_use]
    pub const fn scrollable(&self) -> bool {
        self.min_offset < 0
    }

    /// Total main-axis length of all tabs.
    #[must_use]
    pub fn total_tab_length(&self, horizontal: bool) -> i32 {
        self.tab_bounds
            .iter()
            .map(|b| if horizontal { b.width } else { b.height })
            .sum()
    }
}

#[inline]
const fn main_of(size: Size, horizontal: bool) -> i32 {
    if horizontal { size.width } else { size.height }
}

#[inline]
const fn cross_of(size: Size, horizontal: bool) -> i32 {
    if horizontal { size.height } else { size.width }
}

#[inline]
const fn size_from(main: i32, cross: i32, horizontal: bool) -> Size {
    if horizontal {
        Size::new(main, cross)
    } else {
        Size::new(cross, main)
    }
}

/// Compute per-tab main/cross sizes under the configured sizing policy.
///
/// Cross extents are normalized afterwards by [`solve`]; this only resolves
/// the policy-specific main extent.
fn policy_sizes(container_len: i32, options: &StripOptions, measured: &[Size]) -> Vec<Size> {
    let horizontal = options.edge.is_horizontal();
    match options.sizing {
        SizingPolicy::AutoFit => measured.to_vec(),
        SizingPolicy::Fixed => {
            let fixed = if options.text_direction.is_vertical() {
                options.fixed_tab_size.transposed()
            } else {
                options.fixed_tab_size
            };
            vec![fixed; measured.len()]
        }
        SizingPolicy::Stretch => {
            let count = measured.len() as i32;
            let base = (container_len / count).max(options.min_stretch_size);
            let last = measured.len() - 1;
            measured
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    // Remainder goes to the last tab so the run fills the
                    // strip exactly when there is no overflow.
                    let main = if i == last {
                        (container_len - base * (count - 1)).max(options.min_stretch_size)
                    } else {
                        base
                    };
                    size_from(main, cross_of(*m, horizontal), horizontal)
                })
                .collect()
        }
    }
}

/// Lay out the tab strip.
///
/// `measured` holds one content size per tab (already padded, in container
/// orientation). `scroll_button` is the size to allocate for each scroll
/// button when tabs overflow. Zero tabs and non-positive containers produce
/// empty rectangles, never a panic.
#[must_use]
pub fn solve(
    container: Rect,
    options: &StripOptions,
    measured: &[Size],
    scroll_button: Size,
) -> StripLayout {
    if measured.is_empty() {
        return StripLayout::empty(container);
    }

    let horizontal = options.edge.is_horizontal();
    let container_len = main_of(container.size(), horizontal).max(0);

    let mut sizes = policy_sizes(container_len, options, measured);

    // Uniform strip thickness: the maximum cross extent across all tabs.
    let thickness = sizes
        .iter()
        .map(|s| cross_of(*s, horizontal))
        .max()
        .unwrap_or(0)
        .max(0);
    for size in &mut sizes {
        *size = size_from(main_of(*size, horizontal), thickness, horizontal);
    }

    // The strip occupies the full chosen edge at the computed thickness.
    let full_strip = match options.edge {
        Edge::Top => Rect::new(container.x, container.y, container.width, thickness),
        Edge::Bottom => Rect::new(
            container.x,
            container.bottom() - thickness,
            container.width,
            thickness,
        ),
        Edge::Left => Rect::new(container.x, container.y, thickness, container.height),
        Edge::Right => Rect::new(
            container.right() - thickness,
            container.y,
            thickness,
            container.height,
        ),
    };

    let total: i32 = sizes.iter().map(|s| main_of(*s, horizontal)).sum();

    let mut strip = full_strip;
    let mut near_button = Rect::default();
    let mut far_button = Rect::default();
    let mut min_offset = (main_of(full_strip.size(), horizontal) - total).min(0);

    if min_offset < 0 {
        // Overflow: allocate scroll buttons at both ends of the strip and
        // shrink the usable length by their extents.
        let button_main = main_of(scroll_button, horizontal).max(0);
        if horizontal {
            near_button = Rect::new(full_strip.x, full_strip.y, button_main, thickness);
            far_button = Rect::new(
                full_strip.right() - button_main,
                full_strip.y,
                button_main,
                thickness,
            );
            strip = Rect::new(
                full_strip.x + button_main,
                full_strip.y,
                full_strip.width - 2 * button_main,
                thickness,
            );
        } else {
            near_button = Rect::new(full_strip.x, full_strip.y, thickness, button_main);
            far_button = Rect::new(
                full_strip.x,
                full_strip.bottom() - button_main,
                thickness,
                button_main,
            );
            strip = Rect::new(
                full_strip.x,
                full_strip.y + button_main,
                thickness,
                full_strip.height - 2 * button_main,
            );
        }
        min_offset = main_of(strip.size(), horizontal) - total;
    }

    // Remaining container area, opposite the strip.
    let display = match options.edge {
        Edge::Top => Rect::new(
            container.x,
            full_strip.bottom(),
            container.width.max(0),
            (container.height - thickness).max(0),
        ),
        Edge::Bottom => Rect::new(
            container.x,
            container.y,
            container.width.max(0),
            (container.height - thickness).max(0),
        ),
        Edge::Left => Rect::new(
            full_strip.right(),
            container.y,
            (container.width - thickness).max(0),
            container.height.max(0),
        ),
        Edge::Right => Rect::new(
            container.x,
            container.y,
            (container.width - thickness).max(0),
            container.height.max(0),
        ),
    };

    // Place tabs sequentially from the anchor. Overflow forces near
    // anchoring so the run starts flush against the near scroll button.
    let usable_len = main_of(strip.size(), horizontal);
    let strip_main_start = if horizontal { strip.x } else { strip.y };
    let anchor = if min_offset < 0 {
        strip_main_start
    } else {
        match options.tab_alignment {
            Alignment::Near => strip_main_start,
            Alignment::Center => strip_main_start + (usable_len - total) / 2,
            Alignment::Far => strip_main_start + (usable_len - total),
        }
    };

    let mut pos = anchor;
    let tab_bounds = sizes
        .iter()
        .map(|size| {
            let main = main_of(*size, horizontal);
            let bounds = if horizontal {
                Rect::new(pos, strip.y, main, thickness)
            } else {
                Rect::new(strip.x, pos, thickness, main)
            };
            pos += main;
            bounds
        })
        .collect();

    StripLayout {
        strip,
        display,
        near_button,
        far_button,
        min_offset,
        tab_bounds,
    }
}
