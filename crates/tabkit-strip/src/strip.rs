#![forbid(unsafe_code)]

//! The strip engine.
//!
//! [`TabStrip`] owns one container's tab collection, viewport offset, and
//! pointer-derived interaction state. Every mutating operation relayouts
//! synchronously before returning, so callers never observe partially
//! updated bounds. All geometry comes from `tabkit-layout`; all content
//! extents come from the injected [`TabMeasure`] provider.

use rustc_hash::FxHashMap;
use tabkit_core::event::{PointerButton, PointerEvent, PointerEventKind};
use tabkit_core::geometry::{Point, Rect, Size};
use tabkit_layout::content::{self, TabContentMetrics};
use tabkit_layout::options::StripOptions;
use tabkit_layout::solver::{StripLayout, solve};
#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::measure::TabMeasure;
use crate::state::{HitTarget, ItemState, ScrollButton, StripEvent};
use crate::tab::{Tab, TabId};

/// The tab layout and interaction engine for one tabbed container.
///
/// The host mirrors its page collection through [`insert_tab`] and
/// [`remove_tab`], pushes resizes through [`relayout`], feeds pointer
/// events to [`handle_pointer`], and reads bounds and [`ItemState`]
/// queries back out for painting.
///
/// [`insert_tab`]: TabStrip::insert_tab
/// [`remove_tab`]: TabStrip::remove_tab
/// [`relayout`]: TabStrip::relayout
/// [`handle_pointer`]: TabStrip::handle_pointer
#[derive(Debug, Clone)]
pub struct TabStrip<M> {
    measure: M,
    options: StripOptions,
    container: Rect,
    tabs: Vec<Tab>,
    index: FxHashMap<TabId, usize>,
    next_id: u64,
    layout: StripLayout,
    offset: i32,
    selected: Option<TabId>,
    focused: bool,
    hovered: Option<TabId>,
    hovered_close: bool,
    hovered_button: Option<ScrollButton>,
    pressed: Option<TabId>,
    pressed_close: bool,
    pressed_button: Option<ScrollButton>,
}

impl<M: TabMeasure> TabStrip<M> {
    /// Create an engine with the given measurement provider and default
    /// options. The container starts empty; call [`TabStrip::relayout`]
    /// once real bounds are known.
    #[must_use]
    pub fn new(measure: M) -> Self {
        let mut strip = Self {
            measure,
            options: StripOptions::default(),
            container: Rect::default(),
            tabs: Vec::new(),
            index: FxHashMap::default(),
            next_id: 1,
            layout: StripLayout::default(),
            offset: 0,
            selected: None,
            focused: false,
            hovered: None,
            hovered_close: false,
            hovered_button: None,
            pressed: None,
            pressed_close: false,
            pressed_button: None,
        };
        strip.relayout_now();
        strip
    }

    /// Replace the options at construction time.
    #[must_use]
    pub fn with_options(mut self, options: StripOptions) -> Self {
        self.set_options(options);
        self
    }

    // --- configuration ---------------------------------------------------

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &StripOptions {
        &self.options
    }

    /// Replace the options and relayout.
    ///
    /// Changing the edge or the sizing policy resets the scroll offset;
    /// other changes merely re-clamp it.
    pub fn set_options(&mut self, options: StripOptions) {
        let reset = options.edge != self.options.edge || options.sizing != self.options.sizing;
        self.options = options;
        if reset {
            self.offset = 0;
        }
        self.relayout_now();
    }

    /// The measurement provider.
    #[must_use]
    pub const fn measure(&self) -> &M {
        &self.measure
    }

    /// Mutate the measurement provider (e.g. register a renamed label) and
    /// relayout with the new extents before returning.
    pub fn update_measure(&mut self, f: impl FnOnce(&mut M)) {
        f(&mut self.measure);
        self.relayout_now();
    }

    // --- collection glue -------------------------------------------------

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the strip has no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// All tabs in page order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The index of a tab, or `None` if the id does not belong here.
    #[must_use]
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// The tab with the given id.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn tab(&self, id: TabId) -> &Tab {
        &self.tabs[self.require(id)]
    }

    /// Create a tab at `index`, mirroring a page insertion.
    ///
    /// The first tab ever inserted becomes the selected tab. Relayouts
    /// before returning.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert_tab(&mut self, index: usize) -> TabId {
        assert!(
            index <= self.tabs.len(),
            "insert index {index} out of bounds (len {})",
            self.tabs.len()
        );
        let id = TabId::new(self.next_id);
        self.next_id += 1;
        self.tabs.insert(index, Tab::new(id));
        self.rebuild_index();
        if self.selected.is_none() {
            self.selected = Some(id);
        }
        self.relayout_now();
        id
    }

    /// Create a tab at the end, mirroring a page append.
    pub fn push_tab(&mut self) -> TabId {
        self.insert_tab(self.tabs.len())
    }

    /// Remove a tab, mirroring a page removal, and return it.
    ///
    /// If the removed tab was selected, selection moves to the tab that now
    /// occupies its index, or the new last tab when the removed tab was
    /// last (read it back with [`TabStrip::selected`]). Relayouts before
    /// returning.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    pub fn remove_tab(&mut self, id: TabId) -> Tab {
        let idx = self.require(id);
        let tab = self.tabs.remove(idx);
        self.rebuild_index();

        if self.hovered == Some(id) {
            self.hovered = None;
            self.hovered_close = false;
        }
        if self.pressed == Some(id) {
            self.pressed = None;
            self.pressed_close = false;
        }
        if self.selected == Some(id) {
            self.selected = if self.tabs.is_empty() {
                None
            } else {
                Some(self.tabs[idx.min(self.tabs.len() - 1)].id())
            };
        }

        self.relayout_now();
        tab
    }

    // --- selection and focus ---------------------------------------------

    /// The engine's mirror of the selected page.
    #[must_use]
    pub const fn selected(&self) -> Option<TabId> {
        self.selected
    }

    /// Push the host's authoritative selection into the engine.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    pub fn set_selected(&mut self, id: Option<TabId>) {
        if let Some(id) = id {
            self.require(id);
        }
        self.selected = id;
    }

    /// Whether the container has input focus.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Push the host's focus state into the engine.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // --- layout ----------------------------------------------------------

    /// The container bounds last passed to [`TabStrip::relayout`].
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// The result of the most recent layout pass.
    #[must_use]
    pub const fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// Recompute the whole layout for new container bounds.
    pub fn relayout(&mut self, container: Rect) {
        self.container = container;
        self.relayout_now();
    }

    /// Bounds of a tab with the scroll offset applied.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn view_bounds(&self, id: TabId) -> Rect {
        let bounds = self.tabs[self.require(id)].bounds();
        self.offset_applied(bounds)
    }

    /// Icon region of a tab in container coordinates, offset applied.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn icon_view_bounds(&self, id: TabId) -> Rect {
        let view = self.view_bounds(id);
        self.tab(id).icon_bounds().offset(view.x, view.y)
    }

    /// Text region of a tab in container coordinates, offset applied.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn text_view_bounds(&self, id: TabId) -> Rect {
        let view = self.view_bounds(id);
        self.tab(id).text_bounds().offset(view.x, view.y)
    }

    /// Close-button region of a tab in container coordinates, offset
    /// applied.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn close_view_bounds(&self, id: TabId) -> Rect {
        let view = self.view_bounds(id);
        self.tab(id).close_bounds().offset(view.x, view.y)
    }

    // --- viewport --------------------------------------------------------

    /// Current scroll offset, always in `[min_offset, 0]`.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Lower bound of the scroll offset; zero when tabs fit.
    #[must_use]
    pub const fn min_offset(&self) -> i32 {
        self.layout.min_offset
    }

    /// Whether the tabs overflow the usable strip.
    #[must_use]
    pub const fn scrollable(&self) -> bool {
        self.layout.scrollable()
    }

    /// Set the scroll offset, clamped to `[min_offset, 0]`. When scrolling
    /// is not active the offset is forced to zero.
    pub fn set_offset(&mut self, value: i32) {
        let min = self.layout.min_offset;
        self.offset = if min < 0 { value.clamp(min, 0) } else { 0 };
    }

    /// Scroll the minimal distance that brings the tab fully inside the
    /// usable strip. Only one direction ever applies per call.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    pub fn ensure_visible(&mut self, id: TabId) {
        let idx = self.require(id);
        if !self.layout.scrollable() {
            return;
        }
        let horizontal = self.options.edge.is_horizontal();
        let bounds = self.offset_applied(self.tabs[idx].bounds());
        let (start, end) = main_span(bounds, horizontal);
        let (strip_start, strip_end) = main_span(self.layout.strip, horizontal);

        if start < strip_start {
            self.set_offset(self.offset + (strip_start - start));
        } else if end > strip_end {
            self.set_offset(self.offset - (end - strip_end));
        }
    }

    /// Scroll one tab-step toward the near end (reveals earlier tabs).
    /// Returns whether the offset changed; a no-op at offset zero.
    pub fn scroll_near(&mut self) -> bool {
        if !self.layout.scrollable() || self.offset >= 0 {
            return false;
        }
        let step = self.step_length();
        let old = self.offset;
        self.set_offset(old + step);
        self.log_scroll("near", old);
        self.offset != old
    }

    /// Scroll one tab-step toward the far end (reveals later tabs).
    /// Returns whether the offset changed; a no-op at `min_offset`.
    pub fn scroll_far(&mut self) -> bool {
        if !self.layout.scrollable() || self.offset <= self.layout.min_offset {
            return false;
        }
        let step = self.step_length();
        let old = self.offset;
        self.set_offset(old - step);
        self.log_scroll("far", old);
        self.offset != old
    }

    /// Main-axis length of the first tab whose offset-adjusted near edge
    /// lies at or beyond the usable strip's near edge. Falls back to the
    /// last tab so an enabled button always makes progress.
    fn step_length(&self) -> i32 {
        let horizontal = self.options.edge.is_horizontal();
        let strip_start = main_span(self.layout.strip, horizontal).0;
        self.tabs
            .iter()
            .map(|t| main_span(t.bounds(), horizontal))
            .find(|(start, _)| start + self.offset >= strip_start)
            .or_else(|| {
                self.tabs
                    .last()
                    .map(|t| main_span(t.bounds(), horizontal))
            })
            .map_or(0, |(start, end)| end - start)
    }

    // --- derived state ---------------------------------------------------

    /// Derived visual state of a tab.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn tab_state(&self, id: TabId) -> ItemState {
        self.require(id);
        let mut state = ItemState::empty();
        if self.selected == Some(id) {
            state |= ItemState::ACTIVE;
            if self.focused {
                state |= ItemState::FOCUSED;
            }
        }
        if self.hovered == Some(id) {
            state |= ItemState::HOT;
        }
        if self.pressed == Some(id) {
            state |= ItemState::PRESSED;
        }
        state
    }

    /// Derived visual state of a tab's close button. Close buttons are only
    /// live on the selected tab; on any other tab the state is DISABLED.
    ///
    /// # Panics
    /// Panics if the id does not belong to this strip.
    #[must_use]
    pub fn close_button_state(&self, id: TabId) -> ItemState {
        self.require(id);
        if self.selected != Some(id) {
            return ItemState::DISABLED;
        }
        let mut state = ItemState::empty();
        if self.hovered == Some(id) && self.hovered_close {
            state |= ItemState::HOT;
        }
        if self.pressed == Some(id) && self.pressed_close {
            state |= ItemState::PRESSED;
        }
        state
    }

    /// Derived visual state of the near scroll button.
    #[must_use]
    pub fn near_button_state(&self) -> ItemState {
        self.button_state(ScrollButton::Near)
    }

    /// Derived visual state of the far scroll button.
    #[must_use]
    pub fn far_button_state(&self) -> ItemState {
        self.button_state(ScrollButton::Far)
    }

    fn button_state(&self, which: ScrollButton) -> ItemState {
        let mut state = ItemState::empty();
        let at_extreme = match which {
            ScrollButton::Near => self.offset >= 0,
            ScrollButton::Far => self.offset <= self.layout.min_offset,
        };
        if at_extreme {
            state |= ItemState::DISABLED;
        }
        if self.hovered_button == Some(which) {
            state |= ItemState::HOT;
        }
        if self.pressed_button == Some(which) {
            state |= ItemState::PRESSED;
        }
        state
    }

    /// The tab currently under the pointer, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<TabId> {
        self.hovered
    }

    /// The tab the primary button is currently down on, if any.
    #[must_use]
    pub const fn pressed(&self) -> Option<TabId> {
        self.pressed
    }

    /// Tab ids in back-to-front paint order: plain tabs first, then the
    /// hovered tab, then the selected tab, with a pressed tab topmost.
    #[must_use]
    pub fn paint_order(&self) -> Vec<TabId> {
        let mut order: Vec<(u8, usize)> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let id = tab.id();
                let rank = if self.pressed == Some(id) {
                    3
                } else if self.selected == Some(id) {
                    2
                } else if self.hovered == Some(id) {
                    1
                } else {
                    0
                };
                (rank, i)
            })
            .collect();
        order.sort_by_key(|&(rank, i)| (rank, i));
        order
            .into_iter()
            .map(|(_, i)| self.tabs[i].id())
            .collect()
    }

    // --- hit testing and interaction -------------------------------------

    /// Resolve a pointer position to a tab or button.
    ///
    /// Scroll buttons win first (they never overlap tabs); tabs are then
    /// scanned linearly against their offset-adjusted bounds. The close
    /// button variant is only produced for the selected tab, since close
    /// buttons are only live there.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self.layout.scrollable() {
            if self.layout.near_button.contains(point) {
                return Some(HitTarget::NearScrollButton);
            }
            if self.layout.far_button.contains(point) {
                return Some(HitTarget::FarScrollButton);
            }
        }
        if !self.layout.strip.contains(point) {
            return None;
        }
        for tab in &self.tabs {
            let bounds = self.offset_applied(tab.bounds());
            if !bounds.contains(point) {
                continue;
            }
            if self.selected == Some(tab.id()) {
                let close = tab.close_bounds().offset(bounds.x, bounds.y);
                if close.contains(point) {
                    return Some(HitTarget::CloseButton(tab.id()));
                }
            }
            return Some(HitTarget::Tab(tab.id()));
        }
        None
    }

    /// Advance the interaction state machine with one pointer event.
    ///
    /// Returns the effects the host should apply: clicks, selection
    /// changes, close requests, scrolls, and repaint requests. Hit testing
    /// against bounds that a pending resize has made stale is tolerated;
    /// the next [`TabStrip::relayout`] resynchronizes.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<StripEvent> {
        let mut events = Vec::new();
        match event.kind {
            PointerEventKind::Moved => {
                if self.refresh_hover(event.position) {
                    events.push(StripEvent::RepaintNeeded);
                }
            }
            PointerEventKind::Down(PointerButton::Primary) => {
                let hover_changed = self.refresh_hover(event.position);
                let mut press_changed = false;
                if let Some(button) = self.hovered_button {
                    press_changed = self.pressed_button != Some(button);
                    self.pressed_button = Some(button);
                } else if let Some(id) = self.hovered {
                    press_changed = self.pressed != Some(id);
                    self.pressed = Some(id);
                    self.pressed_close = self.selected == Some(id) && self.hovered_close;
                }
                if hover_changed || press_changed {
                    events.push(StripEvent::RepaintNeeded);
                }
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                if let Some(id) = self.pressed {
                    events.push(StripEvent::TabClicked {
                        tab: id,
                        position: event.position,
                    });
                    if self.selected != Some(id) {
                        self.log_select(self.selected, id);
                        self.selected = Some(id);
                        events.push(StripEvent::SelectionChanged { tab: id });
                    }
                    if self.pressed_close {
                        events.push(StripEvent::CloseRequested { tab: id });
                    }
                }
                if let Some(button) = self.pressed_button {
                    let scrolled = match button {
                        ScrollButton::Near => self.scroll_near(),
                        ScrollButton::Far => self.scroll_far(),
                    };
                    if scrolled {
                        events.push(StripEvent::Scrolled {
                            offset: self.offset,
                        });
                    }
                }
                if self.clear_transient() {
                    events.push(StripEvent::RepaintNeeded);
                }
            }
            PointerEventKind::Left => {
                if self.clear_transient() {
                    events.push(StripEvent::RepaintNeeded);
                }
            }
            PointerEventKind::Down(_) | PointerEventKind::Up(_) => {}
        }
        events
    }

    // --- internals -------------------------------------------------------

    fn require(&self, id: TabId) -> usize {
        match self.index.get(&id) {
            Some(&idx) => idx,
            None => panic!("tab {id:?} does not belong to this strip"),
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, tab) in self.tabs.iter().enumerate() {
            self.index.insert(tab.id(), i);
        }
    }

    fn offset_applied(&self, bounds: Rect) -> Rect {
        if self.options.edge.is_horizontal() {
            bounds.offset(self.offset, 0)
        } else {
            bounds.offset(0, self.offset)
        }
    }

    fn metrics_for(&self, id: TabId) -> TabContentMetrics {
        TabContentMetrics {
            icon: self.measure.icon_size(id),
            text: self.measure.text_size(id),
            close: self
                .options
                .show_close_buttons
                .then(|| self.measure.close_button_size()),
        }
    }

    fn relayout_now(&mut self) {
        #[cfg(feature = "tracing")]
        let relayout_start = Instant::now();
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "strip.relayout",
            tab_count = self.tabs.len(),
            relayout_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let options = self.options;
        let metrics: Vec<TabContentMetrics> = self
            .tabs
            .iter()
            .map(|tab| self.metrics_for(tab.id()))
            .collect();
        let measured: Vec<Size> = metrics
            .iter()
            .map(|m| content::measured_size(m, &options))
            .collect();
        let button = self
            .measure
            .scroll_button_size()
            .expanded(options.tab_padding);

        self.layout = solve(self.container, &options, &measured, button);

        for (tab, (bounds, m)) in self
            .tabs
            .iter_mut()
            .zip(self.layout.tab_bounds.iter().copied().zip(metrics.iter()))
        {
            let regions = content::layout_regions(bounds.size(), m, &options);
            tab.set_layout(bounds, regions);
            tab.set_content_flags(m.icon.is_some(), m.text.is_some());
        }

        let min = self.layout.min_offset;
        self.offset = if min < 0 { self.offset.clamp(min, 0) } else { 0 };

        #[cfg(feature = "tracing")]
        span.record(
            "relayout_duration_us",
            relayout_start.elapsed().as_micros() as u64,
        );
    }

    fn refresh_hover(&mut self, point: Point) -> bool {
        let old = (self.hovered, self.hovered_close, self.hovered_button);
        self.hovered = None;
        self.hovered_close = false;
        self.hovered_button = None;
        match self.hit_test(point) {
            Some(HitTarget::Tab(id)) => self.hovered = Some(id),
            Some(HitTarget::CloseButton(id)) => {
                self.hovered = Some(id);
                self.hovered_close = true;
            }
            Some(HitTarget::NearScrollButton) => {
                self.hovered_button = Some(ScrollButton::Near);
            }
            Some(HitTarget::FarScrollButton) => {
                self.hovered_button = Some(ScrollButton::Far);
            }
            None => {}
        }
        (self.hovered, self.hovered_close, self.hovered_button) != old
    }

    fn clear_transient(&mut self) -> bool {
        let had_any = self.hovered.is_some()
            || self.hovered_close
            || self.hovered_button.is_some()
            || self.pressed.is_some()
            || self.pressed_close
            || self.pressed_button.is_some();
        self.hovered = None;
        self.hovered_close = false;
        self.hovered_button = None;
        self.pressed = None;
        self.pressed_close = false;
        self.pressed_button = None;
        had_any
    }

    #[cfg(feature = "tracing")]
    fn log_select(&self, from: Option<TabId>, to: TabId) {
        tracing::debug!(
            message = "strip.select",
            from = from.map_or(0, TabId::get),
            to = to.get()
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn log_select(&self, _from: Option<TabId>, _to: TabId) {}

    #[cfg(feature = "tracing")]
    fn log_scroll(&self, direction: &str, from: i32) {
        tracing::debug!(
            message = "strip.scroll",
            direction,
            from,
            to = self.offset
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn log_scroll(&self, _direction: &str, _from: i32) {}
}

#[inline]
const fn main_span(rect: Rect, horizontal: bool) -> (i32, i32) {
    if horizontal {
        (rect.x, rect.right())
    } else {
        (rect.y, rect.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::UniformMeasure;
    use proptest::prelude::*;
    use tabkit_core::geometry::Sides;
    use tabkit_layout::options::{Edge, SizingPolicy};

    /// Maps sequentially assigned ids (1, 2, 3, ...) to fixed text widths.
    struct WidthMeasure {
        widths: Vec<i32>,
        height: i32,
    }

    impl TabMeasure for WidthMeasure {
        fn text_size(&self, tab: TabId) -> Option<Size> {
            self.widths
                .get((tab.get() - 1) as usize)
                .map(|w| Size::new(*w, self.height))
        }
    }

    fn bare_options() -> StripOptions {
        StripOptions {
            tab_padding: Sides::all(0),
            content_spacing: 0,
            ..StripOptions::default()
        }
    }

    fn strip_with_widths(widths: &[i32], container: Rect) -> (TabStrip<WidthMeasure>, Vec<TabId>) {
        let measure = WidthMeasure {
            widths: widths.to_vec(),
            height: 20,
        };
        let mut strip = TabStrip::new(measure).with_options(bare_options());
        let ids: Vec<TabId> = widths.iter().map(|_| strip.push_tab()).collect();
        strip.relayout(container);
        (strip, ids)
    }

    #[test]
    fn first_tab_becomes_selected() {
        let (strip, ids) = strip_with_widths(&[40, 40], Rect::new(0, 0, 300, 100));
        assert_eq!(strip.selected(), Some(ids[0]));
    }

    #[test]
    fn tabs_fit_without_scroll_buttons() {
        let (strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        assert!(!strip.scrollable());
        assert_eq!(strip.min_offset(), 0);
        assert_eq!(strip.view_bounds(ids[0]), Rect::new(0, 0, 40, 20));
        assert_eq!(strip.view_bounds(ids[1]), Rect::new(40, 0, 50, 20));
    }

    #[test]
    fn offset_is_clamped_and_forced_to_zero_without_overflow() {
        let (mut strip, _) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        strip.set_offset(-25);
        assert_eq!(strip.offset(), 0);

        let (mut strip, _) = strip_with_widths(&[200, 200], Rect::new(0, 0, 300, 100));
        assert!(strip.scrollable());
        strip.set_offset(-10_000);
        assert_eq!(strip.offset(), strip.min_offset());
        strip.set_offset(5);
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn hit_test_finds_tabs_and_none_outside() {
        let (strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        assert_eq!(
            strip.hit_test(Point::new(20, 10)),
            Some(HitTarget::Tab(ids[0]))
        );
        assert_eq!(
            strip.hit_test(Point::new(60, 10)),
            Some(HitTarget::Tab(ids[1]))
        );
        // Below the strip and past the run.
        assert_eq!(strip.hit_test(Point::new(20, 50)), None);
        assert_eq!(strip.hit_test(Point::new(200, 10)), None);
    }

    #[test]
    fn hit_test_close_button_only_on_selected_tab() {
        let measure = WidthMeasure {
            widths: vec![60, 60],
            height: 20,
        };
        let options = StripOptions {
            show_close_buttons: true,
            ..bare_options()
        };
        let mut strip = TabStrip::new(measure).with_options(options);
        let first = strip.push_tab();
        let second = strip.push_tab();
        strip.relayout(Rect::new(0, 0, 400, 100));

        // Tab width = text 60 + close 16. Close region hugs the far end.
        let close = strip.close_view_bounds(first);
        assert_eq!(close.right(), strip.view_bounds(first).right());
        let inside_close = close.center();
        assert_eq!(
            strip.hit_test(inside_close),
            Some(HitTarget::CloseButton(first))
        );

        // Same spot within the second (unselected) tab is a plain tab hit.
        let second_close = strip.close_view_bounds(second).center();
        assert_eq!(
            strip.hit_test(second_close),
            Some(HitTarget::Tab(second))
        );
    }

    #[test]
    fn click_selects_and_reports() {
        let (mut strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        let inside_second = Point::new(60, 10);
        let events = strip.handle_pointer(PointerEvent::down(inside_second));
        assert!(events.contains(&StripEvent::RepaintNeeded));
        assert_eq!(strip.pressed(), Some(ids[1]));
        assert!(strip
            .tab_state(ids[1])
            .contains(ItemState::PRESSED | ItemState::HOT));

        let events = strip.handle_pointer(PointerEvent::up(inside_second));
        assert!(events.contains(&StripEvent::TabClicked {
            tab: ids[1],
            position: inside_second
        }));
        assert!(events.contains(&StripEvent::SelectionChanged { tab: ids[1] }));
        assert_eq!(strip.selected(), Some(ids[1]));
        // Pressed and hover pointers are cleared on release.
        assert_eq!(strip.pressed(), None);
        assert_eq!(strip.hovered(), None);
    }

    #[test]
    fn click_on_selected_tab_does_not_reselect() {
        let (mut strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        let inside_first = Point::new(10, 10);
        strip.handle_pointer(PointerEvent::down(inside_first));
        let events = strip.handle_pointer(PointerEvent::up(inside_first));
        assert!(events.iter().any(|e| matches!(e, StripEvent::TabClicked { tab, .. } if *tab == ids[0])));
        assert!(!events
            .iter()
            .any(|e| matches!(e, StripEvent::SelectionChanged { .. })));
    }

    #[test]
    fn close_click_fires_close_request() {
        let measure = WidthMeasure {
            widths: vec![60, 60],
            height: 20,
        };
        let options = StripOptions {
            show_close_buttons: true,
            ..bare_options()
        };
        let mut strip = TabStrip::new(measure).with_options(options);
        let first = strip.push_tab();
        strip.push_tab();
        strip.relayout(Rect::new(0, 0, 400, 100));

        let on_close = strip.close_view_bounds(first).center();
        strip.handle_pointer(PointerEvent::down(on_close));
        assert!(strip
            .close_button_state(first)
            .contains(ItemState::PRESSED));
        let events = strip.handle_pointer(PointerEvent::up(on_close));
        assert!(events.contains(&StripEvent::CloseRequested { tab: first }));
    }

    #[test]
    fn close_press_does_not_latch_on_unselected_tab() {
        let measure = WidthMeasure {
            widths: vec![60, 60],
            height: 20,
        };
        let options = StripOptions {
            show_close_buttons: true,
            ..bare_options()
        };
        let mut strip = TabStrip::new(measure).with_options(options);
        strip.push_tab();
        let second = strip.push_tab();
        strip.relayout(Rect::new(0, 0, 400, 100));

        // Pressing where the second tab's close region would be selects the
        // tab instead; no close request fires.
        let spot = strip.close_view_bounds(second).center();
        strip.handle_pointer(PointerEvent::down(spot));
        let events = strip.handle_pointer(PointerEvent::up(spot));
        assert!(events.contains(&StripEvent::SelectionChanged { tab: second }));
        assert!(!events
            .iter()
            .any(|e| matches!(e, StripEvent::CloseRequested { .. })));
    }

    #[test]
    fn pointer_leave_clears_hover() {
        let (mut strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        strip.handle_pointer(PointerEvent::moved(Point::new(10, 10)));
        assert_eq!(strip.hovered(), Some(ids[0]));
        let events = strip.handle_pointer(PointerEvent::left(Point::new(10, 10)));
        assert!(events.contains(&StripEvent::RepaintNeeded));
        assert_eq!(strip.hovered(), None);
    }

    #[test]
    fn hover_move_reports_repaint_only_on_change() {
        let (mut strip, _) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        let events = strip.handle_pointer(PointerEvent::moved(Point::new(10, 10)));
        assert_eq!(events, vec![StripEvent::RepaintNeeded]);
        let events = strip.handle_pointer(PointerEvent::moved(Point::new(12, 10)));
        assert!(events.is_empty());
    }

    #[test]
    fn secondary_button_is_ignored() {
        let (mut strip, _) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        let event = PointerEvent::new(
            PointerEventKind::Down(PointerButton::Secondary),
            Point::new(10, 10),
        );
        assert!(strip.handle_pointer(event).is_empty());
        assert_eq!(strip.pressed(), None);
    }

    #[test]
    fn overflow_scroll_buttons_hit_first() {
        let (strip, _) = strip_with_widths(&[200, 200], Rect::new(0, 0, 300, 100));
        assert!(strip.scrollable());
        let near = strip.layout().near_button.center();
        let far = strip.layout().far_button.center();
        assert_eq!(strip.hit_test(near), Some(HitTarget::NearScrollButton));
        assert_eq!(strip.hit_test(far), Some(HitTarget::FarScrollButton));
    }

    #[test]
    fn scroll_far_then_near_round_trips() {
        let (mut strip, _) = strip_with_widths(&[100, 100, 100], Rect::new(0, 0, 200, 100));
        assert!(strip.scrollable());
        assert!(strip.scroll_far());
        assert!(strip.offset() < 0);
        assert!(strip.scroll_near());
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn near_button_disabled_at_zero_offset_and_click_is_noop() {
        let (mut strip, _) = strip_with_widths(&[200, 200], Rect::new(0, 0, 300, 100));
        assert!(strip.near_button_state().contains(ItemState::DISABLED));
        assert!(!strip.far_button_state().contains(ItemState::DISABLED));

        let near = strip.layout().near_button.center();
        strip.handle_pointer(PointerEvent::down(near));
        let events = strip.handle_pointer(PointerEvent::up(near));
        assert!(!events
            .iter()
            .any(|e| matches!(e, StripEvent::Scrolled { .. })));
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn far_button_click_scrolls_one_tab_step() {
        let (mut strip, _) = strip_with_widths(&[80, 90, 100], Rect::new(0, 0, 200, 100));
        assert!(strip.scrollable());
        let far = strip.layout().far_button.center();
        strip.handle_pointer(PointerEvent::down(far));
        let events = strip.handle_pointer(PointerEvent::up(far));
        // First tab (width 80) scrolls out by exactly its length.
        assert!(events.contains(&StripEvent::Scrolled { offset: -80 }));
        assert_eq!(strip.offset(), -80);
    }

    #[test]
    fn far_button_disabled_at_min_offset() {
        let (mut strip, _) = strip_with_widths(&[200, 200], Rect::new(0, 0, 300, 100));
        strip.set_offset(strip.min_offset());
        assert!(strip.far_button_state().contains(ItemState::DISABLED));
        assert!(!strip.near_button_state().contains(ItemState::DISABLED));
        assert!(!strip.scroll_far());
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let (mut strip, ids) = strip_with_widths(&[100, 100, 100], Rect::new(0, 0, 200, 100));
        assert!(strip.scrollable());
        let usable = strip.layout().strip;

        strip.ensure_visible(ids[2]);
        let bounds = strip.view_bounds(ids[2]);
        assert!(bounds.right() <= usable.right());

        strip.ensure_visible(ids[0]);
        let bounds = strip.view_bounds(ids[0]);
        assert_eq!(bounds.x, usable.x);
    }

    #[test]
    fn ensure_visible_is_noop_when_visible() {
        let (mut strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        strip.ensure_visible(ids[1]);
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn removing_selected_tab_shifts_selection_to_same_index() {
        let (mut strip, ids) = strip_with_widths(&[40, 40, 40], Rect::new(0, 0, 300, 100));
        strip.set_selected(Some(ids[1]));
        strip.remove_tab(ids[1]);
        assert_eq!(strip.selected(), Some(ids[2]));
    }

    #[test]
    fn removing_selected_last_tab_selects_new_last() {
        let (mut strip, ids) = strip_with_widths(&[40, 40, 40], Rect::new(0, 0, 300, 100));
        strip.set_selected(Some(ids[2]));
        strip.remove_tab(ids[2]);
        assert_eq!(strip.selected(), Some(ids[1]));
    }

    #[test]
    fn removing_unselected_tab_keeps_selection() {
        let (mut strip, ids) = strip_with_widths(&[40, 40, 40], Rect::new(0, 0, 300, 100));
        strip.set_selected(Some(ids[0]));
        strip.remove_tab(ids[2]);
        assert_eq!(strip.selected(), Some(ids[0]));
    }

    #[test]
    fn removing_only_tab_clears_selection() {
        let (mut strip, ids) = strip_with_widths(&[40], Rect::new(0, 0, 300, 100));
        strip.remove_tab(ids[0]);
        assert_eq!(strip.selected(), None);
        assert!(strip.is_empty());
        assert_eq!(strip.layout().display, strip.container());
    }

    #[test]
    fn removal_drops_stale_hover_and_press() {
        let (mut strip, ids) = strip_with_widths(&[40, 50], Rect::new(0, 0, 300, 100));
        strip.handle_pointer(PointerEvent::down(Point::new(10, 10)));
        assert_eq!(strip.pressed(), Some(ids[0]));
        strip.remove_tab(ids[0]);
        assert_eq!(strip.pressed(), None);
        assert_eq!(strip.hovered(), None);
    }

    #[test]
    fn edge_change_resets_offset() {
        let (mut strip, _) = strip_with_widths(&[200, 200], Rect::new(0, 0, 300, 100));
        strip.set_offset(strip.min_offset());
        let mut options = *strip.options();
        options.edge = Edge::Bottom;
        strip.set_options(options);
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn stretch_policy_fills_container() {
        let measure = WidthMeasure {
            widths: vec![10, 10, 10],
            height: 20,
        };
        let options = StripOptions {
            sizing: SizingPolicy::Stretch,
            ..bare_options()
        };
        let mut strip = TabStrip::new(measure).with_options(options);
        for _ in 0..3 {
            strip.push_tab();
        }
        strip.relayout(Rect::new(0, 0, 300, 100));
        let widths: Vec<i32> = strip.tabs().iter().map(|t| t.bounds().width).collect();
        assert_eq!(widths.iter().sum::<i32>(), 300);
    }

    #[test]
    fn update_measure_relayouts() {
        let mut strip = TabStrip::new(UniformMeasure::new(Size::new(40, 12)))
            .with_options(bare_options());
        let id = strip.push_tab();
        strip.relayout(Rect::new(0, 0, 300, 100));
        assert_eq!(strip.tab(id).bounds().width, 40);
        strip.update_measure(|m| m.text = Size::new(70, 12));
        assert_eq!(strip.tab(id).bounds().width, 70);
    }

    #[test]
    fn paint_order_puts_pressed_on_top() {
        let (mut strip, ids) = strip_with_widths(&[40, 40, 40], Rect::new(0, 0, 300, 100));
        strip.set_selected(Some(ids[1]));
        strip.handle_pointer(PointerEvent::down(Point::new(10, 10)));
        let order = strip.paint_order();
        assert_eq!(order.last(), Some(&ids[0])); // pressed topmost
        assert_eq!(order[order.len() - 2], ids[1]); // selected below it
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn foreign_id_panics() {
        let (mut strip, ids) = strip_with_widths(&[40], Rect::new(0, 0, 300, 100));
        let foreign = ids[0];
        strip.remove_tab(foreign);
        // The id no longer belongs to the strip.
        let _ = strip.tab_state(foreign);
    }

    proptest! {
        #[test]
        fn offset_always_within_bounds(
            widths in proptest::collection::vec(10i32..120, 1..8),
            container_w in 50i32..500,
            attempts in proptest::collection::vec(-600i32..600, 1..6),
        ) {
            let (mut strip, _) = strip_with_widths(&widths, Rect::new(0, 0, container_w, 100));
            for value in attempts {
                strip.set_offset(value);
                prop_assert!(strip.offset() <= 0);
                prop_assert!(strip.offset() >= strip.min_offset());
            }
        }

        #[test]
        fn centroid_hit_returns_tab_when_fully_visible(
            widths in proptest::collection::vec(10i32..60, 1..6),
        ) {
            // Wide container: no overflow, every centroid must hit its tab.
            let (strip, ids) = strip_with_widths(&widths, Rect::new(0, 0, 1000, 100));
            prop_assert!(!strip.scrollable());
            for id in ids {
                let center = strip.view_bounds(id).center();
                prop_assert_eq!(strip.hit_test(center), Some(HitTarget::Tab(id)));
            }
        }
    }
}
