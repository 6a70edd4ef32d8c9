//! End-to-end scenarios for the strip engine: overflow activation, stretch
//! reconciliation, vertical text rotation, scroll-button extremes, and
//! selection shifting on removal.

use tabkit_core::event::PointerEvent;
use tabkit_core::geometry::{Rect, Sides, Size};
use tabkit_layout::options::{Alignment, Edge, SizingPolicy, StripOptions, TextDirection};
use tabkit_strip::measure::UniformMeasure;
use tabkit_strip::{ItemState, StripEvent, TabId, TabMeasure, TabStrip};

/// Maps sequentially assigned ids (1, 2, 3, ...) to fixed text extents.
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

#[test]
fn overflowing_autofit_tabs_activate_scroll_buttons() {
    // Three tabs measuring 80/120/140 in a 300-wide container overflow no
    // matter how the run is aligned.
    let measure = WidthMeasure {
        widths: vec![80, 120, 140],
        height: 20,
    };
    let options = StripOptions {
        tab_alignment: Alignment::Far,
        ..bare_options()
    };
    let mut strip = TabStrip::new(measure).with_options(options);
    let ids: Vec<TabId> = (0..3).map(|_| strip.push_tab()).collect();
    strip.relayout(Rect::new(0, 0, 300, 200));

    assert!(strip.scrollable());
    assert!(!strip.layout().near_button.is_empty());
    assert!(!strip.layout().far_button.is_empty());
    // 340 of tabs minus the button-reduced strip leaves at least 40 of
    // overflow.
    assert!(strip.min_offset() <= -40);
    // Overflow forces near anchoring despite the Far alignment.
    assert_eq!(strip.view_bounds(ids[0]).x, strip.layout().strip.x);
}

#[test]
fn stretch_divides_evenly_with_remainder_on_last() {
    let measure = UniformMeasure::new(Size::new(10, 20));
    let options = StripOptions {
        sizing: SizingPolicy::Stretch,
        ..bare_options()
    };
    let mut strip = TabStrip::new(measure).with_options(options);
    for _ in 0..3 {
        strip.push_tab();
    }
    strip.relayout(Rect::new(0, 0, 300, 200));

    let widths: Vec<i32> = strip.tabs().iter().map(|t| t.bounds().width).collect();
    assert_eq!(widths, vec![100, 100, 100]);

    // A width that does not divide evenly puts the remainder on the last
    // tab so the sum still fills the strip exactly.
    strip.relayout(Rect::new(0, 0, 302, 200));
    let widths: Vec<i32> = strip.tabs().iter().map(|t| t.bounds().width).collect();
    assert_eq!(widths, vec![100, 100, 102]);
    assert_eq!(widths.iter().sum::<i32>(), 302);
}

#[test]
fn left_edge_down_text_rotates_regions() {
    // A 40x12 text extent on a left-edge strip with downward text becomes a
    // 12x40 region against the tab's left-hand edge.
    let measure = UniformMeasure::new(Size::new(40, 12));
    let options = StripOptions {
        edge: Edge::Left,
        text_direction: TextDirection::Down,
        ..StripOptions::default() // stock 4px padding
    };
    let mut strip = TabStrip::new(measure).with_options(options);
    let id = strip.push_tab();
    strip.relayout(Rect::new(0, 0, 200, 300));

    // Measured reading size 48x20 is transposed into a 20-wide, 48-tall tab.
    assert_eq!(strip.layout().strip.width, 20);
    let tab = strip.tab(id);
    assert_eq!(tab.bounds().size(), Size::new(20, 48));
    assert_eq!(tab.text_bounds(), Rect::new(4, 4, 12, 40));
}

#[test]
fn near_scroll_button_is_inert_at_zero_offset() {
    let measure = WidthMeasure {
        widths: vec![200, 200],
        height: 20,
    };
    let mut strip = TabStrip::new(measure).with_options(bare_options());
    strip.push_tab();
    strip.push_tab();
    strip.relayout(Rect::new(0, 0, 300, 200));

    assert!(strip.scrollable());
    assert_eq!(strip.offset(), 0);
    assert!(strip.near_button_state().contains(ItemState::DISABLED));

    let near = strip.layout().near_button.center();
    strip.handle_pointer(PointerEvent::down(near));
    let events = strip.handle_pointer(PointerEvent::up(near));
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, StripEvent::Scrolled { .. }))
    );
    assert_eq!(strip.offset(), 0);
}

#[test]
fn removing_selected_tab_shifts_selection() {
    let measure = UniformMeasure::new(Size::new(40, 12));
    let mut strip = TabStrip::new(measure).with_options(bare_options());
    let ids: Vec<TabId> = (0..4).map(|_| strip.push_tab()).collect();
    strip.relayout(Rect::new(0, 0, 400, 200));

    // Removing a selected middle tab selects the tab that takes its index.
    strip.set_selected(Some(ids[1]));
    strip.remove_tab(ids[1]);
    assert_eq!(strip.selected(), Some(ids[2]));

    // Removing the selected last tab selects the new last tab.
    strip.set_selected(Some(ids[3]));
    strip.remove_tab(ids[3]);
    assert_eq!(strip.selected(), Some(ids[2]));

    // Layout followed immediately: bounds reflect the remaining two tabs.
    assert_eq!(strip.len(), 2);
    assert_eq!(strip.tabs()[1].bounds().x, strip.tabs()[0].bounds().right());
}

#[test]
fn click_driven_selection_round_trip() {
    // A full host interaction: click the second tab, get the selection
    // event, mirror it back, and confirm derived state follows.
    let measure = UniformMeasure::new(Size::new(40, 12));
    let mut strip = TabStrip::new(measure).with_options(bare_options());
    let first = strip.push_tab();
    let second = strip.push_tab();
    strip.relayout(Rect::new(0, 0, 300, 200));
    strip.set_focused(true);

    let target = strip.view_bounds(second).center();
    strip.handle_pointer(PointerEvent::moved(target));
    strip.handle_pointer(PointerEvent::down(target));
    let events = strip.handle_pointer(PointerEvent::up(target));

    assert!(events.contains(&StripEvent::SelectionChanged { tab: second }));
    assert!(
        strip
            .tab_state(second)
            .contains(ItemState::ACTIVE | ItemState::FOCUSED)
    );
    assert_eq!(strip.tab_state(first), ItemState::empty());
}
