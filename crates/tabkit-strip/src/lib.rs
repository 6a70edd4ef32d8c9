#![forbid(unsafe_code)]

//! The tab strip engine.
//!
//! # Role in tabkit
//! `tabkit-strip` owns the mutable state of a tabbed container's header
//! strip: the tab collection mirroring the host's page collection, the
//! clamped viewport offset when tabs overflow, and the hover/press pointers
//! derived from pointer events. Layout math lives in `tabkit-layout`; this
//! crate drives it and keeps geometry and interaction state synchronized.
//!
//! # How it fits in the system
//! The host translates its toolkit's mouse events into
//! `tabkit_core::event::PointerEvent` values and feeds them to
//! [`strip::TabStrip::handle_pointer`], applying the returned
//! [`state::StripEvent`]s (selection changes, close requests, repaints).
//! A painter reads bounds and [`state::ItemState`] queries back out; it is
//! deliberately not part of this crate.

pub mod measure;
pub mod state;
pub mod strip;
pub mod tab;

pub use measure::TabMeasure;
pub use state::{HitTarget, ItemState, ScrollButton, StripEvent};
pub use strip::TabStrip;
pub use tab::{Tab, TabId};
