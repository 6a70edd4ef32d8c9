#![forbid(unsafe_code)]

//! Core: geometry primitives and canonical pointer events.
//!
//! # Role in tabkit
//! `tabkit-core` is the foundation layer. It owns the pixel-space geometry
//! types (`Rect`, `Point`, `Size`, `Sides`) and the normalized pointer
//! events the strip engine consumes.
//!
//! # How it fits in the system
//! The layout solver (`tabkit-layout`) computes rectangles in these types,
//! and the engine (`tabkit-strip`) hit-tests pointer events against them.
//! Neither painting nor platform event plumbing lives here; hosts translate
//! their toolkit's mouse events into [`event::PointerEvent`] values.

pub mod event;
pub mod geometry;
