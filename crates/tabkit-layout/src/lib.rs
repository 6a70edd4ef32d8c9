#![forbid(unsafe_code)]

//! Tab strip layout solver.
//!
//! Pure functions from container bounds, options, and measured tab content
//! to a [`solver::StripLayout`]: the strip rectangle along one container
//! edge, per-tab bounds under one of three sizing policies, the content
//! display rectangle, scroll-button allocation when tabs overflow, and the
//! valid scroll-offset range. The [`content`] module derives the
//! icon/text/close-button sub-regions inside a single tab, including the
//! rotation applied when text flows vertically.
//!
//! Nothing here is stateful; the engine in `tabkit-strip` owns the tabs and
//! calls back into this crate on every relayout.

pub mod content;
pub mod options;
pub mod solver;

pub use options::{Alignment, Edge, SizingPolicy, StripOptions, TextDirection};
pub use solver::{StripLayout, solve};
pub use tabkit_core::geometry::{Point, Rect, Sides, Size};
