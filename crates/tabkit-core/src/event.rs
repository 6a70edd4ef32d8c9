#![forbid(unsafe_code)]

//! Canonical pointer-event types.
//!
//! Hosts translate their toolkit's mouse events into these values before
//! feeding them to the strip engine. All events derive `Clone`, `PartialEq`,
//! and `Eq` for use in tests and pattern matching.

use crate::geometry::Point;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Middle button.
    Middle,
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// The pointer moved.
    Moved,
    /// A button was pressed.
    Down(PointerButton),
    /// A button was released.
    Up(PointerButton),
    /// The pointer left the container.
    Left,
}

/// A pointer event at a position in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// The kind of pointer event.
    pub kind: PointerEventKind,
    /// Position of the pointer in container coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// A move event at the given position.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Moved, position)
    }

    /// A primary-button press at the given position.
    #[must_use]
    pub const fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), position)
    }

    /// A primary-button release at the given position.
    #[must_use]
    pub const fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), position)
    }

    /// A pointer-left event. The position is the last known position.
    #[must_use]
    pub const fn left(position: Point) -> Self {
        Self::new(PointerEventKind::Left, position)
    }
}
