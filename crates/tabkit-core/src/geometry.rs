#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All types use signed pixel coordinates (0-indexed, origin at top-left,
//! y growing downward). Signed coordinates let scrolled tab bounds and
//! degenerate containers go negative without wrapping.

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point translated by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair in pixels.
///
/// Negative extents are permitted as intermediate values; a size is
/// considered empty when either extent is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check whether either extent is zero or negative.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Return the size with width and height swapped.
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Component-wise maximum of two sizes.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Return the size grown by the given margins on all sides.
    #[inline]
    #[must_use]
    pub const fn expanded(self, margin: Sides) -> Self {
        Self::new(
            self.width + margin.horizontal_sum(),
            self.height + margin.vertical_sum(),
        )
    }
}

/// Per-side extents for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create new sides with equal values.
    #[must_use]
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    #[must_use]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    #[must_use]
    pub const fn vertical_sum(&self) -> i32 {
        self.top + self.bottom
    }
}

impl From<i32> for Sides {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

/// Placement of a reading-orientation rectangle inside a container.
///
/// `Clockwise` corresponds to content that flows top-to-bottom (rotated 90°
/// right), `CounterClockwise` to content that flows bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rotation {
    /// No rotation; the rectangle is only translated into the container.
    #[default]
    None,
    /// Rotated 90° clockwise: the reading start edge maps to the container
    /// top, the reading top edge to the container left.
    Clockwise,
    /// Rotated 90° counter-clockwise: the reading start edge maps to the
    /// container bottom, the reading top edge to the container right.
    CounterClockwise,
}

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Origin point.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size of the rectangle.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point (rounded toward the origin).
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if the rectangle has zero or negative area.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.right() && pt.y >= self.y && pt.y < self.bottom()
    }

    /// Return the rectangle translated by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Create a new rectangle inside the current one with the given margin.
    #[must_use]
    pub const fn inset(self, margin: Sides) -> Self {
        Self::new(
            self.x + margin.left,
            self.y + margin.top,
            self.width - margin.horizontal_sum(),
            self.height - margin.vertical_sum(),
        )
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection with another rectangle, returning `None` if
    /// no overlap.
    #[must_use]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Create a new rectangle that is the union of this rectangle and
    /// another.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect::new(x, y, right - x, bottom - y)
    }

    /// Return a rectangle of this size centered inside another rectangle.
    #[must_use]
    pub const fn centered_in(self, outer: Rect) -> Rect {
        Rect::new(
            outer.x + (outer.width - self.width) / 2,
            outer.y + (outer.height - self.height) / 2,
            self.width,
            self.height,
        )
    }

    /// Clamp the extents up to the given minimums, keeping the origin.
    ///
    /// Used to keep squeezed-out content regions representable as degenerate
    /// 1×1 rectangles instead of negative sizes.
    #[must_use]
    pub fn with_min_size(self, min_width: i32, min_height: i32) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width.max(min_width),
            self.height.max(min_height),
        )
    }

    /// Map a rectangle authored in reading orientation into a container.
    ///
    /// For `Rotation::None` the rectangle is translated by the container
    /// origin. For the 90° placements, `self` is interpreted in a reading
    /// space whose extents are the container's transposed extents; the
    /// result is in the container's coordinate space. Applying the same 90°
    /// rotation against the transposed container inverts the transform.
    #[must_use]
    pub const fn rotate_into(self, container: Rect, rotation: Rotation) -> Rect {
        match rotation {
            Rotation::None => self.offset(container.x, container.y),
            Rotation::Clockwise => Rect::new(
                container.x + self.y,
                container.y + self.x,
                self.height,
                self.width,
            ),
            Rotation::CounterClockwise => Rect::new(
                container.x + container.width - self.y - self.height,
                container.y + container.height - self.x - self.width,
                self.height,
                self.width,
            ),
        }
    }
}
