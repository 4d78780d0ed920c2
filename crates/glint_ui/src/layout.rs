//! Integer rectangles and anchor rules.

use serde::{Deserialize, Serialize};

/// A rectangle in pixel coordinates.
///
/// Edges are half-open: a rect at `x = 0` with `width = 10` covers columns
/// `0..10`, so `right()` is the first column outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of the given size at the origin.
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns the center point (rounded toward the top-left).
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Returns the size as `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// Returns the smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Grows the rectangle by `dw` total width and `dh` total height,
    /// keeping it centered.
    #[must_use]
    pub const fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(self.x - dw / 2, self.y - dh / 2, self.width + dw, self.height + dh)
    }

    /// Moves the rectangle by an offset.
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns the point of this rect named by `anchor`.
    #[must_use]
    pub const fn anchor_point(&self, anchor: Anchor) -> (i32, i32) {
        let (cx, cy) = self.center();
        match anchor {
            Anchor::TopLeft => (self.x, self.y),
            Anchor::MidTop => (cx, self.y),
            Anchor::TopRight => (self.right(), self.y),
            Anchor::MidLeft => (self.x, cy),
            Anchor::Center => (cx, cy),
            Anchor::MidRight => (self.right(), cy),
            Anchor::BottomLeft => (self.x, self.bottom()),
            Anchor::MidBottom => (cx, self.bottom()),
            Anchor::BottomRight => (self.right(), self.bottom()),
        }
    }

    /// Places a rect of `size` so its `anchor` point lands on `point`.
    #[must_use]
    pub const fn anchored(anchor: Anchor, point: (i32, i32), size: (i32, i32)) -> Self {
        let (w, h) = size;
        let (px, py) = point;
        let x = match anchor {
            Anchor::TopLeft | Anchor::MidLeft | Anchor::BottomLeft => px,
            Anchor::MidTop | Anchor::Center | Anchor::MidBottom => px - w / 2,
            Anchor::TopRight | Anchor::MidRight | Anchor::BottomRight => px - w,
        };
        let y = match anchor {
            Anchor::TopLeft | Anchor::MidTop | Anchor::TopRight => py,
            Anchor::MidLeft | Anchor::Center | Anchor::MidRight => py - h / 2,
            Anchor::BottomLeft | Anchor::MidBottom | Anchor::BottomRight => py - h,
        };
        Self::new(x, y, w, h)
    }

    /// Returns a copy re-anchored so its `anchor` point is at `point`.
    #[must_use]
    pub const fn with_anchor(&self, anchor: Anchor, point: (i32, i32)) -> Self {
        Self::anchored(anchor, point, self.size())
    }
}

/// Named point on a rectangle, used to place an image at a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    MidTop,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    MidLeft,
    /// Center.
    #[default]
    Center,
    /// Middle of the right edge.
    MidRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    MidBottom,
    /// Bottom-right corner.
    BottomRight,
}

/// Horizontal alignment of a caption inside a wider surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Which side of a reference rect an overlay goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    /// Above.
    Top,
    /// Below.
    #[default]
    Bottom,
}
