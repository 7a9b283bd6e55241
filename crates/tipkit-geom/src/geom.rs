// Integer screen-space primitives. Origin is top-left; y grows downward.
// Arithmetic saturates at the i32 bounds instead of wrapping.

use serde::{Deserialize, Serialize};

/// A point in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate (grows downward).
    pub y: i32,
}

impl Point {
    /// Construct a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Width and height of a box in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Construct a size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned integer rectangle. Immutable snapshot taken at resolution time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from origin and extent.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` placed at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            x: 0,
            y: 0,
            w: size.width,
            h: size.height,
        }
    }

    /// Left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }
    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }
    /// Top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }
    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Extent as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// True when the rectangle has no usable area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Shrink every edge by `margin`. Extents never go below zero.
    #[must_use]
    pub fn inset(&self, margin: i32) -> Self {
        let twice = margin.saturating_mul(2);
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            w: self.w.saturating_sub(twice).max(0),
            h: self.h.saturating_sub(twice).max(0),
        }
    }

    /// Grow every edge by `pad`.
    #[must_use]
    pub fn outset(&self, pad: i32) -> Self {
        let twice = pad.saturating_mul(2);
        Self {
            x: self.x.saturating_sub(pad),
            y: self.y.saturating_sub(pad),
            w: self.w.saturating_add(twice),
            h: self.h.saturating_add(twice),
        }
    }
}

/// Inclusive point-in-rect test.
#[inline]
pub fn point_in_rect(p: Point, r: &Rect) -> bool {
    p.x >= r.left() && p.x <= r.right() && p.y >= r.top() && p.y <= r.bottom()
}
