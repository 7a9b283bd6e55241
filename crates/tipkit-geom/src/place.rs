//! Tooltip position resolution.
//!
//! Resolution happens in three stages:
//! 1. pick an anchor point (pointer, or a [`Corner9`] on the widget),
//! 2. subtract the tooltip's own anchor offset and add the configured offset,
//! 3. optionally move away from the pointer, then clamp into the work area.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    anchor::{Corner9, Origin},
    geom::{Point, Rect, Size, point_in_rect},
};

/// Distance kept between a clamped tooltip and the work-area edges.
pub const EDGE_MARGIN: i32 = 5;

/// Default clearance used by [`PointerPolicy::AvoidPointer`].
pub const POINTER_PADDING: i32 = 20;

/// How a tooltip is anchored relative to its widget or the pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnchorSpec {
    /// Source of the anchor point.
    pub origin: Origin,
    /// Reference position on the widget (ignored for [`Origin::Mouse`]).
    pub widget_anchor: Corner9,
    /// Reference position on the tooltip that is placed at the anchor point.
    pub tooltip_anchor: Corner9,
    /// Horizontal offset added to the final position.
    pub offset_x: i32,
    /// Vertical offset added to the final position.
    pub offset_y: i32,
}

/// What to do when the resolved box would sit under the pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerPolicy {
    /// Overlap is allowed; only clamp to the work area.
    #[default]
    AllowOverlap,
    /// Move the tooltip out from under the pointer: below, above, right, then left.
    AvoidPointer {
        /// Clearance around the tooltip box that counts as overlap.
        padding: i32,
    },
}

impl PointerPolicy {
    /// Avoidance with the default [`POINTER_PADDING`].
    pub const fn avoid() -> Self {
        Self::AvoidPointer {
            padding: POINTER_PADDING,
        }
    }
}

/// Anchor point before the tooltip's own offset is applied.
pub fn anchor_point(anchor: &AnchorSpec, widget: &Rect, pointer: Point) -> Point {
    match anchor.origin {
        Origin::Mouse => pointer,
        Origin::Widget => {
            let (dx, dy) = anchor.widget_anchor.offset_in(widget.w, widget.h);
            widget.origin().offset(dx, dy)
        }
    }
}

/// Unclamped top-left for a tooltip of `tip` size.
pub fn place_unclamped(anchor: &AnchorSpec, widget: &Rect, tip: Size, pointer: Point) -> Point {
    let at = anchor_point(anchor, widget, pointer);
    let (tx, ty) = anchor.tooltip_anchor.offset_in(tip.width, tip.height);
    at.offset(
        anchor.offset_x.saturating_sub(tx),
        anchor.offset_y.saturating_sub(ty),
    )
}

/// Clamp a leading coordinate on one axis.
///
/// `lo..hi` is the full work-area span. A tooltip longer than the span minus
/// both margins is pinned to `lo`.
fn clamp_axis(pos: i32, len: i32, lo: i32, hi: i32) -> i32 {
    let min = lo.saturating_add(EDGE_MARGIN);
    let max = hi.saturating_sub(EDGE_MARGIN).saturating_sub(len);
    if max < min { lo } else { pos.clamp(min, max) }
}

/// Clamp a top-left position so a box of `tip` size stays inside `area`.
pub fn clamp_to_area(pos: Point, tip: Size, area: &Rect) -> Point {
    Point {
        x: clamp_axis(pos.x, tip.width, area.left(), area.right()),
        y: clamp_axis(pos.y, tip.height, area.top(), area.bottom()),
    }
}

/// Move a box away from the pointer when it would overlap it.
///
/// Tries directly below, then above, then to the right, then to the left.
/// Each vertical candidate keeps `x`; each horizontal one keeps `y`. The last
/// fallback is taken unconditionally and left for clamping to fix up.
pub fn avoid_pointer(pos: Point, tip: Size, pointer: Point, padding: i32, area: &Rect) -> Point {
    let hot = Rect::new(pos.x, pos.y, tip.width, tip.height).outset(padding);
    if !point_in_rect(pointer, &hot) {
        return pos;
    }
    let below = Point::new(pos.x, pointer.y.saturating_add(padding));
    if below.y.saturating_add(tip.height) <= area.bottom().saturating_sub(EDGE_MARGIN) {
        return below;
    }
    let above = Point::new(
        pos.x,
        pointer.y.saturating_sub(tip.height).saturating_sub(padding),
    );
    if above.y >= area.top().saturating_add(EDGE_MARGIN) {
        return above;
    }
    let right = Point::new(pointer.x.saturating_add(padding), pos.y);
    if right.x.saturating_add(tip.width) <= area.right().saturating_sub(EDGE_MARGIN) {
        return right;
    }
    Point::new(
        pointer.x.saturating_sub(tip.width).saturating_sub(padding),
        pos.y,
    )
}

/// Resolve the final top-left screen coordinate of a tooltip.
///
/// `widget` is only consulted for [`Origin::Widget`]. `work_area` should come
/// from [`crate::usable_area`].
pub fn resolve_position(
    anchor: &AnchorSpec,
    widget: &Rect,
    tip: Size,
    pointer: Point,
    work_area: &Rect,
    policy: PointerPolicy,
) -> Point {
    let raw = place_unclamped(anchor, widget, tip, pointer);
    let moved = match policy {
        PointerPolicy::AllowOverlap => raw,
        PointerPolicy::AvoidPointer { padding } => {
            avoid_pointer(raw, tip, pointer, padding, work_area)
        }
    };
    let out = clamp_to_area(moved, tip, work_area);
    trace!(
        raw_x = raw.x,
        raw_y = raw.y,
        x = out.x,
        y = out.y,
        "resolve_position"
    );
    out
}
