//! Tooltip placement geometry.
//!
//! Given an [`AnchorSpec`], the widget's screen rectangle, the tooltip's
//! measured size, and the pointer, [`resolve_position`] returns the top-left
//! coordinate of the tooltip, clamped into the usable screen area.
//!
//! Everything here is pure: callers pass explicit geometry snapshots and get a
//! coordinate back. The only platform seam is [`WorkAreaSource`].

mod anchor;
mod error;
mod geom;
mod place;
mod work_area;

#[cfg(test)]
mod property_tests;

pub use anchor::{Corner9, Origin, corner_to_fraction};
pub use error::{Error, Result};
pub use geom::{Point, Rect, Size, point_in_rect};
pub use place::{
    AnchorSpec, EDGE_MARGIN, POINTER_PADDING, PointerPolicy, anchor_point, avoid_pointer,
    clamp_to_area, place_unclamped, resolve_position,
};
pub use work_area::{DEFAULT_SCREEN, StaticWorkArea, WorkAreaSource, usable_area};
