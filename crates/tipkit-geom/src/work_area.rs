//! Work-area lookup with a full-screen fallback.

use tracing::debug;

use crate::{
    Error, Result,
    geom::{Rect, Size},
};

/// Screen size used when the platform reports nothing at all.
pub const DEFAULT_SCREEN: Size = Size::new(1440, 900);

/// Platform query for the usable portion of the screen.
pub trait WorkAreaSource {
    /// Screen area excluding reserved chrome such as a taskbar or menu bar.
    fn work_area(&self) -> Result<Rect>;

    /// Full screen dimensions. Always available.
    fn screen_size(&self) -> Size;
}

/// Best available placement area.
///
/// Prefers the work area. Any query failure, or an empty result, falls back to
/// the full screen at the origin; the failure is logged and never surfaced.
pub fn usable_area(source: &dyn WorkAreaSource) -> Rect {
    match source.work_area() {
        Ok(area) if !area.is_empty() => area,
        Ok(area) => {
            debug!(?area, "work area empty; using full screen");
            screen_rect(source)
        }
        Err(e) => {
            debug!(error = %e, "work area query failed; using full screen");
            screen_rect(source)
        }
    }
}

/// Full-screen rectangle, with [`DEFAULT_SCREEN`] standing in for a zero-sized report.
fn screen_rect(source: &dyn WorkAreaSource) -> Rect {
    let size = source.screen_size();
    if size.is_empty() {
        Rect::from_size(DEFAULT_SCREEN)
    } else {
        Rect::from_size(size)
    }
}

/// A fixed work area, useful for hosts that compute it once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticWorkArea {
    /// Usable area, or `None` when only the screen size is known.
    pub area: Option<Rect>,
    /// Full screen size.
    pub screen: Size,
}

impl WorkAreaSource for StaticWorkArea {
    fn work_area(&self) -> Result<Rect> {
        self.area
            .ok_or_else(|| Error::WorkAreaUnavailable("no work area configured".to_string()))
    }

    fn screen_size(&self) -> Size {
        self.screen
    }
}
