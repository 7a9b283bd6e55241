//! Tooltip configuration: defaults, user overlays, validation and loading.
//!
//! A [`TooltipConfig`] is always complete and valid. Users write
//! [`RawTooltip`] overlays (every field optional), typically one
//! application-wide and one per widget, and [`TooltipConfig::overlay_all`]
//! folds them onto the defaults.
#![allow(missing_docs)]

mod defaults;
mod error;
mod loader;
mod raw;
mod tooltip;
mod types;

#[cfg(test)]
mod test_merge;

pub use error::{Error, Result, excerpt_at};
pub use loader::{load_config, load_from_path, parse_str};
pub use raw::{RawFont, RawTooltip};
pub use tooltip::{MAX_PIXELS, TooltipConfig};
pub use types::{Font, FontWeight, Justify, Relief, State};

/// Parse color into raw rgb tuple.
pub fn parse_rgb(s: &str) -> Option<(u8, u8, u8)> {
    colornames::Color::try_from(s).ok().map(|c| c.rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(parse_rgb("black"), Some((0, 0, 0)));
        assert_eq!(parse_rgb("#ffffee"), Some((0xff, 0xff, 0xee)));
        assert_eq!(parse_rgb("definitely not a color"), None);
    }
}
