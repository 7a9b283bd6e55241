//! Named reference positions on a rectangle and their fractional offsets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where the tooltip anchor point comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Anchor at the pointer position.
    #[default]
    Mouse,
    /// Anchor at a reference position on the widget.
    Widget,
}

/// One of nine reference positions on a rectangle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Corner9 {
    /// Top edge midpoint.
    N,
    /// Top-right corner.
    NE,
    /// Right edge midpoint.
    E,
    /// Bottom-right corner.
    SE,
    /// Bottom edge midpoint.
    S,
    /// Bottom-left corner.
    SW,
    /// Left edge midpoint.
    W,
    /// Top-left corner.
    #[default]
    NW,
    /// Center of the rectangle.
    Center,
}

impl Corner9 {
    /// All nine positions, row-major from the top-left.
    pub const ALL: [Self; 9] = [
        Self::NW,
        Self::N,
        Self::NE,
        Self::W,
        Self::Center,
        Self::E,
        Self::SW,
        Self::S,
        Self::SE,
    ];

    /// Position on each axis in halves of the extent: 0 = leading, 1 = middle, 2 = trailing.
    pub const fn halves(self) -> (i32, i32) {
        match self {
            Self::NW => (0, 0),
            Self::N => (1, 0),
            Self::NE => (2, 0),
            Self::W => (0, 1),
            Self::Center => (1, 1),
            Self::E => (2, 1),
            Self::SW => (0, 2),
            Self::S => (1, 2),
            Self::SE => (2, 2),
        }
    }

    /// Build from per-axis halves; values outside `0..=2` are treated as the middle.
    const fn from_halves(hx: i32, hy: i32) -> Self {
        match (hx, hy) {
            (0, 0) => Self::NW,
            (2, 0) => Self::NE,
            (_, 0) => Self::N,
            (0, 2) => Self::SW,
            (2, 2) => Self::SE,
            (_, 2) => Self::S,
            (0, _) => Self::W,
            (2, _) => Self::E,
            _ => Self::Center,
        }
    }

    /// Pixel offset of this position inside a box of `width` x `height`.
    ///
    /// Midpoints floor, so odd extents round toward the leading edge.
    pub fn offset_in(self, width: i32, height: i32) -> (i32, i32) {
        let (hx, hy) = self.halves();
        (
            width.saturating_mul(hx).div_euclid(2),
            height.saturating_mul(hy).div_euclid(2),
        )
    }

    /// Canonical short name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
            Self::Center => "center",
        }
    }
}

/// Relative `(rx, ry)` fractions of a position, each one of `0.0`, `0.5`, `1.0`.
pub fn corner_to_fraction(corner: Corner9) -> (f32, f32) {
    let (hx, hy) = corner.halves();
    (hx as f32 / 2.0, hy as f32 / 2.0)
}

impl FromStr for Corner9 {
    type Err = Error;

    /// Parse a compass string.
    ///
    /// Letters may appear in any order and case. An axis naming both of its
    /// opposite edges is centred, so `"nesw"` is [`Corner9::Center`].
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().to_ascii_lowercase();
        if trimmed == "center" || trimmed == "c" {
            return Ok(Self::Center);
        }
        let invalid = || Error::InvalidAnchor {
            input: s.to_string(),
        };
        if trimmed.is_empty() {
            return Err(invalid());
        }
        let (mut n, mut e, mut so, mut w) = (false, false, false, false);
        for ch in trimmed.chars() {
            match ch {
                'n' => n = true,
                'e' => e = true,
                's' => so = true,
                'w' => w = true,
                _ => return Err(invalid()),
            }
        }
        let hx = match (w, e) {
            (true, false) => 0,
            (false, true) => 2,
            _ => 1,
        };
        let hy = match (n, so) {
            (true, false) => 0,
            (false, true) => 2,
            _ => 1,
        };
        Ok(Self::from_halves(hx, hy))
    }
}

impl TryFrom<String> for Corner9 {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Corner9> for String {
    fn from(value: Corner9) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Corner9 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_match_table() {
        let table = [
            (Corner9::N, (0.5, 0.0)),
            (Corner9::NE, (1.0, 0.0)),
            (Corner9::E, (1.0, 0.5)),
            (Corner9::SE, (1.0, 1.0)),
            (Corner9::S, (0.5, 1.0)),
            (Corner9::SW, (0.0, 1.0)),
            (Corner9::W, (0.0, 0.5)),
            (Corner9::NW, (0.0, 0.0)),
            (Corner9::Center, (0.5, 0.5)),
        ];
        for (corner, want) in table {
            assert_eq!(corner_to_fraction(corner), want, "{corner}");
        }
    }

    #[test]
    fn fractions_are_on_the_half_grid() {
        for corner in Corner9::ALL {
            let (rx, ry) = corner_to_fraction(corner);
            for v in [rx, ry] {
                assert!(v == 0.0 || v == 0.5 || v == 1.0, "{corner}: {v}");
            }
        }
    }

    #[test]
    fn parse_canonical_names_round_trip() {
        for corner in Corner9::ALL {
            assert_eq!(corner.as_str().parse::<Corner9>().unwrap(), corner);
        }
    }

    #[test]
    fn parse_is_order_and_case_insensitive() {
        assert_eq!("EN".parse::<Corner9>().unwrap(), Corner9::NE);
        assert_eq!("ws".parse::<Corner9>().unwrap(), Corner9::SW);
        assert_eq!(" Center ".parse::<Corner9>().unwrap(), Corner9::Center);
    }

    #[test]
    fn opposite_edges_centre_the_axis() {
        assert_eq!("nesw".parse::<Corner9>().unwrap(), Corner9::Center);
        assert_eq!("swen".parse::<Corner9>().unwrap(), Corner9::Center);
        assert_eq!("ns".parse::<Corner9>().unwrap(), Corner9::Center);
        assert_eq!("nsw".parse::<Corner9>().unwrap(), Corner9::W);
        assert_eq!("new".parse::<Corner9>().unwrap(), Corner9::N);
        assert_eq!(corner_to_fraction("nesw".parse().unwrap()), (0.5, 0.5));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Corner9>().is_err());
        assert!("north".parse::<Corner9>().is_err());
        assert!("nx".parse::<Corner9>().is_err());
    }

    #[test]
    fn offset_in_floors_midpoints() {
        assert_eq!(Corner9::Center.offset_in(50, 20), (25, 10));
        assert_eq!(Corner9::Center.offset_in(41, 21), (20, 10));
        assert_eq!(Corner9::SE.offset_in(41, 21), (41, 21));
        assert_eq!(Corner9::NW.offset_in(41, 21), (0, 0));
    }

    #[test]
    fn serde_uses_compass_strings() {
        let json = serde_json::to_string(&Corner9::SE).unwrap();
        assert_eq!(json, "\"se\"");
        let back: Corner9 = serde_json::from_str("\"nesw\"").unwrap();
        assert_eq!(back, Corner9::Center);
        assert!(serde_json::from_str::<Corner9>("\"up\"").is_err());
        let origin: Origin = serde_json::from_str("\"widget\"").unwrap();
        assert_eq!(origin, Origin::Widget);
    }
}
