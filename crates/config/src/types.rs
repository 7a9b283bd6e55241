use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Whether a tooltip reacts to pointer events.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Shows on hover.
    #[default]
    Normal,
    /// Never shows.
    Disabled,
}

impl State {
    /// Lowercase name as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Disabled => "disabled",
        }
    }
}

impl FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "disabled" => Ok(Self::Disabled),
            other => Err(format!(
                "unknown state {other:?} (expected \"normal\" or \"disabled\")"
            )),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Border style drawn around the label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relief {
    /// No border shading.
    Flat,
    /// Raised bevel.
    Raised,
    /// Sunken bevel.
    Sunken,
    /// Etched groove.
    Groove,
    /// Raised ridge.
    Ridge,
    /// Plain solid line.
    #[default]
    Solid,
}

/// Horizontal alignment of multi-line text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Font weight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light weight.
    Light,
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}

/// Label font.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Font {
    /// Family name, passed through to the host.
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: defaults::FONT_FAMILY.to_string(),
            size: defaults::FONT_SIZE,
            weight: defaults::FONT_WEIGHT,
        }
    }
}
