use serde::{Deserialize, Serialize};
use tipkit_anim::AnimationMode;
use tipkit_geom::{Corner9, Origin, PointerPolicy};

use crate::{
    Error, Result, parse_rgb,
    tooltip::TooltipConfig,
    types::{Font, FontWeight, Justify, Relief, State},
};

/// Partial font override.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawFont {
    /// Family name.
    #[serde(default)]
    pub family: Option<String>,
    /// Point size.
    #[serde(default)]
    pub size: Option<f32>,
    /// Weight.
    #[serde(default)]
    pub weight: Option<FontWeight>,
}

impl RawFont {
    /// Merge onto `base`.
    fn overlay(&self, base: &Font) -> Font {
        Font {
            family: self.family.clone().unwrap_or_else(|| base.family.clone()),
            size: self.size.unwrap_or(base.size),
            weight: self.weight.unwrap_or(base.weight),
        }
    }
}

/// Tooltip options as written by the user: every field optional.
///
/// States, anchors and colors are kept as strings here so that bad values are
/// reported as validation errors naming the field rather than as syntax errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawTooltip {
    #[serde(default)]
    pub show_delay: Option<u64>,
    #[serde(default)]
    pub hide_delay: Option<u64>,
    #[serde(default)]
    pub follow_mouse: Option<bool>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub widget_anchor: Option<String>,
    #[serde(default)]
    pub tooltip_anchor: Option<String>,
    #[serde(default)]
    pub padx: Option<i32>,
    #[serde(default)]
    pub pady: Option<i32>,
    #[serde(default)]
    pub ipadx: Option<i32>,
    #[serde(default)]
    pub ipady: Option<i32>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub font: Option<RawFont>,
    #[serde(default)]
    pub borderwidth: Option<i32>,
    #[serde(default)]
    pub relief: Option<Relief>,
    #[serde(default)]
    pub justify: Option<Justify>,
    #[serde(default)]
    pub wraplength: Option<i32>,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub animation: Option<AnimationMode>,
    #[serde(default)]
    pub anim_in: Option<u64>,
    #[serde(default)]
    pub anim_out: Option<u64>,
    #[serde(default)]
    pub slide_distance: Option<i32>,
    #[serde(default)]
    pub pointer_policy: Option<PointerPolicy>,
}

/// Parse an optional color string, keeping `default` when absent.
fn color_or(field: &str, src: &Option<String>, default: (u8, u8, u8)) -> Result<(u8, u8, u8)> {
    match src.as_deref() {
        Some(s) => parse_rgb(s).ok_or_else(|| Error::invalid(field, format!("unknown color {s:?}"))),
        None => Ok(default),
    }
}

/// Parse an optional anchor string, keeping `default` when absent.
fn anchor_or(field: &str, src: &Option<String>, default: Corner9) -> Result<Corner9> {
    match src.as_deref() {
        Some(s) => s.parse().map_err(|e| Error::invalid(field, format!("{e}"))),
        None => Ok(default),
    }
}

impl RawTooltip {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this overlay onto `base` and validate the result.
    pub fn overlay(&self, base: &TooltipConfig) -> Result<TooltipConfig> {
        macro_rules! or_field {
            ($field:ident) => {
                self.$field.unwrap_or(base.$field)
            };
        }
        let state = match self.state.as_deref() {
            Some(s) => s
                .parse::<State>()
                .map_err(|message| Error::invalid("state", message))?,
            None => base.state,
        };
        let config = TooltipConfig {
            show_delay: or_field!(show_delay),
            hide_delay: or_field!(hide_delay),
            follow_mouse: or_field!(follow_mouse),
            state,
            origin: or_field!(origin),
            widget_anchor: anchor_or("widget_anchor", &self.widget_anchor, base.widget_anchor)?,
            tooltip_anchor: anchor_or("tooltip_anchor", &self.tooltip_anchor, base.tooltip_anchor)?,
            padx: or_field!(padx),
            pady: or_field!(pady),
            ipadx: or_field!(ipadx),
            ipady: or_field!(ipady),
            bg: color_or("bg", &self.bg, base.bg)?,
            fg: color_or("fg", &self.fg, base.fg)?,
            font: match &self.font {
                Some(f) => f.overlay(&base.font),
                None => base.font.clone(),
            },
            borderwidth: or_field!(borderwidth),
            relief: or_field!(relief),
            justify: or_field!(justify),
            wraplength: or_field!(wraplength),
            opacity: or_field!(opacity),
            animation: or_field!(animation),
            anim_in: or_field!(anim_in),
            anim_out: or_field!(anim_out),
            slide_distance: or_field!(slide_distance),
            pointer_policy: or_field!(pointer_policy),
        };
        config.validate()?;
        Ok(config)
    }
}
