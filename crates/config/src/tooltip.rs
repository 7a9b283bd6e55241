//! Fully resolved tooltip configuration.

use serde::{Deserialize, Serialize};
use tipkit_anim::{AnimationMode, AnimationSpec};
use tipkit_geom::{AnchorSpec, Corner9, Origin, PointerPolicy};

use crate::{
    Error, Result, defaults, parse_rgb,
    raw::RawTooltip,
    types::{Font, Justify, Relief, State},
};

/// Largest magnitude accepted for any pixel distance in a configuration.
pub const MAX_PIXELS: i32 = 100_000;

/// Every tooltip option, with defaults applied and values validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TooltipConfig {
    /// Delay before showing, in milliseconds.
    pub show_delay: u64,
    /// Auto-hide after this many milliseconds visible; zero disables.
    pub hide_delay: u64,
    /// Move a visible tooltip with the pointer.
    pub follow_mouse: bool,
    /// Normal or disabled.
    pub state: State,
    /// Where the anchor point comes from.
    pub origin: Origin,
    /// Reference position on the widget.
    pub widget_anchor: Corner9,
    /// Reference position on the tooltip.
    pub tooltip_anchor: Corner9,
    /// Horizontal anchor offset.
    pub padx: i32,
    /// Vertical anchor offset.
    pub pady: i32,
    /// Horizontal inner padding of the label.
    pub ipadx: i32,
    /// Vertical inner padding of the label.
    pub ipady: i32,
    /// Background color.
    pub bg: (u8, u8, u8),
    /// Text color.
    pub fg: (u8, u8, u8),
    /// Label font.
    pub font: Font,
    /// Border width in pixels.
    pub borderwidth: i32,
    /// Border style.
    pub relief: Relief,
    /// Alignment of multi-line text.
    pub justify: Justify,
    /// Wrap width in pixels; zero means no wrapping.
    pub wraplength: i32,
    /// Fully shown opacity.
    pub opacity: f32,
    /// Show/hide transition.
    pub animation: AnimationMode,
    /// Show duration in milliseconds.
    pub anim_in: u64,
    /// Hide duration in milliseconds.
    pub anim_out: u64,
    /// Slide travel in pixels.
    pub slide_distance: i32,
    /// Pointer overlap handling.
    pub pointer_policy: PointerPolicy,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let parse_or = |s: &str| parse_rgb(s).unwrap_or(defaults::BLACK);
        Self {
            show_delay: defaults::SHOW_DELAY,
            hide_delay: defaults::HIDE_DELAY,
            follow_mouse: defaults::FOLLOW_MOUSE,
            state: defaults::STATE,
            origin: defaults::ORIGIN,
            widget_anchor: defaults::WIDGET_ANCHOR,
            tooltip_anchor: defaults::TOOLTIP_ANCHOR,
            padx: defaults::PADX,
            pady: defaults::PADY,
            ipadx: defaults::IPADX,
            ipady: defaults::IPADY,
            bg: parse_or(defaults::BG),
            fg: parse_or(defaults::FG),
            font: Font::default(),
            borderwidth: defaults::BORDERWIDTH,
            relief: defaults::RELIEF,
            justify: defaults::JUSTIFY,
            wraplength: defaults::WRAPLENGTH,
            opacity: defaults::OPACITY,
            animation: defaults::ANIMATION,
            anim_in: defaults::ANIM_IN,
            anim_out: defaults::ANIM_OUT,
            slide_distance: defaults::SLIDE_DISTANCE,
            pointer_policy: defaults::POINTER_POLICY,
        }
    }
}

impl TooltipConfig {
    /// Apply a stack of overlays on top of the defaults, in order.
    ///
    /// Typically an application-wide overlay followed by per-instance ones.
    pub fn overlay_all(layers: &[RawTooltip]) -> Result<Self> {
        layers
            .iter()
            .try_fold(Self::default(), |base, layer| layer.overlay(&base))
    }

    /// Check invariants that the types alone do not enforce.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::invalid(
                "opacity",
                format!("must be within [0, 1], got {}", self.opacity),
            ));
        }
        let offsets = [("padx", self.padx), ("pady", self.pady)];
        for (field, value) in offsets {
            if !(-MAX_PIXELS..=MAX_PIXELS).contains(&value) {
                return Err(Error::invalid(
                    field,
                    format!("must be within [-{MAX_PIXELS}, {MAX_PIXELS}], got {value}"),
                ));
            }
        }
        let non_negative = [
            ("ipadx", self.ipadx),
            ("ipady", self.ipady),
            ("borderwidth", self.borderwidth),
            ("wraplength", self.wraplength),
            ("slide_distance", self.slide_distance),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(Error::invalid(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
            if value > MAX_PIXELS {
                return Err(Error::invalid(
                    field,
                    format!("must be at most {MAX_PIXELS}, got {value}"),
                ));
            }
        }
        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            return Err(Error::invalid(
                "font",
                format!("size must be positive, got {}", self.font.size),
            ));
        }
        if let PointerPolicy::AvoidPointer { padding } = self.pointer_policy
            && !(0..=MAX_PIXELS).contains(&padding)
        {
            return Err(Error::invalid(
                "pointer_policy",
                format!("padding must be within [0, {MAX_PIXELS}], got {padding}"),
            ));
        }
        Ok(())
    }

    /// Whether pointer events should show the tooltip.
    pub fn is_enabled(&self) -> bool {
        self.state == State::Normal
    }

    /// Placement parameters for the position resolver.
    pub fn anchor_spec(&self) -> AnchorSpec {
        AnchorSpec {
            origin: self.origin,
            widget_anchor: self.widget_anchor,
            tooltip_anchor: self.tooltip_anchor,
            offset_x: self.padx,
            offset_y: self.pady,
        }
    }

    /// Transition parameters for the animator.
    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec {
            mode: self.animation,
            duration_in_ms: self.anim_in,
            duration_out_ms: self.anim_out,
            opacity: self.opacity,
            slide_distance: self.slide_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = TooltipConfig::default();
        assert_eq!(c.show_delay, 100);
        assert_eq!(c.hide_delay, 3000);
        assert!(!c.follow_mouse);
        assert!(c.is_enabled());
        assert_eq!(c.origin, Origin::Mouse);
        assert_eq!((c.widget_anchor, c.tooltip_anchor), (Corner9::NW, Corner9::NW));
        assert_eq!((c.padx, c.pady, c.ipadx, c.ipady), (1, 1, 2, 2));
        assert_eq!(c.bg, (0xff, 0xff, 0xee));
        assert_eq!(c.fg, (0, 0, 0));
        assert_eq!(c.relief, Relief::Solid);
        assert_eq!(c.justify, Justify::Center);
        assert_eq!((c.anim_in, c.anim_out), (75, 50));
        assert_eq!(c.pointer_policy, PointerPolicy::AllowOverlap);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn specs_carry_fields_through() {
        let c = TooltipConfig {
            origin: Origin::Widget,
            padx: 4,
            pady: -3,
            animation: AnimationMode::Slide,
            opacity: 0.5,
            ..TooltipConfig::default()
        };
        let a = c.anchor_spec();
        assert_eq!((a.origin, a.offset_x, a.offset_y), (Origin::Widget, 4, -3));
        let s = c.animation_spec();
        assert_eq!(s.mode, AnimationMode::Slide);
        assert_eq!((s.duration_in_ms, s.duration_out_ms), (75, 50));
        assert_eq!(s.opacity, 0.5);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            TooltipConfig {
                opacity: 1.5,
                ..TooltipConfig::default()
            },
            TooltipConfig {
                opacity: f32::NAN,
                ..TooltipConfig::default()
            },
            TooltipConfig {
                wraplength: -1,
                ..TooltipConfig::default()
            },
            TooltipConfig {
                pointer_policy: PointerPolicy::AvoidPointer { padding: -2 },
                ..TooltipConfig::default()
            },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(Error::Validation { .. })), "{c:?}");
        }
    }
}
