// Defaults for tooltip configuration

use tipkit_anim::{AnimationMode, DEFAULT_SLIDE_DISTANCE};
use tipkit_geom::{Corner9, Origin, PointerPolicy};

use crate::types::{FontWeight, Justify, Relief, State};

// Timing, in milliseconds
pub(crate) const SHOW_DELAY: u64 = 100;
pub(crate) const HIDE_DELAY: u64 = 3000;
pub(crate) const ANIM_IN: u64 = 75;
pub(crate) const ANIM_OUT: u64 = 50;

// Behaviour
pub(crate) const FOLLOW_MOUSE: bool = false;
pub(crate) const STATE: State = State::Normal;
pub(crate) const ANIMATION: AnimationMode = AnimationMode::Fade;
pub(crate) const SLIDE_DISTANCE: i32 = DEFAULT_SLIDE_DISTANCE;
pub(crate) const POINTER_POLICY: PointerPolicy = PointerPolicy::AllowOverlap;

// Placement
pub(crate) const ORIGIN: Origin = Origin::Mouse;
pub(crate) const WIDGET_ANCHOR: Corner9 = Corner9::NW;
pub(crate) const TOOLTIP_ANCHOR: Corner9 = Corner9::NW;
pub(crate) const PADX: i32 = 1;
pub(crate) const PADY: i32 = 1;
pub(crate) const IPADX: i32 = 2;
pub(crate) const IPADY: i32 = 2;

// Appearance
pub(crate) const BG: &str = "#ffffee";
pub(crate) const FG: &str = "black";
pub(crate) const FONT_FAMILY: &str = "TkDefaultFont";
pub(crate) const FONT_SIZE: f32 = 8.0;
pub(crate) const FONT_WEIGHT: FontWeight = FontWeight::Regular;
pub(crate) const BORDERWIDTH: i32 = 1;
pub(crate) const RELIEF: Relief = Relief::Solid;
pub(crate) const JUSTIFY: Justify = Justify::Center;
pub(crate) const WRAPLENGTH: i32 = 0;
pub(crate) const OPACITY: f32 = 1.0;

/// Substituted when a default color string fails to parse.
pub(crate) const BLACK: (u8, u8, u8) = (0, 0, 0);
