//! Animation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed interval between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Vertical travel of a slide animation, in pixels.
pub const DEFAULT_SLIDE_DISTANCE: i32 = 8;

/// Visual transition used when a tooltip appears or disappears.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Jump straight to the final state.
    None,
    /// Interpolate opacity.
    #[default]
    Fade,
    /// Interpolate opacity and a short vertical offset.
    Slide,
}

/// Which way a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Appearing: opacity rises to the configured value.
    Show,
    /// Disappearing: opacity falls to zero.
    Hide,
}

/// Parameters for show and hide transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnimationSpec {
    /// Transition style.
    pub mode: AnimationMode,
    /// Show duration in milliseconds. Zero disables the show animation.
    pub duration_in_ms: u64,
    /// Hide duration in milliseconds. Zero disables the hide animation.
    pub duration_out_ms: u64,
    /// Fully shown opacity, in `[0, 1]`.
    pub opacity: f32,
    /// Slide travel in pixels.
    pub slide_distance: i32,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Fade,
            duration_in_ms: 75,
            duration_out_ms: 50,
            opacity: 1.0,
            slide_distance: DEFAULT_SLIDE_DISTANCE,
        }
    }
}

impl AnimationSpec {
    /// Duration for a transition in `direction`.
    pub fn duration(&self, direction: Direction) -> Duration {
        Duration::from_millis(match direction {
            Direction::Show => self.duration_in_ms,
            Direction::Hide => self.duration_out_ms,
        })
    }

    /// Upper bound for any applied opacity: the configured value clamped to `[0, 1]`.
    ///
    /// NaN counts as fully transparent.
    pub fn ceiling(&self) -> f32 {
        if self.opacity.is_nan() {
            0.0
        } else {
            self.opacity.clamp(0.0, 1.0)
        }
    }
}
