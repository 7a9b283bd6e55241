//! Pure frame computation for one transition.

use crate::spec::{AnimationMode, AnimationSpec, Direction, TICK_INTERVAL};

/// The visual state to apply on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Index of this frame, `0..=steps`.
    pub step: u32,
    /// Total number of steps in the run (0 for an immediate transition).
    pub steps: u32,
    /// `step / steps`, or `1.0` for an immediate transition.
    pub progress: f32,
    /// Opacity to apply.
    pub opacity: f32,
    /// Vertical offset from the resting position, in pixels.
    pub offset_y: i32,
    /// True for the terminal frame.
    pub last: bool,
}

/// Start/end values and step size for a transition, fixed up front.
///
/// Values are computed as `start + step * delta` rather than accumulated, so
/// there is no drift across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Number of steps after frame 0. Zero means immediate.
    steps: u32,
    /// Opacity at frame 0.
    start: f32,
    /// Opacity at the terminal frame.
    end: f32,
    /// Opacity change per step.
    delta: f32,
    /// Maximum applied opacity.
    ceiling: f32,
    /// Slide offsets `(start, end)`, when sliding.
    slide: Option<(i32, i32)>,
}

impl Plan {
    /// Plan a transition in `direction` according to `spec`.
    pub fn new(spec: &AnimationSpec, direction: Direction) -> Self {
        let ceiling = spec.ceiling();
        let (start, end) = match direction {
            Direction::Show => (0.0, ceiling),
            Direction::Hide => (ceiling, 0.0),
        };
        let duration = spec.duration(direction);
        if spec.mode == AnimationMode::None || duration.is_zero() {
            return Self {
                steps: 0,
                start: end,
                end,
                delta: 0.0,
                ceiling,
                slide: None,
            };
        }
        let steps = (duration.as_millis() / TICK_INTERVAL.as_millis()).max(1);
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        let slide = (spec.mode == AnimationMode::Slide).then(|| match direction {
            Direction::Show => (spec.slide_distance, 0),
            Direction::Hide => (0, spec.slide_distance),
        });
        Self {
            steps,
            start,
            end,
            delta: (end - start) / steps as f32,
            ceiling,
            slide,
        }
    }

    /// Number of steps after frame 0.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// True when the transition completes in a single synchronous frame.
    pub fn is_immediate(&self) -> bool {
        self.steps == 0
    }

    /// Frame for `step`. Steps past the end return the terminal frame.
    pub fn frame(&self, step: u32) -> Frame {
        let step = step.min(self.steps);
        let last = step == self.steps;
        let progress = if self.steps == 0 {
            1.0
        } else {
            step as f32 / self.steps as f32
        };
        let raw = if last {
            self.end
        } else {
            self.start + step as f32 * self.delta
        };
        let offset_y = match self.slide {
            None => 0,
            Some((_, end)) if last => end,
            Some((start, end)) => {
                start + (f64::from(end - start) * f64::from(step) / f64::from(self.steps)) as i32
            }
        };
        Frame {
            step,
            steps: self.steps,
            progress,
            opacity: raw.clamp(0.0, self.ceiling),
            offset_y,
            last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mode: AnimationMode, ms: u64, opacity: f32) -> AnimationSpec {
        AnimationSpec {
            mode,
            duration_in_ms: ms,
            duration_out_ms: ms,
            opacity,
            slide_distance: 8,
        }
    }

    #[test]
    fn fade_show_steps_and_values() {
        let plan = Plan::new(&spec(AnimationMode::Fade, 50, 0.8), Direction::Show);
        assert_eq!(plan.steps(), 5);
        let values: Vec<f32> = (0..=5).map(|i| plan.frame(i).opacity).collect();
        assert_eq!(values[0], 0.0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
        assert_eq!(values[5], 0.8);
        assert!(plan.frame(5).last);
        assert!(!plan.frame(4).last);
    }

    #[test]
    fn fade_hide_runs_down_to_zero() {
        let plan = Plan::new(&spec(AnimationMode::Fade, 30, 1.0), Direction::Hide);
        assert_eq!(plan.steps(), 3);
        assert_eq!(plan.frame(0).opacity, 1.0);
        assert_eq!(plan.frame(3).opacity, 0.0);
        assert!(plan.frame(1).opacity > plan.frame(2).opacity);
    }

    #[test]
    fn short_durations_take_one_step() {
        let plan = Plan::new(&spec(AnimationMode::Fade, 7, 1.0), Direction::Show);
        assert_eq!(plan.steps(), 1);
        assert_eq!(plan.frame(0).opacity, 0.0);
        assert_eq!(plan.frame(1).opacity, 1.0);
    }

    #[test]
    fn none_and_zero_duration_are_immediate() {
        for s in [
            spec(AnimationMode::None, 100, 0.6),
            spec(AnimationMode::Fade, 0, 0.6),
            spec(AnimationMode::Slide, 0, 0.6),
        ] {
            let show = Plan::new(&s, Direction::Show);
            assert!(show.is_immediate());
            let f = show.frame(0);
            assert!(f.last);
            assert_eq!(f.opacity, 0.6);
            assert_eq!(f.offset_y, 0);
            assert_eq!(f.progress, 1.0);
            assert_eq!(Plan::new(&s, Direction::Hide).frame(0).opacity, 0.0);
        }
    }

    #[test]
    fn opacity_is_clamped_to_configured_ceiling() {
        let plan = Plan::new(&spec(AnimationMode::Fade, 100, 1.7), Direction::Show);
        for i in 0..=plan.steps() {
            let o = plan.frame(i).opacity;
            assert!((0.0..=1.0).contains(&o));
        }
        let plan = Plan::new(&spec(AnimationMode::Fade, 100, -0.5), Direction::Show);
        assert_eq!(plan.frame(plan.steps()).opacity, 0.0);
    }

    #[test]
    fn slide_show_moves_up_to_rest() {
        let plan = Plan::new(&spec(AnimationMode::Slide, 40, 1.0), Direction::Show);
        let offsets: Vec<i32> = (0..=4).map(|i| plan.frame(i).offset_y).collect();
        assert_eq!(offsets, vec![8, 6, 4, 2, 0]);
    }

    #[test]
    fn slide_hide_moves_down() {
        let plan = Plan::new(&spec(AnimationMode::Slide, 30, 1.0), Direction::Hide);
        let offsets: Vec<i32> = (0..=3).map(|i| plan.frame(i).offset_y).collect();
        assert_eq!(offsets, vec![0, 2, 5, 8]);
    }

    #[test]
    fn progress_spans_unit_interval() {
        let plan = Plan::new(&spec(AnimationMode::Fade, 40, 1.0), Direction::Show);
        assert_eq!(plan.frame(0).progress, 0.0);
        assert_eq!(plan.frame(2).progress, 0.5);
        assert_eq!(plan.frame(4).progress, 1.0);
        assert_eq!(plan.frame(99), plan.frame(4));
    }
}
