//! Explicit state machine for one in-flight transition.

use crate::plan::{Frame, Plan};

/// Where a transition is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Planned but no frame emitted yet.
    Idle,
    /// The frame at `step` has been emitted.
    Running {
        /// Index of the last emitted frame.
        step: u32,
    },
    /// The terminal frame has been emitted.
    Done,
}

/// A transition advanced one frame at a time by the scheduler.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Precomputed values for every frame.
    plan: Plan,
    /// Current position.
    phase: Phase,
}

impl Animation {
    /// Start in [`Phase::Idle`].
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            phase: Phase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The underlying plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Emit the next frame, or `None` once done.
    pub fn advance(&mut self) -> Option<Frame> {
        let step = match self.phase {
            Phase::Idle => 0,
            Phase::Running { step } => step + 1,
            Phase::Done => return None,
        };
        let frame = self.plan.frame(step);
        self.phase = if frame.last {
            Phase::Done
        } else {
            Phase::Running { step }
        };
        Some(frame)
    }
}

impl Iterator for Animation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{AnimationMode, AnimationSpec, Direction};

    #[test]
    fn walks_idle_running_done() {
        let spec = AnimationSpec {
            duration_in_ms: 20,
            ..AnimationSpec::default()
        };
        let mut anim = Animation::new(Plan::new(&spec, Direction::Show));
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.advance().map(|f| f.step), Some(0));
        assert_eq!(anim.phase(), Phase::Running { step: 0 });
        assert_eq!(anim.advance().map(|f| f.step), Some(1));
        let last = anim.advance().unwrap();
        assert!(last.last);
        assert_eq!(anim.phase(), Phase::Done);
        assert!(anim.advance().is_none());
    }

    #[test]
    fn immediate_plan_is_one_frame() {
        let spec = AnimationSpec {
            mode: AnimationMode::None,
            ..AnimationSpec::default()
        };
        let frames: Vec<_> = Animation::new(Plan::new(&spec, Direction::Hide)).collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].opacity, 0.0);
    }
}
