//! Driving a transition on a scheduler, with supersession.

use std::{cell::Cell, fmt::Display, rc::Rc};

use tracing::{debug, trace};

use crate::{
    plan::{Frame, Plan},
    scheduler::Scheduler,
    spec::{AnimationSpec, Direction, TICK_INTERVAL},
    state::Animation,
};

/// Owner of the "current run" token for one animated surface.
///
/// Claiming the slot invalidates every guard handed out before. A run whose
/// guard is dead stops at its next tick without touching anything.
#[derive(Debug, Clone, Default)]
pub struct RunSlot {
    /// Id of the live run; zero means none.
    current: Rc<Cell<u64>>,
}

impl RunSlot {
    /// Slot with no live run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, superseding any earlier one.
    pub fn claim(&self) -> RunGuard {
        let id = self.current.get() + 1;
        self.current.set(id);
        RunGuard {
            current: Rc::clone(&self.current),
            id,
        }
    }

    /// Kill the live run, if any, without starting another.
    pub fn cancel(&self) {
        self.current.set(self.current.get() + 1);
    }
}

/// Liveness token for a single run.
#[derive(Debug, Clone)]
pub struct RunGuard {
    /// Shared with the issuing slot.
    current: Rc<Cell<u64>>,
    /// This run's id.
    id: u64,
}

impl RunGuard {
    /// True while no newer run has been claimed and the slot was not cancelled.
    pub fn is_live(&self) -> bool {
        self.current.get() == self.id
    }
}

/// State carried from tick to tick.
struct Run<F, C> {
    /// Timer facility for subsequent ticks.
    scheduler: Rc<dyn Scheduler>,
    /// Frame source.
    animation: Animation,
    /// Show or hide.
    direction: Direction,
    /// Supersession check.
    guard: RunGuard,
    /// Applies each frame.
    on_frame: F,
    /// Runs once after a hide completes.
    on_complete: Option<C>,
}

/// Run a show or hide transition.
///
/// Frame 0 is applied synchronously; later frames follow every
/// [`TICK_INTERVAL`]. An immediate transition (mode `None` or a zero duration)
/// applies its single terminal frame and schedules nothing. Errors from
/// `on_frame` are logged and ignored, since the surface may have been torn down
/// underneath the run. `on_complete` is called only at the end of a hide, and
/// only if the run is still live.
pub fn animate<F, E, C>(
    scheduler: Rc<dyn Scheduler>,
    spec: &AnimationSpec,
    direction: Direction,
    guard: RunGuard,
    on_frame: F,
    on_complete: C,
) where
    F: FnMut(&Frame) -> Result<(), E> + 'static,
    E: Display,
    C: FnOnce() + 'static,
{
    let plan = Plan::new(spec, direction);
    debug!(?direction, mode = ?spec.mode, steps = plan.steps(), "animation_start");
    step(Run {
        scheduler,
        animation: Animation::new(plan),
        direction,
        guard,
        on_frame,
        on_complete: Some(on_complete),
    });
}

/// Apply one frame and schedule the next.
fn step<F, E, C>(mut run: Run<F, C>)
where
    F: FnMut(&Frame) -> Result<(), E> + 'static,
    E: Display,
    C: FnOnce() + 'static,
{
    if !run.guard.is_live() {
        trace!(direction = ?run.direction, "animation_superseded");
        return;
    }
    let Some(frame) = run.animation.advance() else {
        return;
    };
    if let Err(e) = (run.on_frame)(&frame) {
        debug!(step = frame.step, error = %e, "animation_frame_failed");
    }
    // The frame callback may itself have superseded this run.
    if !run.guard.is_live() {
        return;
    }
    if frame.last {
        trace!(direction = ?run.direction, "animation_done");
        if run.direction == Direction::Hide
            && let Some(done) = run.on_complete.take()
        {
            done();
        }
        return;
    }
    let scheduler = Rc::clone(&run.scheduler);
    scheduler.schedule(TICK_INTERVAL, Box::new(move || step(run)));
}
