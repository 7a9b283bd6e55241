//! Timer-driven show/hide transitions for tooltip overlays.
//!
//! A transition is planned up front ([`Plan`]), stepped by a small state
//! machine ([`Animation`]), and driven by [`animate`] on a [`Scheduler`]. Two
//! schedulers are provided: [`ManualScheduler`], a virtual clock for tests and
//! simulations, and [`TokioScheduler`], which runs on a tokio `LocalSet`.
//!
//! Everything here is single-threaded. Superseding a run (a show arriving
//! while a hide is still fading, say) is handled with [`RunSlot`]: each new
//! run claims the slot and older runs notice at their next tick and stop.

mod manual;
mod plan;
mod run;
mod scheduler;
mod spec;
mod state;
mod ticker;

pub use manual::ManualScheduler;
pub use plan::{Frame, Plan};
pub use run::{RunGuard, RunSlot, animate};
pub use scheduler::{Scheduler, Task, TimerId};
pub use spec::{AnimationMode, AnimationSpec, DEFAULT_SLIDE_DISTANCE, Direction, TICK_INTERVAL};
pub use state::{Animation, Phase};
pub use ticker::TokioScheduler;
