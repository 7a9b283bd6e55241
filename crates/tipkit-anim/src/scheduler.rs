//! The single delayed-callback primitive everything runs on.

use std::time::Duration;

/// A deferred unit of work. Runs on the scheduler's thread.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

/// Host-thread timer facility: "run this after N ms", with cancellation.
///
/// Implementations are single-threaded. Tasks must be free to call back into
/// the scheduler (to schedule or cancel) while they run.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    fn cancel(&self, id: TimerId) -> bool;

    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;
}
