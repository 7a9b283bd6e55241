//! Tokio-backed scheduler for a single-threaded UI runtime.
//!
//! Each scheduled task becomes a local tokio task that sleeps for its delay
//! and then runs, unless its cancellation token fires first. Everything lives
//! on one thread, so tasks need not be `Send`; the scheduler must be used from
//! inside a [`tokio::task::LocalSet`].

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
    time::Duration,
};

use tokio::{
    task,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::scheduler::{Scheduler, Task, TimerId};

/// Scheduler that runs tasks on the current tokio `LocalSet`.
pub struct TokioScheduler {
    /// Cancellation tokens for tasks that have not fired yet.
    entries: Rc<RefCell<HashMap<TimerId, CancellationToken>>>,
    /// Id source.
    next_id: Cell<u64>,
    /// Creation time, for [`Scheduler::now`].
    started: Instant,
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TokioScheduler {
    /// Create a scheduler. Must be called within a tokio runtime.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            next_id: Cell::new(0),
            started: Instant::now(),
        }
    }

    /// Check whether a task is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    /// Number of pending tasks.
    pub fn active(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Cancel every pending task.
    pub fn cancel_all(&self) {
        let entries: Vec<CancellationToken> = {
            let mut map = self.entries.borrow_mut();
            map.drain().map(|(_, token)| token).collect()
        };
        for token in &entries {
            token.cancel();
        }
        trace!(count = entries.len(), "tokio_scheduler_cancel_all");
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get() + 1);
        self.next_id.set(id.0);

        let token = CancellationToken::new();
        let cancel = token.clone();
        let entries = Rc::clone(&self.entries);

        let fut = async move {
            tokio::select! {
                _ = time::sleep(delay) => {}
                _ = cancel.cancelled() => {
                    trace!(id = id.0, "timer_cancelled");
                    return;
                }
            }
            // Deregister before running so the task can schedule or cancel freely.
            entries.borrow_mut().remove(&id);
            task();
        };

        self.entries.borrow_mut().insert(id, token);
        task::spawn_local(fut);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        match self.entries.borrow_mut().remove(&id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}
