//! Deterministic scheduler driven by an explicit virtual clock.

use std::{cell::RefCell, collections::BTreeMap, time::Duration};

use tracing::trace;

use crate::scheduler::{Scheduler, Task, TimerId};

/// Mutable scheduler state.
#[derive(Default)]
struct Queue {
    /// Current virtual time.
    now: Duration,
    /// Monotonic id source; also orders tasks due at the same instant.
    next_id: u64,
    /// Pending tasks keyed by `(due, id)`.
    tasks: BTreeMap<(Duration, u64), Task>,
    /// Due time for each pending id.
    due: BTreeMap<u64, Duration>,
}

/// A scheduler whose clock only moves when told to.
///
/// Tasks due at the same instant run in scheduling order. Tasks may schedule
/// further tasks; those run within the same `advance` call if they fall due
/// before its target time.
#[derive(Default)]
pub struct ManualScheduler {
    /// Queue and clock.
    queue: RefCell<Queue>,
}

impl ManualScheduler {
    /// Empty scheduler at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.borrow().tasks.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest task due at or before `limit`, moving the clock to its due time.
    fn pop_due(&self, limit: Option<Duration>) -> Option<Task> {
        let mut q = self.queue.borrow_mut();
        let (&(due, id), _) = q.tasks.iter().next()?;
        if limit.is_some_and(|l| due > l) {
            return None;
        }
        let task = q.tasks.remove(&(due, id))?;
        q.due.remove(&id);
        q.now = q.now.max(due);
        Some(task)
    }

    /// Move the clock forward by `by`, running every task that falls due. Returns the count run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.queue.borrow().now + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(Some(target)) {
            task();
            ran += 1;
        }
        self.queue.borrow_mut().now = target;
        ran
    }

    /// Run tasks in due order until none remain. Returns the count run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(None) {
            task();
            ran += 1;
        }
        trace!(ran, "manual_scheduler_idle");
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut q = self.queue.borrow_mut();
        q.next_id += 1;
        let id = q.next_id;
        let due = q.now + delay;
        q.tasks.insert((due, id), task);
        q.due.insert(id, due);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut q = self.queue.borrow_mut();
        match q.due.remove(&id.0) {
            Some(due) => q.tasks.remove(&(due, id.0)).is_some(),
            None => false,
        }
    }

    fn now(&self) -> Duration {
        self.queue.borrow().now
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn runs_in_due_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let log = Rc::clone(&log);
            sched.schedule(ms(delay), Box::new(move || log.borrow_mut().push(tag)));
        }
        assert_eq!(sched.advance(ms(15)), 2);
        assert_eq!(*log.borrow(), vec!["a", "a2"]);
        assert_eq!(sched.now(), ms(15));
        assert_eq!(sched.run_until_idle(), 2);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(sched.now(), ms(30));
    }

    #[test]
    fn cancel_removes_pending() {
        let sched = ManualScheduler::new();
        let hit = Rc::new(RefCell::new(false));
        let h = Rc::clone(&hit);
        let id = sched.schedule(ms(5), Box::new(move || *h.borrow_mut() = true));
        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        sched.advance(ms(10));
        assert!(!*hit.borrow());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn tasks_can_reschedule() {
        fn tick(sched: Rc<ManualScheduler>, count: Rc<RefCell<u32>>) {
            *count.borrow_mut() += 1;
            if *count.borrow() < 5 {
                let s = Rc::clone(&sched);
                sched.schedule(ms(10), Box::new(move || tick(s, count)));
            }
        }
        let sched = Rc::new(ManualScheduler::new());
        let count = Rc::new(RefCell::new(0));
        let (s, c) = (Rc::clone(&sched), Rc::clone(&count));
        sched.schedule(ms(0), Box::new(move || tick(s, c)));
        sched.advance(ms(25));
        assert_eq!(*count.borrow(), 3);
        assert_eq!(sched.next_due(), Some(ms(30)));
        sched.run_until_idle();
        assert_eq!(*count.borrow(), 5);
    }
}
