//! Scripted pointer sessions replayed against a simulated host.

use std::{rc::Rc, time::Duration};

use tipkit::{ManualScheduler, Point, Rect, TokioScheduler, Tooltip, sim::SimHost};
use tipkit_anim::Scheduler;
use tokio::{task::LocalSet, time};
use tracing::debug;

/// One pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pointer enters the widget.
    Enter(Point),
    /// Pointer moves within the widget.
    Move(Point),
    /// Pointer leaves the widget.
    Leave,
    /// Mouse button pressed.
    Press,
}

/// An action at a time offset from the start of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Milliseconds from the start.
    pub at: u64,
    /// What happens.
    pub action: Action,
}

/// Default session over `widget`: hover, wiggle, leave, come back and click.
///
/// `hover` is how long the pointer stays before leaving the first time. Long
/// hovers let the auto-hide fire.
pub fn default_session(widget: Rect, hover: u64) -> Vec<Step> {
    let inside = Point::new(widget.x + widget.w / 4, widget.y + widget.h / 2);
    let nudged = inside.offset(6, 1);
    let back = hover + 300;
    vec![
        Step {
            at: 0,
            action: Action::Enter(inside),
        },
        Step {
            at: 40,
            action: Action::Move(nudged),
        },
        Step {
            at: hover,
            action: Action::Leave,
        },
        Step {
            at: back,
            action: Action::Enter(inside),
        },
        Step {
            at: back + 250,
            action: Action::Press,
        },
        Step {
            at: back + 500,
            action: Action::Leave,
        },
    ]
}

/// Deliver `action` to `tip`.
fn apply(tip: &Tooltip, action: Action) {
    debug!(?action, "script_step");
    match action {
        Action::Enter(p) => tip.pointer_enter(p),
        Action::Move(p) => tip.pointer_motion(p),
        Action::Leave => tip.pointer_leave(),
        Action::Press => tip.button_press(),
    }
}

/// Drain the host's event log into printable lines stamped with `now`.
fn drain(host: &SimHost, now: Duration, out: &mut Vec<String>) {
    for event in host.take_events() {
        out.push(format!("{:>6}ms  {event}", now.as_millis()));
    }
}

/// Replay on a virtual clock. `settle` extra milliseconds run after the last step.
pub fn run_manual(
    host: &SimHost,
    sched: &ManualScheduler,
    tip: &Tooltip,
    steps: &[Step],
    settle: u64,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0;
    for step in steps {
        // Run due tasks one at a time so each event carries its own timestamp.
        while let Some(due) = sched.next_due()
            && due <= Duration::from_millis(step.at)
        {
            sched.advance(due.saturating_sub(sched.now()));
            drain(host, sched.now(), &mut out);
        }
        sched.advance(Duration::from_millis(step.at).saturating_sub(sched.now()));
        out.push(format!("{:>6}ms  > {:?}", step.at, step.action));
        apply(tip, step.action);
        drain(host, sched.now(), &mut out);
        last = step.at;
    }
    let end = Duration::from_millis(last + settle);
    while let Some(due) = sched.next_due()
        && due <= end
    {
        sched.advance(due.saturating_sub(sched.now()));
        drain(host, sched.now(), &mut out);
    }
    out
}

/// Replay in real time on a tokio `LocalSet`, printing events as they occur.
pub async fn run_realtime(
    host: Rc<SimHost>,
    sched: Rc<TokioScheduler>,
    tip: Tooltip,
    steps: Vec<Step>,
    settle: u64,
) -> Vec<String> {
    let local = LocalSet::new();
    local
        .run_until(async move {
            let mut out = Vec::new();
            let start = time::Instant::now();
            let mut last = 0;
            for step in &steps {
                let target = start + Duration::from_millis(step.at);
                // Poll in tick-sized slices so events are stamped close to when they happened.
                while time::Instant::now() < target {
                    let slice = (target - time::Instant::now()).min(Duration::from_millis(10));
                    time::sleep(slice).await;
                    drain(&host, sched.now(), &mut out);
                }
                out.push(format!("{:>6}ms  > {:?}", step.at, step.action));
                apply(&tip, step.action);
                drain(&host, sched.now(), &mut out);
                last = step.at;
            }
            time::sleep_until(start + Duration::from_millis(last + settle)).await;
            drain(&host, sched.now(), &mut out);
            tip.unbind();
            sched.cancel_all();
            out
        })
        .await
}

#[cfg(test)]
mod tests {
    use tipkit::{Size, TooltipConfig};

    use super::*;

    #[test]
    fn default_session_shows_hides_and_clicks() {
        let widget = Rect::new(100, 100, 80, 24);
        let host = Rc::new(SimHost::new(widget, Size::new(1280, 800)));
        let sched = Rc::new(ManualScheduler::new());
        let tip = Tooltip::bind(
            host.clone(),
            sched.clone(),
            TooltipConfig::default(),
            "Hello",
        )
        .unwrap();
        let lines = run_manual(&host, &sched, &tip, &default_session(widget, 400), 200);

        let creates = lines.iter().filter(|l| l.contains("create #")).count();
        let destroys = lines.iter().filter(|l| l.contains("destroy #")).count();
        assert_eq!(creates, 2, "{lines:#?}");
        assert_eq!(destroys, 2, "{lines:#?}");
        // The first show fires 100 ms after the nudge at 40 ms.
        assert!(lines.iter().any(|l| l.starts_with("   140ms  create #1")), "{lines:#?}");
        assert!(!tip.is_visible());
    }
}
