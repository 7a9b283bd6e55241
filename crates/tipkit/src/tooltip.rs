//! The tooltip controller: hover timing, placement and animated show/hide.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    result::Result as StdResult,
    time::Duration,
};

use config::{RawTooltip, TooltipConfig};
use tipkit_anim::{AnimationMode, Direction, Frame, Plan, RunSlot, Scheduler, TimerId, animate};
use tipkit_geom::{Point, Size, resolve_position, usable_area};
use tracing::{debug, trace, warn};

use crate::{
    Error, Result,
    host::{Content, Host, HostError, Overlay},
    text::TipText,
};

/// An overlay that is on screen.
struct Live {
    /// Host window.
    overlay: Box<dyn Overlay>,
    /// Resting top-left position; slide offsets are relative to this.
    position: Point,
    /// Measured label size.
    size: Size,
    /// A hide transition is running.
    hiding: bool,
}

/// Mutable controller state.
struct State {
    /// Active configuration.
    config: TooltipConfig,
    /// Text source.
    text: TipText,
    /// False once unbound; all events are then ignored.
    bound: bool,
    /// Last pointer position reported by the host.
    pointer: Point,
    /// Set by auto-hide; cleared when the pointer leaves.
    suppressed: bool,
    /// Pending delayed show.
    show_timer: Option<TimerId>,
    /// Pending auto-hide.
    hide_timer: Option<TimerId>,
    /// The overlay, while one exists.
    live: Option<Live>,
}

/// Controller internals, shared with scheduled tasks through `Weak` handles.
struct Shared {
    /// Toolkit services.
    host: Rc<dyn Host>,
    /// Timer facility.
    scheduler: Rc<dyn Scheduler>,
    /// Supersession of show and hide transitions.
    slot: RunSlot,
    /// Everything that changes.
    state: RefCell<State>,
}

/// Milliseconds as a duration.
fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

impl Shared {
    /// Cancel the pending delayed show, if any.
    fn cancel_show(&self, st: &mut State) {
        if let Some(id) = st.show_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Cancel the pending auto-hide, if any.
    fn cancel_auto_hide(&self, st: &mut State) {
        if let Some(id) = st.hide_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Handle pointer enter or motion at `pointer`.
    fn pointer_event(self: &Rc<Self>, pointer: Point) {
        let mut st = self.state.borrow_mut();
        if !st.bound {
            return;
        }
        st.pointer = pointer;
        if st.suppressed {
            trace!(x = pointer.x, y = pointer.y, "tooltip_suppressed");
            return;
        }
        if !st.config.is_enabled() {
            return;
        }
        let visible = st.live.as_ref().is_some_and(|l| !l.hiding);
        if visible && st.config.follow_mouse {
            self.reposition(&mut st);
            return;
        }
        self.schedule_show(&mut st);
    }

    /// (Re)start the show delay.
    fn schedule_show(self: &Rc<Self>, st: &mut State) {
        self.cancel_show(st);
        let weak = Rc::downgrade(self);
        let id = self.scheduler.schedule(
            ms(st.config.show_delay),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.state.borrow_mut().show_timer = None;
                    shared.show();
                }
            }),
        );
        st.show_timer = Some(id);
    }

    /// Start the auto-hide countdown.
    fn schedule_auto_hide(self: &Rc<Self>, st: &mut State) {
        self.cancel_auto_hide(st);
        if st.config.hide_delay == 0 {
            return;
        }
        let weak = Rc::downgrade(self);
        let id = self.scheduler.schedule(
            ms(st.config.hide_delay),
            Box::new(move || auto_hide(&weak)),
        );
        st.hide_timer = Some(id);
    }

    /// Move a visible overlay to track the pointer.
    fn reposition(&self, st: &mut State) {
        let Some(widget) = self.host.widget_rect() else {
            return;
        };
        let area = usable_area(self.host.as_ref());
        let config = &st.config;
        let pointer = st.pointer;
        let Some(live) = st.live.as_mut() else {
            return;
        };
        let position = resolve_position(
            &config.anchor_spec(),
            &widget,
            live.size,
            pointer,
            &area,
            config.pointer_policy,
        );
        if position == live.position {
            return;
        }
        live.position = position;
        if let Err(e) = live.overlay.set_position(position) {
            debug!(error = %e, "tooltip reposition failed");
        }
    }

    /// Frame callback shared by show and hide runs.
    fn frame_applier(
        self: &Rc<Self>,
        mode: AnimationMode,
    ) -> impl FnMut(&Frame) -> StdResult<(), HostError> + 'static {
        let weak = Rc::downgrade(self);
        let slide = mode == AnimationMode::Slide;
        move |frame: &Frame| {
            let Some(shared) = weak.upgrade() else {
                return Ok(());
            };
            let mut st = shared.state.borrow_mut();
            // A late tick after teardown finds no overlay.
            let Some(live) = st.live.as_mut() else {
                return Ok(());
            };
            live.overlay.set_opacity(frame.opacity)?;
            if slide {
                live.overlay
                    .set_position(live.position.offset(0, frame.offset_y))?;
            }
            Ok(())
        }
    }

    /// Show the tooltip now.
    fn show(self: &Rc<Self>) {
        let (text, config, pointer) = {
            let mut st = self.state.borrow_mut();
            self.cancel_show(&mut st);
            if !st.bound || !st.config.is_enabled() {
                return;
            }
            if st.live.as_ref().is_some_and(|l| !l.hiding) {
                trace!("tooltip already visible");
                return;
            }
            (st.text.clone(), st.config.clone(), st.pointer)
        };

        let text = text.resolve();
        if text.is_empty() {
            debug!("tooltip text empty; not showing");
            return;
        }
        let Some(widget) = self.host.widget_rect() else {
            debug!("widget gone; not showing");
            return;
        };
        let content = Content::new(text, &config);
        let size = self.host.measure(&content);
        let area = usable_area(self.host.as_ref());
        let position = resolve_position(
            &config.anchor_spec(),
            &widget,
            size,
            pointer,
            &area,
            config.pointer_policy,
        );
        let spec = config.animation_spec();
        let first = Plan::new(&spec, Direction::Show).frame(0);
        let start = position.offset(0, first.offset_y);

        let guard = {
            let mut st = self.state.borrow_mut();
            match st.live.as_mut() {
                Some(live) => {
                    // A hide is still fading: take the overlay back.
                    live.hiding = false;
                    live.position = position;
                    live.size = size;
                    if let Err(e) = live
                        .overlay
                        .set_content(&content)
                        .and_then(|()| live.overlay.set_position(start))
                    {
                        debug!(error = %e, "tooltip overlay update failed");
                    }
                }
                None => match self.host.create_overlay(&content, start, first.opacity) {
                    Ok(overlay) => {
                        st.live = Some(Live {
                            overlay,
                            position,
                            size,
                            hiding: false,
                        });
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to create tooltip overlay");
                        return;
                    }
                },
            }
            self.schedule_auto_hide(&mut st);
            self.slot.claim()
        };
        debug!(
            x = position.x,
            y = position.y,
            w = size.width,
            h = size.height,
            "tooltip_show"
        );
        animate(
            Rc::clone(&self.scheduler),
            &spec,
            Direction::Show,
            guard,
            self.frame_applier(spec.mode),
            || {},
        );
    }

    /// Start hiding. The overlay is destroyed when the transition completes.
    fn hide(self: &Rc<Self>) {
        let (guard, spec) = {
            let mut st = self.state.borrow_mut();
            self.cancel_show(&mut st);
            self.cancel_auto_hide(&mut st);
            let Some(live) = st.live.as_mut() else {
                return;
            };
            if live.hiding {
                return;
            }
            live.hiding = true;
            (self.slot.claim(), st.config.animation_spec())
        };
        debug!("tooltip_hide");
        let weak = Rc::downgrade(self);
        animate(
            Rc::clone(&self.scheduler),
            &spec,
            Direction::Hide,
            guard,
            self.frame_applier(spec.mode),
            move || {
                if let Some(shared) = weak.upgrade() {
                    shared.teardown();
                }
            },
        );
    }

    /// Destroy the overlay, if any.
    fn teardown(&self) {
        // Out of the state before destroy(), so nothing re-entrant can see it.
        let live = self.state.borrow_mut().live.take();
        if let Some(live) = live {
            live.overlay.destroy();
            debug!("tooltip_destroyed");
        }
    }

    /// Push fresh content to a visible overlay, keeping its position.
    ///
    /// With `settle`, any running show transition is stopped and the overlay
    /// jumps to its configured opacity.
    fn refresh(&self, settle: bool) -> Result<()> {
        let (text, config) = {
            let st = self.state.borrow();
            match &st.live {
                Some(live) if !live.hiding => (st.text.clone(), st.config.clone()),
                _ => return Ok(()),
            }
        };
        let content = Content::new(text.resolve(), &config);
        let size = self.host.measure(&content);

        let mut st = self.state.borrow_mut();
        let Some(live) = st.live.as_mut() else {
            return Ok(());
        };
        live.size = size;
        live.overlay.set_content(&content)?;
        if settle {
            self.slot.cancel();
            live.overlay.set_position(live.position)?;
            live.overlay
                .set_opacity(config.animation_spec().ceiling())?;
        }
        Ok(())
    }

    /// Detach: destroy the overlay immediately and stop all timers.
    fn unbind(&self) {
        let live = {
            let mut st = self.state.borrow_mut();
            if !st.bound {
                return;
            }
            st.bound = false;
            self.cancel_show(&mut st);
            self.cancel_auto_hide(&mut st);
            self.slot.cancel();
            st.live.take()
        };
        if let Some(live) = live {
            live.overlay.destroy();
        }
        debug!("tooltip_unbound");
    }
}

/// Auto-hide timer body.
fn auto_hide(weak: &Weak<Shared>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    {
        let mut st = shared.state.borrow_mut();
        st.hide_timer = None;
        st.suppressed = true;
    }
    debug!("tooltip_auto_hide");
    shared.hide();
}

/// A hover tooltip attached to one widget.
///
/// The host forwards pointer events for the widget; the tooltip shows after
/// `show_delay`, hides on leave or click, and hides itself after
/// `hide_delay`. After an auto-hide it stays hidden until the pointer leaves
/// and comes back.
///
/// Dropping the tooltip unbinds it.
pub struct Tooltip {
    /// Shared with scheduled tasks.
    shared: Rc<Shared>,
}

impl Tooltip {
    /// Attach a tooltip showing `text` to the widget behind `host`.
    pub fn bind(
        host: Rc<dyn Host>,
        scheduler: Rc<dyn Scheduler>,
        config: TooltipConfig,
        text: impl Into<TipText>,
    ) -> Result<Self> {
        config.validate()?;
        debug!(state = %config.state, origin = ?config.origin, "tooltip_bind");
        Ok(Self {
            shared: Rc::new(Shared {
                host,
                scheduler,
                slot: RunSlot::new(),
                state: RefCell::new(State {
                    config,
                    text: text.into(),
                    bound: true,
                    pointer: Point::default(),
                    suppressed: false,
                    show_timer: None,
                    hide_timer: None,
                    live: None,
                }),
            }),
        })
    }

    /// The pointer entered the widget.
    pub fn pointer_enter(&self, pointer: Point) {
        self.shared.pointer_event(pointer);
    }

    /// The pointer moved within the widget.
    pub fn pointer_motion(&self, pointer: Point) {
        self.shared.pointer_event(pointer);
    }

    /// The pointer left the widget.
    pub fn pointer_leave(&self) {
        {
            let mut st = self.shared.state.borrow_mut();
            if !st.bound {
                return;
            }
            st.suppressed = false;
            self.shared.cancel_show(&mut st);
        }
        self.shared.hide();
    }

    /// A mouse button was pressed on the widget.
    pub fn button_press(&self) {
        if !self.is_bound() {
            return;
        }
        self.shared.hide();
    }

    /// Show immediately, skipping the delay.
    pub fn show(&self) {
        self.shared.show();
    }

    /// Hide now, with the configured transition.
    pub fn hide(&self) {
        self.shared.hide();
    }

    /// Apply a partial configuration update.
    ///
    /// A visible tooltip picks up the new content and opacity in place.
    /// Switching to `disabled` hides it.
    pub fn configure(&self, raw: &RawTooltip) -> Result<()> {
        let enabled = {
            let mut st = self.shared.state.borrow_mut();
            if !st.bound {
                return Err(Error::Unbound);
            }
            st.config = raw.overlay(&st.config)?;
            st.config.is_enabled()
        };
        debug!(enabled, "tooltip_configure");
        if !enabled {
            self.shared.hide();
            return Ok(());
        }
        self.shared.refresh(true)
    }

    /// Replace the text source. A visible tooltip is updated in place.
    pub fn set_text(&self, text: impl Into<TipText>) -> Result<()> {
        {
            let mut st = self.shared.state.borrow_mut();
            if !st.bound {
                return Err(Error::Unbound);
            }
            st.text = text.into();
        }
        self.shared.refresh(false)
    }

    /// Detach from the widget: destroy the overlay without animation, cancel
    /// timers, and ignore later events. Calling it again does nothing.
    pub fn unbind(&self) {
        self.shared.unbind();
    }

    /// Still attached.
    pub fn is_bound(&self) -> bool {
        self.shared.state.borrow().bound
    }

    /// An overlay exists, including while it fades out.
    pub fn is_visible(&self) -> bool {
        self.shared.state.borrow().live.is_some()
    }

    /// A hide transition is running.
    pub fn is_hiding(&self) -> bool {
        self.shared
            .state
            .borrow()
            .live
            .as_ref()
            .is_some_and(|l| l.hiding)
    }

    /// A delayed show is pending.
    pub fn show_pending(&self) -> bool {
        self.shared.state.borrow().show_timer.is_some()
    }

    /// Resting position of the overlay.
    pub fn overlay_position(&self) -> Option<Point> {
        self.shared.state.borrow().live.as_ref().map(|l| l.position)
    }

    /// Current configuration.
    pub fn config(&self) -> TooltipConfig {
        self.shared.state.borrow().config.clone()
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.shared.unbind();
    }
}
