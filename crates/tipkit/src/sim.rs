//! A headless host for tests and simulations.
//!
//! [`SimHost`] keeps overlays as plain records and logs every call made on
//! them. Text is measured with a fixed-pitch estimate derived from the font
//! size, which is close enough to exercise placement and clamping.

use std::{cell::RefCell, collections::BTreeMap, fmt, mem, rc::Rc};

use tipkit_geom::{self as geom, Point, Rect, Size, WorkAreaSource};

use crate::host::{Content, Host, HostError, Overlay};

/// Something that happened to a simulated overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// An overlay was created.
    Created {
        /// Overlay id.
        id: u64,
        /// Initial position.
        position: Point,
        /// Initial opacity.
        opacity: f32,
        /// Label text.
        text: String,
    },
    /// An overlay moved.
    Moved {
        /// Overlay id.
        id: u64,
        /// New position.
        position: Point,
    },
    /// An overlay's opacity changed.
    Opacity {
        /// Overlay id.
        id: u64,
        /// New opacity.
        opacity: f32,
    },
    /// An overlay's label changed.
    Content {
        /// Overlay id.
        id: u64,
        /// New text.
        text: String,
    },
    /// An overlay was destroyed.
    Destroyed {
        /// Overlay id.
        id: u64,
    },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created {
                id,
                position,
                opacity,
                text,
            } => write!(
                f,
                "create #{id} at ({}, {}) opacity {opacity:.2} {text:?}",
                position.x, position.y
            ),
            Self::Moved { id, position } => {
                write!(f, "move #{id} to ({}, {})", position.x, position.y)
            }
            Self::Opacity { id, opacity } => write!(f, "opacity #{id} {opacity:.2}"),
            Self::Content { id, text } => write!(f, "content #{id} {text:?}"),
            Self::Destroyed { id } => write!(f, "destroy #{id}"),
        }
    }
}

/// Current state of a simulated overlay window.
#[derive(Debug, Clone, PartialEq)]
pub struct SimWindow {
    /// Top-left corner.
    pub position: Point,
    /// Opacity.
    pub opacity: f32,
    /// Label text.
    pub text: String,
}

/// Shared simulator state.
#[derive(Debug)]
struct World {
    /// Widget rectangle; `None` once "destroyed".
    widget: Option<Rect>,
    /// Reported work area; `None` makes the query fail.
    work_area: Option<Rect>,
    /// Screen size.
    screen: Size,
    /// Id source for overlays.
    next_id: u64,
    /// Fail the next `create_overlay` call.
    fail_next_create: bool,
    /// Live windows.
    windows: BTreeMap<u64, SimWindow>,
    /// Call log.
    events: Vec<SimEvent>,
}

/// Headless [`Host`] with recorded overlay activity.
#[derive(Debug)]
pub struct SimHost {
    /// State shared with the overlays this host created.
    world: Rc<RefCell<World>>,
}

impl SimHost {
    /// A widget at `widget` on a screen of `screen` with no reserved chrome.
    pub fn new(widget: Rect, screen: Size) -> Self {
        Self {
            world: Rc::new(RefCell::new(World {
                widget: Some(widget),
                work_area: Some(Rect::from_size(screen)),
                screen,
                next_id: 0,
                fail_next_create: false,
                windows: BTreeMap::new(),
                events: Vec::new(),
            })),
        }
    }

    /// Replace the reported work area. `None` makes the query fail.
    pub fn set_work_area(&self, area: Option<Rect>) {
        self.world.borrow_mut().work_area = area;
    }

    /// Move the widget, or remove it with `None`.
    pub fn set_widget(&self, widget: Option<Rect>) {
        self.world.borrow_mut().widget = widget;
    }

    /// Make the next overlay creation fail.
    pub fn fail_next_create(&self) {
        self.world.borrow_mut().fail_next_create = true;
    }

    /// Destroy a window from the toolkit side, as a window manager might.
    pub fn close_window(&self, id: u64) -> bool {
        self.world.borrow_mut().windows.remove(&id).is_some()
    }

    /// Snapshot of live windows by id.
    pub fn windows(&self) -> BTreeMap<u64, SimWindow> {
        self.world.borrow().windows.clone()
    }

    /// The only live window, if exactly one exists.
    pub fn single_window(&self) -> Option<SimWindow> {
        let world = self.world.borrow();
        if world.windows.len() == 1 {
            world.windows.values().next().cloned()
        } else {
            None
        }
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<SimEvent> {
        self.world.borrow().events.clone()
    }

    /// Drain the event log.
    pub fn take_events(&self) -> Vec<SimEvent> {
        mem::take(&mut self.world.borrow_mut().events)
    }
}

/// Estimated label size: fixed-pitch glyphs, optional wrapping, padding and border.
pub fn estimate_size(content: &Content) -> Size {
    let size = content.font.size.max(1.0);
    let char_w = (size * 0.6).ceil() as i32;
    let line_h = (size * 1.25).ceil() as i32;
    let wrap_chars = if content.wraplength > 0 {
        (content.wraplength / char_w).max(1) as usize
    } else {
        usize::MAX
    };
    let mut lines = 0usize;
    let mut widest = 0usize;
    for line in content.text.split('\n') {
        let n = line.chars().count();
        let rows = if n == 0 { 1 } else { n.div_ceil(wrap_chars) };
        lines += rows;
        widest = widest.max(n.min(wrap_chars));
    }
    let chrome_x = 2 * (content.ipadx + content.borderwidth);
    let chrome_y = 2 * (content.ipady + content.borderwidth);
    Size::new(
        i32::try_from(widest).unwrap_or(i32::MAX / 2) * char_w + chrome_x,
        i32::try_from(lines).unwrap_or(i32::MAX / 2) * line_h + chrome_y,
    )
}

impl WorkAreaSource for SimHost {
    fn work_area(&self) -> geom::Result<Rect> {
        self.world
            .borrow()
            .work_area
            .ok_or_else(|| geom::Error::WorkAreaUnavailable("no work area configured".into()))
    }

    fn screen_size(&self) -> Size {
        self.world.borrow().screen
    }
}

impl Host for SimHost {
    fn create_overlay(
        &self,
        content: &Content,
        position: Point,
        opacity: f32,
    ) -> Result<Box<dyn Overlay>, HostError> {
        let mut world = self.world.borrow_mut();
        if world.fail_next_create {
            world.fail_next_create = false;
            return Err(HostError::Create("simulated failure".into()));
        }
        world.next_id += 1;
        let id = world.next_id;
        world.windows.insert(
            id,
            SimWindow {
                position,
                opacity,
                text: content.text.clone(),
            },
        );
        world.events.push(SimEvent::Created {
            id,
            position,
            opacity,
            text: content.text.clone(),
        });
        Ok(Box::new(SimOverlay {
            id,
            world: Rc::clone(&self.world),
        }))
    }

    fn measure(&self, content: &Content) -> Size {
        estimate_size(content)
    }

    fn widget_rect(&self) -> Option<Rect> {
        self.world.borrow().widget
    }
}

/// Overlay handle returned by [`SimHost`].
struct SimOverlay {
    /// Window id.
    id: u64,
    /// Host state.
    world: Rc<RefCell<World>>,
}

impl SimOverlay {
    /// Update the live window and log `event`, or fail if it was closed.
    fn update(&self, event: SimEvent, f: impl FnOnce(&mut SimWindow)) -> Result<(), HostError> {
        let mut world = self.world.borrow_mut();
        let window = world.windows.get_mut(&self.id).ok_or(HostError::Gone)?;
        f(window);
        world.events.push(event);
        Ok(())
    }
}

impl Overlay for SimOverlay {
    fn set_position(&mut self, position: Point) -> Result<(), HostError> {
        let id = self.id;
        self.update(SimEvent::Moved { id, position }, |w| w.position = position)
    }

    fn set_opacity(&mut self, opacity: f32) -> Result<(), HostError> {
        let id = self.id;
        self.update(SimEvent::Opacity { id, opacity }, |w| w.opacity = opacity)
    }

    fn set_content(&mut self, content: &Content) -> Result<(), HostError> {
        let id = self.id;
        let text = content.text.clone();
        self.update(
            SimEvent::Content {
                id,
                text: text.clone(),
            },
            |w| w.text = text,
        )
    }

    fn destroy(self: Box<Self>) {
        let mut world = self.world.borrow_mut();
        world.windows.remove(&self.id);
        world.events.push(SimEvent::Destroyed { id: self.id });
    }
}
