//! Hover tooltips for a host GUI toolkit.
//!
//! A [`Tooltip`] attaches to one widget through a [`Host`] implementation and
//! a [`Scheduler`]. The host forwards pointer events; the tooltip waits out
//! the show delay, measures its label, works out where it fits on screen
//! (via `tipkit-geom`), and fades or slides in (via `tipkit-anim`).
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use tipkit::{ManualScheduler, Point, Rect, Size, Tooltip, TooltipConfig, sim::SimHost};
//!
//! let host = Rc::new(SimHost::new(Rect::new(100, 100, 80, 24), Size::new(1280, 800)));
//! let sched = Rc::new(ManualScheduler::new());
//! let tip = Tooltip::bind(host, sched.clone(), TooltipConfig::default(), "Save the file").unwrap();
//! tip.pointer_enter(Point::new(120, 110));
//! sched.run_until_idle();
//! ```

mod error;
pub mod host;
pub mod sim;
mod text;
mod tooltip;

pub use config::{RawTooltip, TooltipConfig};
pub use error::{Error, Result};
pub use host::{Content, Host, HostError, Overlay};
pub use text::{BoxError, TextFn, TipText};
pub use tipkit_anim::{ManualScheduler, Scheduler, TokioScheduler};
pub use tipkit_geom::{Point, Rect, Size, WorkAreaSource};
pub use tooltip::Tooltip;
