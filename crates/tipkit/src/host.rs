//! The seam between the controller and a GUI toolkit.
//!
//! A host owns window creation, label rendering and event dispatch. It reports
//! geometry and builds overlays; the controller decides when and where.

use config::{Font, Justify, Relief, TooltipConfig};
use thiserror::Error;
use tipkit_geom::{Point, Rect, Size, WorkAreaSource};

/// Failures reported by a host or one of its overlays.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The toolkit could not create the overlay window.
    #[error("overlay creation failed: {0}")]
    Create(String),

    /// The overlay window no longer exists on the toolkit side.
    #[error("overlay window is gone")]
    Gone,

    /// Any other toolkit failure.
    #[error("{0}")]
    Other(String),
}

/// Everything a host needs to render the tooltip label.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    /// Text, possibly multi-line.
    pub text: String,
    /// Background color.
    pub bg: (u8, u8, u8),
    /// Foreground color.
    pub fg: (u8, u8, u8),
    /// Label font.
    pub font: Font,
    /// Border width in pixels.
    pub borderwidth: i32,
    /// Border style.
    pub relief: Relief,
    /// Alignment of multi-line text.
    pub justify: Justify,
    /// Wrap width in pixels, zero for none.
    pub wraplength: i32,
    /// Horizontal inner padding.
    pub ipadx: i32,
    /// Vertical inner padding.
    pub ipady: i32,
}

impl Content {
    /// Label content for `text` styled by `config`.
    pub fn new(text: String, config: &TooltipConfig) -> Self {
        Self {
            text,
            bg: config.bg,
            fg: config.fg,
            font: config.font.clone(),
            borderwidth: config.borderwidth,
            relief: config.relief,
            justify: config.justify,
            wraplength: config.wraplength,
            ipadx: config.ipadx,
            ipady: config.ipady,
        }
    }
}

/// A borderless, always-on-top window holding the tooltip label.
pub trait Overlay {
    /// Move the window's top-left corner.
    fn set_position(&mut self, position: Point) -> Result<(), HostError>;

    /// Set window opacity in `[0, 1]`.
    fn set_opacity(&mut self, opacity: f32) -> Result<(), HostError>;

    /// Replace the label.
    fn set_content(&mut self, content: &Content) -> Result<(), HostError>;

    /// Tear the window down.
    fn destroy(self: Box<Self>);
}

/// Toolkit services for one widget.
///
/// Calls happen on the UI thread. Implementations must not call back into the
/// controller from these methods.
pub trait Host: WorkAreaSource {
    /// Create an overlay at `position` with the given initial opacity.
    fn create_overlay(
        &self,
        content: &Content,
        position: Point,
        opacity: f32,
    ) -> Result<Box<dyn Overlay>, HostError>;

    /// Size the label would have once laid out.
    fn measure(&self, content: &Content) -> Size;

    /// The widget's screen rectangle, or `None` once it has been destroyed.
    fn widget_rect(&self) -> Option<Rect>;
}
