use std::rc::Rc;

use super::viewport::ViewportMetrics;

/// Opaque id for a listener, frame request or timer registered with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Resize,
    Scroll,
}

impl HostEvent {
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::Resize => "resize",
            HostEvent::Scroll => "scroll",
        }
    }
}

/// Everything the animation core needs from the page it runs in.
///
/// Every call returns `Option` so a host without a window degrades instead of
/// failing: `None` from `viewport` means the environment is unavailable, and
/// `None` from a registration means nothing was registered.
pub trait EventHost {
    fn viewport(&self) -> Option<ViewportMetrics>;
    fn scroll_y(&self) -> Option<f64>;

    fn add_listener(&self, event: HostEvent, callback: Rc<dyn Fn()>) -> Option<HandleId>;
    fn remove_listener(&self, id: HandleId);

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<HandleId>;
    fn cancel_frame(&self, id: HandleId);

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Option<HandleId>;
    fn clear_timeout(&self, id: HandleId);
}

/// Measured box of a rendered element, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementGeometry {
    /// A box with no size, or with non-finite fields, has not been laid out.
    pub fn is_laid_out(&self) -> bool {
        self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && (self.width > 0.0 || self.height > 0.0)
    }
}

/// Something whose rendered box can be read.
pub trait Measure {
    fn measure(&self) -> Option<ElementGeometry>;
}
