use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, Window};
use yew::NodeRef;

use super::host::{ElementGeometry, EventHost, HandleId, HostEvent, Measure};
use super::viewport::ViewportMetrics;

struct Listener {
    event: HostEvent,
    closure: Closure<dyn Fn()>,
}

struct Frame {
    handle: i32,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut()>,
}

struct Timer {
    fired: Rc<Cell<bool>>,
    _timeout: Timeout,
}

/// `EventHost` backed by the real browser window.
///
/// Closures handed to the DOM are kept here until they are removed, cancelled
/// or have fired. Fired frames and timers are swept on the next request.
pub struct BrowserHost {
    window: Option<Window>,
    next_id: Cell<u32>,
    listeners: RefCell<HashMap<HandleId, Listener>>,
    frames: RefCell<HashMap<HandleId, Frame>>,
    timers: RefCell<HashMap<HandleId, Timer>>,
}

thread_local! {
    static SHARED: Rc<BrowserHost> = Rc::new(BrowserHost::new());
}

impl BrowserHost {
    pub fn new() -> Self {
        BrowserHost {
            window: window(),
            next_id: Cell::new(1),
            listeners: RefCell::new(HashMap::new()),
            frames: RefCell::new(HashMap::new()),
            timers: RefCell::new(HashMap::new()),
        }
    }

    /// One host per UI thread, shared by every component.
    pub fn shared() -> Rc<dyn EventHost> {
        SHARED.with(|host| host.clone() as Rc<dyn EventHost>)
    }

    fn next(&self) -> HandleId {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        HandleId(id)
    }
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHost for BrowserHost {
    fn viewport(&self) -> Option<ViewportMetrics> {
        let window = self.window.as_ref()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ViewportMetrics::new(width.max(0.0) as u32, height.max(0.0) as u32))
    }

    fn scroll_y(&self) -> Option<f64> {
        self.window.as_ref()?.scroll_y().ok()
    }

    fn add_listener(&self, event: HostEvent, callback: Rc<dyn Fn()>) -> Option<HandleId> {
        let window = self.window.as_ref()?;
        let closure = Closure::<dyn Fn()>::new(move || callback());
        if let Err(err) =
            window.add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())
        {
            warn!("failed to add {} listener: {:?}", event.name(), err);
            return None;
        }
        let id = self.next();
        self.listeners.borrow_mut().insert(id, Listener { event, closure });
        Some(id)
    }

    fn remove_listener(&self, id: HandleId) {
        let Some(listener) = self.listeners.borrow_mut().remove(&id) else {
            return;
        };
        if let Some(window) = &self.window {
            let _ = window.remove_event_listener_with_callback(
                listener.event.name(),
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<HandleId> {
        let window = self.window.as_ref()?;
        self.frames.borrow_mut().retain(|_, frame| !frame.fired.get());

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
            // Set last so a sweep triggered from inside the callback keeps us.
            flag.set(true);
        });
        let handle = match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => handle,
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                return None;
            }
        };
        let id = self.next();
        self.frames.borrow_mut().insert(id, Frame { handle, fired, _closure: closure });
        Some(id)
    }

    fn cancel_frame(&self, id: HandleId) {
        let Some(frame) = self.frames.borrow_mut().remove(&id) else {
            return;
        };
        if let (false, Some(window)) = (frame.fired.get(), &self.window) {
            let _ = window.cancel_animation_frame(frame.handle);
        }
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Option<HandleId> {
        self.window.as_ref()?;
        self.timers.borrow_mut().retain(|_, timer| !timer.fired.get());

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = Timeout::new(millis, move || {
            callback();
            flag.set(true);
        });
        let id = self.next();
        self.timers.borrow_mut().insert(id, Timer { fired, _timeout: timeout });
        Some(id)
    }

    fn clear_timeout(&self, id: HandleId) {
        // Dropping a gloo Timeout cancels it.
        self.timers.borrow_mut().remove(&id);
    }
}

impl Measure for NodeRef {
    fn measure(&self) -> Option<ElementGeometry> {
        let element = self.cast::<Element>()?;
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(ElementGeometry { top: rect.top(), width: rect.width(), height: rect.height() })
    }
}

/// Layout height of an element, ignoring CSS transforms. Used for sizes that
/// feed a transform on the same element, so the transform cannot feed back.
pub fn layout_height(node: &NodeRef) -> Option<f64> {
    let element = node.cast::<HtmlElement>()?;
    if !element.is_connected() {
        return None;
    }
    let height = f64::from(element.offset_height());
    (height > 0.0).then_some(height)
}
