//! In-memory host used by the unit tests. Events, frames and timers only run
//! when a test asks for them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{ElementGeometry, EventHost, HandleId, HostEvent, Measure};
use super::viewport::ViewportMetrics;

type Listener = (HandleId, HostEvent, Rc<dyn Fn()>);

pub struct FakeHost {
    viewport: Cell<Option<ViewportMetrics>>,
    scroll_y: Cell<f64>,
    next_id: Cell<u32>,
    frames_supported: bool,
    listeners: RefCell<Vec<Listener>>,
    frames: RefCell<Vec<(HandleId, Box<dyn FnOnce()>)>>,
    timers: RefCell<Vec<(HandleId, Box<dyn FnOnce()>)>>,
}

impl FakeHost {
    pub fn new(width: u32, height: u32) -> Rc<Self> {
        Rc::new(Self::build(Some(ViewportMetrics::new(width, height)), true))
    }

    /// A host with no window at all.
    pub fn headless() -> Rc<Self> {
        Rc::new(Self::build(None, true))
    }

    pub fn without_frames(width: u32, height: u32) -> Rc<Self> {
        Rc::new(Self::build(Some(ViewportMetrics::new(width, height)), false))
    }

    fn build(viewport: Option<ViewportMetrics>, frames_supported: bool) -> Self {
        FakeHost {
            viewport: Cell::new(viewport),
            scroll_y: Cell::new(0.0),
            next_id: Cell::new(1),
            frames_supported,
            listeners: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
        }
    }

    fn next(&self) -> HandleId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        HandleId(id)
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.viewport.set(Some(ViewportMetrics::new(width, height)));
        self.fire(HostEvent::Resize);
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.fire(HostEvent::Scroll);
    }

    pub fn fire(&self, event: HostEvent) {
        let targets: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, cb)| cb.clone())
            .collect();
        for cb in targets {
            cb();
        }
    }

    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        for (_, cb) in frames {
            cb();
        }
    }

    pub fn run_timers(&self) {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        for (_, cb) in timers {
            cb();
        }
    }

    /// Pulls a queued frame out so a test can run it after teardown.
    pub fn take_frame(&self) -> Option<Box<dyn FnOnce()>> {
        let mut frames = self.frames.borrow_mut();
        if frames.is_empty() {
            None
        } else {
            Some(frames.remove(0).1)
        }
    }

    pub fn listener(&self, event: HostEvent) -> Option<Rc<dyn Fn()>> {
        self.listeners
            .borrow()
            .iter()
            .find(|(_, e, _)| *e == event)
            .map(|(_, _, cb)| cb.clone())
    }

    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners.borrow().iter().filter(|(_, e, _)| *e == event).count()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl EventHost for FakeHost {
    fn viewport(&self) -> Option<ViewportMetrics> {
        self.viewport.get()
    }

    fn scroll_y(&self) -> Option<f64> {
        self.viewport.get().map(|_| self.scroll_y.get())
    }

    fn add_listener(&self, event: HostEvent, callback: Rc<dyn Fn()>) -> Option<HandleId> {
        self.viewport.get()?;
        let id = self.next();
        self.listeners.borrow_mut().push((id, event, callback));
        Some(id)
    }

    fn remove_listener(&self, id: HandleId) {
        self.listeners.borrow_mut().retain(|(other, _, _)| *other != id);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<HandleId> {
        if !self.frames_supported {
            return None;
        }
        let id = self.next();
        self.frames.borrow_mut().push((id, callback));
        Some(id)
    }

    fn cancel_frame(&self, id: HandleId) {
        self.frames.borrow_mut().retain(|(other, _)| *other != id);
    }

    fn set_timeout(&self, _millis: u32, callback: Box<dyn FnOnce()>) -> Option<HandleId> {
        let id = self.next();
        self.timers.borrow_mut().push((id, callback));
        Some(id)
    }

    fn clear_timeout(&self, id: HandleId) {
        self.timers.borrow_mut().retain(|(other, _)| *other != id);
    }
}

/// Element at a fixed document offset; its viewport-relative top follows the
/// host's scroll position like a real box would.
pub struct FakeElement {
    host: Rc<FakeHost>,
    pub document_top: Cell<f64>,
    pub height: Cell<f64>,
    pub attached: Cell<bool>,
}

impl FakeElement {
    pub fn new(host: &Rc<FakeHost>, document_top: f64, height: f64) -> Rc<Self> {
        Rc::new(FakeElement {
            host: host.clone(),
            document_top: Cell::new(document_top),
            height: Cell::new(height),
            attached: Cell::new(true),
        })
    }
}

impl Measure for FakeElement {
    fn measure(&self) -> Option<ElementGeometry> {
        if !self.attached.get() {
            return Some(ElementGeometry { top: 0.0, width: 0.0, height: 0.0 });
        }
        Some(ElementGeometry {
            top: self.document_top.get() - self.host.scroll_y.get(),
            width: 750.0,
            height: self.height.get(),
        })
    }
}
