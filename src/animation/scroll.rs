use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::warn;

use super::host::{EventHost, HandleId, HostEvent, Measure};
use super::viewport::{Subscription, ViewportMetrics, ViewportTracker};
use crate::error::{AnimationError, ConfigError};

/// Scroll distance a pinned region stays pinned for, in px. Always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelDistance(f64);

impl TravelDistance {
    pub fn new(px: f64) -> Result<Self, ConfigError> {
        if px.is_finite() && px > 0.0 {
            Ok(TravelDistance(px))
        } else {
            Err(ConfigError::InvalidTravelDistance(px.to_string()))
        }
    }

    /// Accepts `"2200px"` or a bare number.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        number
            .parse::<f64>()
            .ok()
            .and_then(|px| TravelDistance::new(px).ok())
            .ok_or_else(|| ConfigError::InvalidTravelDistance(value.to_string()))
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TravelDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Before,
    Pinned,
    After,
}

/// What a render callback gets on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub progress: f64,
    pub is_pinned: bool,
}

impl ScrollState {
    /// Neutral state used before measurement succeeds.
    pub const NEUTRAL: ScrollState = ScrollState { progress: 0.0, is_pinned: false };

    pub fn at_offset(raw_offset: f64, travel: TravelDistance) -> Self {
        if !raw_offset.is_finite() {
            return Self::NEUTRAL;
        }
        let progress = (raw_offset / travel.px()).clamp(0.0, 1.0);
        ScrollState { progress, is_pinned: progress > 0.0 && progress < 1.0 }
    }

    pub fn phase(&self) -> Phase {
        if self.is_pinned {
            Phase::Pinned
        } else if self.progress >= 1.0 {
            Phase::After
        } else {
            Phase::Before
        }
    }
}

/// An element plus how far the page scrolls while it is pinned.
#[derive(Clone)]
pub struct PinRegion {
    element: Rc<dyn Measure>,
    travel: TravelDistance,
}

impl PinRegion {
    pub fn new(element: Rc<dyn Measure>, travel: TravelDistance) -> Self {
        PinRegion { element, travel }
    }

    pub fn travel(&self) -> TravelDistance {
        self.travel
    }

    /// Top of the element relative to the document, if it is laid out.
    fn document_top(&self, host: &dyn EventHost) -> Result<f64, AnimationError> {
        let geometry = self
            .element
            .measure()
            .filter(|g| g.is_laid_out())
            .ok_or_else(|| AnimationError::Measurement("region is not laid out".into()))?;
        let scroll_y = host.scroll_y().ok_or(AnimationError::EnvironmentUnavailable)?;
        Ok(geometry.top + scroll_y)
    }
}

struct DriverInner {
    host: Rc<dyn EventHost>,
    region: PinRegion,
    render: Box<dyn Fn(ScrollState)>,
    alive: Cell<bool>,
    top_offset: Cell<Option<f64>>,
    pending_frame: Cell<Option<HandleId>>,
    scroll_listener: Cell<Option<HandleId>>,
    viewport: Cell<ViewportMetrics>,
    viewport_subscription: RefCell<Option<Subscription>>,
}

impl DriverInner {
    fn tick(&self) {
        if !self.alive.get() {
            return;
        }
        let state = match self.offset_and_scroll() {
            Ok((top, scroll_y)) => ScrollState::at_offset(scroll_y - top, self.region.travel),
            Err(err) => {
                // Dropped so the next tick measures again.
                self.top_offset.set(None);
                warn!("pinned region: {err}, rendering neutral state");
                ScrollState::NEUTRAL
            }
        };
        (self.render)(state);
    }

    fn offset_and_scroll(&self) -> Result<(f64, f64), AnimationError> {
        let top = match self.top_offset.get() {
            Some(top) => top,
            None => {
                let top = self.region.document_top(self.host.as_ref())?;
                self.top_offset.set(Some(top));
                top
            }
        };
        let scroll_y = self.host.scroll_y().ok_or(AnimationError::EnvironmentUnavailable)?;
        Ok((top, scroll_y))
    }

    fn on_scroll(self: &Rc<Self>) {
        if !self.alive.get() || self.pending_frame.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let frame = self.host.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.pending_frame.set(None);
                inner.tick();
            }
        }));
        match frame {
            Some(id) => self.pending_frame.set(Some(id)),
            None => self.tick(),
        }
    }

    fn on_viewport(&self, metrics: ViewportMetrics) {
        self.viewport.set(metrics);
        self.top_offset.set(None);
        self.tick();
    }

    fn stop(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(listener) = self.scroll_listener.take() {
            self.host.remove_listener(listener);
        }
        if let Some(frame) = self.pending_frame.take() {
            self.host.cancel_frame(frame);
        }
        drop(self.viewport_subscription.borrow_mut().take());
    }
}

/// Drives a render callback from the scroll position through a pinned region.
///
/// Raw scroll events are coalesced into one animation frame. Viewport changes
/// from the tracker remeasure the region and tick immediately. Stopping (or
/// dropping) the driver removes every listener it registered, and a callback
/// that was already queued does nothing afterwards.
pub struct ScrollProgressDriver {
    inner: Rc<DriverInner>,
}

impl ScrollProgressDriver {
    pub fn start(
        host: Rc<dyn EventHost>,
        tracker: &ViewportTracker,
        region: PinRegion,
        render: impl Fn(ScrollState) + 'static,
    ) -> Self {
        let inner = Rc::new(DriverInner {
            host: host.clone(),
            region,
            render: Box::new(render),
            alive: Cell::new(true),
            top_offset: Cell::new(None),
            pending_frame: Cell::new(None),
            scroll_listener: Cell::new(None),
            viewport: Cell::new(ViewportMetrics::UNKNOWN),
            viewport_subscription: RefCell::new(None),
        });

        let weak: Weak<DriverInner> = Rc::downgrade(&inner);
        let listener: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_scroll();
            }
        });
        match host.add_listener(HostEvent::Scroll, listener) {
            Some(id) => inner.scroll_listener.set(Some(id)),
            None => warn!("could not listen for scroll events, pinned region stays static"),
        }

        // The tracker yields the current size straight away, which also
        // delivers the first tick.
        let weak = Rc::downgrade(&inner);
        let subscription = tracker.observe(move |metrics| {
            if let Some(inner) = weak.upgrade() {
                inner.on_viewport(metrics);
            }
        });
        *inner.viewport_subscription.borrow_mut() = Some(subscription);

        ScrollProgressDriver { inner }
    }

    /// Forget the cached region offset and tick again.
    pub fn remeasure(&self) {
        self.inner.top_offset.set(None);
        self.inner.tick();
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.inner.viewport.get()
    }

    pub fn is_running(&self) -> bool {
        self.inner.alive.get()
    }

    pub fn stop(&self) {
        self.inner.stop();
    }
}

impl Drop for ScrollProgressDriver {
    fn drop(&mut self) {
        self.inner.stop();
    }
}
