use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use super::host::{EventHost, HandleId, HostEvent};

/// Window size in CSS px. `{0,0}` means unknown: do not scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
    pub width: u32,
    pub height: u32,
}

impl ViewportMetrics {
    pub const UNKNOWN: ViewportMetrics = ViewportMetrics { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        ViewportMetrics { width, height }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::UNKNOWN
    }
}

/// Disposer returned by `observe`. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    alive: Rc<Cell<bool>>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(alive: Rc<Cell<bool>>, teardown: Box<dyn FnOnce()>) -> Self {
        Subscription { alive, teardown: Some(teardown) }
    }

    /// A subscription that was never attached to anything.
    pub fn inert() -> Self {
        Subscription { alive: Rc::new(Cell::new(false)), teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    pub fn unsubscribe(self) {
        drop(self);
    }

    fn release(&mut self) {
        self.alive.set(false);
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

struct Observer {
    alive: Rc<Cell<bool>>,
    last: Cell<ViewportMetrics>,
    pending: Cell<Option<HandleId>>,
    on_change: Box<dyn Fn(ViewportMetrics)>,
}

impl Observer {
    fn publish(&self, host: &dyn EventHost) {
        if !self.alive.get() {
            return;
        }
        let Some(next) = host.viewport() else {
            return;
        };
        if next == self.last.get() {
            return;
        }
        self.last.set(next);
        (self.on_change)(next);
    }

    fn schedule(self: &Rc<Self>, host: &Rc<dyn EventHost>, millis: u32) {
        if let Some(previous) = self.pending.take() {
            host.clear_timeout(previous);
        }
        let weak_host = Rc::downgrade(host);
        let weak_self = Rc::downgrade(self);
        let timer = host.set_timeout(
            millis,
            Box::new(move || {
                if let (Some(host), Some(observer)) = (weak_host.upgrade(), weak_self.upgrade()) {
                    observer.pending.set(None);
                    observer.publish(host.as_ref());
                }
            }),
        );
        match timer {
            Some(id) => self.pending.set(Some(id)),
            // No timers available: publish straight away.
            None => self.publish(host.as_ref()),
        }
    }
}

/// Publishes the viewport size to subscribers whenever it actually changes.
#[derive(Clone)]
pub struct ViewportTracker {
    host: Rc<dyn EventHost>,
    debounce_ms: Option<u32>,
}

impl ViewportTracker {
    pub fn new(host: Rc<dyn EventHost>) -> Self {
        ViewportTracker { host, debounce_ms: None }
    }

    /// Only publish once resizing has been quiet for `millis`.
    pub fn with_debounce(mut self, millis: u32) -> Self {
        self.debounce_ms = Some(millis).filter(|ms| *ms > 0);
        self
    }

    pub fn current(&self) -> ViewportMetrics {
        self.host.viewport().unwrap_or(ViewportMetrics::UNKNOWN)
    }

    /// Calls `on_change` with the current size right away, then again after
    /// every resize that produces a different size.
    pub fn observe(&self, on_change: impl Fn(ViewportMetrics) + 'static) -> Subscription {
        let Some(initial) = self.host.viewport() else {
            warn!("viewport unavailable, scale-dependent effects disabled");
            on_change(ViewportMetrics::UNKNOWN);
            return Subscription::inert();
        };
        on_change(initial);

        let alive = Rc::new(Cell::new(true));
        let observer = Rc::new(Observer {
            alive: alive.clone(),
            last: Cell::new(initial),
            pending: Cell::new(None),
            on_change: Box::new(on_change),
        });

        let weak_host = Rc::downgrade(&self.host);
        let weak_observer = Rc::downgrade(&observer);
        let debounce_ms = self.debounce_ms;
        let listener: Rc<dyn Fn()> = Rc::new(move || {
            let (Some(host), Some(observer)) = (weak_host.upgrade(), weak_observer.upgrade()) else {
                return;
            };
            if !observer.alive.get() {
                return;
            }
            match debounce_ms {
                Some(millis) => observer.schedule(&host, millis),
                None => observer.publish(host.as_ref()),
            }
        });

        let Some(listener_id) = self.host.add_listener(HostEvent::Resize, listener) else {
            warn!("could not listen for resize events, viewport size will not update");
            return Subscription::inert();
        };

        let host = self.host.clone();
        Subscription::new(
            alive,
            Box::new(move || {
                observer.alive.set(false);
                if let Some(timer) = observer.pending.take() {
                    host.clear_timeout(timer);
                }
                host.remove_listener(listener_id);
            }),
        )
    }
}
