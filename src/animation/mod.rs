//! Scroll-driven animation for pinned sections.
//!
//! `viewport` tracks the window size, `scroll` turns the scroll position into
//! progress through a pinned region, `scale` sizes the background shape from
//! the viewport, and `style` maps progress to inline styles. `browser` is the
//! only part that talks to the DOM.

pub mod browser;
pub mod host;
pub mod scale;
pub mod scroll;
pub mod style;
pub mod viewport;

#[cfg(test)]
pub mod testing;

pub use scale::{ScaleMemo, ScaleTiers};
pub use scroll::{Phase, PinRegion, ScrollProgressDriver, ScrollState, TravelDistance};
pub use viewport::{Subscription, ViewportMetrics, ViewportTracker};
