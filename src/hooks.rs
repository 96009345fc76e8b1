use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::animation::browser::BrowserHost;
use crate::animation::{ViewportMetrics, ViewportTracker};
use crate::config;
use crate::content::SiteContent;

/// Current window size, re-rendering only when it changes.
/// Stays `ViewportMetrics::UNKNOWN` outside a browser.
#[hook]
pub fn use_viewport() -> ViewportMetrics {
    let metrics = use_state_eq(|| ViewportMetrics::UNKNOWN);

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = ViewportTracker::new(BrowserHost::shared())
                    .with_debounce(config::RESIZE_DEBOUNCE_MS);
                let subscription = tracker.observe(move |next| metrics.set(next));
                move || subscription.unsubscribe()
            },
            (),
        );
    }

    *metrics
}

/// Bundled content straight away, swapped for the served copy once fetched.
#[hook]
pub fn use_site_content() -> Rc<SiteContent> {
    let content = use_state(|| Rc::new(SiteContent::bundled()));

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Request::get(config::get_content_url()).send().await {
                        Ok(response) if response.ok() => match response.json::<SiteContent>().await {
                            Ok(fresh) => content.set(Rc::new(fresh)),
                            Err(_) => gloo_console::error!("Failed to parse site content"),
                        },
                        Ok(response) => {
                            gloo_console::error!("Failed to fetch site content, status", response.status())
                        }
                        Err(_) => gloo_console::error!("Failed to fetch site content"),
                    }
                });
                || ()
            },
            (),
        );
    }

    (*content).clone()
}
