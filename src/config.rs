
#[cfg(debug_assertions)]
pub fn get_content_url() -> &'static str {
    "http://localhost:8080/content/site.json"  // Development content served by trunk
}

#[cfg(not(debug_assertions))]
pub fn get_content_url() -> &'static str {
    "/content/site.json"
}

/// Scroll distance the About values section stays pinned for.
pub const VALUES_TRAVEL_DISTANCE: &str = "2200px";

/// Trailing-edge quiet period before a resize is published.
pub const RESIZE_DEBOUNCE_MS: u32 = 75;

pub const CONTACT_EMAIL: &str = "hello@example.com";
