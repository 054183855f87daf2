//! API URL helpers.
//!
//! The base URL is taken from `CONSOLE_API_BASE` at build time when set,
//! otherwise derived from the current window location on port 3000.

const API_BASE_OVERRIDE: Option<&str> = option_env!("CONSOLE_API_BASE");

/// Base URL for API requests, e.g. `http://localhost:3000`.
///
/// Empty string if no override is set and the window is not available.
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full API URL for a path starting with `/api/`.
///
/// Path segments taken from user data should go through [`api_item_url`].
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of one item in an API collection, with the id percent-encoded.
pub fn api_item_url(collection: &str, id: &str) -> String {
    api_url(&format!("{}/{}", collection, urlencoding::encode(id)))
}
