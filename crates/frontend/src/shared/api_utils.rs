//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API calls go to the page origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/config");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
