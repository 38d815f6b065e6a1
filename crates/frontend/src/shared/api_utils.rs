//! API utilities for talking to the catalog service
//!
//! Provides helper functions for constructing API URLs.

/// Port of the catalog service
pub const CATALOG_API_PORT: u16 = 3010;

/// Used when no browser window is available
const FALLBACK_API_BASE: &str = "http://localhost:3010";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the catalog service port.
///
/// # Returns
/// - API base URL like "http://localhost:3010"
/// - `FALLBACK_API_BASE` if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, CATALOG_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/Catalogs");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
