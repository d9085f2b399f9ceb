//! API utilities for frontend-backend communication
//!
//! Resolves where the guides API lives relative to the page.

use std::collections::HashMap;

/// Port of the guides API when no override is given
pub const DEFAULT_API_PORT: u16 = 5000;

/// Get the base URL for API requests
///
/// An `?api=` query parameter on the page URL wins; otherwise the API is
/// expected on the page's host, port 5000.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let search = location.search().unwrap_or_default();
    resolve_api_base(&protocol, &hostname, &search)
}

/// Pure part of [`api_base`]
pub fn resolve_api_base(protocol: &str, hostname: &str, search: &str) -> String {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    if let Some(api) = params.get("api").filter(|v| !v.is_empty()) {
        return api.trim_end_matches('/').to_string();
    }
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(
            resolve_api_base("http:", "localhost", ""),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_query_override() {
        assert_eq!(
            resolve_api_base("https:", "intranet", "?api=https%3A%2F%2Fapi.intranet%2F"),
            "https://api.intranet"
        );
    }

    #[test]
    fn test_unrelated_query_is_ignored() {
        assert_eq!(
            resolve_api_base("http:", "10.0.0.5", "?tab=historico"),
            "http://10.0.0.5:5000"
        );
    }
}
