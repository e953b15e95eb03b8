//! API utilities for frontend-backend communication

/// Port the dev REST backend listens on
pub const BACKEND_PORT: u16 = 3000;

/// Base URL of the REST backend, derived from the current window location
///
/// Returns e.g. "http://localhost:3000", or an empty string outside a browser.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// `{base}/api/{collection}`
pub fn collection_url(base: &str, collection: &str) -> String {
    format!("{}/api/{}", base.trim_end_matches('/'), collection)
}

/// `{base}/api/{collection}/{id}` with the id percent-encoded
pub fn item_url(base: &str, collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection_url(base, collection),
        urlencoding::encode(id)
    )
}

/// Appends a non-empty query string
pub fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            collection_url("http://h:3000/", "coupons"),
            "http://h:3000/api/coupons"
        );
        assert_eq!(
            item_url("", "staff", "a b"),
            "/api/staff/a%20b"
        );
        assert_eq!(with_query("/api/staff".into(), ""), "/api/staff");
        assert_eq!(
            with_query("/api/staff".into(), "role=admin"),
            "/api/staff?role=admin"
        );
    }
}
