//! HTTP request builder.

use std::collections::HashMap;

/// A builder for constructing GET requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add multiple headers to the request.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header value (case-insensitive).
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Join a base URL and a request path.
///
/// Absolute URLs pass through untouched; relative paths are appended to the
/// base with exactly one separating slash.
pub fn resolve_url(base_url: Option<&str>, url: &str) -> String {
    match base_url {
        Some(_) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(base) => {
            let base = base.trim_end_matches('/');
            if url.starts_with('/') {
                format!("{}{}", base, url)
            } else {
                format!("{}/{}", base, url)
            }
        }
        None => url.to_string(),
    }
}
