//! HTTP client utilities for TurboCommerce.
//!
//! Provides a small JSON client for calling storefront APIs from native code
//! or from the browser (`wasm32`), plus the [`Api`] seam that UI components
//! are written against.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::{Api, FetchClient};
//!
//! let client = FetchClient::new().with_base_url("https://shop.example.com");
//! let reply = client.request_json("/api/reviews?productId=p1&page=1").await?;
//! if reply.ok {
//!     println!("{}", reply.json["pagination"]["pages"]);
//! }
//! ```

mod api;
mod cache_buster;
mod error;
mod request;
mod response;

use std::collections::HashMap;

use async_trait::async_trait;

pub use api::{Api, ApiReply};
pub use cache_buster::{CacheBuster, RandomBuster, SequenceBuster};
pub use error::FetchError;
pub use request::{resolve_url, RequestBuilder};
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// A thin wrapper around `reqwest` that resolves paths against an optional
/// base URL and attaches default headers to every request.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client that asks for JSON.
    pub fn new() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build a GET request for `url`.
    pub fn get(&self, url: &str) -> RequestBuilder {
        let full_url = resolve_url(self.base_url.as_deref(), url);
        RequestBuilder::new(full_url).headers(
            self.default_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Send a request and collect the full response.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let mut outgoing = self.http.get(&request.url);
        for (key, value) in &request.headers {
            outgoing = outgoing.header(key.as_str(), value.as_str());
        }

        let response = outgoing.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}

#[async_trait(?Send)]
impl Api for FetchClient {
    async fn request_json(&self, path: &str) -> Result<ApiReply, FetchError> {
        let response = self.send(self.get(path)).await?;
        ApiReply::from_response(&response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Api, ApiReply, CacheBuster, FetchClient, FetchError, Response};
}
