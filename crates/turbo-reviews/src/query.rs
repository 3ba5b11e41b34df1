//! Listing query construction.

use crate::config::ReviewsConfig;

/// Query for one page of a product's reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsQuery {
    pub product_id: String,
    pub status: String,
    pub page: u32,
    pub limit: u32,
}

impl ReviewsQuery {
    /// Query for `page` of `product_id` using the configured status and size.
    pub fn new(config: &ReviewsConfig, product_id: impl Into<String>, page: u32) -> Self {
        Self {
            product_id: product_id.into(),
            status: config.status.clone(),
            page: page.max(1),
            limit: config.page_size,
        }
    }

    /// Request path under `endpoint`, with `cache_token` as the `v` parameter.
    pub fn to_path(&self, endpoint: &str, cache_token: &str) -> String {
        format!(
            "{}?productId={}&status={}&page={}&limit={}&v={}",
            endpoint,
            urlencoding::encode(&self.product_id),
            urlencoding::encode(&self.status),
            self.page,
            self.limit,
            urlencoding::encode(cache_token),
        )
    }
}
