//! Reviews listing client.

use turbo_data::{Api, CacheBuster, RandomBuster};
use turbo_observability::{LogLevel, StructuredLogger};

use crate::config::ReviewsConfig;
use crate::error::ReviewsError;
use crate::model::ReviewsPage;
use crate::query::ReviewsQuery;

/// Fetches pages of published reviews through an [`Api`].
///
/// Every request carries a fresh token from the cache buster as its `v`
/// parameter. The default logger passes debug entries through and leaves
/// level filtering to the `tracing` subscriber.
pub struct ReviewsClient<A> {
    api: A,
    buster: Box<dyn CacheBuster>,
    config: ReviewsConfig,
    logger: StructuredLogger,
}

impl<A: Api> ReviewsClient<A> {
    /// Create a client with random cache-busting tokens.
    pub fn new(api: A, config: ReviewsConfig) -> Self {
        Self {
            api,
            buster: Box::new(RandomBuster),
            config,
            logger: StructuredLogger::new("reviews-client").with_min_level(LogLevel::Debug),
        }
    }

    /// Replace the cache-buster token source.
    pub fn with_cache_buster(mut self, buster: impl CacheBuster + 'static) -> Self {
        self.buster = Box::new(buster);
        self
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Logger shared with whatever drives this client.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Client configuration.
    pub fn config(&self) -> &ReviewsConfig {
        &self.config
    }

    /// Fetch one page of reviews for a product.
    pub async fn fetch_page(&self, product_id: &str, page: u32) -> Result<ReviewsPage, ReviewsError> {
        let query = ReviewsQuery::new(&self.config, product_id, page);
        let path = query.to_path(&self.config.endpoint, &self.buster.next_token());

        self.logger
            .debug_builder("Fetching reviews page")
            .field("product_id", product_id)
            .field_i64("page", i64::from(query.page))
            .emit();

        let result = self.request(&path).await;
        match &result {
            Ok(page_data) => self
                .logger
                .debug_builder("Reviews page loaded")
                .field("product_id", product_id)
                .field_i64("page", i64::from(query.page))
                .field_i64("count", page_data.data.len() as i64)
                .field_i64("pages", i64::from(page_data.total_pages()))
                .emit(),
            Err(e) => self
                .logger
                .warn_builder("Reviews page fetch failed")
                .field("product_id", product_id)
                .field_i64("page", i64::from(query.page))
                .field("error", e.to_string())
                .emit(),
        }
        result
    }

    async fn request(&self, path: &str) -> Result<ReviewsPage, ReviewsError> {
        let reply = self.api.request_json(path).await?;

        if !reply.ok {
            let message = reply
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| self.config.fallback_error.clone());
            return Err(ReviewsError::Rejected {
                status: reply.status,
                message,
            });
        }

        ReviewsPage::from_json(reply.json)
    }
}
