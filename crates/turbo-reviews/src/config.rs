//! Reviews widget configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for the reviews list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    /// Listing endpoint path.
    pub endpoint: String,
    /// Reviews per page (`limit` query parameter).
    pub page_size: u32,
    /// Review status to request.
    pub status: String,
    /// Placeholder cards shown while the first page loads.
    pub skeleton_cards: usize,
    /// Columns in the thumbnail grid.
    pub image_columns: usize,
    /// Error text used when the server gives no message.
    pub fallback_error: String,
    /// Text shown when a product has no reviews.
    pub empty_message: String,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/reviews".to_string(),
            page_size: 10,
            status: "published".to_string(),
            skeleton_cards: 3,
            image_columns: 3,
            fallback_error: "Failed to load reviews".to_string(),
            empty_message: "No reviews yet. Be the first to review this product!".to_string(),
        }
    }
}

impl ReviewsConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        if self.image_columns == 0 {
            return Err(ConfigError::Invalid(
                "image_columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the listing endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the fallback error text.
    pub fn with_fallback_error(mut self, message: impl Into<String>) -> Self {
        self.fallback_error = message.into();
        self
    }
}
