//! Reviews error types.

use thiserror::Error;
use turbo_data::FetchError;

/// Errors from loading a page of reviews.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewsError {
    /// No response was obtained.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The API answered with a failure. The message is the server's, or the
    /// configured fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success body that cannot be read as a reviews page.
    #[error("Malformed reviews response: {0}")]
    Malformed(String),
}

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or type error.
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
