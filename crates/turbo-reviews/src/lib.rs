//! Paginated product reviews for TurboCommerce storefronts.
//!
//! The crate is split along the two halves of the reviews widget:
//!
//! - **Fetching**: [`ReviewsClient`] turns a product/page pair into a
//!   cache-busted `GET /api/reviews` call and interprets the reply.
//! - **State**: [`ReviewsController`] is a reducer over [`PageState`]. Every
//!   transition that needs data returns a [`FetchRequest`] for the host to
//!   run; results come back through [`ReviewsController::resolve`], which
//!   drops anything a newer request has superseded.
//! - **Presentation**: [`ReviewsView`] picks skeleton, error, empty or list
//!   from the state, and [`render_reviews_view`] turns it into HTML.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::FetchClient;
//! use turbo_reviews::{ReviewsClient, ReviewsConfig, ReviewsController};
//!
//! let config = ReviewsConfig::default();
//! let client = ReviewsClient::new(FetchClient::new(), config.clone());
//! let mut controller = ReviewsController::new(config);
//!
//! if let Some(request) = controller.on_identity_change("p1", 0) {
//!     let outcome = client.fetch_page(&request.product_id, request.page).await;
//!     controller.resolve(request.ticket, outcome);
//! }
//! ```

mod client;
mod config;
mod controller;
mod error;
mod model;
mod query;
mod render;
mod sanitize;
mod state;
mod view;

pub use client::ReviewsClient;
pub use config::ReviewsConfig;
pub use controller::{FetchRequest, LightboxTarget, Resolution, ReviewsController};
pub use error::{ConfigError, ReviewsError};
pub use model::{format_review_date, Pagination, Review, ReviewAuthor, ReviewsPage};
pub use query::ReviewsQuery;
pub use render::render_reviews_view;
pub use sanitize::sanitize_html;
pub use state::{FetchOrigin, FetchPhase, FetchTicket, PageState};
pub use view::{LightboxView, PagerView, ReviewCard, ReviewListView, ReviewsView, Thumbnail};
