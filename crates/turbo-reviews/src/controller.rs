//! Pagination and fetch controller.
//!
//! The controller is a plain reducer: each operation mutates [`PageState`]
//! and, when data is needed, returns a [`FetchRequest`]. The host runs the
//! request (typically with [`crate::ReviewsClient::fetch_page`]) and hands the
//! outcome back to [`ReviewsController::resolve`] together with the request's
//! ticket. Only the most recently issued ticket is applied; earlier ones are
//! discarded, so a slow response can never overwrite a newer page or product.

use crate::config::ReviewsConfig;
use crate::error::ReviewsError;
use crate::model::ReviewsPage;
use crate::state::{FetchOrigin, FetchPhase, FetchTicket, PageState};

/// A fetch the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub product_id: String,
    pub page: u32,
    pub origin: FetchOrigin,
}

/// What [`ReviewsController::resolve`] did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied to the state.
    Applied,
    /// A newer request superseded this one; state untouched.
    Stale,
    /// A navigation fetch failed; prior content kept, no error shown.
    Swallowed,
    /// The current page lies beyond the reported page count; the last page
    /// must be fetched instead.
    Refetch(FetchRequest),
}

/// Where a click inside the lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// The dimmed overlay around the image.
    Backdrop,
    /// The dedicated close control.
    CloseButton,
    /// The enlarged image itself.
    Image,
}

#[derive(Debug, Clone)]
struct InFlight {
    ticket: FetchTicket,
    origin: FetchOrigin,
    previous_page: u32,
    previous_phase: FetchPhase,
}

/// Reducer over the reviews page state for one mounted list.
#[derive(Debug, Clone)]
pub struct ReviewsController {
    config: ReviewsConfig,
    identity: Option<(String, u64)>,
    state: PageState,
    last_ticket: u64,
    in_flight: Option<InFlight>,
}

impl ReviewsController {
    pub fn new(config: ReviewsConfig) -> Self {
        Self {
            config,
            identity: None,
            state: PageState::default(),
            last_ticket: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn config(&self) -> &ReviewsConfig {
        &self.config
    }

    /// Current product, once an identity has been set.
    pub fn product_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|(id, _)| id.as_str())
    }

    /// Ticket of the fetch whose result is still awaited.
    pub fn pending_ticket(&self) -> Option<FetchTicket> {
        self.in_flight.as_ref().map(|f| f.ticket)
    }

    /// The product or refresh trigger changed: start over at page 1.
    ///
    /// Returns `None` when the pair is identical to the current identity.
    pub fn on_identity_change(
        &mut self,
        product_id: impl Into<String>,
        refresh_trigger: u64,
    ) -> Option<FetchRequest> {
        let identity = (product_id.into(), refresh_trigger);
        if self.identity.as_ref() == Some(&identity) {
            return None;
        }

        let product_id = identity.0.clone();
        self.identity = Some(identity);
        self.state = PageState::default();

        Some(self.issue(product_id, 1, FetchOrigin::Reset))
    }

    /// Navigate explicitly to `page`, clamped to the known page range.
    ///
    /// Returns `None` before the first identity change and while a reset is
    /// still loading.
    pub fn on_page_change(&mut self, page: u32) -> Option<FetchRequest> {
        if self.state.phase == FetchPhase::Loading(FetchOrigin::Reset) {
            return None;
        }
        let product_id = self.product_id()?.to_string();
        let upper = self.state.total_pages.max(1);
        let page = page.clamp(1, upper);

        Some(self.issue(product_id, page, FetchOrigin::Navigate))
    }

    /// Step `delta` pages from the current one.
    ///
    /// No-op while loading or when the step would not move the page.
    pub fn go_to_page(&mut self, delta: i64) -> Option<FetchRequest> {
        if self.state.is_loading() {
            return None;
        }

        let upper = i64::from(self.state.total_pages.max(1));
        let target = (i64::from(self.state.page) + delta).clamp(1, upper);
        if target == i64::from(self.state.page) {
            return None;
        }

        // `target` lies within 1..=u32::MAX by the clamp above.
        self.on_page_change(target as u32)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<ReviewsPage, ReviewsError>,
    ) -> Resolution {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.ticket == ticket => in_flight,
            other => {
                self.in_flight = other;
                return Resolution::Stale;
            }
        };

        match (outcome, in_flight.origin) {
            (Ok(page), _) => {
                let total_pages = page.total_pages();
                self.state.reviews = page.data;
                self.state.total_pages = total_pages;
                self.state.error = None;
                self.state.phase = FetchPhase::Loaded;

                if total_pages > 0 && self.state.page > total_pages {
                    if let Some(request) = self.on_page_change(total_pages) {
                        return Resolution::Refetch(request);
                    }
                }
                Resolution::Applied
            }
            (Err(e), FetchOrigin::Reset) => {
                self.state.error = Some(e.to_string());
                self.state.reviews.clear();
                self.state.phase = FetchPhase::Failed;
                Resolution::Applied
            }
            (Err(_), FetchOrigin::Navigate) => {
                self.state.page = in_flight.previous_page;
                self.state.phase = in_flight.previous_phase;
                Resolution::Swallowed
            }
        }
    }

    /// Open the lightbox on `url`.
    pub fn open_image(&mut self, url: impl Into<String>) {
        self.state.selected_image = Some(url.into());
    }

    /// Close the lightbox.
    pub fn close_lightbox(&mut self) {
        self.state.selected_image = None;
    }

    /// Handle a click inside the open lightbox. Returns whether it closed.
    pub fn lightbox_click(&mut self, target: LightboxTarget) -> bool {
        match target {
            LightboxTarget::Backdrop | LightboxTarget::CloseButton => {
                let was_open = self.state.selected_image.is_some();
                self.close_lightbox();
                was_open
            }
            LightboxTarget::Image => false,
        }
    }

    fn issue(&mut self, product_id: String, page: u32, origin: FetchOrigin) -> FetchRequest {
        self.last_ticket += 1;
        let ticket = FetchTicket(self.last_ticket);

        let (previous_page, previous_phase) = match self.in_flight.take() {
            // The superseded request never completed; keep what preceded it.
            Some(pending)
                if origin == FetchOrigin::Navigate && pending.origin == FetchOrigin::Navigate =>
            {
                (pending.previous_page, pending.previous_phase)
            }
            _ => (self.state.page, self.state.phase),
        };

        self.in_flight = Some(InFlight {
            ticket,
            origin,
            previous_page,
            previous_phase,
        });
        self.state.page = page;
        self.state.error = None;
        self.state.phase = FetchPhase::Loading(origin);

        FetchRequest {
            ticket,
            product_id,
            page,
            origin,
        }
    }
}
