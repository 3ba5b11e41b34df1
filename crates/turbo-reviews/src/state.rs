//! Client-side page state.

use crate::model::Review;

/// What started a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// Product identity or refresh trigger changed; page reset to 1.
    Reset,
    /// Explicit page navigation.
    Navigate,
}

/// Fetch lifecycle: `Idle -> Loading -> {Loaded, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading(FetchOrigin),
    Loaded,
    Failed,
}

/// Identifies one issued fetch. Tickets increase monotonically per
/// controller; only the latest one is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub(crate) u64);

impl FetchTicket {
    /// Sequence number of this ticket.
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Display state for one product's reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub(crate) page: u32,
    pub(crate) total_pages: u32,
    pub(crate) reviews: Vec<Review>,
    pub(crate) phase: FetchPhase,
    pub(crate) error: Option<String>,
    pub(crate) selected_image: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            reviews: Vec::new(),
            phase: FetchPhase::Idle,
            error: None,
            selected_image: None,
        }
    }
}

impl PageState {
    /// Current page, starting at 1.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total pages from the last successful fetch; 0 until known.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Reviews for the current page.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading(_))
    }

    /// Visible error message, set only by failed resets.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Image shown in the lightbox; `None` when closed.
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}
