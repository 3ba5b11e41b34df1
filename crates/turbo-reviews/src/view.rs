//! Presentation model for the reviews list.

use crate::config::ReviewsConfig;
use crate::model::Review;
use crate::state::PageState;

/// Which of the four mutually exclusive views to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsView {
    /// Placeholder cards while the first page loads.
    Skeleton { cards: usize },
    /// A failed reset.
    Error { message: String },
    /// No reviews for the product.
    Empty { message: String },
    /// Review cards with optional pager and lightbox.
    List(ReviewListView),
}

/// The populated list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewListView {
    pub cards: Vec<ReviewCard>,
    pub image_columns: usize,
    pub pager: Option<PagerView>,
    pub lightbox: Option<LightboxView>,
}

/// One review card.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: String,
    pub author: String,
    pub date: String,
    pub text: String,
    pub thumbnails: Vec<Thumbnail>,
}

/// A clickable review image.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    pub alt: String,
}

/// Paging footer.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerView {
    pub page: u32,
    pub total_pages: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PagerView {
    /// `Page 2 of 5`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Full-screen image overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxView {
    pub image_url: String,
}

impl ReviewsView {
    /// Pick the view for `state`.
    ///
    /// The skeleton and error banner only appear on page 1; loads of later
    /// pages keep the previous cards on screen until the new page arrives.
    pub fn from_state(state: &PageState, config: &ReviewsConfig) -> Self {
        let loading = state.is_loading();

        if loading && state.page() == 1 {
            return Self::Skeleton {
                cards: config.skeleton_cards,
            };
        }

        if let Some(message) = state.error() {
            if state.page() == 1 {
                return Self::Error {
                    message: message.to_string(),
                };
            }
        }

        if !loading && state.reviews().is_empty() {
            return Self::Empty {
                message: config.empty_message.clone(),
            };
        }

        let pager = (state.total_pages() > 1).then(|| PagerView {
            page: state.page(),
            total_pages: state.total_pages(),
            prev_disabled: state.is_first_page() || loading,
            next_disabled: state.is_last_page() || loading,
        });

        Self::List(ReviewListView {
            cards: state.reviews().iter().map(ReviewCard::from_review).collect(),
            image_columns: config.image_columns,
            pager,
            lightbox: state.selected_image().map(|url| LightboxView {
                image_url: url.to_string(),
            }),
        })
    }
}

impl ReviewCard {
    pub fn from_review(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            author: review.author_name().to_string(),
            date: review.formatted_date(),
            text: review.text.clone(),
            thumbnails: review
                .images
                .iter()
                .enumerate()
                .map(|(idx, url)| Thumbnail {
                    url: url.clone(),
                    alt: format!("Review image {}", idx + 1),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{LightboxTarget, ReviewsController};
    use crate::error::ReviewsError;
    use crate::model::{Pagination, ReviewAuthor, ReviewsPage};

    fn review(id: &str, images: &[&str]) -> Review {
        Review {
            id: id.to_string(),
            text: "Solid.\nFits well.".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            author: Some(ReviewAuthor {
                id: "u1".to_string(),
                name: Some("Dana".to_string()),
            }),
            created_at: "2024-01-05T10:00:00Z".to_string(),
            status: "published".to_string(),
        }
    }

    fn page_of(reviews: Vec<Review>, pages: u32) -> Result<ReviewsPage, ReviewsError> {
        Ok(ReviewsPage {
            data: reviews,
            pagination: Pagination { pages },
        })
    }

    fn view(controller: &ReviewsController) -> ReviewsView {
        ReviewsView::from_state(controller.state(), controller.config())
    }

    fn list(controller: &ReviewsController) -> ReviewListView {
        match view(controller) {
            ReviewsView::List(list) => list,
            other => panic!("expected list view, got {:?}", other),
        }
    }

    #[test]
    fn test_skeleton_while_first_page_loads() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        controller.on_identity_change("p1", 0).unwrap();

        assert_eq!(view(&controller), ReviewsView::Skeleton { cards: 3 });
    }

    #[test]
    fn test_first_page_scenario() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &[])], 3));

        let list = list(&controller);
        assert_eq!(list.cards.len(), 1);
        let pager = list.pager.unwrap();
        assert_eq!(pager.label(), "Page 1 of 3");
        assert!(pager.prev_disabled);
        assert!(!pager.next_disabled);
    }

    #[test]
    fn test_next_page_keeps_list_while_loading() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &[])], 3));

        let next = controller.go_to_page(1).unwrap();
        let during = list(&controller);
        assert_eq!(during.cards[0].id, "r1");
        let pager = during.pager.unwrap();
        assert!(pager.prev_disabled && pager.next_disabled);

        controller.resolve(
            next.ticket,
            page_of(vec![review("r2", &[]), review("r3", &[])], 3),
        );
        let after = list(&controller);
        let ids: Vec<&str> = after.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r3"]);
        assert_eq!(after.pager.unwrap().label(), "Page 2 of 3");
    }

    #[test]
    fn test_pager_on_last_page_disables_next_only() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &[])], 2));
        let next = controller.go_to_page(1).unwrap();
        controller.resolve(next.ticket, page_of(vec![review("r2", &[])], 2));

        let pager = list(&controller).pager.unwrap();
        assert_eq!(pager.label(), "Page 2 of 2");
        assert!(pager.next_disabled);
        assert!(!pager.prev_disabled);
        assert!(controller.go_to_page(1).is_none());
    }

    #[test]
    fn test_returning_to_first_page_shows_skeleton() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &[])], 3));
        let next = controller.go_to_page(1).unwrap();
        controller.resolve(next.ticket, page_of(vec![review("r2", &[])], 3));

        controller.go_to_page(-1).unwrap();

        assert_eq!(view(&controller), ReviewsView::Skeleton { cards: 3 });
    }

    #[test]
    fn test_error_banner_on_reset_failure() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(
            request.ticket,
            Err(ReviewsError::Rejected {
                status: 500,
                message: "Server error".to_string(),
            }),
        );

        assert_eq!(
            view(&controller),
            ReviewsView::Error {
                message: "Server error".to_string()
            }
        );
        assert!(controller.state().reviews().is_empty());
    }

    #[test]
    fn test_empty_state() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(Vec::new(), 0));

        assert_eq!(
            view(&controller),
            ReviewsView::Empty {
                message: "No reviews yet. Be the first to review this product!".to_string()
            }
        );
    }

    #[test]
    fn test_pager_hidden_for_single_page() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &[])], 1));

        assert!(list(&controller).pager.is_none());
    }

    #[test]
    fn test_card_fields_and_thumbnails() {
        let card = ReviewCard::from_review(&review("r1", &["a.jpg", "b.jpg"]));

        assert_eq!(card.author, "Dana");
        assert_eq!(card.date, "Jan 5, 2024");
        assert_eq!(card.text, "Solid.\nFits well.");
        assert_eq!(card.thumbnails[1].url, "b.jpg");
        assert_eq!(card.thumbnails[1].alt, "Review image 2");
    }

    #[test]
    fn test_lightbox_in_list_view() {
        let mut controller = ReviewsController::new(ReviewsConfig::default());
        let request = controller.on_identity_change("p1", 0).unwrap();
        controller.resolve(request.ticket, page_of(vec![review("r1", &["a.jpg"])], 1));

        controller.open_image("a.jpg");
        assert_eq!(
            list(&controller).lightbox,
            Some(LightboxView {
                image_url: "a.jpg".to_string()
            })
        );

        controller.lightbox_click(LightboxTarget::Image);
        assert!(list(&controller).lightbox.is_some());

        controller.lightbox_click(LightboxTarget::Backdrop);
        assert!(list(&controller).lightbox.is_none());
    }
}
