//! HTML renderer for the reviews view.

use crate::sanitize::sanitize_html;
use crate::view::{LightboxView, PagerView, ReviewCard, ReviewListView, ReviewsView};

/// Render the reviews section.
pub fn render_reviews_view(view: &ReviewsView) -> String {
    let body = match view {
        ReviewsView::Skeleton { cards } => render_skeleton(*cards),
        ReviewsView::Error { message } => format!(
            r#"<div class="reviews-error" role="alert">{}</div>"#,
            sanitize_html(message)
        ),
        ReviewsView::Empty { message } => format!(
            r#"<p class="reviews-empty">{}</p>"#,
            sanitize_html(message)
        ),
        ReviewsView::List(list) => render_list(list),
    };

    format!(
        r#"<section class="product-reviews" data-section="reviews">
    {body}
</section>"#
    )
}

fn render_skeleton(cards: usize) -> String {
    let placeholders: String = (0..cards)
        .map(|_| {
            r#"<div class="review-card review-card--skeleton" aria-hidden="true">
        <div class="skeleton-line skeleton-line--short"></div>
        <div class="skeleton-line"></div>
        <div class="skeleton-line"></div>
    </div>"#
        })
        .collect();

    format!(r#"<div class="reviews-skeleton" aria-busy="true">{placeholders}</div>"#)
}

fn render_list(list: &ReviewListView) -> String {
    let cards_html: String = list
        .cards
        .iter()
        .map(|card| render_card(card, list.image_columns))
        .collect();

    let pager_html = list.pager.as_ref().map(render_pager).unwrap_or_default();
    let lightbox_html = list.lightbox.as_ref().map(render_lightbox).unwrap_or_default();

    format!(
        r#"<div class="reviews-list">
        {cards_html}
    </div>
    {pager_html}
    {lightbox_html}"#
    )
}

fn render_card(card: &ReviewCard, columns: usize) -> String {
    let images_html = if card.thumbnails.is_empty() {
        String::new()
    } else {
        let thumbs: String = card
            .thumbnails
            .iter()
            .map(|thumb| {
                format!(
                    r#"<button type="button" class="review-thumbnail-button" data-action="open-image" data-image="{url}"><img class="review-thumbnail" src="{url}" alt="{alt}" loading="lazy"></button>"#,
                    url = sanitize_html(&thumb.url),
                    alt = sanitize_html(&thumb.alt),
                )
            })
            .collect();
        format!(
            r#"<div class="review-images" style="display: grid; grid-template-columns: repeat({columns}, 1fr)">{thumbs}</div>"#
        )
    };

    format!(
        r#"<article class="review-card" data-review-id="{id}">
        <header class="review-header">
            <span class="review-author">{author}</span>
            <span class="review-date">{date}</span>
        </header>
        <p class="review-text" style="white-space: pre-wrap">{text}</p>
        {images_html}
    </article>"#,
        id = sanitize_html(&card.id),
        author = sanitize_html(&card.author),
        date = sanitize_html(&card.date),
        text = sanitize_html(&card.text),
    )
}

fn render_pager(pager: &PagerView) -> String {
    let disabled = |flag: bool| if flag { " disabled" } else { "" };

    format!(
        r#"<nav class="reviews-pager">
        <button class="btn-pager" data-action="prev"{prev}>Previous</button>
        <span class="pager-label">{label}</span>
        <button class="btn-pager" data-action="next"{next}>Next</button>
    </nav>"#,
        prev = disabled(pager.prev_disabled),
        next = disabled(pager.next_disabled),
        label = pager.label(),
    )
}

fn render_lightbox(lightbox: &LightboxView) -> String {
    format!(
        r#"<div class="reviews-lightbox" data-action="lightbox-backdrop">
        <button class="lightbox-close" data-action="close-lightbox" aria-label="Close">&times;</button>
        <img class="lightbox-image" src="{url}" alt="Review image">
    </div>"#,
        url = sanitize_html(&lightbox.image_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Thumbnail;

    fn card(id: &str, text: &str, images: &[&str]) -> ReviewCard {
        ReviewCard {
            id: id.to_string(),
            author: "Dana".to_string(),
            date: "Jan 5, 2024".to_string(),
            text: text.to_string(),
            thumbnails: images
                .iter()
                .enumerate()
                .map(|(i, url)| Thumbnail {
                    url: url.to_string(),
                    alt: format!("Review image {}", i + 1),
                })
                .collect(),
        }
    }

    fn list(cards: Vec<ReviewCard>, pager: Option<PagerView>) -> ReviewsView {
        ReviewsView::List(ReviewListView {
            cards,
            image_columns: 3,
            pager,
            lightbox: None,
        })
    }

    // === States ===

    #[test]
    fn test_skeleton_renders_placeholders() {
        let html = render_reviews_view(&ReviewsView::Skeleton { cards: 3 });
        assert_eq!(html.matches("review-card--skeleton").count(), 3);
    }

    #[test]
    fn test_error_and_empty() {
        let html = render_reviews_view(&ReviewsView::Error {
            message: "Server error".to_string(),
        });
        assert!(html.contains(r#"role="alert">Server error</div>"#));

        let html = render_reviews_view(&ReviewsView::Empty {
            message: "No reviews yet.".to_string(),
        });
        assert!(html.contains("reviews-empty"));
    }

    // === List ===

    #[test]
    fn test_renders_one_card_per_review() {
        let html = render_reviews_view(&list(
            vec![card("r1", "a", &[]), card("r2", "b", &["x.jpg"])],
            None,
        ));

        assert_eq!(html.matches(r#"<article class="review-card""#).count(), 2);
        assert!(html.contains("white-space: pre-wrap"));
        assert!(html.contains(r#"alt="Review image 1""#));
        assert!(html.contains(r#"<button type="button" class="review-thumbnail-button" data-action="open-image" data-image="x.jpg">"#));
        assert!(html.contains("repeat(3, 1fr)"));
        assert!(!html.contains("reviews-pager"));
    }

    #[test]
    fn test_pager_disabled_flags() {
        let pager = PagerView {
            page: 1,
            total_pages: 3,
            prev_disabled: true,
            next_disabled: false,
        };
        let html = render_reviews_view(&list(vec![card("r1", "a", &[])], Some(pager)));

        assert!(html.contains(r#"data-action="prev" disabled>"#));
        assert!(html.contains(r#"data-action="next">"#));
        assert!(html.contains("Page 1 of 3"));
    }

    #[test]
    fn test_lightbox_markup() {
        let view = ReviewsView::List(ReviewListView {
            cards: vec![card("r1", "a", &["x.jpg"])],
            image_columns: 3,
            pager: None,
            lightbox: Some(LightboxView {
                image_url: "x.jpg".to_string(),
            }),
        });
        let html = render_reviews_view(&view);

        assert!(html.contains(r#"data-action="lightbox-backdrop""#));
        assert!(html.contains(r#"data-action="close-lightbox""#));
        assert!(html.contains(r#"class="lightbox-image" src="x.jpg""#));
    }

    // === Escaping ===

    #[test]
    fn test_review_text_is_escaped() {
        let html = render_reviews_view(&list(
            vec![card("r1", "<img src=x onerror=alert(1)>", &[r#"a.jpg" onload="x"#])],
            None,
        ));

        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("a.jpg&quot; onload=&quot;x"));
    }
}
