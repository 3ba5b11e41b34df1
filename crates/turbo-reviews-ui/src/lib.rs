//! Interactive reviews list for Leptos storefronts.
//!
//! [`ReviewsList`] owns a [`ReviewsController`] in a signal, runs the fetch
//! requests it emits on the local task queue and renders [`ReviewsView`].
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turbo_data::FetchClient;
//! use turbo_reviews::{ReviewsClient, ReviewsConfig};
//! use turbo_reviews_ui::ReviewsList;
//!
//! let client = Arc::new(ReviewsClient::new(FetchClient::new(), ReviewsConfig::default()));
//! view! { <ReviewsList product_id=product_id client=client/> }
//! ```

use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use turbo_data::Api;
use turbo_observability::{LogBuilder, StructuredLogger};
use turbo_reviews::{
    FetchRequest, LightboxTarget, LightboxView, PagerView, ReviewCard, ReviewListView,
    Resolution, ReviewsClient, ReviewsController, ReviewsView,
};

// ============================================================================
// Component
// ============================================================================

/// Paginated reviews for one product.
///
/// Changing `product_id` or bumping `refresh_trigger` resets to page 1.
#[component]
pub fn ReviewsList<A>(
    /// Product whose reviews are listed.
    #[prop(into)]
    product_id: Signal<String>,
    /// Bump to force a reload of page 1.
    #[prop(optional, into)]
    refresh_trigger: Option<Signal<u64>>,
    /// Shared reviews client.
    client: Arc<ReviewsClient<A>>,
) -> impl IntoView
where
    A: Api + Send + Sync + 'static,
{
    let state = RwSignal::new(ReviewsController::new(client.config().clone()));
    let refresh_trigger = refresh_trigger.unwrap_or_else(|| Signal::derive(|| 0));

    {
        let client = Arc::clone(&client);
        Effect::new(move |_| {
            let product_id = product_id.get();
            let refresh = refresh_trigger.get();
            let request = state
                .try_update(|c| c.on_identity_change(product_id, refresh))
                .flatten();
            if let Some(request) = request {
                dispatch(Arc::clone(&client), state, request);
            }
        });
    }

    let navigate = move |delta: i64| {
        let request = state.try_update(|c| c.go_to_page(delta)).flatten();
        if let Some(request) = request {
            dispatch(Arc::clone(&client), state, request);
        }
    };

    let view_model = Memo::new(move |_| state.with(|c| ReviewsView::from_state(c.state(), c.config())));

    view! {
        <section class="product-reviews" data-section="reviews">
            {move || match view_model.get() {
                ReviewsView::Skeleton { cards } => skeleton(cards).into_any(),
                ReviewsView::Error { message } => view! {
                    <div class="reviews-error" role="alert">{message}</div>
                }.into_any(),
                ReviewsView::Empty { message } => view! {
                    <p class="reviews-empty">{message}</p>
                }.into_any(),
                ReviewsView::List(list) => list_view(list, state, navigate.clone()).into_any(),
            }}
        </section>
    }
}

/// Run `request` and feed the outcome back into the controller.
fn dispatch<A>(client: Arc<ReviewsClient<A>>, state: RwSignal<ReviewsController>, request: FetchRequest)
where
    A: Api + Send + Sync + 'static,
{
    spawn_local(async move {
        let outcome = client.fetch_page(&request.product_id, request.page).await;
        let Some(resolution) = state.try_update(|c| c.resolve(request.ticket, outcome)) else {
            return;
        };
        if let Some(entry) = resolution_log(client.logger(), &request, &resolution) {
            entry.emit();
        }
        if let Resolution::Refetch(next) = resolution {
            dispatch(client, state, next);
        }
    });
}

/// Log entry for resolutions the user never sees.
fn resolution_log<'a>(
    logger: &'a StructuredLogger,
    request: &FetchRequest,
    resolution: &Resolution,
) -> Option<LogBuilder<'a>> {
    let builder = match resolution {
        Resolution::Swallowed => logger.warn_builder("Page navigation failed, keeping current page"),
        Resolution::Stale => logger.debug_builder("Discarded superseded reviews response"),
        Resolution::Applied | Resolution::Refetch(_) => return None,
    };
    Some(
        builder
            .field("product_id", request.product_id.as_str())
            .field_i64("page", i64::from(request.page))
            .field_i64("ticket", request.ticket.seq() as i64),
    )
}

// ============================================================================
// View Pieces
// ============================================================================

fn skeleton(cards: usize) -> impl IntoView {
    view! {
        <div class="reviews-skeleton" aria-busy="true">
            {(0..cards).map(|_| view! {
                <div class="review-card review-card--skeleton" aria-hidden="true">
                    <div class="skeleton-line skeleton-line--short"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line"></div>
                </div>
            }).collect_view()}
        </div>
    }
}

fn list_view<F>(list: ReviewListView, state: RwSignal<ReviewsController>, navigate: F) -> impl IntoView
where
    F: Fn(i64) + Clone + Send + Sync + 'static,
{
    let columns = list.image_columns;

    view! {
        <div class="reviews-list">
            {list.cards.into_iter().map(|card| card_view(card, columns, state)).collect_view()}
        </div>
        {list.pager.map(|pager| pager_view(pager, navigate))}
        {list.lightbox.map(|lightbox| lightbox_view(lightbox, state))}
    }
}

fn card_view(card: ReviewCard, columns: usize, state: RwSignal<ReviewsController>) -> impl IntoView {
    let images = (!card.thumbnails.is_empty()).then(|| {
        view! {
            <div class="review-images" style=grid_style(columns)>
                {card.thumbnails.into_iter().map(|thumb| {
                    let url = thumb.url.clone();
                    view! {
                        <button
                            type="button"
                            class="review-thumbnail-button"
                            on:click=move |_| state.update(|c| c.open_image(url.clone()))
                        >
                            <img class="review-thumbnail" src=thumb.url alt=thumb.alt loading="lazy"/>
                        </button>
                    }
                }).collect_view()}
            </div>
        }
    });

    view! {
        <article class="review-card" data-review-id=card.id>
            <header class="review-header">
                <span class="review-author">{card.author}</span>
                <span class="review-date">{card.date}</span>
            </header>
            <p class="review-text" style="white-space: pre-wrap">{card.text}</p>
            {images}
        </article>
    }
}

fn pager_view<F>(pager: PagerView, navigate: F) -> impl IntoView
where
    F: Fn(i64) + Clone + Send + Sync + 'static,
{
    let label = pager.label();
    let prev = navigate.clone();

    view! {
        <nav class="reviews-pager">
            <button class="btn-pager" disabled=pager.prev_disabled on:click=move |_| prev(-1)>
                "Previous"
            </button>
            <span class="pager-label">{label}</span>
            <button class="btn-pager" disabled=pager.next_disabled on:click=move |_| navigate(1)>
                "Next"
            </button>
        </nav>
    }
}

fn lightbox_view(lightbox: LightboxView, state: RwSignal<ReviewsController>) -> impl IntoView {
    view! {
        <div
            class="reviews-lightbox"
            on:click=move |_| {
                state.update(|c| {
                    c.lightbox_click(LightboxTarget::Backdrop);
                });
            }
        >
            <button
                class="lightbox-close"
                aria-label="Close"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    state.update(|c| {
                        c.lightbox_click(LightboxTarget::CloseButton);
                    });
                }
            >
                "×"
            </button>
            <img
                class="lightbox-image"
                src=lightbox.image_url
                alt="Review image"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    state.update(|c| {
                        c.lightbox_click(LightboxTarget::Image);
                    });
                }
            />
        </div>
    }
}

fn grid_style(columns: usize) -> String {
    format!("display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 0.5rem;")
}
