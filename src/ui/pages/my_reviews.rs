//! The signed-in user's own reviews, with the same inline edit and delete as
//! the movie page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api;
use crate::core::models::Review;
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::review_item::ReviewItem;

#[component]
pub fn MyReviewsPage() -> impl IntoView {
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::users::reviews().await {
                Ok(list) => reviews.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let on_updated = move |updated: Review| {
        reviews.update(|list| {
            if let Some(existing) = list.iter_mut().find(|r| r.id == updated.id) {
                *existing = updated;
            }
        });
    };

    let on_deleted = move |id: i64| {
        reviews.update(|list| list.retain(|r| r.id != id));
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-theme-primary">"My Reviews"</h1>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessageStatic message=message/> }.into_any()
                } else if reviews.get().is_empty() {
                    view! {
                        <p class="text-theme-secondary">
                            "You haven't reviewed anything yet. "
                            <A href="/movies" attr:class="text-accent-primary hover:underline">
                                "Find a movie"
                            </A>
                            " to get started."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="space-y-3">
                            <For
                                each=move || reviews.get()
                                key=|review| review.id
                                children=move |review| {
                                    let movie_href = format!("/movies/{}", review.movie_id);
                                    view! {
                                        <div class="space-y-1">
                                            <A
                                                href=movie_href
                                                attr:class="text-sm text-accent-primary hover:underline"
                                            >
                                                "View movie"
                                            </A>
                                            <ReviewItem
                                                review=review
                                                on_updated=on_updated
                                                on_deleted=on_deleted
                                            />
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
