//! Review submission form.
//!
//! Validation happens before any network call: a rating must be picked and
//! the comment must be non-empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api;
use crate::core::models::{Review, ReviewData};
use crate::ui::common::ErrorMessage;
use crate::ui::icon::{Icon, icons};
use crate::ui::rating::StarPicker;

#[component]
pub fn ReviewForm(
    /// Movie the review belongs to
    movie_id: i64,
    /// Callback with the created review
    #[prop(into)]
    on_created: Callback<Review>,
) -> impl IntoView {
    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if rating.get() == 0 {
            error.set(Some("Please select a rating".to_string()));
            return;
        }
        if comment.get().trim().is_empty() {
            error.set(Some("Please enter a comment".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        let payload = ReviewData {
            movie_id,
            rating: rating.get(),
            comment: comment.get().trim().to_string(),
        };

        spawn_local(async move {
            match api::reviews::create(&payload).await {
                Ok(review) => {
                    rating.set(0);
                    comment.set(String::new());
                    on_created.run(review);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4 bg-theme-primary border border-theme rounded-xl p-4">
            <h3 class="font-semibold text-theme-primary">"Write a Review"</h3>

            <ErrorMessage error=error/>

            <StarPicker rating=rating/>

            <textarea
                rows=3
                placeholder="What did you think of this movie?"
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>

            <button
                type="submit"
                class="py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white
                       font-medium rounded-lg disabled:opacity-50"
                disabled=move || submitting.get()
            >
                {move || {
                    if submitting.get() {
                        view! {
                            <span class="flex items-center gap-2">
                                <Icon name=icons::LOADER class="animate-spin h-4 w-4"/>
                                "Submitting..."
                            </span>
                        }
                        .into_any()
                    } else {
                        view! { <span>"Submit Review"</span> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
