//! A single review row with inline edit and delete for its author (or an
//! admin).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api;
use crate::core::models::{Review, ReviewUpdate};
use crate::ui::auth::use_auth_context;
use crate::ui::common::ErrorMessage;
use crate::ui::icon::{Icon, icons};
use crate::ui::rating::{StarPicker, StarRating};

/// Date portion of an ISO-8601 timestamp, passed through otherwise.
fn format_date(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[component]
pub fn ReviewItem(
    review: Review,
    /// Callback with the updated review
    #[prop(into)]
    on_updated: Callback<Review>,
    /// Callback with the deleted review's id
    #[prop(into)]
    on_deleted: Callback<i64>,
) -> impl IntoView {
    let auth = use_auth_context();

    let review_id = review.id;
    let author_id = review.user_id;

    let editing = RwSignal::new(false);
    let edit_rating = RwSignal::new(review.rating);
    let edit_comment = RwSignal::new(review.comment.clone());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // The author may edit their own review; admins may moderate any.
    let can_modify = move || {
        auth.user()
            .map(|user| user.id == author_id || auth.is_admin())
            .unwrap_or(false)
    };

    let saved_rating = review.rating;
    let saved_comment = review.comment.clone();
    let start_edit = move |_| {
        edit_rating.set(saved_rating);
        edit_comment.set(saved_comment.clone());
        error.set(None);
        editing.set(true);
    };

    let save_edit = move |_| {
        if edit_comment.get().trim().is_empty() {
            error.set(Some("Comment cannot be empty".to_string()));
            return;
        }
        busy.set(true);
        let payload = ReviewUpdate {
            rating: edit_rating.get(),
            comment: edit_comment.get().trim().to_string(),
        };
        spawn_local(async move {
            match api::reviews::update(review_id, &payload).await {
                Ok(updated) => {
                    editing.set(false);
                    error.set(None);
                    on_updated.run(updated);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let delete = move |_| {
        busy.set(true);
        spawn_local(async move {
            match api::reviews::remove(review_id).await {
                Ok(()) => on_deleted.run(review_id),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let user_name = review.user_name.clone();
    let created = format_date(&review.created_at);
    let rating = review.rating;
    let comment = review.comment.clone();

    view! {
        <div class="bg-theme-primary border border-theme rounded-xl p-4 space-y-2">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="font-medium text-theme-primary">{user_name}</span>
                    <StarRating rating=f64::from(rating)/>
                    <span class="text-sm text-theme-tertiary">{created}</span>
                </div>
                <Show when=can_modify>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="text-theme-tertiary hover:text-accent-primary"
                            disabled=move || busy.get()
                            on:click=start_edit.clone()
                        >
                            <Icon name=icons::EDIT class="w-4 h-4"/>
                        </button>
                        <button
                            type="button"
                            class="text-theme-tertiary hover:text-red-500"
                            disabled=move || busy.get()
                            on:click=delete
                        >
                            <Icon name=icons::TRASH class="w-4 h-4"/>
                        </button>
                    </div>
                </Show>
            </div>

            <ErrorMessage error=error/>

            <Show
                when=move || editing.get()
                fallback=move || view! { <p class="text-theme-secondary">{comment.clone()}</p> }
            >
                <div class="space-y-2">
                    <StarPicker rating=edit_rating/>
                    <textarea
                        rows=3
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || edit_comment.get()
                        on:input=move |ev| edit_comment.set(event_target_value(&ev))
                    ></textarea>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="py-1.5 px-3 bg-accent-primary text-white text-sm rounded-lg disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=save_edit
                        >
                            "Save"
                        </button>
                        <button
                            type="button"
                            class="py-1.5 px-3 border border-theme text-theme-primary text-sm rounded-lg"
                            on:click=move |_| editing.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
