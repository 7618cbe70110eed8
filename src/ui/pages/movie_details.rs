//! Movie details page: full metadata, the review list and the review form.
//!
//! After a review is created, edited or deleted the aggregate rating shown on
//! the page is recomputed locally from the review list instead of refetching
//! the movie.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::api;
use crate::core::models::{Movie, Review};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::rating::StarRating;
use crate::ui::review_form::ReviewForm;
use crate::ui::review_item::ReviewItem;

const FALLBACK_POSTER: &str = "/images/default-movie.png";

fn recompute_rating(movie: RwSignal<Option<Movie>>, reviews: &[Review]) {
    movie.update(|current| {
        if let Some(current) = current {
            current.review_count = reviews.len() as i64;
            current.average_rating = if reviews.is_empty() {
                0.0
            } else {
                reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / reviews.len() as f64
            };
        }
    });
}

#[component]
pub fn MovieDetailsPage() -> impl IntoView {
    let auth = use_auth_context();
    let params = use_params_map();
    let movie_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let movie = RwSignal::new(None::<Movie>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = movie_id() else {
            loading.set(false);
            error.set(Some("Movie not found".to_string()));
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match api::movies::get(id).await {
                Ok(found) => {
                    movie.set(Some(found));
                    match api::reviews::by_movie(id).await {
                        Ok(list) => reviews.set(list),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let on_review_created = move |review: Review| {
        reviews.update(|list| list.push(review));
        recompute_rating(movie, &reviews.get_untracked());
    };

    let on_review_updated = move |updated: Review| {
        reviews.update(|list| {
            if let Some(existing) = list.iter_mut().find(|r| r.id == updated.id) {
                *existing = updated;
            }
        });
        recompute_rating(movie, &reviews.get_untracked());
    };

    let on_review_deleted = move |id: i64| {
        reviews.update(|list| list.retain(|r| r.id != id));
        recompute_rating(movie, &reviews.get_untracked());
    };

    // One review per account: hide the form once the user has one.
    let already_reviewed = move || {
        auth.user()
            .map(|user| reviews.get().iter().any(|r| r.user_id == user.id))
            .unwrap_or(false)
    };

    view! {
        <div class="space-y-8">
            {move || {
                if loading.get() {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorMessageStatic message=message/> }.into_any();
                }
                let Some(current) = movie.get() else {
                    return view! { <ErrorMessageStatic message="Movie not found".to_string()/> }
                        .into_any();
                };

                let poster = current
                    .image_url
                    .clone()
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| FALLBACK_POSTER.to_string());
                let actors = current.actors.join(", ");

                view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <img
                            src=poster
                            alt=current.title.clone()
                            class="w-full rounded-xl object-cover border border-theme"
                        />
                        <div class="md:col-span-2 space-y-4">
                            <h1 class="text-3xl font-bold text-theme-primary">
                                {current.title.clone()} " (" {current.release_year} ")"
                            </h1>
                            <div class="flex items-center gap-3">
                                <StarRating rating=current.average_rating/>
                                <span class="text-theme-secondary">
                                    {format!("{:.1}", current.average_rating)}
                                    " · " {current.review_count} " reviews"
                                </span>
                            </div>
                            <dl class="space-y-1 text-theme-secondary">
                                <div>
                                    <dt class="inline font-medium text-theme-primary">"Director: "</dt>
                                    <dd class="inline">{current.director.clone()}</dd>
                                </div>
                                <div>
                                    <dt class="inline font-medium text-theme-primary">"Cast: "</dt>
                                    <dd class="inline">{actors}</dd>
                                </div>
                                <div>
                                    <dt class="inline font-medium text-theme-primary">"Genre: "</dt>
                                    <dd class="inline">{current.genre.clone()}</dd>
                                </div>
                            </dl>
                            <p class="text-theme-secondary leading-relaxed">
                                {current.synopsis.clone()}
                            </p>
                        </div>
                    </div>
                }
                .into_any()
            }}

            <section class="space-y-4">
                <h2 class="text-2xl font-semibold text-theme-primary">"Reviews"</h2>

                {move || {
                    if !auth.is_authenticated() {
                        view! {
                            <p class="text-theme-secondary">
                                <A href="/login" attr:class="text-accent-primary hover:underline">
                                    "Sign in"
                                </A>
                                " to write a review."
                            </p>
                        }
                        .into_any()
                    } else if already_reviewed() {
                        view! {
                            <p class="flex items-center gap-2 text-theme-secondary">
                                <Icon name=icons::CHECK class="w-4 h-4"/>
                                "You have already reviewed this movie."
                            </p>
                        }
                        .into_any()
                    } else if let Some(id) = movie_id() {
                        view! { <ReviewForm movie_id=id on_created=on_review_created/> }.into_any()
                    } else {
                        ().into_any()
                    }
                }}

                {move || {
                    if reviews.get().is_empty() {
                        view! {
                            <p class="text-theme-tertiary">"No reviews yet. Be the first!"</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="space-y-3">
                                <For
                                    each=move || reviews.get()
                                    key=|review| review.id
                                    children=move |review| {
                                        view! {
                                            <ReviewItem
                                                review=review
                                                on_updated=on_review_updated
                                                on_deleted=on_review_deleted
                                            />
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}
