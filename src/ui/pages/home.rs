//! Landing page: hero banner plus the top-rated and latest movies.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api;
use crate::core::models::Movie;
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::movie_card::MovieCard;

const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let movies = RwSignal::new(Vec::<Movie>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::movies::list().await {
                Ok(list) => movies.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let top_rated = move || {
        let mut list = movies.get();
        list.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        list.truncate(FEATURED_COUNT);
        list
    };

    let latest = move || {
        let mut list = movies.get();
        list.sort_by(|a, b| b.release_year.cmp(&a.release_year));
        list.truncate(FEATURED_COUNT);
        list
    };

    view! {
        <div class="space-y-12">
            // Hero
            <section class="bg-theme-secondary border border-theme rounded-2xl p-10 text-center space-y-4">
                <h1 class="text-4xl font-bold text-theme-primary">
                    "Discover and review your favorite movies"
                </h1>
                <p class="text-theme-secondary max-w-2xl mx-auto">
                    "Browse the catalog, rate what you watch and share your opinion with other film fans."
                </p>
                <A
                    href="/movies"
                    attr:class="inline-block py-2.5 px-6 bg-accent-primary hover:bg-accent-primary-hover
                                text-white font-medium rounded-lg"
                >
                    "Browse Movies"
                </A>
            </section>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessageStatic message=message/> }.into_any()
                } else {
                    view! {
                        <section class="space-y-4">
                            <h2 class="text-2xl font-semibold text-theme-primary">"Top Rated"</h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                <For
                                    each=top_rated
                                    key=|movie| movie.id
                                    children=|movie| view! { <MovieCard movie=movie/> }
                                />
                            </div>
                        </section>

                        <section class="space-y-4">
                            <h2 class="text-2xl font-semibold text-theme-primary">"Latest Releases"</h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                <For
                                    each=latest
                                    key=|movie| movie.id
                                    children=|movie| view! { <MovieCard movie=movie/> }
                                />
                            </div>
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
