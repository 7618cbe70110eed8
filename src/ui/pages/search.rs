//! Search results page, driven by the `query` URL parameter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::core::api;
use crate::core::models::Movie;
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::movie_card::MovieCard;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = move || query_map.read().get("query").unwrap_or_default();

    let results = RwSignal::new(Vec::<Movie>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Re-run the search whenever the query parameter changes, including
    // back/forward navigation.
    Effect::new(move |_| {
        let term = query();
        if term.trim().is_empty() {
            results.set(Vec::new());
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::movies::search(term.trim()).await {
                Ok(list) => {
                    error.set(None);
                    results.set(list);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-theme-primary">
                {move || {
                    let term = query();
                    if term.is_empty() {
                        "Search".to_string()
                    } else {
                        format!("Results for \"{term}\"")
                    }
                }}
            </h1>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessageStatic message=message/> }.into_any()
                } else if query().is_empty() {
                    view! {
                        <p class="text-theme-secondary">
                            "Type a movie title in the search box above."
                        </p>
                    }
                    .into_any()
                } else if results.get().is_empty() {
                    view! {
                        <p class="text-theme-secondary text-center py-12">
                            "No movies matched your search."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                            <For
                                each=move || results.get()
                                key=|movie| movie.id
                                children=|movie| view! { <MovieCard movie=movie/> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
