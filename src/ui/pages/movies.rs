//! Browse page: the full catalog with a genre filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api;
use crate::core::models::Movie;
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::movie_card::MovieCard;

#[component]
pub fn MoviesPage() -> impl IntoView {
    let movies = RwSignal::new(Vec::<Movie>::new());
    let genre = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Reload whenever the genre filter changes. An empty filter means the
    // full catalog.
    Effect::new(move |_| {
        let selected = genre.get();
        loading.set(true);
        spawn_local(async move {
            let result = if selected.is_empty() {
                api::movies::list().await
            } else {
                api::movies::by_genre(&selected).await
            };
            match result {
                Ok(list) => {
                    error.set(None);
                    movies.set(list);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    // Genres present in the loaded catalog, for the filter dropdown.
    let genres = RwSignal::new(Vec::<String>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::movies::list().await {
                let mut names: Vec<String> =
                    list.into_iter().map(|movie| movie.genre).collect();
                names.sort();
                names.dedup();
                genres.set(names);
            }
        });
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                <h1 class="text-3xl font-bold text-theme-primary">"Movies"</h1>
                <select
                    class="px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    on:change=move |ev| genre.set(event_target_value(&ev))
                >
                    <option value="" selected=move || genre.get().is_empty()>
                        "All genres"
                    </option>
                    <For
                        each=move || genres.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value = name.clone();
                            view! {
                                <option value=name.clone() selected=move || genre.get() == value>
                                    {name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessageStatic message=message/> }.into_any()
                } else if movies.get().is_empty() {
                    view! {
                        <p class="text-theme-secondary text-center py-12">
                            "No movies found."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                            <For
                                each=move || movies.get()
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
