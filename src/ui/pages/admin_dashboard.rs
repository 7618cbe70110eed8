//! Admin dashboard: catalog table with add, edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api;
use crate::core::models::Movie;
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let movies = RwSignal::new(Vec::<Movie>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Delete is a two-click flow: the first click arms, the second confirms.
    let pending_delete = RwSignal::new(None::<i64>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::movies::list().await {
                Ok(list) => movies.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let delete_movie = move |id: i64| {
        if pending_delete.get_untracked() != Some(id) {
            pending_delete.set(Some(id));
            return;
        }
        pending_delete.set(None);
        spawn_local(async move {
            match api::movies::remove(id).await {
                Ok(()) => movies.update(|list| list.retain(|m| m.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-theme-primary">"Admin Dashboard"</h1>
                <A
                    href="/admin/movies/add"
                    attr:class="flex items-center gap-2 py-2 px-4 bg-accent-primary
                                hover:bg-accent-primary-hover text-white font-medium rounded-lg"
                >
                    <Icon name=icons::PLUS class="w-4 h-4"/>
                    "Add Movie"
                </A>
            </div>

            <ErrorMessage error=error/>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if movies.get().is_empty() {
                    view! {
                        <p class="text-theme-secondary text-center py-12">
                            "The catalog is empty."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="overflow-x-auto border border-theme rounded-xl">
                            <table class="w-full text-left">
                                <thead class="bg-theme-secondary text-theme-secondary text-sm">
                                    <tr>
                                        <th class="px-4 py-3">"Title"</th>
                                        <th class="px-4 py-3">"Director"</th>
                                        <th class="px-4 py-3">"Genre"</th>
                                        <th class="px-4 py-3">"Year"</th>
                                        <th class="px-4 py-3">"Rating"</th>
                                        <th class="px-4 py-3 text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-theme text-theme-primary">
                                    <For
                                        each=move || movies.get()
                                        key=|movie| movie.id
                                        children=move |movie| {
                                            let id = movie.id;
                                            let edit_href = format!("/admin/movies/edit/{id}");
                                            view! {
                                                <tr>
                                                    <td class="px-4 py-3 font-medium">{movie.title.clone()}</td>
                                                    <td class="px-4 py-3">{movie.director.clone()}</td>
                                                    <td class="px-4 py-3">{movie.genre.clone()}</td>
                                                    <td class="px-4 py-3">{movie.release_year}</td>
                                                    <td class="px-4 py-3">
                                                        {format!("{:.1}", movie.average_rating)}
                                                        " (" {movie.review_count} ")"
                                                    </td>
                                                    <td class="px-4 py-3">
                                                        <div class="flex items-center justify-end gap-2">
                                                            <A
                                                                href=edit_href
                                                                attr:class="p-1.5 text-theme-tertiary hover:text-accent-primary"
                                                            >
                                                                <Icon name=icons::EDIT class="w-4 h-4"/>
                                                            </A>
                                                            <button
                                                                type="button"
                                                                class="p-1.5 text-theme-tertiary hover:text-red-500"
                                                                class:text-red-500=move || {
                                                                    pending_delete.get() == Some(id)
                                                                }
                                                                title=move || {
                                                                    if pending_delete.get() == Some(id) {
                                                                        "Click again to confirm"
                                                                    } else {
                                                                        "Delete"
                                                                    }
                                                                }
                                                                on:click=move |_| delete_movie(id)
                                                            >
                                                                <Icon name=icons::TRASH class="w-4 h-4"/>
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
