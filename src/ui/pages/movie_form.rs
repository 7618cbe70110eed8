//! Admin movie editor, shared by the add and edit routes.
//!
//! The poster is uploaded first (multipart, browser only); the resulting URL
//! and public id are then included in the movie payload. When editing without
//! selecting a new file the existing poster is kept.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::api::{self, ApiError};
use crate::core::models::{Movie, MovieData, PosterUpload};
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::icon::{Icon, icons};

const POSTER_INPUT_ID: &str = "poster-file";

#[cfg(not(feature = "ssr"))]
fn selected_poster() -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()?
        .document()?
        .get_element_by_id(POSTER_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

#[cfg(not(feature = "ssr"))]
async fn upload_poster_if_selected() -> Result<Option<PosterUpload>, ApiError> {
    match selected_poster() {
        Some(file) => api::movies::upload_poster(&file).await.map(Some),
        None => Ok(None),
    }
}

#[cfg(feature = "ssr")]
async fn upload_poster_if_selected() -> Result<Option<PosterUpload>, ApiError> {
    Ok(None)
}

/// Split a comma-separated cast field into trimmed, non-empty names.
fn parse_actors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn AddMoviePage() -> impl IntoView {
    view! { <MovieEditor movie=None/> }
}

#[component]
pub fn EditMoviePage() -> impl IntoView {
    let params = use_params_map();
    let movie_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let movie = RwSignal::new(None::<Movie>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = movie_id() else {
            loading.set(false);
            error.set(Some("Movie not found".to_string()));
            return;
        };
        spawn_local(async move {
            match api::movies::get(id).await {
                Ok(found) => movie.set(Some(found)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                view! { <LoadingSpinner/> }.into_any()
            } else if let Some(found) = movie.get() {
                view! { <MovieEditor movie=Some(found)/> }.into_any()
            } else {
                view! {
                    <p class="text-theme-secondary text-center py-12">"Movie not found."</p>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn MovieEditor(
    /// Existing movie when editing, `None` when adding
    movie: Option<Movie>,
) -> impl IntoView {
    let editing_id = movie.as_ref().map(|m| m.id);
    let existing_image_url = movie.as_ref().and_then(|m| m.image_url.clone());
    let existing_image_id = movie.as_ref().and_then(|m| m.image_public_id.clone());

    let title = RwSignal::new(movie.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let director = RwSignal::new(movie.as_ref().map(|m| m.director.clone()).unwrap_or_default());
    let actors = RwSignal::new(movie.as_ref().map(|m| m.actors.join(", ")).unwrap_or_default());
    let genre = RwSignal::new(movie.as_ref().map(|m| m.genre.clone()).unwrap_or_default());
    let release_year = RwSignal::new(
        movie
            .as_ref()
            .map(|m| m.release_year.to_string())
            .unwrap_or_default(),
    );
    let synopsis = RwSignal::new(movie.as_ref().map(|m| m.synopsis.clone()).unwrap_or_default());

    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let heading = if editing_id.is_some() {
        "Edit Movie"
    } else {
        "Add Movie"
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let title_val = title.get().trim().to_string();
        let director_val = director.get().trim().to_string();
        let genre_val = genre.get().trim().to_string();
        let synopsis_val = synopsis.get().trim().to_string();
        if title_val.is_empty() || director_val.is_empty() || genre_val.is_empty() {
            error.set(Some("Title, director and genre are required".to_string()));
            return;
        }
        let Ok(year) = release_year.get().trim().parse::<i32>() else {
            error.set(Some("Release year must be a number".to_string()));
            return;
        };

        error.set(None);
        saving.set(true);

        let mut data = MovieData {
            title: title_val,
            director: director_val,
            actors: parse_actors(&actors.get()),
            genre: genre_val,
            release_year: year,
            synopsis: synopsis_val,
            image_url: existing_image_url.clone(),
            image_public_id: existing_image_id.clone(),
        };

        spawn_local(async move {
            match upload_poster_if_selected().await {
                Ok(Some(upload)) => {
                    data.image_url = Some(upload.url);
                    data.image_public_id = upload.public_id;
                }
                Ok(None) => {}
                Err(err) => {
                    error.set(Some(format!("Poster upload failed: {err}")));
                    saving.set(false);
                    return;
                }
            }

            let result = match editing_id {
                Some(id) => api::movies::update(id, &data).await,
                None => api::movies::create(&data).await,
            };
            match result {
                Ok(_) => {
                    let navigate = use_navigate();
                    navigate("/admin/dashboard", Default::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let field_class = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg \
                       text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary";

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center gap-3">
                <A href="/admin/dashboard" attr:class="text-theme-tertiary hover:text-theme-primary">
                    <Icon name=icons::ARROW_LEFT class="w-5 h-5"/>
                </A>
                <h1 class="text-3xl font-bold text-theme-primary">{heading}</h1>
            </div>

            <form
                on:submit=on_submit
                class="bg-theme-primary border border-theme rounded-xl p-6 space-y-4"
            >
                <ErrorMessage error=error/>

                <div>
                    <label for="title" class="block text-sm font-medium text-theme-primary mb-1">
                        "Title"
                    </label>
                    <input
                        type="text"
                        id="title"
                        class=field_class
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label for="director" class="block text-sm font-medium text-theme-primary mb-1">
                            "Director"
                        </label>
                        <input
                            type="text"
                            id="director"
                            class=field_class
                            prop:value=move || director.get()
                            on:input=move |ev| director.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="release-year" class="block text-sm font-medium text-theme-primary mb-1">
                            "Release Year"
                        </label>
                        <input
                            type="number"
                            id="release-year"
                            class=field_class
                            prop:value=move || release_year.get()
                            on:input=move |ev| release_year.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div>
                    <label for="genre" class="block text-sm font-medium text-theme-primary mb-1">
                        "Genre"
                    </label>
                    <input
                        type="text"
                        id="genre"
                        class=field_class
                        prop:value=move || genre.get()
                        on:input=move |ev| genre.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="actors" class="block text-sm font-medium text-theme-primary mb-1">
                        "Cast (comma separated)"
                    </label>
                    <input
                        type="text"
                        id="actors"
                        placeholder="Amy Adams, Jeremy Renner"
                        class=field_class
                        prop:value=move || actors.get()
                        on:input=move |ev| actors.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="synopsis" class="block text-sm font-medium text-theme-primary mb-1">
                        "Synopsis"
                    </label>
                    <textarea
                        id="synopsis"
                        rows=4
                        class=field_class
                        prop:value=move || synopsis.get()
                        on:input=move |ev| synopsis.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div>
                    <label for=POSTER_INPUT_ID class="block text-sm font-medium text-theme-primary mb-1">
                        "Poster"
                    </label>
                    <input
                        type="file"
                        id=POSTER_INPUT_ID
                        accept="image/*"
                        class="block w-full text-sm text-theme-secondary"
                    />
                </div>

                <button
                    type="submit"
                    class="flex items-center gap-2 py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg disabled:opacity-50"
                    disabled=move || saving.get()
                >
                    {move || {
                        if saving.get() {
                            view! {
                                <Icon name=icons::LOADER class="animate-spin w-4 h-4"/>
                                <span>"Saving..."</span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Icon name=icons::UPLOAD class="w-4 h-4"/>
                                <span>"Save Movie"</span>
                            }
                            .into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_actors;

    #[test]
    fn parse_actors_trims_and_drops_empties() {
        assert_eq!(
            parse_actors(" Amy Adams , Jeremy Renner ,, "),
            vec!["Amy Adams".to_string(), "Jeremy Renner".to_string()]
        );
        assert!(parse_actors("").is_empty());
        assert!(parse_actors(" , ").is_empty());
    }
}
