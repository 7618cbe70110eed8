//! Movie summary card used on the home, browse and search pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::models::Movie;
use crate::ui::rating::StarRating;

const FALLBACK_POSTER: &str = "/images/default-movie.png";

#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let poster = movie
        .image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FALLBACK_POSTER.to_string());
    let details_href = format!("/movies/{}", movie.id);

    view! {
        <A
            href=details_href
            attr:class="block bg-theme-primary border border-theme rounded-xl overflow-hidden
                        shadow-sm hover:shadow-lg transition-shadow"
        >
            <img src=poster alt=movie.title.clone() class="w-full h-64 object-cover"/>
            <div class="p-4 space-y-2">
                <h3 class="font-semibold text-theme-primary truncate">
                    {movie.title.clone()} " (" {movie.release_year} ")"
                </h3>
                <p class="text-sm text-theme-secondary">{movie.genre.clone()}</p>
                <div class="flex items-center gap-2 text-sm text-theme-secondary">
                    <StarRating rating=movie.average_rating/>
                    <span class="font-medium">{format!("{:.1}", movie.average_rating)}</span>
                    <span>"(" {movie.review_count} " reviews)"</span>
                </div>
            </div>
        </A>
    }
}
