//! Star rating widgets: a read-only display and a clickable picker.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const MAX_STARS: u8 = 5;

/// Read-only star row for an average rating.
#[component]
pub fn StarRating(
    /// Average rating, 0.0..=5.0
    rating: f64,
) -> impl IntoView {
    let filled = rating.floor() as u8;

    view! {
        <span class="inline-flex items-center gap-0.5" aria-label=format!("{rating:.1} out of 5")>
            {(1..=MAX_STARS)
                .map(|i| {
                    let name = if i <= filled { icons::STAR } else { icons::STAR_OUTLINE };
                    view! { <Icon name=name class="w-4 h-4"/> }
                })
                .collect_view()}
        </span>
    }
}

/// Clickable star row bound to a rating signal. `0` means "not rated yet".
#[component]
pub fn StarPicker(
    /// Selected rating signal
    rating: RwSignal<u8>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1" role="radiogroup" aria-label="Rating">
            {(1..=MAX_STARS)
                .map(|value| {
                    view! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked=move || (rating.get() >= value).to_string()
                            class="p-1 text-theme-tertiary hover:text-accent-primary"
                            on:click=move |_| rating.set(value)
                        >
                            {move || {
                                let name = if rating.get() >= value {
                                    icons::STAR
                                } else {
                                    icons::STAR_OUTLINE
                                };
                                view! { <Icon name=name class="w-6 h-6"/> }
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
