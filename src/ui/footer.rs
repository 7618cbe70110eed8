use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-theme bg-theme-primary mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col sm:flex-row
                        items-center justify-between gap-2 text-sm text-theme-tertiary">
                <p>"© 2025 MovieReview"</p>
                <div class="flex items-center gap-4">
                    <A href="/movies" attr:class="hover:text-theme-primary">"Browse"</A>
                    <A href="/search" attr:class="hover:text-theme-primary">"Search"</A>
                </div>
            </div>
        </footer>
    }
}
