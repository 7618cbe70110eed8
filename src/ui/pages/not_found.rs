//! 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 space-y-4 text-center">
            <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-theme-tertiary"/>
            <h1 class="text-4xl font-bold text-theme-primary">"404"</h1>
            <p class="text-theme-secondary">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                attr:class="py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover
                            text-white font-medium rounded-lg"
            >
                "Back to Home"
            </A>
        </div>
    }
}
