//! Top navigation bar: brand, browse links, search box and the auth-aware
//! account section.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::guard::encode_component;
use crate::ui::auth::{logout, use_auth_context};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth_context();
    let search_term = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_term.get();
        let term = term.trim();
        if !term.is_empty() {
            let navigate = use_navigate();
            navigate(
                &format!("/search?query={}", encode_component(term)),
                Default::default(),
            );
        }
    };

    let on_logout = move |_| {
        logout();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <header class="border-b border-theme bg-theme-primary">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between gap-4">
                // Brand
                <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <Icon name=icons::FILM class="w-6 h-6"/>
                    <span class="text-xl font-bold text-theme-primary">
                        "Movie" <span class="text-accent-primary">"Review"</span>
                    </span>
                </A>

                // Browse links
                <div class="hidden md:flex items-center gap-4">
                    <A href="/" attr:class="text-theme-secondary hover:text-theme-primary">
                        "Home"
                    </A>
                    <A href="/movies" attr:class="text-theme-secondary hover:text-theme-primary">
                        "Movies"
                    </A>
                    {move || {
                        auth.is_admin().then(|| view! {
                            <A href="/admin/dashboard" attr:class="text-theme-secondary hover:text-theme-primary">
                                "Admin"
                            </A>
                        })
                    }}
                </div>

                // Search
                <form on:submit=on_search class="flex-1 max-w-xs">
                    <div class="relative">
                        <input
                            type="search"
                            placeholder="Search movies..."
                            class="w-full pl-9 pr-3 py-1.5 bg-theme-secondary border border-theme rounded-lg
                                   text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary"
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                        />
                        <span class="absolute left-2.5 top-1/2 -translate-y-1/2 text-theme-tertiary">
                            <Icon name=icons::SEARCH class="w-4 h-4"/>
                        </span>
                    </div>
                </form>

                // Account section
                <div class="flex items-center gap-3">
                    {move || {
                        if let Some(user) = auth.user() {
                            view! {
                                <A href="/my-reviews" attr:class="text-theme-secondary hover:text-theme-primary text-sm">
                                    "My Reviews"
                                </A>
                                <A href="/profile" attr:class="flex items-center gap-1 text-theme-secondary hover:text-theme-primary text-sm">
                                    <Icon name=icons::USER class="w-4 h-4"/>
                                    {user.name.clone()}
                                </A>
                                <button
                                    type="button"
                                    class="flex items-center gap-1 text-theme-secondary hover:text-theme-primary text-sm"
                                    on:click=on_logout
                                >
                                    <Icon name=icons::LOGOUT class="w-4 h-4"/>
                                    "Logout"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <A href="/login" attr:class="text-theme-secondary hover:text-theme-primary text-sm">
                                    "Login"
                                </A>
                                <A
                                    href="/register"
                                    attr:class="py-1.5 px-3 bg-accent-primary hover:bg-accent-primary-hover
                                                text-white text-sm font-medium rounded-lg"
                                >
                                    "Sign Up"
                                </A>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </nav>
        </header>
    }
}
