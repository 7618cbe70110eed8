//! Login page.
//!
//! Honors the `from` query parameter written by the route guard, so a user
//! bounced off a protected page lands back where they were headed after
//! signing in. Defaults to the home page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::ui::auth::{LoginForm, use_auth_context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();

    let destination = move || {
        query
            .read()
            .get("from")
            .filter(|path| path.starts_with('/'))
            .unwrap_or_else(|| "/".to_string())
    };

    // Already signed in: nothing to do here.
    Effect::new(move |_| {
        if auth.is_authenticated() {
            let navigate = use_navigate();
            navigate(&destination(), Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate(&destination(), Default::default());
    };

    view! {
        <div class="flex flex-col items-center py-12 space-y-4">
            <LoginForm on_success=Callback::new(on_success)/>
            <p class="text-sm text-theme-secondary">
                "Don't have an account? "
                <A href="/register" attr:class="text-accent-primary hover:underline">
                    "Sign up"
                </A>
            </p>
        </div>
    }
}
