//! Registration page. A successful registration signs the user in and sends
//! them home.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{RegisterForm, use_auth_context};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();

    Effect::new(move |_| {
        if auth.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="flex flex-col items-center py-12 space-y-4">
            <RegisterForm on_success=Callback::new(on_success)/>
            <p class="text-sm text-theme-secondary">
                "Already have an account? "
                <A href="/login" attr:class="text-accent-primary hover:underline">
                    "Sign in"
                </A>
            </p>
        </div>
    }
}
