//! Registration form component
//!
//! Mirrors the login form: inline validation first, then the auth context's
//! register flow. New accounts always get the least-privileged role.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{register, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Registration form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let validate_name = move || {
        if name.get().trim().is_empty() {
            name_error.set(Some("Name is required".to_string()));
            false
        } else {
            name_error.set(None);
            true
        }
    };

    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else if value.len() < 6 {
            password_error.set(Some("Password must be at least 6 characters".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let validate_confirm = move || {
        if confirm_password.get() != password.get() {
            confirm_error.set(Some("Passwords do not match".to_string()));
            false
        } else {
            confirm_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        auth.clear_error();

        let valid = [
            validate_name(),
            validate_email(),
            validate_password(),
            validate_confirm(),
        ]
        .into_iter()
        .all(|ok| ok);
        if !valid {
            return;
        }

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let on_success = on_success.clone();

        spawn_local(async move {
            if register(&name_val, &email_val, &password_val).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    let text_field_class = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                            text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary";

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Create Account"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Join to rate and review movies"
                    </p>
                </div>

                {move || {
                    auth.error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                            </div>
                        }
                    })
                }}

                <div>
                    <label for="name" class="block text-sm font-medium text-theme-primary mb-1">
                        "Full Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        autocomplete="name"
                        placeholder="Your full name"
                        class=text_field_class
                        class:border-red-500=move || name_error.get().is_some()
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            name_error.set(None);
                        }
                        on:blur=move |_| { validate_name(); }
                    />
                    {move || name_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
                </div>

                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class=text_field_class
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| { validate_email(); }
                    />
                    {move || email_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="new-password"
                        placeholder="At least 6 characters"
                        class=text_field_class
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                        on:blur=move |_| { validate_password(); }
                    />
                    {move || password_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
                </div>

                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Confirm Password"
                    </label>
                    <input
                        type="password"
                        id="confirm-password"
                        name="confirm-password"
                        autocomplete="new-password"
                        placeholder="Repeat your password"
                        class=text_field_class
                        class:border-red-500=move || confirm_error.get().is_some()
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            confirm_password.set(event_target_value(&ev));
                            confirm_error.set(None);
                        }
                        on:blur=move |_| { validate_confirm(); }
                    />
                    {move || confirm_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
                </div>

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || auth.loading.get()
                >
                    {move || {
                        if auth.loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white"/>
                                    "Creating account..."
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
