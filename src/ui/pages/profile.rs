//! Profile page: edit account details and change the password.
//!
//! A successful profile update is written back through the session store so
//! the cached user stays in sync with the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api;
use crate::core::models::{ChangePasswordRequest, ProfileData, Session};
use crate::core::session::{self, SessionState};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{ErrorMessage, SuccessMessage};

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let profile_error = RwSignal::new(None::<String>);
    let profile_success = RwSignal::new(None::<String>);
    let profile_busy = RwSignal::new(false);

    // Seed the form from the cached user once the session is restored.
    Effect::new(move |_| {
        if let Some(user) = auth.user() {
            name.set(user.name);
            email.set(user.email);
        }
    });

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        profile_success.set(None);

        let name_val = name.get().trim().to_string();
        let email_val = email.get().trim().to_string();
        if name_val.is_empty() {
            profile_error.set(Some("Name is required".to_string()));
            return;
        }
        if !email_val.contains('@') || !email_val.contains('.') {
            profile_error.set(Some("Please enter a valid email".to_string()));
            return;
        }

        profile_error.set(None);
        profile_busy.set(true);
        let payload = ProfileData {
            name: name_val,
            email: email_val,
        };
        spawn_local(async move {
            match api::users::update_profile(&payload).await {
                Ok(updated) => {
                    if let Some(token) = session::load().token() {
                        session::store(&Session {
                            token: token.to_string(),
                            user: updated.clone(),
                        });
                    }
                    auth.state.set(SessionState::Authenticated(updated));
                    profile_success.set(Some("Profile updated".to_string()));
                }
                Err(err) => profile_error.set(Some(err.to_string())),
            }
            profile_busy.set(false);
        });
    };

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let password_success = RwSignal::new(None::<String>);
    let password_busy = RwSignal::new(false);

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        password_success.set(None);

        if current_password.get().is_empty() {
            password_error.set(Some("Current password is required".to_string()));
            return;
        }
        if new_password.get().len() < MIN_PASSWORD_LEN {
            password_error.set(Some(format!(
                "New password must be at least {MIN_PASSWORD_LEN} characters"
            )));
            return;
        }
        if new_password.get() != confirm_password.get() {
            password_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        password_error.set(None);
        password_busy.set(true);
        let payload = ChangePasswordRequest {
            current_password: current_password.get(),
            new_password: new_password.get(),
        };
        spawn_local(async move {
            match api::users::change_password(&payload).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    password_success.set(Some("Password changed".to_string()));
                }
                Err(err) => password_error.set(Some(err.to_string())),
            }
            password_busy.set(false);
        });
    };

    let field_class = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg \
                       text-theme-primary focus:outline-none focus:ring-2 focus:ring-accent-primary";

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold text-theme-primary">"My Profile"</h1>

            <form
                on:submit=on_save_profile
                class="bg-theme-primary border border-theme rounded-xl p-6 space-y-4"
            >
                <h2 class="text-xl font-semibold text-theme-primary">"Account Details"</h2>

                <ErrorMessage error=profile_error/>
                <SuccessMessage message=profile_success/>

                <div>
                    <label for="name" class="block text-sm font-medium text-theme-primary mb-1">
                        "Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        class=field_class
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        class=field_class
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white
                           font-medium rounded-lg disabled:opacity-50"
                    disabled=move || profile_busy.get()
                >
                    "Save Changes"
                </button>
            </form>

            <form
                on:submit=on_change_password
                class="bg-theme-primary border border-theme rounded-xl p-6 space-y-4"
            >
                <h2 class="text-xl font-semibold text-theme-primary">"Change Password"</h2>

                <ErrorMessage error=password_error/>
                <SuccessMessage message=password_success/>

                <div>
                    <label for="current-password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Current Password"
                    </label>
                    <input
                        type="password"
                        id="current-password"
                        autocomplete="current-password"
                        class=field_class
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="new-password" class="block text-sm font-medium text-theme-primary mb-1">
                        "New Password"
                    </label>
                    <input
                        type="password"
                        id="new-password"
                        autocomplete="new-password"
                        class=field_class
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Confirm New Password"
                    </label>
                    <input
                        type="password"
                        id="confirm-password"
                        autocomplete="new-password"
                        class=field_class
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white
                           font-medium rounded-lg disabled:opacity-50"
                    disabled=move || password_busy.get()
                >
                    "Change Password"
                </button>
            </form>
        </div>
    }
}
