//! Route guard component.
//!
//! Thin reactive wrapper over `core::guard::decide`: renders a neutral
//! waiting state while the session is being restored, redirects when access
//! is denied, and otherwise renders the protected content.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_auth_context;
use crate::core::guard::{RouteDecision, decide, login_redirect_path};
use crate::ui::common::LoadingSpinner;

/// Gate for routes that need a signed-in user (and optionally the admin
/// role). Anonymous visitors land on the login page with the requested
/// location remembered; authenticated non-admins land on the home page.
#[component]
pub fn ProtectedRoute(
    /// Whether the route additionally requires the admin role
    #[prop(default = false)]
    require_admin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth_context();
    let location = use_location();

    move || {
        let requested = location.pathname.get();
        match decide(&auth.state.get(), true, require_admin, &requested) {
            RouteDecision::Wait => view! {
                <LoadingSpinner message="Loading...".to_string()/>
            }
            .into_any(),
            RouteDecision::RedirectToLogin { from } => view! {
                <Redirect path=login_redirect_path(&from)/>
            }
            .into_any(),
            RouteDecision::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
            RouteDecision::Allow => children().into_any(),
        }
    }
}
