//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Restores the persisted session from localStorage after hydration
//! - Handles login, logout and registration flows
//! - Surfaces normalized API errors to forms via a signal
//!
//! All durable-storage access goes through `core::session`; no component
//! touches the storage slots directly.

use leptos::prelude::*;

use crate::core::api::{self, ApiError};
use crate::core::models::{LoginRequest, RegisterRequest, Session, User};
use crate::core::session::{self, SessionState};

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<SessionState>,
    /// Loading state for auth operations
    pub loading: RwSignal<bool>,
    /// Error message from the last operation
    pub error: RwSignal<Option<String>>,
    /// Bumped on logout. An in-flight login/register whose epoch is stale by
    /// the time it completes is discarded instead of resurrecting a dead
    /// session.
    epoch: RwSignal<u64>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Check if the signed-in user has the admin role. False when nobody is
    /// signed in.
    pub fn is_admin(&self) -> bool {
        self.state.get().is_admin()
    }

    /// Get the current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        self.state.get().user().cloned()
    }

    /// Clear the error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid a
    // hydration mismatch; the client flips to Loading while it checks storage.
    let state = RwSignal::new(SessionState::Unauthenticated);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let epoch = RwSignal::new(0u64);

    let ctx = AuthContext {
        state,
        loading,
        error,
        epoch,
    };

    // Restore the session from localStorage after hydration (client only).
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(SessionState::Loading);

            let snapshot = session::load();
            let now = session::now_secs();

            // Expired or undecodable token: destroy the whole session so the
            // two slots never outlive a dead token.
            if snapshot.token().is_some() && !snapshot.is_authenticated(now) {
                session::clear();
                state.set(SessionState::Unauthenticated);
                return;
            }

            state.set(snapshot.into_state(now));
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Login with email and password.
///
/// On success the session is persisted and the context updated. On failure
/// the normalized error lands in `ctx.error` and the existing session state
/// is left untouched.
pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);
    let started = ctx.epoch.get_untracked();

    let result = api::auth::login(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
    .await;

    ctx.loading.set(false);
    apply_auth_result(ctx, started, result)
}

/// Register a new account. The role always defaults to `USER`.
pub async fn register(name: &str, email: &str, password: &str) -> Result<Session, String> {
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);
    let started = ctx.epoch.get_untracked();

    let result = api::auth::register(&RegisterRequest::new(
        name.to_string(),
        email.to_string(),
        password.to_string(),
    ))
    .await;

    ctx.loading.set(false);
    apply_auth_result(ctx, started, result)
}

fn apply_auth_result(
    ctx: AuthContext,
    started_epoch: u64,
    result: Result<Session, ApiError>,
) -> Result<Session, String> {
    match result {
        Ok(session) => {
            // The user logged out while this call was in flight: discard the
            // completion rather than resurrecting a dead session.
            if ctx.epoch.get_untracked() != started_epoch {
                return Err("Signed out".to_string());
            }
            session::store(&session);
            ctx.state
                .set(SessionState::Authenticated(session.user.clone()));
            Ok(session)
        }
        Err(err) => {
            let message = err.to_string();
            ctx.error.set(Some(message.clone()));
            Err(message)
        }
    }
}

/// Logout the current user. Unconditionally clears both storage slots,
/// idempotent, no server round-trip.
pub fn logout() {
    let ctx = use_auth_context();
    ctx.epoch.update(|e| *e += 1);
    session::clear();
    ctx.state.set(SessionState::Unauthenticated);
    ctx.loading.set(false);
    ctx.error.set(None);
}
