//! Route guard decision logic.
//!
//! A pure function over the session state plus the route's requirements. It
//! performs no I/O and owns no state; the `ProtectedRoute` component in the UI
//! layer turns the decision into a spinner, a redirect, or the page itself.

use crate::core::session::SessionState;

/// What a navigation attempt should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore still in progress: render a neutral waiting state and
    /// make no access decision yet.
    Wait,
    /// Render the protected content.
    Allow,
    /// Send the visitor to the login entry point, remembering where they were
    /// headed so a successful login can return them there.
    RedirectToLogin { from: String },
    /// Authenticated but under-privileged: send to the default landing page.
    RedirectHome,
}

/// Decide whether `requested_path` may render given the current session.
pub fn decide(
    state: &SessionState,
    requires_auth: bool,
    requires_admin: bool,
    requested_path: &str,
) -> RouteDecision {
    if matches!(state, SessionState::Loading) {
        return RouteDecision::Wait;
    }

    // An admin-only route implies an authenticated one.
    if (requires_auth || requires_admin) && !state.is_authenticated() {
        return RouteDecision::RedirectToLogin {
            from: requested_path.to_string(),
        };
    }

    if requires_admin && !state.is_admin() {
        return RouteDecision::RedirectHome;
    }

    RouteDecision::Allow
}

/// The login entry point carrying the originally requested location, so a
/// successful login can navigate back there.
pub fn login_redirect_path(from: &str) -> String {
    format!("/login?from={}", encode_component(from))
}

/// Percent-encode a string for use as a query value. `/` is left readable;
/// everything outside the unreserved set is escaped.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Role, User};

    fn user(role: Role) -> SessionState {
        SessionState::Authenticated(User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role,
        })
    }

    #[test]
    fn loading_always_waits() {
        assert_eq!(
            decide(&SessionState::Loading, true, true, "/admin/dashboard"),
            RouteDecision::Wait
        );
        assert_eq!(
            decide(&SessionState::Loading, false, false, "/"),
            RouteDecision::Wait
        );
    }

    #[test]
    fn public_route_allows_anyone() {
        assert_eq!(
            decide(&SessionState::Unauthenticated, false, false, "/movies"),
            RouteDecision::Allow
        );
    }

    #[test]
    fn auth_route_redirects_anonymous_to_login_with_origin() {
        assert_eq!(
            decide(&SessionState::Unauthenticated, true, false, "/my-reviews"),
            RouteDecision::RedirectToLogin {
                from: "/my-reviews".into()
            }
        );
    }

    #[test]
    fn admin_route_redirects_anonymous_to_login_first() {
        assert_eq!(
            decide(&SessionState::Unauthenticated, true, true, "/admin/dashboard"),
            RouteDecision::RedirectToLogin {
                from: "/admin/dashboard".into()
            }
        );
    }

    #[test]
    fn admin_route_redirects_plain_user_home() {
        assert_eq!(
            decide(&user(Role::User), true, true, "/admin/dashboard"),
            RouteDecision::RedirectHome
        );
    }

    #[test]
    fn admin_route_allows_admin() {
        assert_eq!(
            decide(&user(Role::Admin), true, true, "/admin/movies/add"),
            RouteDecision::Allow
        );
    }

    #[test]
    fn login_redirect_path_keeps_slashes_and_escapes_queries() {
        assert_eq!(
            login_redirect_path("/my-reviews"),
            "/login?from=/my-reviews"
        );
        assert_eq!(
            login_redirect_path("/search?query=the matrix"),
            "/login?from=/search%3Fquery%3Dthe%20matrix"
        );
    }

    #[test]
    fn auth_route_allows_any_signed_in_user() {
        assert_eq!(
            decide(&user(Role::User), true, false, "/profile"),
            RouteDecision::Allow
        );
        assert_eq!(
            decide(&user(Role::Admin), true, false, "/profile"),
            RouteDecision::Allow
        );
    }
}
