//! Client-side session store.
//!
//! Single source of truth for "who is logged in and with what privileges",
//! backed by two localStorage slots: one for the raw bearer token, one for the
//! serialized user record. No other module reads or writes those slots — all
//! access goes through this facade so the two halves cannot drift apart.
//!
//! Token and user are treated as one atomic value: `load()` reconciles a
//! half-present or corrupt pair down to fully-absent and clears storage, so
//! `current_user()` can never disagree structurally with `is_authenticated()`.

use serde::de::DeserializeOwned;

use crate::core::models::{Role, Session, User};
use crate::core::token::decode_claims;

/// Durable slot holding the raw bearer token string.
const STORAGE_KEY_TOKEN: &str = "moviereview_token";
/// Durable slot holding the serialized user record.
const STORAGE_KEY_USER: &str = "moviereview_user";

/// Authentication state as seen by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state while storage is being checked after hydration.
    /// The route guard makes no access decision in this state.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// True iff the signed-in user has the admin role. Never fails; absent or
    /// non-admin users yield false.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.role == Role::Admin)
    }
}

/// What the two durable slots currently hold, after reconciliation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    token: Option<String>,
    user: Option<User>,
}

impl SessionSnapshot {
    /// Build a snapshot from raw slot contents, dropping a half-present or
    /// unparseable pair. Returns the snapshot plus whether reconciliation
    /// discarded anything (the caller then clears storage).
    pub fn from_slots(token: Option<String>, user_json: Option<String>) -> (Self, bool) {
        let had_any = token.is_some() || user_json.is_some();
        let user = user_json.as_deref().and_then(parse_soft::<User>);

        match (token, user) {
            (Some(token), Some(user)) => (
                Self {
                    token: Some(token),
                    user: Some(user),
                },
                false,
            ),
            _ => (Self::default(), had_any),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
        }
    }

    /// Reads the cached user record. Fails soft: absent on empty state.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// False when the token is absent, malformed, or expired at `now`
    /// (seconds since the Unix epoch). Decoding failures are "not
    /// authenticated", never an error.
    pub fn is_authenticated(&self, now: i64) -> bool {
        let Some(token) = self.token.as_deref() else {
            return false;
        };
        match decode_claims(token) {
            Ok(claims) => !claims.is_expired(now),
            Err(_) => false,
        }
    }

    /// True iff the cached user record has the admin role.
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Role::Admin)
    }

    /// Fold the snapshot into UI-level state, checking expiry at `now`.
    pub fn into_state(self, now: i64) -> SessionState {
        if !self.is_authenticated(now) {
            return SessionState::Unauthenticated;
        }
        match self.user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        }
    }
}

fn parse_soft<T: DeserializeOwned>(json: &str) -> Option<T> {
    serde_json::from_str(json).ok()
}

/// Current time in seconds since the Unix epoch.
#[cfg(not(feature = "ssr"))]
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(feature = "ssr")]
pub fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted session from localStorage. A half-present or corrupt
/// pair is cleared from storage and reported as fully absent.
#[cfg(not(feature = "ssr"))]
pub fn load() -> SessionSnapshot {
    let Some(storage) = local_storage() else {
        return SessionSnapshot::default();
    };

    let token = storage.get_item(STORAGE_KEY_TOKEN).ok().flatten();
    let user_json = storage.get_item(STORAGE_KEY_USER).ok().flatten();

    let (snapshot, dropped) = SessionSnapshot::from_slots(token, user_json);
    if dropped {
        clear();
    }
    snapshot
}

/// Persist both slots synchronously.
#[cfg(not(feature = "ssr"))]
pub fn store(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY_TOKEN, &session.token);
        let _ = storage.set_item(
            STORAGE_KEY_USER,
            &serde_json::to_string(&session.user).unwrap_or_default(),
        );
    }
}

/// Clear both slots together. Idempotent; no server round-trip.
#[cfg(not(feature = "ssr"))]
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_USER);
    }
}

/// SSR stubs — there is no durable client storage on the server.
#[cfg(feature = "ssr")]
pub fn load() -> SessionSnapshot {
    SessionSnapshot::default()
}

#[cfg(feature = "ssr")]
pub fn store(_session: &Session) {}

#[cfg(feature = "ssr")]
pub fn clear() {}

#[cfg(test)]
mod tests {
    use super::*;
    use base64ct::{Base64UrlUnpadded, Encoding};

    fn token_with_exp(exp: i64) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256"}"#);
        let payload = Base64UrlUnpadded::encode_string(format!("{{\"exp\":{exp}}}").as_bytes());
        format!("{header}.{payload}.sig")
    }

    fn user_json(id: i64, role: &str) -> String {
        format!(
            "{{\"id\":{id},\"name\":\"Ada\",\"email\":\"ada@example.com\",\"role\":\"{role}\"}}"
        )
    }

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn absent_token_is_unauthenticated() {
        let snapshot = SessionSnapshot::default();
        assert!(!snapshot.is_authenticated(NOW));
        assert!(snapshot.current_user().is_none());
    }

    #[test]
    fn malformed_token_is_unauthenticated_not_an_error() {
        let (snapshot, _) = SessionSnapshot::from_slots(
            Some("garbage".into()),
            Some(user_json(1, "USER")),
        );
        assert!(!snapshot.is_authenticated(NOW));
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let (snapshot, _) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW - 10)),
            Some(user_json(1, "USER")),
        );
        assert!(!snapshot.is_authenticated(NOW));

        // Boundary: exp == now counts as expired.
        let (snapshot, _) =
            SessionSnapshot::from_slots(Some(token_with_exp(NOW)), Some(user_json(1, "USER")));
        assert!(!snapshot.is_authenticated(NOW));
    }

    #[test]
    fn unexpired_token_with_user_is_authenticated() {
        let (snapshot, dropped) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW + 3600)),
            Some(user_json(1, "USER")),
        );

        assert!(!dropped);
        assert!(snapshot.is_authenticated(NOW));
        assert!(!snapshot.is_admin());
        assert_eq!(snapshot.current_user().unwrap().id, 1);
    }

    #[test]
    fn admin_check_follows_stored_role() {
        let (snapshot, _) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW + 3600)),
            Some(user_json(2, "ADMIN")),
        );
        assert!(snapshot.is_admin());
    }

    #[test]
    fn half_present_pair_reconciles_to_absent() {
        let (snapshot, dropped) =
            SessionSnapshot::from_slots(Some(token_with_exp(NOW + 3600)), None);
        assert!(dropped);
        assert_eq!(snapshot, SessionSnapshot::default());

        let (snapshot, dropped) = SessionSnapshot::from_slots(None, Some(user_json(1, "USER")));
        assert!(dropped);
        assert!(snapshot.current_user().is_none());
        assert!(!snapshot.is_admin());
    }

    #[test]
    fn corrupt_user_record_reconciles_to_absent() {
        let (snapshot, dropped) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW + 3600)),
            Some("{not json".into()),
        );
        assert!(dropped);
        assert!(snapshot.current_user().is_none());
        assert!(!snapshot.is_authenticated(NOW));

        // Unknown role string is a corrupt slot too: Role is a closed enum.
        let (snapshot, dropped) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW + 3600)),
            Some(user_json(1, "ROOT")),
        );
        assert!(dropped);
        assert!(snapshot.current_user().is_none());
    }

    #[test]
    fn into_state_maps_expiry_to_unauthenticated() {
        let (snapshot, _) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW - 1)),
            Some(user_json(1, "USER")),
        );
        assert_eq!(snapshot.into_state(NOW), SessionState::Unauthenticated);

        let (snapshot, _) = SessionSnapshot::from_slots(
            Some(token_with_exp(NOW + 3600)),
            Some(user_json(1, "USER")),
        );
        let state = snapshot.into_state(NOW);
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn session_state_admin_predicate() {
        assert!(!SessionState::Loading.is_admin());
        assert!(!SessionState::Unauthenticated.is_admin());

        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: crate::core::models::Role::Admin,
        };
        assert!(SessionState::Authenticated(user).is_admin());
    }
}
