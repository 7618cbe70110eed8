//! Wire types shared between the API client, session store and UI.
//!
//! All payloads use camelCase on the wire to match the backend REST API.

use serde::{Deserialize, Serialize};

/// Privilege tier of an account.
///
/// Modeled as a closed enum rather than a free-form string so an unhandled
/// tier is a compile error, and an unknown value coming out of storage is a
/// deserialization failure (treated as a corrupt slot by the session store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Account profile cached alongside the auth token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The client-held proof of identity: bearer token plus cached profile.
///
/// Token and user are one atomic value. The session store never persists one
/// half without the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Flat body returned by the login and register endpoints: the token plus
/// the user fields at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            token: resp.token,
            user: User {
                id: resp.id,
                name: resp.name,
                email: resp.email,
                role: resp.role,
            },
        }
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload. New accounts always get the least-privileged role.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            role: Role::User,
        }
    }
}

/// A movie record as returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    #[serde(default)]
    pub actors: Vec<String>,
    pub genre: String,
    pub release_year: i32,
    pub synopsis: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_public_id: Option<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: i64,
}

/// Payload for creating or updating a movie (admin operations).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieData {
    pub title: String,
    pub director: String,
    pub actors: Vec<String>,
    pub genre: String,
    pub release_year: i32,
    pub synopsis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_public_id: Option<String>,
}

/// Response from the poster upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PosterUpload {
    pub url: String,
    #[serde(rename = "publicId", default)]
    pub public_id: Option<String>,
}

/// A review as returned by the review endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    // ISO-8601 string from the backend, passed through verbatim.
    #[serde(default)]
    pub created_at: String,
}

/// Payload for creating a review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub movie_id: i64,
    pub rating: u8,
    pub comment: String,
}

/// Payload for editing an existing review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub comment: String,
}

/// Payload for updating the current user's profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
}

/// Payload for the change-password endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        assert!(serde_json::from_str::<Role>("\"SUPERADMIN\"").is_err());
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn auth_response_splits_into_session() {
        let json = r#"{
            "token": "abc.def.ghi",
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "role": "ADMIN"
        }"#;
        let session: Session = serde_json::from_str::<AuthResponse>(json).unwrap().into();

        assert_eq!(session.token, "abc.def.ghi");
        assert_eq!(session.user.id, 7);
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(session.user.role, Role::Admin);
    }

    #[test]
    fn register_request_defaults_to_user_role() {
        let req = RegisterRequest::new(
            "Ada".into(),
            "ada@example.com".into(),
            "hunter22".into(),
        );
        let json = serde_json::to_string(&req).unwrap();

        assert!(json.contains("\"role\":\"USER\""));
    }

    #[test]
    fn movie_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": 1,
            "title": "Arrival",
            "director": "Denis Villeneuve",
            "genre": "Sci-Fi",
            "releaseYear": 2016,
            "synopsis": "A linguist decodes an alien language."
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.release_year, 2016);
        assert!(movie.actors.is_empty());
        assert!(movie.image_url.is_none());
        assert_eq!(movie.average_rating, 0.0);
        assert_eq!(movie.review_count, 0);
    }

    #[test]
    fn review_payload_uses_camel_case_movie_id() {
        let payload = ReviewData {
            movie_id: 42,
            rating: 5,
            comment: "Great".into(),
        };
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"movieId\":42"));
    }
}
