//! Review endpoints.
//!
//! Reads are public; writes carry the bearer token. Ownership checks (author
//! or admin) are enforced by the backend.

use super::{ApiError, Auth, delete, get_json, post_json, put_json};
use crate::core::models::{Review, ReviewData, ReviewUpdate};

/// `GET /reviews`
pub async fn list() -> Result<Vec<Review>, ApiError> {
    get_json("/reviews", Auth::Public).await
}

/// `GET /reviews/{id}`
pub async fn get(id: i64) -> Result<Review, ApiError> {
    get_json(&format!("/reviews/{id}"), Auth::Public).await
}

/// `GET /reviews/movie/{movieId}`
pub async fn by_movie(movie_id: i64) -> Result<Vec<Review>, ApiError> {
    get_json(&format!("/reviews/movie/{movie_id}"), Auth::Public).await
}

/// `GET /reviews/user/{userId}`
pub async fn by_user(user_id: i64) -> Result<Vec<Review>, ApiError> {
    get_json(&format!("/reviews/user/{user_id}"), Auth::Public).await
}

/// `POST /reviews`
pub async fn create(review: &ReviewData) -> Result<Review, ApiError> {
    post_json("/reviews", review, Auth::Bearer).await
}

/// `PUT /reviews/{id}`
pub async fn update(id: i64, review: &ReviewUpdate) -> Result<Review, ApiError> {
    put_json(&format!("/reviews/{id}"), review, Auth::Bearer).await
}

/// `DELETE /reviews/{id}`
pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete(&format!("/reviews/{id}"), Auth::Bearer).await
}
