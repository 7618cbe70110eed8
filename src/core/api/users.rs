//! Account endpoints for the signed-in user. All of these carry the bearer
//! token.

use super::{ApiError, Auth, get_json, put_json};
use crate::core::models::{ChangePasswordRequest, ProfileData, Review, User};

/// `GET /users/profile`
pub async fn profile() -> Result<User, ApiError> {
    get_json("/users/profile", Auth::Bearer).await
}

/// `PUT /users/profile`
pub async fn update_profile(profile: &ProfileData) -> Result<User, ApiError> {
    put_json("/users/profile", profile, Auth::Bearer).await
}

/// `PUT /users/change-password`
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    // The success body is a free-form message we do not consume.
    let _: serde_json::Value = put_json("/users/change-password", request, Auth::Bearer).await?;
    Ok(())
}

/// `GET /users/reviews` — the signed-in user's own reviews.
pub async fn reviews() -> Result<Vec<Review>, ApiError> {
    get_json("/users/reviews", Auth::Bearer).await
}
