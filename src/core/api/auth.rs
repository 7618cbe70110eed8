//! Auth endpoints: registration and login.

use super::{ApiError, Auth, post_json};
use crate::core::models::{AuthResponse, LoginRequest, RegisterRequest, Session};

/// `POST /auth/login` — exchange credentials for a token + user record.
pub async fn login(credentials: &LoginRequest) -> Result<Session, ApiError> {
    let resp: AuthResponse = post_json("/auth/login", credentials, Auth::Public).await?;
    Ok(resp.into())
}

/// `POST /auth/public/register` — create an account and sign in.
///
/// The payload's role is always the least-privileged one; see
/// [`RegisterRequest::new`].
pub async fn register(new_user: &RegisterRequest) -> Result<Session, ApiError> {
    let resp: AuthResponse = post_json("/auth/public/register", new_user, Auth::Public).await?;
    Ok(resp.into())
}
