//! REST client for the external movie review API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! `config::api_base_url()`. Server-side (SSR): stubs returning a transport
//! error, since the API is only reachable from the browser.
//!
//! Authenticated calls carry `Authorization: Bearer <token>` read from the
//! session store; public calls omit the header. No retries happen at this
//! layer — a failed call surfaces one normalized error and retry policy
//! belongs to the caller.

pub mod auth;
pub mod movies;
pub mod reviews;
pub mod users;

use crate::core::config;

/// Normalized API failure, per the error taxonomy:
/// server-rejected requests keep the server's own message; transport failures
/// collapse to a generic "no response" error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 4xx/5xx with the structured error body surfaced verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// No response received at all.
    #[error("No response received from server")]
    Transport,
    /// A 2xx body that did not match the expected shape.
    #[error("Unexpected response from server")]
    Decode,
}

/// Whether a call carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Public,
    Bearer,
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}

/// Extract a human-readable message from an error response body.
///
/// Precedence: JSON `message` key, then JSON `error` key, then the raw body,
/// then a plain status line for empty bodies.
pub(crate) fn server_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(not(feature = "ssr"))]
pub(crate) use fetch::{delete, get_json, get_json_with_query, post_json, post_multipart, put_json};

#[cfg(not(feature = "ssr"))]
mod fetch {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, Auth, endpoint, server_message};
    use crate::core::session;

    fn bearer_token() -> Option<String> {
        session::load().token().map(str::to_owned)
    }

    fn apply_auth(builder: RequestBuilder, auth: Auth) -> RequestBuilder {
        match (auth, bearer_token()) {
            (Auth::Bearer, Some(token)) => {
                builder.header("Authorization", &format!("Bearer {token}"))
            }
            _ => builder,
        }
    }

    async fn decode_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status,
                message: server_message(status, &body),
            });
        }
        resp.json::<T>().await.map_err(|_| ApiError::Decode)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        path: &str,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let resp = apply_auth(Request::get(&endpoint(path)), auth)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        decode_response(resp).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        path: &str,
        query: &[(&str, &str)],
        auth: Auth,
    ) -> Result<T, ApiError> {
        let resp = apply_auth(
            Request::get(&endpoint(path)).query(query.iter().copied()),
            auth,
        )
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;
        decode_response(resp).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let req = apply_auth(Request::post(&endpoint(path)), auth)
            .json(body)
            .map_err(|_| ApiError::Transport)?;
        let resp = req.send().await.map_err(|_| ApiError::Transport)?;
        decode_response(resp).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let req = apply_auth(Request::put(&endpoint(path)), auth)
            .json(body)
            .map_err(|_| ApiError::Transport)?;
        let resp = req.send().await.map_err(|_| ApiError::Transport)?;
        decode_response(resp).await
    }

    pub(crate) async fn delete(path: &str, auth: Auth) -> Result<(), ApiError> {
        let resp = apply_auth(Request::delete(&endpoint(path)), auth)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status,
                message: server_message(status, &body),
            });
        }
        Ok(())
    }

    /// Multipart upload. The browser sets the multipart boundary itself, so
    /// no Content-Type header is added here.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        path: &str,
        form: web_sys::FormData,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let req = apply_auth(Request::post(&endpoint(path)), auth)
            .body(form)
            .map_err(|_| ApiError::Transport)?;
        let resp = req.send().await.map_err(|_| ApiError::Transport)?;
        decode_response(resp).await
    }
}

/// Server-side stubs — the API is only reachable from the browser.
#[cfg(feature = "ssr")]
mod fetch_stubs {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, Auth};

    pub(crate) async fn get_json<T: DeserializeOwned>(
        _path: &str,
        _auth: Auth,
    ) -> Result<T, ApiError> {
        Err(ApiError::Transport)
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        _path: &str,
        _query: &[(&str, &str)],
        _auth: Auth,
    ) -> Result<T, ApiError> {
        Err(ApiError::Transport)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
        _auth: Auth,
    ) -> Result<T, ApiError> {
        Err(ApiError::Transport)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
        _auth: Auth,
    ) -> Result<T, ApiError> {
        Err(ApiError::Transport)
    }

    pub(crate) async fn delete(_path: &str, _auth: Auth) -> Result<(), ApiError> {
        Err(ApiError::Transport)
    }
}

#[cfg(feature = "ssr")]
pub(crate) use fetch_stubs::{delete, get_json, get_json_with_query, post_json, put_json};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        assert!(endpoint("/movies").ends_with("/movies"));
        assert!(endpoint("/auth/login").contains("/auth/login"));
    }

    #[test]
    fn server_message_prefers_message_key() {
        let body = r#"{"message":"Invalid email or password","code":"BAD_CREDENTIALS"}"#;
        assert_eq!(server_message(401, body), "Invalid email or password");
    }

    #[test]
    fn server_message_falls_back_to_error_key() {
        let body = r#"{"error":"Email already exists"}"#;
        assert_eq!(server_message(409, body), "Email already exists");
    }

    #[test]
    fn server_message_uses_raw_body_for_non_json() {
        assert_eq!(server_message(500, "Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn server_message_synthesizes_status_line_for_empty_body() {
        assert_eq!(server_message(502, ""), "Request failed with status 502");
        assert_eq!(server_message(502, "  \n"), "Request failed with status 502");
    }

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid email or password".into(),
        };
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(
            ApiError::Transport.to_string(),
            "No response received from server"
        );
    }
}
