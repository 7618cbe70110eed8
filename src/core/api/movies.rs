//! Movie catalog endpoints.
//!
//! Reads are public; create/update/delete and the poster upload are
//! admin-gated by the backend and carry the bearer token.

use super::{ApiError, Auth, delete, get_json, get_json_with_query, post_json, put_json};
use crate::core::models::{Movie, MovieData};

/// `GET /movies`
pub async fn list() -> Result<Vec<Movie>, ApiError> {
    get_json("/movies", Auth::Public).await
}

/// `GET /movies/{id}`
pub async fn get(id: i64) -> Result<Movie, ApiError> {
    get_json(&format!("/movies/{id}"), Auth::Public).await
}

/// `GET /movies/search?title=`
pub async fn search(title: &str) -> Result<Vec<Movie>, ApiError> {
    get_json_with_query("/movies/search", &[("title", title)], Auth::Public).await
}

/// `GET /movies/genre/{genre}`
pub async fn by_genre(genre: &str) -> Result<Vec<Movie>, ApiError> {
    get_json(&format!("/movies/genre/{genre}"), Auth::Public).await
}

/// `POST /movies` (admin)
pub async fn create(movie: &MovieData) -> Result<Movie, ApiError> {
    post_json("/movies", movie, Auth::Bearer).await
}

/// `PUT /movies/{id}` (admin)
pub async fn update(id: i64, movie: &MovieData) -> Result<Movie, ApiError> {
    put_json(&format!("/movies/{id}"), movie, Auth::Bearer).await
}

/// `DELETE /movies/{id}` (admin)
pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete(&format!("/movies/{id}"), Auth::Bearer).await
}

/// `POST /movies/upload` (admin) — multipart poster upload.
///
/// Browser-only: there is no file handle to upload on the server.
#[cfg(not(feature = "ssr"))]
pub async fn upload_poster(file: &web_sys::File) -> Result<crate::core::models::PosterUpload, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport)?;
    super::post_multipart("/movies/upload", form, Auth::Bearer).await
}
