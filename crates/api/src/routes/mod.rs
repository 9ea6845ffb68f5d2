pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                 list (?director_id, ?genre_id), create
/// /movies/{id}             get, patch, put, delete
///
/// /directors/              list
/// /directors/{id}          get
///
/// /genres/                 list
/// /genres/{id}             get
/// ```
///
/// Collection paths are also served without the trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(director::router())
        .merge(genre::router())
}
