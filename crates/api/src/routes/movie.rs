//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes for movies.
///
/// ```text
/// GET    /movies/        -> list
/// POST   /movies/        -> create
/// GET    /movies/{id}    -> get_by_id
/// PATCH  /movies/{id}    -> patch
/// PUT    /movies/{id}    -> replace
/// DELETE /movies/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(movie::list).post(movie::create);

    Router::new()
        .route("/movies", collection.clone())
        .route("/movies/", collection)
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .patch(movie::patch)
                .put(movie::replace)
                .delete(movie::delete),
        )
}
