//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/directors", get(director::list))
        .route("/directors/", get(director::list))
        .route("/directors/{id}", get(director::get_by_id))
}
