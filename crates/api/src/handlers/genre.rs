//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use kinoteka_core::types::DbId;
use kinoteka_db::models::genre::Genre;

use crate::error::AppResult;
use crate::response::Pretty;
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Pretty<Vec<Genre>>> {
    let genres = state.store.list_genres().await?;
    Ok(state.json(genres))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Pretty<Genre>> {
    let genre = state.store.lookup_genre(id).await?.into_result()?;
    Ok(state.json(genre))
}
