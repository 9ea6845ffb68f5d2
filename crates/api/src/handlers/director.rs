//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use kinoteka_core::types::DbId;
use kinoteka_db::models::director::Director;

use crate::error::AppResult;
use crate::response::Pretty;
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Pretty<Vec<Director>>> {
    let directors = state.store.list_directors().await?;
    Ok(state.json(directors))
}

/// GET /directors/{id}
///
/// Both a missing and an ambiguous match render as 404 with the lookup
/// error text.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Pretty<Director>> {
    let director = state.store.lookup_director(id).await?.into_result()?;
    Ok(state.json(director))
}
