//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::messages;
use kinoteka_core::patch::{missing_fields, MovieField};
use kinoteka_core::types::DbId;
use kinoteka_db::models::movie::{CreateMovie, MovieFilter, MovieListing, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::extract::ValidQuery;
use crate::response::Pretty;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::MovieNotFound { id })
}

/// GET /movies/?director_id=&genre_id=
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<MovieFilter>,
) -> AppResult<Pretty<Vec<MovieListing>>> {
    let movies = state.store.list_movies(&filter).await?;
    Ok(state.json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Pretty<String>)> {
    let id = state.store.create_movie(&input).await?;
    tracing::info!(movie_id = id, "Movie created");
    Ok((StatusCode::CREATED, state.json(messages::movie_created(id))))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Pretty<MovieListing>> {
    let movie = state
        .store
        .find_movie_listing(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(state.json(movie))
}

/// PATCH /movies/{id}
///
/// Which of the present fields get written depends on the configured
/// [`PatchMode`](kinoteka_core::patch::PatchMode).
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<(StatusCode, Pretty<String>)> {
    let mode = state.config.patch_mode;
    let fields = mode.select(|f| input.has(f));

    state
        .store
        .update_movie(id, &input, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = id, %mode, ?fields, "Movie patched");
    Ok((StatusCode::NO_CONTENT, state.json(messages::movie_updated(id))))
}

/// PUT /movies/{id}
///
/// All seven fields must be present; `null` values are allowed.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<(StatusCode, Pretty<String>)> {
    if state.store.find_movie(id).await?.is_none() {
        return Err(not_found(id));
    }

    let missing = missing_fields(|f| input.has(f));
    if !missing.is_empty() {
        return Err(CoreError::MissingFields { fields: missing }.into());
    }

    state
        .store
        .update_movie(id, &input, &MovieField::PRIORITY)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = id, "Movie replaced");
    Ok((StatusCode::NO_CONTENT, state.json(messages::movie_updated(id))))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Pretty<String>)> {
    if !state.store.delete_movie(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = id, "Movie deleted");
    Ok((StatusCode::NO_CONTENT, state.json(messages::movie_deleted(id))))
}
