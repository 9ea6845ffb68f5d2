//! Repository for the `genres` table.

use kinoteka_core::lookup::Lookup;
use kinoteka_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::genre::Genre;

/// Read-only access to genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres in ID order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Look up exactly one genre by ID.
    pub async fn lookup(pool: &SqlitePool, id: DbId) -> Result<Lookup<Genre>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?1 LIMIT 2")
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Lookup::from_rows(rows))
    }
}
