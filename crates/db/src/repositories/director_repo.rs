//! Repository for the `directors` table.

use kinoteka_core::lookup::Lookup;
use kinoteka_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::Director;

/// Read-only access to directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List all directors in ID order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM directors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Look up exactly one director by ID.
    ///
    /// Fetches at most two rows, which is enough to tell a unique match
    /// from an ambiguous one.
    pub async fn lookup(pool: &SqlitePool, id: DbId) -> Result<Lookup<Director>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Director>(
            "SELECT id, name FROM directors WHERE id = ?1 LIMIT 2",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Lookup::from_rows(rows))
    }
}
