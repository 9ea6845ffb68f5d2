use kinoteka_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
