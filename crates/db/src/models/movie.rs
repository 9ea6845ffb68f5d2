//! Movie entity model, join projection, and DTOs.

use kinoteka_core::patch::MovieField;
use kinoteka_core::serde_helpers::{empty_as_none, present};
use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// A movie joined with its genre and director names.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieListing {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub trailer: Option<String>,
    pub genre: String,
    pub director: String,
}

/// Query filters for `GET /movies/`. Blank values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub director_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub genre_id: Option<DbId>,
}

/// DTO for creating a movie. Any subset of fields is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for PATCH and PUT bodies.
///
/// Each field records whether its key was present, so an explicit `null`
/// clears the column while an absent key leaves it alone. Unrecognised
/// keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub genre_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "present")]
    pub director_id: Option<Option<DbId>>,
}

impl UpdateMovie {
    /// Whether the body carried the key for `field`.
    pub fn has(&self, field: MovieField) -> bool {
        match field {
            MovieField::Title => self.title.is_some(),
            MovieField::Description => self.description.is_some(),
            MovieField::Trailer => self.trailer.is_some(),
            MovieField::Year => self.year.is_some(),
            MovieField::Rating => self.rating.is_some(),
            MovieField::GenreId => self.genre_id.is_some(),
            MovieField::DirectorId => self.director_id.is_some(),
        }
    }

    /// Whether an update restricted to `fields` writes `field`. Fields
    /// absent from the body are never written, even when listed.
    pub fn writes(&self, field: MovieField, fields: &[MovieField]) -> bool {
        fields.contains(&field) && self.has(field)
    }
}
