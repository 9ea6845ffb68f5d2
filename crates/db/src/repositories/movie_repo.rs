//! Repository for the `movies` table.

use kinoteka_core::patch::MovieField;
use kinoteka_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{CreateMovie, Movie, MovieFilter, MovieListing, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Movie projection inner-joined with genre and director names.
const LISTING_SELECT: &str = "SELECT m.id, m.title, m.description, m.rating, m.trailer, \
            g.name AS genre, d.name AS director \
     FROM movies m \
     JOIN genres g ON g.id = m.genre_id \
     JOIN directors d ON d.id = m.director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List joined movies, optionally narrowed by director and/or genre.
    ///
    /// Movies without a matching genre or director row are excluded.
    pub async fn list(
        pool: &SqlitePool,
        filter: &MovieFilter,
    ) -> Result<Vec<MovieListing>, sqlx::Error> {
        let query = format!(
            "{LISTING_SELECT} \
             WHERE (?1 IS NULL OR m.director_id = ?1) \
               AND (?2 IS NULL OR m.genre_id = ?2) \
             ORDER BY m.id"
        );
        sqlx::query_as::<_, MovieListing>(&query)
            .bind(filter.director_id)
            .bind(filter.genre_id)
            .fetch_all(pool)
            .await
    }

    /// Find the joined projection of one movie.
    pub async fn find_listing(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MovieListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE m.id = ?1 LIMIT 1");
        sqlx::query_as::<_, MovieListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie row by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Movie>, sqlx::Error>
    where
        E: sqlx::SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new movie in its own transaction, returning the assigned ID.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies (title, description, trailer, year, rating, genre_id, director_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.trailer)
        .bind(input.year)
        .bind(input.rating)
        .bind(input.genre_id)
        .bind(input.director_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Write the listed fields from `input` onto a movie in one `UPDATE`
    /// statement and return the stored row.
    ///
    /// Each column is guarded by a flag so unlisted columns keep their value.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_fields(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
        fields: &[MovieField],
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET \
                title = CASE WHEN ?2 THEN ?3 ELSE title END, \
                description = CASE WHEN ?4 THEN ?5 ELSE description END, \
                trailer = CASE WHEN ?6 THEN ?7 ELSE trailer END, \
                year = CASE WHEN ?8 THEN ?9 ELSE year END, \
                rating = CASE WHEN ?10 THEN ?11 ELSE rating END, \
                genre_id = CASE WHEN ?12 THEN ?13 ELSE genre_id END, \
                director_id = CASE WHEN ?14 THEN ?15 ELSE director_id END \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.writes(MovieField::Title, fields))
            .bind(input.title.clone().flatten())
            .bind(input.writes(MovieField::Description, fields))
            .bind(input.description.clone().flatten())
            .bind(input.writes(MovieField::Trailer, fields))
            .bind(input.trailer.clone().flatten())
            .bind(input.writes(MovieField::Year, fields))
            .bind(input.year.flatten())
            .bind(input.writes(MovieField::Rating, fields))
            .bind(input.rating.flatten())
            .bind(input.writes(MovieField::GenreId, fields))
            .bind(input.genre_id.flatten())
            .bind(input.writes(MovieField::DirectorId, fields))
            .bind(input.director_id.flatten())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
