//! The persistence interface handlers depend on.
//!
//! Handlers receive an `Arc<dyn CatalogStore>` through application state
//! rather than reaching for a global pool. [`SqliteCatalogStore`] is the
//! production implementation and delegates to the repositories.

use async_trait::async_trait;
use kinoteka_core::lookup::Lookup;
use kinoteka_core::patch::MovieField;
use kinoteka_core::types::DbId;

use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::movie::{CreateMovie, Movie, MovieFilter, MovieListing, UpdateMovie};
use crate::repositories::{DirectorRepo, GenreRepo, MovieRepo};
use crate::DbPool;

/// Catalog persistence operations.
///
/// Every mutating method runs in exactly one transaction that is committed
/// on success and rolled back if an error is returned.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the backing store answers queries.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<MovieListing>, sqlx::Error>;

    async fn find_movie_listing(&self, id: DbId) -> Result<Option<MovieListing>, sqlx::Error>;

    async fn find_movie(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;

    /// Insert a movie and return its freshly assigned ID.
    async fn create_movie(&self, input: &CreateMovie) -> Result<DbId, sqlx::Error>;

    /// Write `fields` from `input` onto the stored movie.
    ///
    /// Returns `None` if the movie does not exist.
    async fn update_movie(
        &self,
        id: DbId,
        input: &UpdateMovie,
        fields: &[MovieField],
    ) -> Result<Option<Movie>, sqlx::Error>;

    /// Returns `true` if a movie was removed.
    async fn delete_movie(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn list_directors(&self) -> Result<Vec<Director>, sqlx::Error>;

    async fn lookup_director(&self, id: DbId) -> Result<Lookup<Director>, sqlx::Error>;

    async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error>;

    async fn lookup_genre(&self, id: DbId) -> Result<Lookup<Genre>, sqlx::Error>;
}

/// [`CatalogStore`] backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    pool: DbPool,
}

impl SqliteCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<MovieListing>, sqlx::Error> {
        MovieRepo::list(&self.pool, filter).await
    }

    async fn find_movie_listing(&self, id: DbId) -> Result<Option<MovieListing>, sqlx::Error> {
        MovieRepo::find_listing(&self.pool, id).await
    }

    async fn find_movie(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn create_movie(&self, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let id = MovieRepo::create(&self.pool, input).await?;
        tracing::debug!(movie_id = id, "Inserted movie row");
        Ok(id)
    }

    async fn update_movie(
        &self,
        id: DbId,
        input: &UpdateMovie,
        fields: &[MovieField],
    ) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update_fields(&self.pool, id, input, fields).await
    }

    async fn delete_movie(&self, id: DbId) -> Result<bool, sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await
    }

    async fn list_directors(&self) -> Result<Vec<Director>, sqlx::Error> {
        DirectorRepo::list(&self.pool).await
    }

    async fn lookup_director(&self, id: DbId) -> Result<Lookup<Director>, sqlx::Error> {
        DirectorRepo::lookup(&self.pool, id).await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error> {
        GenreRepo::list(&self.pool).await
    }

    async fn lookup_genre(&self, id: DbId) -> Result<Lookup<Genre>, sqlx::Error> {
        GenreRepo::lookup(&self.pool, id).await
    }
}
