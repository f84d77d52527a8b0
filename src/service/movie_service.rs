//! Movie service: enforces "the movie must exist" on top of the store.

use std::sync::Arc;

use crate::domain::{Movie, MoviePatch, NewMovie};
use crate::error::ApiError;
use crate::persistence::MovieStore;

/// Orchestration layer for movie operations.
///
/// Stateless: holds only the injected store handle. Turns
/// [`crate::domain::Lookup::NotFound`] into [`ApiError::MovieNotFound`] and classifies
/// store failures as read-path or write-path errors.
#[derive(Debug, Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    /// Creates a new `MovieService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    /// Lists every movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StoreRead`] if the store fails.
    pub async fn get_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.store.find_all().await.map_err(ApiError::from_read)
    }

    /// Fetches one movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no movie has `id`.
    pub async fn get_movie_by_id(&self, id: &str) -> Result<Movie, ApiError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(ApiError::from_read)?
            .found_or(ApiError::MovieNotFound)
    }

    /// Stores a new movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StoreWrite`] if the store rejects the insert.
    pub async fn create_movie(&self, movie: NewMovie) -> Result<Movie, ApiError> {
        let created = self
            .store
            .create(movie)
            .await
            .map_err(ApiError::from_write)?;
        tracing::info!(movie_id = %created.id, title = %created.title, "movie created");
        Ok(created)
    }

    /// Applies a partial update and returns the post-update movie.
    ///
    /// The existence check is the store's own answer to the update, so
    /// there is no window between checking and writing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no movie has `id`.
    pub async fn update_movie(&self, id: &str, patch: MoviePatch) -> Result<Movie, ApiError> {
        let updated = self
            .store
            .update(id, patch)
            .await
            .map_err(ApiError::from_write)?
            .found_or(ApiError::MovieNotFound)?;
        tracing::info!(movie_id = %updated.id, "movie updated");
        Ok(updated)
    }

    /// Deletes a movie and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no movie has `id`.
    pub async fn delete_movie(&self, id: &str) -> Result<Movie, ApiError> {
        let deleted = self
            .store
            .remove(id)
            .await
            .map_err(ApiError::from_write)?
            .found_or(ApiError::MovieNotFound)?;
        tracing::info!(movie_id = %deleted.id, "movie deleted");
        Ok(deleted)
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unavailable`] if the ping fails.
    pub async fn health(&self) -> Result<(), ApiError> {
        self.store.ping().await.map_err(|e| {
            tracing::warn!(error = %e, "store ping failed");
            ApiError::Unavailable(e.to_string())
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::MovieId;
    use crate::persistence::MemoryMovieStore;

    fn make_service() -> MovieService {
        MovieService::new(Arc::new(MemoryMovieStore::new()))
    }

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_string(),
            director: "Christopher Nolan".to_string(),
            release_year: 2010,
            genre: "Sci-Fi".to_string(),
            rating: 9.0,
        }
    }

    #[tokio::test]
    async fn get_movies_on_empty_store() {
        let service = make_service();
        let Ok(movies) = service.get_movies().await else {
            panic!("listing failed");
        };
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_returns_same_movie() {
        let service = make_service();
        let Ok(created) = service.create_movie(inception()).await else {
            panic!("create failed");
        };
        let Ok(fetched) = service.get_movie_by_id(&created.id.to_string()).await else {
            panic!("get failed");
        };
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let service = make_service();
        let id = MovieId::new().to_string();

        assert!(matches!(
            service.get_movie_by_id(&id).await,
            Err(ApiError::MovieNotFound)
        ));
        assert!(matches!(
            service.update_movie(&id, MoviePatch::default()).await,
            Err(ApiError::MovieNotFound)
        ));
        assert!(matches!(
            service.delete_movie(&id).await,
            Err(ApiError::MovieNotFound)
        ));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let service = make_service();
        assert!(matches!(
            service.get_movie_by_id("garbage").await,
            Err(ApiError::MovieNotFound)
        ));
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let service = make_service();
        let Ok(created) = service.create_movie(inception()).await else {
            panic!("create failed");
        };
        let id = created.id.to_string();
        let patch = MoviePatch {
            rating: Some(10.0),
            genre: Some("Thriller".to_string()),
            ..MoviePatch::default()
        };

        let Ok(first) = service.update_movie(&id, patch.clone()).await else {
            panic!("first update failed");
        };
        let Ok(second) = service.update_movie(&id, patch).await else {
            panic!("second update failed");
        };
        assert_eq!(first, second);
        assert_eq!(second.rating, 10.0);
        assert_eq!(second.title, created.title);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = make_service();
        let Ok(created) = service.create_movie(inception()).await else {
            panic!("create failed");
        };
        let id = created.id.to_string();

        let Ok(deleted) = service.delete_movie(&id).await else {
            panic!("delete failed");
        };
        assert_eq!(deleted, created);
        assert!(matches!(
            service.get_movie_by_id(&id).await,
            Err(ApiError::MovieNotFound)
        ));
    }

    #[tokio::test]
    async fn health_pings_store() {
        assert!(make_service().health().await.is_ok());
    }
}
