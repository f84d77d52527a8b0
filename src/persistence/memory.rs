//! In-process [`MovieStore`] with the same semantics as the MongoDB one.
//!
//! Ids are object ids, listing follows insertion order, and a malformed
//! id fails the same way. Each operation holds the lock for its whole
//! duration, which gives the single-document atomicity MongoDB provides.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MovieStore, StoreError};
use crate::domain::{Lookup, Movie, MovieId, MoviePatch, NewMovie};

/// Movie store backed by a `Vec` behind a [`tokio::sync::RwLock`].
#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored movies.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned().into())
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let movie = movie.with_id(MovieId::new());
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: &str, patch: MoviePatch) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        let mut movies = self.movies.write().await;
        let updated = movies.iter_mut().find(|m| m.id == id).map(|movie| {
            patch.apply_to(movie);
            movie.clone()
        });
        Ok(updated.into())
    }

    async fn remove(&self, id: &str) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        let mut movies = self.movies.write().await;
        let index = movies.iter().position(|m| m.id == id);
        Ok(index.map(|index| movies.remove(index)).into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
