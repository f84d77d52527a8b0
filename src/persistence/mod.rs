//! Data-access layer: primitive document-store operations on the movie
//! collection.
//!
//! [`MovieStore`] is the seam between the service and the database. The
//! production implementation is [`mongo::MongoMovieStore`]; the
//! in-process [`memory::MemoryMovieStore`] has identical semantics and
//! backs the test suite.

pub mod memory;
pub mod models;
pub mod mongo;

use async_trait::async_trait;

use crate::domain::{InvalidMovieId, Lookup, Movie, MoviePatch, NewMovie};

pub use memory::MemoryMovieStore;
pub use mongo::MongoMovieStore;

/// Failure reported by a [`MovieStore`].
///
/// A missing document is not an error; see [`Lookup`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id is not in the store's identifier format.
    #[error(transparent)]
    InvalidId(#[from] InvalidMovieId),

    /// The store accepted a document but did not hand back an object id.
    #[error("store returned a document without an object id")]
    MissingId,

    /// Error raised by the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Primitive operations on the movie collection.
///
/// Every method is a single round-trip with no retries and no caching.
/// Ids are taken in their raw string form; a malformed id is reported as
/// [`StoreError::InvalidId`].
#[async_trait]
pub trait MovieStore: std::fmt::Debug + Send + Sync {
    /// Returns every movie in the store's native order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Looks up one movie.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidId`] for a malformed id, or
    /// [`StoreError::Database`] if the query fails.
    async fn find_by_id(&self, id: &str) -> Result<Lookup<Movie>, StoreError>;

    /// Inserts a movie and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the insert fails.
    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError>;

    /// Applies `patch` atomically and returns the post-update document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidId`] for a malformed id, or
    /// [`StoreError::Database`] if the update fails.
    async fn update(&self, id: &str, patch: MoviePatch) -> Result<Lookup<Movie>, StoreError>;

    /// Deletes a movie and returns the removed document.
    ///
    /// # Errors
    ///
    /// Same as [`MovieStore::update`].
    async fn remove(&self, id: &str) -> Result<Lookup<Movie>, StoreError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the server does not answer.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the underlying connection resources.
    async fn close(&self);
}
