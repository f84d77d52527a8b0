//! MongoDB implementation of [`MovieStore`].

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use super::models::{MovieDocument, id_filter, set_document};
use super::{MovieStore, StoreError};
use crate::config::AppConfig;
use crate::domain::{Lookup, Movie, MovieId, MoviePatch, NewMovie};

/// MongoDB-backed movie store.
///
/// Owns the driver [`Client`], which pools connections internally and is
/// safe to share between request tasks. Built once at startup with
/// [`MongoMovieStore::connect`] and shut down with [`MovieStore::close`].
#[derive(Debug, Clone)]
pub struct MongoMovieStore {
    client: Client,
    database: Database,
    movies: Collection<MovieDocument>,
}

impl MongoMovieStore {
    /// Connects to the database named by the configuration.
    ///
    /// The database named in the URI wins over `MONGO_DB`. The driver
    /// connects lazily, so this only fails on a malformed URI or an
    /// unresolvable SRV record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the client cannot be built.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&config.mongo_db));
        let movies = database.collection::<MovieDocument>(&config.mongo_collection);

        tracing::info!(
            database = %database.name(),
            collection = %movies.name(),
            "mongodb client ready"
        );

        Ok(Self {
            client,
            database,
            movies,
        })
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let cursor = self.movies.find(doc! {}).await?;
        let docs: Vec<MovieDocument> = cursor.try_collect().await?;
        docs.into_iter().map(Movie::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        into_lookup(self.movies.find_one(id_filter(&id)).await?)
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let result = self.movies.insert_one(MovieDocument::from(movie.clone())).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingId)?;
        Ok(movie.with_id(MovieId::from_object_id(oid)))
    }

    async fn update(&self, id: &str, patch: MoviePatch) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        // `$set` with no fields is rejected by the server.
        if patch.is_empty() {
            return into_lookup(self.movies.find_one(id_filter(&id)).await?);
        }

        let updated = self
            .movies
            .find_one_and_update(id_filter(&id), doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await?;

        into_lookup(updated)
    }

    async fn remove(&self, id: &str) -> Result<Lookup<Movie>, StoreError> {
        let id = MovieId::parse(id)?;
        into_lookup(self.movies.find_one_and_delete(id_filter(&id)).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("mongodb client shut down");
    }
}

fn into_lookup(doc: Option<MovieDocument>) -> Result<Lookup<Movie>, StoreError> {
    doc.map(Movie::try_from).transpose().map(Lookup::from)
}
