//! BSON shape of the documents in the `movies` collection.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::{Movie, MovieId, MoviePatch, NewMovie};

/// A movie document as stored in MongoDB.
///
/// `_id` is left out on insert so the driver assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDocument {
    /// Object id; `None` only before insertion.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Movie title.
    pub title: String,
    /// Director's name.
    pub director: String,
    /// Year of release.
    pub release_year: i32,
    /// Genre label.
    pub genre: String,
    /// Rating.
    pub rating: f64,
}

impl From<NewMovie> for MovieDocument {
    fn from(movie: NewMovie) -> Self {
        Self {
            id: None,
            title: movie.title,
            director: movie.director,
            release_year: movie.release_year,
            genre: movie.genre,
            rating: movie.rating,
        }
    }
}

impl TryFrom<MovieDocument> for Movie {
    type Error = StoreError;

    fn try_from(doc: MovieDocument) -> Result<Self, Self::Error> {
        let id = doc.id.ok_or(StoreError::MissingId)?;
        Ok(Self {
            id: MovieId::from_object_id(id),
            title: doc.title,
            director: doc.director,
            release_year: doc.release_year,
            genre: doc.genre,
            rating: doc.rating,
        })
    }
}

/// Builds the `$set` body for a partial update.
///
/// Keys match the stored field names. Absent fields are left out so they
/// keep their stored value.
#[must_use]
pub fn set_document(patch: &MoviePatch) -> Document {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(director) = &patch.director {
        set.insert("director", director.as_str());
    }
    if let Some(year) = patch.release_year {
        set.insert("releaseYear", year);
    }
    if let Some(genre) = &patch.genre {
        set.insert("genre", genre.as_str());
    }
    if let Some(rating) = patch.rating {
        set.insert("rating", rating);
    }
    set
}

/// Filter matching a single document by object id.
#[must_use]
pub fn id_filter(id: &MovieId) -> Document {
    doc! { "_id": *id.as_object_id() }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use mongodb::bson::Bson;

    use super::*;

    #[test]
    fn set_document_contains_only_present_fields() {
        let patch = MoviePatch {
            rating: Some(10.0),
            release_year: Some(2011),
            ..MoviePatch::default()
        };
        let set = set_document(&patch);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("rating"), Some(&Bson::Double(10.0)));
        assert_eq!(set.get("releaseYear"), Some(&Bson::Int32(2011)));
        assert!(set.get("title").is_none());
    }

    #[test]
    fn empty_patch_builds_empty_set() {
        assert!(set_document(&MoviePatch::default()).is_empty());
    }

    #[test]
    fn new_movie_document_has_no_id() {
        let doc = MovieDocument::from(NewMovie {
            title: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
            release_year: 1979,
            genre: "Horror".to_string(),
            rating: 8.5,
        });
        let Ok(bson) = mongodb::bson::to_document(&doc) else {
            panic!("document should encode");
        };
        assert!(bson.get("_id").is_none());
        assert_eq!(bson.get("releaseYear"), Some(&Bson::Int32(1979)));
    }

    #[test]
    fn document_without_id_is_rejected() {
        let doc = MovieDocument {
            id: None,
            title: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
            release_year: 1979,
            genre: "Horror".to_string(),
            rating: 8.5,
        };
        assert!(matches!(Movie::try_from(doc), Err(StoreError::MissingId)));
    }

    #[test]
    fn id_filter_targets_object_id() {
        let id = MovieId::new();
        let filter = id_filter(&id);
        assert_eq!(filter.get("_id"), Some(&Bson::ObjectId(*id.as_object_id())));
    }
}
