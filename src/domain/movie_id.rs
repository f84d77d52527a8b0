//! Type-safe movie identifier.
//!
//! [`MovieId`] wraps the BSON [`ObjectId`] the document store assigns on
//! insert. Clients only ever see its 24-character hex form.

use std::fmt;

use mongodb::bson::oid::ObjectId;

/// Unique identifier of a stored movie.
///
/// Assigned exactly once when the movie is created and never changed
/// afterwards. Rendered as plain hex by [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(ObjectId);

/// Returned when a string is not a valid 24-character hex object id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed movie id: {0}")]
pub struct InvalidMovieId(pub String);

impl MovieId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Wraps an existing [`ObjectId`].
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Returns the inner [`ObjectId`].
    #[must_use]
    pub const fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    /// Parses the hex representation used in URLs.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMovieId`] if `raw` is not a 24-character hex string.
    pub fn parse(raw: &str) -> Result<Self, InvalidMovieId> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidMovieId(raw.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
