//! The movie entity and the payloads used to create and change it.

use super::MovieId;

/// A stored movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Store-assigned identifier.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Director's name.
    pub director: String,
    /// Year of release, never earlier than [`EARLIEST_RELEASE_YEAR`].
    pub release_year: i32,
    /// Free-form genre label.
    pub genre: String,
    /// Rating in the closed range `[0, 10]`.
    pub rating: f64,
}

/// The year the oldest surviving motion picture was shot.
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// A movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
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

impl NewMovie {
    /// Attaches the identifier the store assigned.
    #[must_use]
    pub fn with_id(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            release_year: self.release_year,
            genre: self.genre,
            rating: self.rating,
        }
    }
}

/// Partial update: only the fields that are `Some` change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    /// New title.
    pub title: Option<String>,
    /// New director.
    pub director: Option<String>,
    /// New release year.
    pub release_year: Option<i32>,
    /// New genre.
    pub genre: Option<String>,
    /// New rating.
    pub rating: Option<f64>,
}

impl MoviePatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.release_year.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
    }

    /// Applies the present fields to `movie` in place. The id is untouched.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title.clone_from(title);
        }
        if let Some(director) = &self.director {
            movie.director.clone_from(director);
        }
        if let Some(year) = self.release_year {
            movie.release_year = year;
        }
        if let Some(genre) = &self.genre {
            movie.genre.clone_from(genre);
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
    }
}

/// Outcome of a lookup by id that is allowed to miss.
///
/// The data-access layer never reports a missing document as an error;
/// callers decide what a miss means.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// A matching document exists.
    Found(T),
    /// No document has the requested id.
    NotFound,
}

impl<T> Lookup<T> {
    /// Converts into a `Result`, using `err` for the miss.
    ///
    /// # Errors
    ///
    /// Returns `err` when the lookup missed.
    pub fn found_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound => Err(err),
        }
    }

    /// Returns `true` for [`Lookup::Found`].
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}
