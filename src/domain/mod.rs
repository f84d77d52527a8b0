//! Domain layer: the movie entity, its identifier, and the lookup type
//! every layer uses to report a missing document.

pub mod movie;
pub mod movie_id;

pub use movie::{
    EARLIEST_RELEASE_YEAR, Lookup, MAX_RATING, MIN_RATING, Movie, MoviePatch, NewMovie,
};
pub use movie_id::{InvalidMovieId, MovieId};
