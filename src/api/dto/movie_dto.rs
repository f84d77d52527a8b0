//! Movie DTOs for create, update, read, and delete responses.

use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::api::validation::{FieldRule, RuleSet, ValidatedBody};
use crate::domain::{EARLIEST_RELEASE_YEAR, MAX_RATING, MIN_RATING, Movie, MoviePatch, NewMovie};

const RELEASE_YEAR_MESSAGE: &str = "Valid release year required (>= 1888)";
const RATING_MESSAGE: &str = "Rating must be between 0 and 10";

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .rule(FieldRule::body("title").not_empty().with_message("Title is required"))
        .rule(
            FieldRule::body("director")
                .not_empty()
                .with_message("Director is required"),
        )
        .rule(
            FieldRule::body("releaseYear")
                .is_int(EARLIEST_RELEASE_YEAR)
                .with_message(RELEASE_YEAR_MESSAGE),
        )
        .rule(FieldRule::body("genre").not_empty().with_message("Genre is required"))
        .rule(
            FieldRule::body("rating")
                .is_float(MIN_RATING, MAX_RATING)
                .with_message(RATING_MESSAGE),
        )
});

static UPDATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .rule(
            FieldRule::body("title")
                .optional()
                .not_empty()
                .with_message("Title cannot be empty"),
        )
        .rule(
            FieldRule::body("director")
                .optional()
                .not_empty()
                .with_message("Director cannot be empty"),
        )
        .rule(
            FieldRule::body("releaseYear")
                .optional()
                .is_int(EARLIEST_RELEASE_YEAR)
                .with_message(RELEASE_YEAR_MESSAGE),
        )
        .rule(
            FieldRule::body("genre")
                .optional()
                .not_empty()
                .with_message("Genre cannot be empty"),
        )
        .rule(
            FieldRule::body("rating")
                .optional()
                .is_float(MIN_RATING, MAX_RATING)
                .with_message(RATING_MESSAGE),
        )
});

/// Reads a release year written either as `2010` or `2010.0`.
fn whole_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    year_from_number(f64::deserialize(deserializer)?)
}

fn optional_whole_year<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i32>, D::Error> {
    Option::<f64>::deserialize(deserializer)?
        .map(year_from_number)
        .transpose()
}

#[allow(clippy::cast_possible_truncation)]
fn year_from_number<E: serde::de::Error>(year: f64) -> Result<i32, E> {
    if year.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
        Ok(year as i32)
    } else {
        Err(E::custom(RELEASE_YEAR_MESSAGE))
    }
}

/// Request body for `POST /movies`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "title": "Inception",
    "director": "Christopher Nolan",
    "releaseYear": 2010,
    "genre": "Sci-Fi",
    "rating": 9
}))]
pub struct CreateMovieRequest {
    /// Movie title.
    #[schema(min_length = 1)]
    pub title: String,
    /// Director's name.
    #[schema(min_length = 1)]
    pub director: String,
    /// Release year (must be >= 1888).
    #[schema(minimum = 1888)]
    #[serde(deserialize_with = "whole_year")]
    pub release_year: i32,
    /// Genre label.
    #[schema(min_length = 1)]
    pub genre: String,
    /// Rating between 0 and 10.
    #[schema(minimum = 0.0, maximum = 10.0)]
    pub rating: f64,
}

impl ValidatedBody for CreateMovieRequest {
    fn rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            director: req.director,
            release_year: req.release_year,
            genre: req.genre,
            rating: req.rating,
        }
    }
}

/// Request body for `PUT /movies/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "rating": 10 }))]
pub struct UpdateMovieRequest {
    /// New title.
    #[schema(min_length = 1)]
    pub title: Option<String>,
    /// New director.
    #[schema(min_length = 1)]
    pub director: Option<String>,
    /// New release year (must be >= 1888).
    #[schema(minimum = 1888)]
    #[serde(default, deserialize_with = "optional_whole_year")]
    pub release_year: Option<i32>,
    /// New genre.
    #[schema(min_length = 1)]
    pub genre: Option<String>,
    /// New rating between 0 and 10.
    #[schema(minimum = 0.0, maximum = 10.0)]
    pub rating: Option<f64>,
}

impl ValidatedBody for UpdateMovieRequest {
    fn rules() -> &'static RuleSet {
        &UPDATE_RULES
    }
}

impl From<UpdateMovieRequest> for MoviePatch {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            title: req.title,
            director: req.director,
            release_year: req.release_year,
            genre: req.genre,
            rating: req.rating,
        }
    }
}

/// A movie as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "64f8f5f4c5b6c5b5c1234567",
    "title": "Inception",
    "director": "Christopher Nolan",
    "releaseYear": 2010,
    "genre": "Sci-Fi",
    "rating": 9
}))]
pub struct MovieDto {
    /// Auto-generated id of the movie.
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Director's name.
    pub director: String,
    /// Release year.
    pub release_year: i32,
    /// Genre label.
    pub genre: String,
    /// Rating between 0 and 10.
    pub rating: f64,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            director: movie.director,
            release_year: movie.release_year,
            genre: movie.genre,
            rating: movie.rating,
        }
    }
}

/// Response body for `DELETE /movies/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteMovieResponse {
    /// Confirmation message.
    #[schema(example = "Movie deleted")]
    pub message: String,
}
