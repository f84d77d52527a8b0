//! Movie CRUD handlers: list, get, create, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateMovieRequest, DeleteMovieResponse, MovieDto, UpdateMovieRequest};
use crate::api::validation::ValidatedJson;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};

/// `GET /movies`: List every movie.
///
/// # Errors
///
/// Returns [`ApiError::StoreRead`] if the store fails.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    summary = "Get all movies",
    description = "Returns every movie in the store's natural order.",
    responses(
        (status = 200, description = "List of all movies", body = Vec<MovieDto>),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let movies = state.movie_service.get_movies().await?;
    let data: Vec<MovieDto> = movies.into_iter().map(MovieDto::from).collect();
    Ok(Json(data))
}

/// `GET /movies/{id}`: Get a movie by id.
///
/// # Errors
///
/// Returns [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Get a movie by ID",
    params(
        ("id" = String, Path, description = "Movie ID"),
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieDto),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = state.movie_service.get_movie_by_id(&id).await?;
    Ok(Json(MovieDto::from(movie)))
}

/// `POST /movies`: Create a new movie.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a bad body and
/// [`ApiError::StoreWrite`] if the store rejects the insert.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    summary = "Create a new movie",
    description = "All five fields are required. The id is assigned by the database.",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieDto),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = state.movie_service.create_movie(req.into()).await?;
    Ok((StatusCode::CREATED, Json(MovieDto::from(movie))))
}

/// `PUT /movies/{id}`: Partially update a movie.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a bad body and
/// [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Update a movie",
    description = "Only the fields present in the body change; each must satisfy the same rule as on creation.",
    params(
        ("id" = String, Path, description = "Movie ID"),
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MovieDto),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = state.movie_service.update_movie(&id, req.into()).await?;
    Ok(Json(MovieDto::from(movie)))
}

/// `DELETE /movies/{id}`: Delete a movie.
///
/// # Errors
///
/// Returns [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Delete a movie",
    params(
        ("id" = String, Path, description = "Movie ID"),
    ),
    responses(
        (status = 200, description = "Movie deleted", body = DeleteMovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.movie_service.delete_movie(&id).await?;
    Ok(Json(DeleteMovieResponse {
        message: "Movie deleted".to_string(),
    }))
}

/// Movie routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}
