//! OpenAPI document and the routes that serve it.
//!
//! The document is derived at compile time from the `#[utoipa::path]`
//! annotations on the handlers. With the `swagger-ui` feature the
//! interactive UI is mounted at [`DOCS_PATH`]; the raw JSON is always
//! served at [`OPENAPI_JSON_PATH`].

use axum::Router;
use utoipa::OpenApi;

use super::dto::{CreateMovieRequest, DeleteMovieResponse, MovieDto, UpdateMovieRequest};
use super::handlers::{movie, system};
use super::validation::FieldError;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ValidationErrorResponse};

/// Path of the interactive documentation UI.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the raw OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";

/// OpenAPI description of the movie API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Movie API",
        version = "1.0.0",
        description = "Movie management API with CRUD operations",
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(
        movie::list_movies,
        movie::get_movie,
        movie::create_movie,
        movie::update_movie,
        movie::delete_movie,
        system::health_handler,
    ),
    components(schemas(
        MovieDto,
        CreateMovieRequest,
        UpdateMovieRequest,
        DeleteMovieResponse,
        ErrorResponse,
        ValidationErrorResponse,
        FieldError,
        system::HealthResponse,
    )),
    tags(
        (name = "Movies", description = "Movie management API"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Documentation routes.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Documentation routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    let doc = ApiDoc::openapi();
    Router::new().route(OPENAPI_JSON_PATH, get(move || async move { Json(doc) }))
}
