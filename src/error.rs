//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type at the HTTP boundary. Each
//! variant maps to a status code and one of two JSON bodies:
//!
//! ```json
//! { "error": "Movie not found" }
//! ```
//!
//! or, for validation failures,
//!
//! ```json
//! { "errors": [ { "field": "rating", "message": "Rating must be between 0 and 10" } ] }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::validation::FieldError;
use crate::persistence::StoreError;

/// Body of every non-validation error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    #[schema(example = "Movie not found")]
    pub error: String,
}

/// Body of a validation failure: one entry per rejected field.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Every rule violation, in rule order.
    pub errors: Vec<FieldError>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant          | HTTP Status                 |
/// |------------------|-----------------------------|
/// | `Validation`     | 400 Bad Request             |
/// | `MovieNotFound`  | 404 Not Found               |
/// | `StoreWrite`     | 400 Bad Request             |
/// | `StoreRead`      | 500 Internal Server Error   |
/// | `Unavailable`    | 503 Service Unavailable     |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body broke one or more field rules.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// No movie has the requested id.
    #[error("Movie not found")]
    MovieNotFound,

    /// The store rejected a create, update or delete.
    #[error("{0}")]
    StoreWrite(String),

    /// The store failed while listing or fetching.
    #[error("{0}")]
    StoreRead(String),

    /// The store is unreachable.
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Maps a store failure on a read path.
    ///
    /// A malformed id cannot name an existing document, so it reads as a
    /// miss.
    #[must_use]
    pub fn from_read(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => Self::MovieNotFound,
            other => {
                tracing::error!(error = %other, "store read failed");
                Self::StoreRead(other.to_string())
            }
        }
    }

    /// Maps a store failure on a write path.
    #[must_use]
    pub fn from_write(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => Self::MovieNotFound,
            other => {
                tracing::error!(error = %other, "store write failed");
                Self::StoreWrite(other.to_string())
            }
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::StoreWrite(_) => StatusCode::BAD_REQUEST,
            Self::MovieNotFound => StatusCode::NOT_FOUND,
            Self::StoreRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = match self {
            Self::Validation(errors) => axum::Json(ValidationErrorResponse { errors }).into_response(),
            other => axum::Json(ErrorResponse {
                error: other.to_string(),
            })
            .into_response(),
        };
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InvalidMovieId;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MovieNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::StoreWrite("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::StoreRead("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Unavailable("down".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn malformed_id_reads_as_not_found() {
        let err = StoreError::InvalidId(InvalidMovieId("x".into()));
        assert!(matches!(ApiError::from_read(err), ApiError::MovieNotFound));
        let err = StoreError::InvalidId(InvalidMovieId("x".into()));
        assert!(matches!(ApiError::from_write(err), ApiError::MovieNotFound));
    }

    #[test]
    fn other_store_errors_split_by_path() {
        assert!(matches!(
            ApiError::from_read(StoreError::MissingId),
            ApiError::StoreRead(_)
        ));
        assert!(matches!(
            ApiError::from_write(StoreError::MissingId),
            ApiError::StoreWrite(_)
        ));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ApiError::MovieNotFound.to_string(), "Movie not found");
    }
}
