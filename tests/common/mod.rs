//! Shared helpers for the HTTP integration tests.

#![allow(dead_code, clippy::panic)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use serde_json::Value;
use tower::ServiceExt;

use movie_api::api;
use movie_api::app_state::AppState;
use movie_api::persistence::MemoryMovieStore;

/// Builds the full application over a fresh in-memory store, with the
/// same middleware stack `main.rs` uses.
pub fn build_test_app() -> Router {
    api::build_app(AppState::new(Arc::new(MemoryMovieStore::new())))
}

/// Sends a request with an optional JSON body through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("invalid request for {uri}");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed on {uri}");
    };
    response
}

/// `GET uri`.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Reads the whole response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("failed to read body");
    };
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// The movie used across the scenarios.
pub fn inception() -> Value {
    serde_json::json!({
        "title": "Inception",
        "director": "Christopher Nolan",
        "releaseYear": 2010,
        "genre": "Sci-Fi",
        "rating": 9
    })
}

/// Creates `movie` through the API and returns the response body.
pub async fn create(app: &Router, movie: Value) -> Value {
    let response = send(app, Method::POST, "/movies", Some(movie)).await;
    body_json(response).await
}
