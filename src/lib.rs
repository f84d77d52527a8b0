//! # movie-api
//!
//! REST API for managing a movie catalog stored in MongoDB.
//!
//! Five endpoints under `/movies` list, fetch, create, update and delete
//! movies. Request bodies are checked by a declarative rule chain before
//! any handler runs, and an OpenAPI document generated from the handler
//! annotations is served at `/api-docs`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Router + validation (api/)
//!     ├── REST Handlers (api/handlers/)
//!     │
//!     ├── MovieService (service/)
//!     │
//!     ├── MovieStore (persistence/)
//!     │
//!     └── MongoDB
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
