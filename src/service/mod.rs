//! Service layer: business rules between the handlers and the store.
//!
//! [`MovieService`] turns the store's "no such document" answers into
//! [`crate::error::ApiError::MovieNotFound`].

pub mod movie_service;

pub use movie_service::MovieService;
