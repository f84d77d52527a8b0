//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase on the wire (`releaseYear`).

pub mod movie_dto;

pub use movie_dto::*;
