//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::MovieStore;
use crate::service::MovieService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Movie service for all business logic.
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    /// Wires the service layer over an already-connected store.
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self {
            movie_service: Arc::new(MovieService::new(store)),
        }
    }
}
