//! movie-api server entry point.
//!
//! Connects the movie store and serves the REST API until Ctrl-C or
//! SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_api::api;
use movie_api::api::docs::DOCS_PATH;
use movie_api::app_state::AppState;
use movie_api::config::{AppConfig, LogFormat, StoreBackend};
use movie_api::persistence::{MemoryMovieStore, MongoMovieStore, MovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so `.env` can set RUST_LOG and LOG_FORMAT
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting movie-api");

    // Connect the store
    let store: Arc<dyn MovieStore> = match config.store_backend {
        StoreBackend::Mongo => Arc::new(
            MongoMovieStore::connect(&config)
                .await
                .context("failed to initialise MongoDB client")?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data will not survive a restart");
            Arc::new(MemoryMovieStore::new())
        }
    };

    // Build router
    let app = api::build_app(AppState::new(Arc::clone(&store)));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, docs = DOCS_PATH, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
