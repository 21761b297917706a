//! apod-registry server entry point.
//!
//! Opens the name store (PostgreSQL by default, applying migrations) and
//! serves the page and REST endpoints with Axum.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use apod_registry::api;
use apod_registry::app_state::AppState;
use apod_registry::config::{AppConfig, LogFormat, StoreBackend};
use apod_registry::persistence::{InMemoryNameStore, NameStore, PostgresNameStore};
use apod_registry::service::{ApodClient, NameService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting apod-registry");

    // Build persistence layer
    let store: Arc<dyn NameStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let store = PostgresNameStore::connect(&config).await?;
            if config.run_migrations {
                store.migrate().await?;
            }
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory name store; registrations are lost on restart");
            Arc::new(InMemoryNameStore::new())
        }
    };

    // Build service layer
    let name_service = Arc::new(NameService::new(store));
    let apod_client = Arc::new(ApodClient::new(&config.apod_api_url, &config.apod_api_key)?);
    tracing::info!(endpoint = apod_client.endpoint(), "astronomy client ready");

    // Build application state and router
    let app = api::build_app(AppState {
        name_service,
        apod_client,
    });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
