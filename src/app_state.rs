//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{ApodClient, NameService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name registry for `/api/names`.
    pub name_service: Arc<NameService>,
    /// Astronomy client for `/api/apod`.
    pub apod_client: Arc<ApodClient>,
}
