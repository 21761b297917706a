//! System endpoints: health check.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Liveness report including which name store is serving requests.
#[derive(Debug, Serialize, ToSchema)]
struct HealthReport {
    status: &'static str,
    /// `"postgres"` or `"memory"`.
    store: &'static str,
    version: &'static str,
    checked_at: String,
}

/// `GET /health` — Liveness and active store backend.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Reports liveness, the crate version, and which name store backend is active.",
    responses(
        (status = 200, description = "Service is up", body = HealthReport),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthReport {
        status: "ok",
        store: state.name_service.store_backend(),
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now().to_rfc3339(),
    })
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
