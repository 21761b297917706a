//! Astronomy picture of the day handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::AstronomyRecord;
use crate::error::{AppError, ErrorResponse};

/// `GET /api/apod` — Today's astronomy entry, fetched live.
///
/// # Errors
///
/// Returns [`AppError::Fetch`] if the external endpoint fails and
/// [`AppError::RateLimited`] if it throttles the configured key.
#[utoipa::path(
    get,
    path = "/api/apod",
    tag = "Astronomy",
    summary = "Today's astronomy picture",
    description = "Proxies a single request to the external APOD endpoint. Nothing is cached; every call goes upstream.",
    responses(
        (status = 200, description = "Today's entry", body = AstronomyRecord),
        (status = 429, description = "Upstream rate limit reached", body = ErrorResponse),
        (status = 502, description = "Upstream unreachable or failing", body = ErrorResponse),
    )
)]
pub async fn get_apod(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let record = state.apod_client.fetch_today().await?;
    Ok(Json(record))
}

/// Astronomy routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/apod", get(get_apod))
}
