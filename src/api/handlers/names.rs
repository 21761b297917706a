//! Name registry handlers: register and list.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{AddNameRequest, AddNameResponse};
use crate::app_state::AppState;
use crate::domain::NameRecord;
use crate::error::{AppError, ErrorResponse};

/// `POST /api/names` — Register a name.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a malformed body or a missing or
/// blank field, and [`AppError::Store`] if the insert fails.
#[utoipa::path(
    post,
    path = "/api/names",
    tag = "Names",
    summary = "Register a name",
    description = "Stores a first/last name pair and returns the stored record with its generated id and timestamp.",
    request_body = AddNameRequest,
    responses(
        (status = 201, description = "Name stored", body = AddNameResponse),
        (status = 400, description = "Missing or blank field, or malformed body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn add_name(
    State(state): State<AppState>,
    payload: Result<Json<AddNameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) =
        payload.map_err(|e| AppError::Validation(format!("Invalid request: {}", e.body_text())))?;

    let record = state
        .name_service
        .add_name(req.first_name, req.last_name)
        .await?;

    Ok((StatusCode::CREATED, Json(AddNameResponse::created(record))))
}

/// `GET /api/names` — List registered names, most recent first.
///
/// # Errors
///
/// Returns [`AppError::Store`] if the select fails.
#[utoipa::path(
    get,
    path = "/api/names",
    tag = "Names",
    summary = "List names",
    description = "Returns every registered name ordered by creation time, newest first.",
    responses(
        (status = 200, description = "All registered names", body = Vec<NameRecord>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_names(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.name_service.list_names().await?;
    Ok(Json(records))
}

/// Name registry routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/names", post(add_name).get(list_names))
}
