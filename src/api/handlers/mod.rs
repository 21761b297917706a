//! REST endpoint handlers organized by resource.

pub mod apod;
pub mod names;
pub mod page;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(names::routes()).merge(apod::routes())
}
