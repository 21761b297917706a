//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use super::dto::{AddNameRequest, AddNameResponse};
use super::handlers;
use crate::domain::{AstronomyRecord, NameRecord};
use crate::error::ErrorResponse;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "apod-registry",
        description = "Astronomy picture of the day with a persisted visitor name registry."
    ),
    paths(
        handlers::names::add_name,
        handlers::names::list_names,
        handlers::apod::get_apod,
        handlers::system::health_handler,
    ),
    components(schemas(
        AddNameRequest,
        AddNameResponse,
        NameRecord,
        AstronomyRecord,
        ErrorResponse,
    )),
    tags(
        (name = "Names", description = "Visitor name registry"),
        (name = "Astronomy", description = "Daily astronomy picture"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
