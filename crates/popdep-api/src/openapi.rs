//! # OpenAPI Document Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "popdep API",
        description = "Population estimates by French department, by sex and age bracket."
    ),
    paths(
        crate::routes::population::list_population,
        crate::routes::population::get_population_by_dept,
        crate::routes::population::get_france,
    ),
    components(schemas(
        popdep_core::DepartmentRecord,
        popdep_core::AgeBreakdown,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "population", description = "Department population estimates"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
