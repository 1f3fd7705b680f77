//! # Population Routes
//!
//! Routes:
//! - GET /api/population: Every listed department, in file order
//! - GET /api/population/{dept_id}: One department by exact code
//! - GET /api/france: National totals over the listed departments
//!
//! The listing keeps numeric codes plus Corsica (`2A`, `2B`) and overseas
//! codes. The lookup applies no such filter and matches any row of the
//! file whose trimmed code equals `dept_id`.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use popdep_core::DepartmentRecord;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Build the population router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/population", get(list_population))
        .route("/api/population/{dept_id}", get(get_population_by_dept))
        .route("/api/france", get(get_france))
}

/// GET /api/population: List departments.
#[utoipa::path(
    get,
    path = "/api/population",
    responses(
        (status = 200, description = "Listed departments in file order", body = Vec<DepartmentRecord>),
    ),
    tag = "population"
)]
pub async fn list_population(State(state): State<AppState>) -> Json<Vec<DepartmentRecord>> {
    Json(state.table.list_departments())
}

/// GET /api/population/{dept_id}: Fetch one department.
#[utoipa::path(
    get,
    path = "/api/population/{dept_id}",
    params(
        ("dept_id" = String, Path, description = "Department code, e.g. `01`, `2A`, `974`"),
    ),
    responses(
        (status = 200, description = "Department found", body = DepartmentRecord),
        (status = 404, description = "No row has this code", body = ErrorBody),
    ),
    tag = "population"
)]
pub async fn get_population_by_dept(
    State(state): State<AppState>,
    Path(dept_id): Path<String>,
) -> Result<Json<DepartmentRecord>, AppError> {
    state
        .table
        .find_department(&dept_id)
        .map(Json)
        .ok_or_else(AppError::department_not_found)
}

/// GET /api/france: National totals.
#[utoipa::path(
    get,
    path = "/api/france",
    responses(
        (status = 200, description = "Sum of all listed departments, id `FR`", body = DepartmentRecord),
    ),
    tag = "population"
)]
pub async fn get_france(State(state): State<AppState>) -> Json<DepartmentRecord> {
    Json(state.table.france_summary())
}
