//! Employee hierarchy endpoints

use axum::Json;
use axum::extract::{Path, State};
use http::StatusCode;

use crate::error::HierarchyError;
use crate::models::{EmployeeNode, EmployeeUpsert};
use crate::state::AppState;

type ApiResult<T> = Result<T, HierarchyError>;

/// GET /api/employee/{id}
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmployeeNode>> {
    let node = state.service.employee_by_id(id).await?;
    Ok(Json(node))
}

/// GET /api/employee
pub async fn get_top_level_managers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmployeeNode>>> {
    let nodes = state.service.top_level_managers().await?;
    Ok(Json(nodes))
}

/// PUT /api/employee
pub async fn upsert_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeUpsert>,
) -> ApiResult<StatusCode> {
    state.service.upsert_employee(request).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/employee/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
