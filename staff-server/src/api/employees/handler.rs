//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::JsonBody;
use crate::core::ServerState;
use shared::AppResult;
use shared::models::{
    DeleteResponse, Employee, EmployeeCreate, EmployeePage, EmployeeUpdate, PageParams,
    PageRequest,
};

/// Create an employee and its three contacts
///
/// Contacts come back as bare ids, unresolved.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee<String>>)> {
    let employee = state.employees.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// List employees, one page at a time
pub async fn list(
    State(state): State<ServerState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<EmployeePage>> {
    let request = PageRequest::from_params(&PageParams::from_pairs(pairs));
    let page = state.employees.list(request).await?;
    Ok(Json(page))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get(&id).await?;
    Ok(Json(employee))
}

/// Update an employee and, optionally, its contacts
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.update(&id, patch).await?;
    Ok(Json(employee))
}

/// Delete an employee together with its contacts
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.employees.delete(&id).await?;
    Ok(Json(DeleteResponse::employee_deleted()))
}
