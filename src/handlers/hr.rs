// src/handlers/hr.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        extract::{AppJson, AppPath, AppQuery},
        validation::{parse_filter, text_filter},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::hr::{CreateEmployeePayload, Employee, EmployeeQuery, UpdateEmployeePayload},
};

// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "{ employees: [...] }", body = Vec<Employee>),
        (status = 400, description = "Filtro inválido")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<EmployeeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let department = text_filter(query.department.as_deref());

    let employees = app_state
        .hr_service
        .list_employees(&app_state.db_pool, status, department.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "employees": employees })))
}

// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = CreateEmployeePayload,
    responses(
        (status = 201, description = "{ employee }", body = Employee),
        (status = 400, description = "Nome, e-mail ou cargo ausentes")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateEmployeePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let employee = app_state
        .hr_service
        .create_employee(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "employee": employee }))))
}

// GET /api/employees/{id}
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "{ employee }", body = Employee),
        (status = 404, description = "Funcionário não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = app_state
        .hr_service
        .get_employee(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "employee": employee })))
}

// PATCH /api/employees/{id}
#[utoipa::path(
    patch,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    request_body = UpdateEmployeePayload,
    responses(
        (status = 200, description = "{ employee }", body = Employee),
        (status = 404, description = "Funcionário não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateEmployeePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let employee = app_state
        .hr_service
        .update_employee(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "employee": employee })))
}

// DELETE /api/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Funcionário não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_employee(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .hr_service
        .delete_employee(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Employee.deleted_key());
    Ok(Json(json!({ "message": message })))
}
