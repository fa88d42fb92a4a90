// src/handlers/agenda.rs
// Calendário e tarefas

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
        validation::parse_filter,
    },
    config::AppState,
    middleware::i18n::Locale,
    models::agenda::{
        CreateEventPayload, CreateTaskPayload, Event, EventQuery, Task, TaskQuery, UpdateEventPayload,
        UpdateTaskPayload,
    },
};

// =============================================================================
//  EVENTOS
// =============================================================================

// GET /api/events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    params(EventQuery),
    responses((status = 200, description = "{ events: [...] }", body = Vec<Event>)),
    security(("session_cookie" = []))
)]
pub async fn list_events(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<EventQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let events = app_state
        .agenda_service
        .list_events(&app_state.db_pool, query.start_date, query.end_date)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "events": events })))
}

// POST /api/events
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    request_body = CreateEventPayload,
    responses(
        (status = 201, description = "{ event }", body = Event),
        (status = 400, description = "Título ou datas ausentes")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_event(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateEventPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let event = app_state
        .agenda_service
        .create_event(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "event": event }))))
}

// GET /api/events/{id}
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "{ event }", body = Event),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_event(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let event = app_state
        .agenda_service
        .get_event(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "event": event })))
}

// PATCH /api/events/{id}
#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    request_body = UpdateEventPayload,
    responses(
        (status = 200, description = "{ event }", body = Event),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_event(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateEventPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let event = app_state
        .agenda_service
        .update_event(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "event": event })))
}

// DELETE /api/events/{id}
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_event(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .agenda_service
        .delete_event(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Event.deleted_key());
    Ok(Json(json!({ "message": message })))
}

// =============================================================================
//  TAREFAS
// =============================================================================

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    params(TaskQuery),
    responses(
        (status = 200, description = "{ tasks: [...] }", body = Vec<Task>),
        (status = 400, description = "Filtro inválido")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<TaskQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let priority = parse_filter(query.priority.as_deref(), "priority")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let tasks = app_state
        .agenda_service
        .list_tasks(&app_state.db_pool, status, priority)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "tasks": tasks })))
}

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "{ task }", body = Task),
        (status = 400, description = "Título ausente")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateTaskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let task = app_state
        .agenda_service
        .create_task(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "task": task }))))
}

// GET /api/tasks/{id}
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 200, description = "{ task }", body = Task),
        (status = 404, description = "Tarefa não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let task = app_state
        .agenda_service
        .get_task(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "task": task })))
}

// PATCH /api/tasks/{id}
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    request_body = UpdateTaskPayload,
    responses(
        (status = 200, description = "{ task }", body = Task),
        (status = 404, description = "Tarefa não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateTaskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let task = app_state
        .agenda_service
        .update_task(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "task": task })))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Tarefa não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .agenda_service
        .delete_task(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Task.deleted_key());
    Ok(Json(json!({ "message": message })))
}
