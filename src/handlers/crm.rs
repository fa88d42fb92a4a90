// src/handlers/crm.rs
// Leads (funil + importação CSV), clientes e listas de leads

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
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::crm::{
        Client, ClientQuery, CreateClientPayload, CreateLeadListPayload, CreateLeadPayload, Lead,
        LeadList, LeadQuery, LeadSort, UpdateClientPayload, UpdateLeadListPayload, UpdateLeadPayload,
        UploadLeadsPayload, UploadReport,
    },
};

// =============================================================================
//  LEADS
// =============================================================================

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    params(LeadQuery),
    responses(
        (status = 200, description = "{ leads: [...] }", body = Vec<Lead>),
        (status = 400, description = "Filtro inválido"),
        (status = 401, description = "Sem sessão")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<LeadQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let sort = LeadSort::from_param(query.sort.as_deref());

    let leads = app_state
        .crm_service
        .list_leads(&app_state.db_pool, status, sort)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "leads": leads })))
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = CreateLeadPayload,
    responses(
        (status = 201, description = "{ lead }", body = Lead),
        (status = 400, description = "Nome ausente")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateLeadPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = app_state
        .db_pool
        .acquire()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .crm_service
        .create_lead(&mut conn, payload, &user.id())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "lead": lead }))))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "{ lead }", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .crm_service
        .get_lead(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "lead": lead })))
}

// PATCH /api/leads/{id} (também usado pelo arrastar-e-soltar)
#[utoipa::path(
    patch,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = UpdateLeadPayload,
    responses(
        (status = 200, description = "{ lead }", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateLeadPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .crm_service
        .update_lead(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "lead": lead })))
}

// DELETE /api/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .crm_service
        .delete_lead(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Lead.deleted_key());
    Ok(Json(json!({ "message": message })))
}

// POST /api/leads/upload
#[utoipa::path(
    post,
    path = "/api/leads/upload",
    tag = "Leads",
    request_body = UploadLeadsPayload,
    responses(
        (status = 200, description = "Relatório da importação", body = UploadReport),
        (status = 400, description = "Lista de leads ausente ou vazia")
    ),
    security(("session_cookie" = []))
)]
pub async fn upload_leads(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<UploadLeadsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = match payload.leads {
        Some(serde_json::Value::Array(rows)) if !rows.is_empty() => rows,
        _ => {
            return Err(AppError::BadRequest("invalid_leads_data").to_api_error(&locale, &app_state.i18n_store));
        }
    };

    let mut conn = app_state
        .db_pool
        .acquire()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut report = app_state
        .crm_service
        .import_leads(&mut conn, &rows, &user.id())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    for detail in &mut report.error_details {
        detail.error = app_state.i18n_store.translate(&locale.0, &detail.error);
    }

    Ok(Json(report))
}

// =============================================================================
//  CLIENTES
// =============================================================================

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    params(ClientQuery),
    responses((status = 200, description = "{ clients: [...] }", body = Vec<Client>)),
    security(("session_cookie" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<ClientQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let group = text_filter(query.group.as_deref());

    let clients = app_state
        .crm_service
        .list_clients(&app_state.db_pool, group.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "clients": clients })))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "{ client }", body = Client),
        (status = 400, description = "Nome ausente")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let client = app_state
        .crm_service
        .create_client(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "client": client }))))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "{ client }", body = Client),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let client = app_state
        .crm_service
        .get_client(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "client": client })))
}

// PATCH /api/clients/{id}
#[utoipa::path(
    patch,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = UpdateClientPayload,
    responses(
        (status = 200, description = "{ client }", body = Client),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let client = app_state
        .crm_service
        .update_client(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "client": client })))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .crm_service
        .delete_client(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Client.deleted_key());
    Ok(Json(json!({ "message": message })))
}

// =============================================================================
//  LISTAS DE LEADS
// =============================================================================

// GET /api/lists
#[utoipa::path(
    get,
    path = "/api/lists",
    tag = "Lists",
    responses((status = 200, description = "{ lists: [...] }", body = Vec<LeadList>)),
    security(("session_cookie" = []))
)]
pub async fn list_lead_lists(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let lists = app_state
        .crm_service
        .list_lead_lists(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "lists": lists })))
}

// POST /api/lists
#[utoipa::path(
    post,
    path = "/api/lists",
    tag = "Lists",
    request_body = CreateLeadListPayload,
    responses(
        (status = 201, description = "{ list }", body = LeadList),
        (status = 400, description = "Nome ausente")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_lead_list(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateLeadListPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let list = app_state
        .crm_service
        .create_lead_list(&app_state.db_pool, &payload, &user.id())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "list": list }))))
}

// GET /api/lists/{id}
#[utoipa::path(
    get,
    path = "/api/lists/{id}",
    tag = "Lists",
    params(("id" = Uuid, Path, description = "ID da lista")),
    responses(
        (status = 200, description = "{ list }", body = LeadList),
        (status = 404, description = "Lista não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_lead_list(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let list = app_state
        .crm_service
        .get_lead_list(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "list": list })))
}

// PATCH /api/lists/{id}
#[utoipa::path(
    patch,
    path = "/api/lists/{id}",
    tag = "Lists",
    params(("id" = Uuid, Path, description = "ID da lista")),
    request_body = UpdateLeadListPayload,
    responses(
        (status = 200, description = "{ list }", body = LeadList),
        (status = 404, description = "Lista não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_lead_list(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateLeadListPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let list = app_state
        .crm_service
        .update_lead_list(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "list": list })))
}

// DELETE /api/lists/{id}
#[utoipa::path(
    delete,
    path = "/api/lists/{id}",
    tag = "Lists",
    params(("id" = Uuid, Path, description = "ID da lista")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Lista não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_lead_list(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .crm_service
        .delete_lead_list(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::LeadList.deleted_key());
    Ok(Json(json!({ "message": message })))
}
