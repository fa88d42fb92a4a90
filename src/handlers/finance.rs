// src/handlers/finance.rs
// Faturas e transações

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
    models::finance::{
        CreateInvoicePayload, CreateTransactionPayload, Invoice, InvoiceQuery, Transaction,
        TransactionListResponse, TransactionQuery, UpdateInvoicePayload, UpdateTransactionPayload,
    },
};

// =============================================================================
//  FATURAS
// =============================================================================

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(InvoiceQuery),
    responses(
        (status = 200, description = "{ invoices: [...] }", body = Vec<Invoice>),
        (status = 400, description = "Filtro inválido")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<InvoiceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let invoices = app_state
        .finance_service
        .list_invoices(&app_state.db_pool, status)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "invoices": invoices })))
}

// POST /api/invoices
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 201, description = "{ invoice } com número INV-xxx gerado", body = Invoice),
        (status = 400, description = "Cliente, serviço, valor ou vencimento ausentes")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateInvoicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = app_state
        .db_pool
        .acquire()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let invoice = app_state
        .finance_service
        .create_invoice(&mut conn, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

// GET /api/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID da fatura")),
    responses(
        (status = 200, description = "{ invoice }", body = Invoice),
        (status = 404, description = "Fatura não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = app_state
        .finance_service
        .get_invoice(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "invoice": invoice })))
}

// PATCH /api/invoices/{id}
#[utoipa::path(
    patch,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID da fatura")),
    request_body = UpdateInvoicePayload,
    responses(
        (status = 200, description = "{ invoice }", body = Invoice),
        (status = 404, description = "Fatura não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateInvoicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let invoice = app_state
        .finance_service
        .update_invoice(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "invoice": invoice })))
}

// DELETE /api/invoices/{id}
#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID da fatura")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Fatura não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .finance_service
        .delete_invoice(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Invoice.deleted_key());
    Ok(Json(json!({ "message": message })))
}

// =============================================================================
//  TRANSAÇÕES
// =============================================================================

// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transactions",
    params(TransactionQuery),
    responses(
        (status = 200, description = "Transações filtradas + estatísticas gerais", body = TransactionListResponse),
        (status = 400, description = "Filtro inválido")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<TransactionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_filter(query.kind.as_deref(), "type")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = app_state
        .db_pool
        .acquire()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let response = app_state
        .finance_service
        .list_transactions(&mut conn, kind, status)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(response))
}

// POST /api/transactions
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transactions",
    request_body = CreateTransactionPayload,
    responses(
        (status = 201, description = "{ transaction }; despesas gravadas com valor negativo", body = Transaction),
        (status = 400, description = "Descrição, valor ou tipo ausentes")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateTransactionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let transaction = app_state
        .finance_service
        .create_transaction(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "transaction": transaction }))))
}

// GET /api/transactions/{id}
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    params(("id" = Uuid, Path, description = "ID da transação")),
    responses(
        (status = 200, description = "{ transaction }", body = Transaction),
        (status = 404, description = "Transação não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_transaction(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = app_state
        .finance_service
        .get_transaction(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "transaction": transaction })))
}

// PATCH /api/transactions/{id}
#[utoipa::path(
    patch,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    params(("id" = Uuid, Path, description = "ID da transação")),
    request_body = UpdateTransactionPayload,
    responses(
        (status = 200, description = "{ transaction }", body = Transaction),
        (status = 404, description = "Transação não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_transaction(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateTransactionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mut conn = app_state
        .db_pool
        .acquire()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let transaction = app_state
        .finance_service
        .update_transaction(&mut conn, id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "transaction": transaction })))
}

// DELETE /api/transactions/{id}
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "Transactions",
    params(("id" = Uuid, Path, description = "ID da transação")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Transação não encontrada")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_transaction(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .finance_service
        .delete_transaction(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Transaction.deleted_key());
    Ok(Json(json!({ "message": message })))
}
