// src/handlers/inventory.rs

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
    models::inventory::{CreateProductPayload, Product, ProductQuery, UpdateProductPayload},
};

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "{ products: [...] }", body = Vec<Product>),
        (status = 400, description = "Filtro inválido")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
    AppQuery(query): AppQuery<ProductQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_filter(query.status.as_deref(), "status")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let category = text_filter(query.category.as_deref());

    let products = app_state
        .inventory_service
        .list_products(&app_state.db_pool, status, category.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "products": products })))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "{ product }", body = Product),
        (status = 400, description = "Nome, preço ou categoria ausentes")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .inventory_service
        .create_product(&app_state.db_pool, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(json!({ "product": product }))))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "{ product }", body = Product),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .inventory_service
        .get_product(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "product": product })))
}

// PATCH /api/products/{id}
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "{ product }", body = Product),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .inventory_service
        .update_product(&app_state.db_pool, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "product": product })))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "{ message }"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    locale: Locale,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .inventory_service
        .delete_product(&app_state.db_pool, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, Resource::Product.deleted_key());
    Ok(Json(json!({ "message": message })))
}
