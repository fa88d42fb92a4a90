// src/handlers/settings.rs

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::{
    common::{error::ApiError, extract::AppJson},
    config::AppState,
    middleware::i18n::Locale,
    models::settings::{Settings, UpdateSettingsRequest},
};

// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses((status = 200, description = "{ settings }; criadas com os padrões na primeira leitura", body = Settings)),
    security(("session_cookie" = []))
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let settings = app_state
        .settings_service
        .get_settings(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "settings": settings })))
}

// PATCH /api/settings
#[utoipa::path(
    patch,
    path = "/api/settings",
    tag = "Settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "{ settings }", body = Settings),
        (status = 400, description = "Idioma não suportado")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = app_state
        .settings_service
        .update_settings(&app_state.db_pool, payload, &app_state.i18n_store)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(json!({ "settings": settings })))
}
