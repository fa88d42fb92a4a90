// src/handlers/system.rs
// Saúde, diagnóstico de conexões e dados de demonstração

use axum::{extract::State, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::system::{ConnectionReport, SeedInfo, SeedReport},
};

// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses((status = 200, description = "Servidor no ar", body = String))
)]
pub async fn health() -> &'static str {
    "OK"
}

// GET /api/test-connection
#[utoipa::path(
    get,
    path = "/api/test-connection",
    tag = "System",
    responses((status = 200, description = "Estado do banco e do CDN", body = ConnectionReport)),
    security(("session_cookie" = []))
)]
pub async fn test_connection(State(app_state): State<AppState>, locale: Locale) -> Json<ConnectionReport> {
    let mut report = app_state.system_service.connection_report(&app_state.db_pool).await;

    // As mensagens saem do serviço como chaves do catálogo
    for check in [&mut report.database, &mut report.cdn] {
        check.message = app_state.i18n_store.translate(&locale.0, &check.message);
    }

    Json(report)
}

// POST /api/seed
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "System",
    responses(
        (status = 200, description = "Dados de demonstração recriados", body = SeedReport),
        (status = 500, description = "Falha ao popular o banco; nada é alterado")
    ),
    security(("session_cookie" = []))
)]
pub async fn seed(State(app_state): State<AppState>, locale: Locale) -> Result<Json<SeedReport>, ApiError> {
    let created = app_state
        .seed_service
        .reseed(&app_state.db_pool)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(SeedReport {
        success: true,
        message: app_state.i18n_store.translate(&locale.0, "seed_success"),
        created,
    }))
}

// GET /api/seed
#[utoipa::path(
    get,
    path = "/api/seed",
    tag = "System",
    responses((status = 200, description = "O que o POST faz", body = SeedInfo)),
    security(("session_cookie" = []))
)]
pub async fn seed_info(State(app_state): State<AppState>, locale: Locale) -> Json<SeedInfo> {
    Json(SeedInfo {
        message: app_state.i18n_store.translate(&locale.0, "seed_info"),
        warning: app_state.i18n_store.translate(&locale.0, "seed_warning"),
    })
}
