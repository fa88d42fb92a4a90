// src/handlers/ai.rs

use axum::{extract::State, Json};

use crate::{
    common::{error::ApiError, extract::AppJson},
    config::AppState,
    middleware::i18n::Locale,
    models::ai::{ChatRequest, ChatResponse},
};

// POST /api/ai/chat
#[utoipa::path(
    post,
    path = "/api/ai/chat",
    tag = "AI",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Resposta do assistente", body = ChatResponse),
        (status = 400, description = "Mensagem ausente"),
        (status = 503, description = "GEMINI_API_KEY não configurada"),
        (status = 500, description = "Falha no Gemini")
    ),
    security(("session_cookie" = []))
)]
pub async fn chat(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let answer = app_state
        .ai_service
        .chat(payload.message.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let response = answer.unwrap_or_else(|| app_state.i18n_store.translate(&locale.0, "ai_empty_response"));
    Ok(Json(ChatResponse { response }))
}
