// src/handlers/auth.rs

use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
        validation::require,
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{
        auth::{LoginUserPayload, SessionData, SessionResponse},
        system::MessageResponse,
    },
    services::auth::{SESSION_COOKIE, SESSION_TTL_DAYS},
};

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "{ user }; grava o cookie de sessão", body = SessionData),
        (status = 400, description = "E-mail ou senha ausentes"),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let email = require(payload.email, "email")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    let password = require(payload.password, "password")
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let (session, token) = app_state
        .auth_service
        .login(&email, &password)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🔑 Login de {}", session.email);

    let jar = jar.add(session_cookie(token, app_state.config.production));
    Ok((jar, Json(json!({ "user": session }))))
}

// GET /api/auth/session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "Auth",
    responses((status = 200, description = "Usuário da sessão, ou null", body = SessionResponse))
)]
pub async fn get_session(State(app_state): State<AppState>, jar: CookieJar) -> Json<SessionResponse> {
    // Nunca responde 401: cookie ausente ou inválido vira `user: null`
    let user = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| app_state.auth_service.verify_session_token(cookie.value()).ok());

    Json(SessionResponse { user })
}

// DELETE /api/auth/session
#[utoipa::path(
    delete,
    path = "/api/auth/session",
    tag = "Auth",
    responses((status = 200, description = "Cookie de sessão removido", body = MessageResponse))
)]
pub async fn logout(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    let message = app_state.i18n_store.translate(&locale.0, "logged_out");

    (jar, Json(MessageResponse { message }))
}
