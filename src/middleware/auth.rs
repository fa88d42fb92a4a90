// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::auth::SessionData,
    services::auth::SESSION_COOKIE,
};

fn session_from_jar(app_state: &AppState, jar: &CookieJar) -> Result<SessionData, AppError> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;
    app_state.auth_service.verify_session_token(cookie.value())
}

// Barra qualquer requisição sem cookie de sessão válido
pub async fn session_guard(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = session_from_jar(&app_state, &jar).map_err(|e| {
        let locale = Locale::from_headers(request.headers());
        e.to_api_error(&locale, &app_state.i18n_store)
    })?;

    // Disponibiliza a sessão para os handlers
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Usuário da sessão atual.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionData);

impl AuthenticatedUser {
    /// Identificador gravado em `assigned_to` e `created_by`.
    pub fn id(&self) -> String {
        self.0.user_id.to_string()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<SessionData>() {
            return Ok(AuthenticatedUser(session.clone()));
        }

        // Fora do guard: valida o cookie aqui mesmo
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        session_from_jar(&app_state, &jar)
            .map(AuthenticatedUser)
            .map_err(|e| e.to_api_error(&Locale::from_headers(&parts.headers), &app_state.i18n_store))
    }
}
