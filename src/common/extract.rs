// src/common/extract.rs
// Extratores que devolvem rejeições no mesmo formato JSON traduzido dos demais erros

use axum::{
    extract::{FromRef, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

fn reject<S>(state: &S, locale: &Locale, key: &'static str, reason: String) -> ApiError
where
    AppState: FromRef<S>,
{
    tracing::debug!("Requisição rejeitada ({}): {}", key, reason);
    let app_state = AppState::from_ref(state);
    AppError::BadRequest(key).to_api_error(locale, &app_state.i18n_store)
}

/// Corpo JSON. Corpo malformado, tipo errado ou enum desconhecido viram 400 `invalid_body`.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(req.headers());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(reject(state, &locale, "invalid_body", rejection.body_text())),
        }
    }
}

/// Parâmetros de rota (ids).
#[derive(Debug)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => {
                let locale = Locale::from_headers(&parts.headers);
                Err(reject(state, &locale, "invalid_id", rejection.body_text()))
            }
        }
    }
}

/// Query string dos filtros.
#[derive(Debug)]
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(AppQuery(value)),
            Err(rejection) => {
                let locale = Locale::from_headers(&parts.headers);
                Err(reject(state, &locale, "invalid_query", rejection.body_text()))
            }
        }
    }
}
