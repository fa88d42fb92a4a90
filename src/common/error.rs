// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

/// Coleções do banco, usadas para montar mensagens de "não encontrado" e "removido".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Lead,
    Client,
    Employee,
    Invoice,
    Transaction,
    Event,
    Task,
    Product,
    LeadList,
}

impl Resource {
    pub fn not_found_key(self) -> &'static str {
        match self {
            Resource::Lead => "lead_not_found",
            Resource::Client => "client_not_found",
            Resource::Employee => "employee_not_found",
            Resource::Invoice => "invoice_not_found",
            Resource::Transaction => "transaction_not_found",
            Resource::Event => "event_not_found",
            Resource::Task => "task_not_found",
            Resource::Product => "product_not_found",
            Resource::LeadList => "list_not_found",
        }
    }

    pub fn deleted_key(self) -> &'static str {
        match self {
            Resource::Lead => "lead_deleted",
            Resource::Client => "client_deleted",
            Resource::Employee => "employee_deleted",
            Resource::Invoice => "invoice_deleted",
            Resource::Transaction => "transaction_deleted",
            Resource::Event => "event_deleted",
            Resource::Task => "task_deleted",
            Resource::Product => "product_deleted",
            Resource::LeadList => "list_deleted",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),

    #[error("Filtro inválido: {0}")]
    InvalidFilter(&'static str),

    #[error("Requisição inválida: {0}")]
    BadRequest(&'static str),

    #[error("Sessão ausente ou inválida")]
    Unauthorized,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Registro não encontrado: {0:?}")]
    NotFound(Resource),

    #[error("Serviço de IA indisponível")]
    AiUnavailable,

    #[error("Falha na geração da IA: {0}")]
    AiGenerationFailed(String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro de cliente HTTP: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::MissingField(_)
            | AppError::InvalidFilter(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AiUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Chave do catálogo de mensagens exibida ao usuário.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::MissingField(_) => "validation_failed",
            AppError::InvalidFilter(_) => "invalid_filter",
            AppError::BadRequest(key) => key,
            AppError::Unauthorized => "unauthorized",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::NotFound(resource) => resource.not_found_key(),
            AppError::AiUnavailable => "ai_unavailable",
            AppError::AiGenerationFailed(_) => "ai_generation_failed",
            _ => "internal_error",
        }
    }

    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let status = self.status();

        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            let key = e.message.as_deref().unwrap_or(&e.code);
                            store.translate(&locale.0, key)
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                Some(json!(details))
            }
            AppError::MissingField(field) => {
                let mut details = serde_json::Map::new();
                details.insert(
                    (*field).to_string(),
                    json!([store.translate(&locale.0, "required")]),
                );
                Some(Value::Object(details))
            }
            _ => None,
        };

        ApiError {
            status,
            error: store.translate(&locale.0, self.message_key()),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_taxonomy() {
        assert_eq!(AppError::MissingField("name").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound(Resource::Lead).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AiUnavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let store = I18nStore::load().expect("catálogos embutidos");
        let err = AppError::InternalServerError(anyhow::anyhow!("senha do banco vazou"));
        let api = err.to_api_error(&Locale("en".into()), &store);

        assert_eq!(api.error, store.translate("en", "internal_error"));
        assert!(!api.error.contains("senha"));
    }

    #[test]
    fn missing_field_lists_the_field_in_details() {
        let store = I18nStore::load().expect("catálogos embutidos");
        let api = AppError::MissingField("title").to_api_error(&Locale("ru".into()), &store);

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.expect("details");
        assert!(details.get("title").is_some());
    }

    #[test]
    fn not_found_is_translated_per_resource() {
        let store = I18nStore::load().expect("catálogos embutidos");
        let api = AppError::NotFound(Resource::Invoice).to_api_error(&Locale("en".into()), &store);

        assert_eq!(api.error, "Invoice not found");
    }
}
