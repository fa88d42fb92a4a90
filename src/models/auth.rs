// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(required(message = "required"), email(message = "invalid_email"))]
    #[schema(example = "admin@test.com")]
    pub email: Option<String>,

    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

/// O que fica guardado no cookie de sessão e é devolvido ao painel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&User> for SessionData {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: Option<SessionData>,
}

// Estrutura de dados ("claims") dentro do JWT do cookie
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub exp: usize, // Expiration time (quando a sessão expira)
    pub iat: usize, // Issued At (quando a sessão foi criada)
}
