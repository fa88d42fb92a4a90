// src/models/crm.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// --- ENUMS ---

/// Colunas do funil de vendas (Kanban), na ordem em que aparecem no painel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lead_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];
}

// Compartilhado por leads e tarefas. A ordem do enum no Postgres é low < medium < high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "client_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Inactive,
    Prospect,
}

// =============================================================================
//  LEADS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    #[schema(example = "Нурлан Сериков")]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[schema(example = "1500000")]
    pub value: Decimal,
    pub status: LeadStatus,
    pub priority: Priority,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    /// Ordem manual dentro da coluna do status.
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lead pronto para inserção, com padrões e posição já resolvidos.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub value: Decimal,
    pub status: LeadStatus,
    pub priority: Priority,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub position: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    #[schema(example = "Асель Касымова")]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub value: Option<Decimal>,
    pub status: Option<LeadStatus>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

// Usado também pelo arrastar-e-soltar do Kanban (status + position)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub value: Option<Decimal>,
    pub status: Option<LeadStatus>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadSort {
    #[default]
    Position,
    Priority,
    Date,
    Name,
}

impl LeadSort {
    /// Valores desconhecidos caem na ordenação manual.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("priority") => LeadSort::Priority,
            Some("date") => LeadSort::Date,
            Some("name") => LeadSort::Name,
            _ => LeadSort::Position,
        }
    }

    pub fn order_by(self) -> &'static str {
        match self {
            LeadSort::Position => "position ASC",
            LeadSort::Priority => "priority DESC, position ASC",
            LeadSort::Date => "created_at DESC",
            LeadSort::Name => "name ASC",
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeadQuery {
    /// Coluna do funil
    pub status: Option<String>,
    /// position | priority | date | name
    pub sort: Option<String>,
}

// --- Importação CSV ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadLeadsPayload {
    /// Linhas do CSV já convertidas em objetos pelo painel.
    /// Fica como JSON solto: qualquer coisa que não seja lista é 400 `invalid_leads_data`.
    #[schema(value_type = Option<Vec<Object>>)]
    pub leads: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RowError {
    /// Linha (começando em 1)
    pub row: usize,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub success: bool,
    pub created: usize,
    pub errors: usize,
    pub error_details: Vec<RowError>,
    pub leads: Vec<Lead>,
}

// =============================================================================
//  CLIENTES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    #[schema(example = "ungrouped")]
    pub group: String,
    pub status: ClientStatus,
    pub total_value: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub group: String,
    pub status: ClientStatus,
    pub total_value: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
    pub status: Option<ClientStatus>,
    pub total_value: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
    pub status: Option<ClientStatus>,
    pub total_value: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientQuery {
    pub group: Option<String>,
}

// =============================================================================
//  LISTAS DE LEADS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadList {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    // Referências soltas: não há chave estrangeira
    pub lead_ids: Vec<String>,
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadListPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub lead_ids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadListPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub lead_ids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}
