// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    #[default]
    Pending,
    Cancelled,
}

// =============================================================================
//  FATURAS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    #[schema(example = "INV-007")]
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: Option<String>,
    #[schema(example = "Внедрение CRM")]
    pub service: String,
    #[schema(example = "2500000")]
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    pub issue_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fatura pronta para inserção. O número é gerado pelo serviço.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub client_name: String,
    pub client_email: Option<String>,
    pub service: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    pub issue_date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub service: Option<String>,
    #[validate(required(message = "required"))]
    pub amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    #[validate(required(message = "required"))]
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub issue_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

// O número da fatura não é editável
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoicePayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub service: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub issue_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoiceQuery {
    pub status: Option<String>,
}

// =============================================================================
//  TRANSAÇÕES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    /// Negativo para despesas.
    #[schema(example = "-150000")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub description: Option<String>,
    #[validate(required(message = "required"))]
    pub amount: Option<Decimal>,
    #[validate(required(message = "required"))]
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub pending_amount: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub stats: TransactionStats,
}
