// src/models/system.rs
// Diagnóstico de conexões e carga de dados de demonstração

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Error,
    NotConfigured,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceCheck {
    pub status: ConnectionStatus,
    pub message: String,
}

impl ServiceCheck {
    pub fn connected(message: impl Into<String>) -> Self {
        Self { status: ConnectionStatus::Connected, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ConnectionStatus::Error, message: message.into() }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self { status: ConnectionStatus::NotConfigured, message: message.into() }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectionReport {
    pub database: ServiceCheck,
    pub cdn: ServiceCheck,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedCounts {
    pub leads: usize,
    pub clients: usize,
    pub employees: usize,
    pub transactions: usize,
    pub invoices: usize,
    pub events: usize,
    pub tasks: usize,
    pub products: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedReport {
    pub success: bool,
    pub message: String,
    pub created: SeedCounts,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedInfo {
    pub message: String,
    pub warning: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
