// src/services/crm_service.rs

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{Executor, PgConnection, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::require},
    db::CrmRepository,
    models::crm::{
        Client, ClientStatus, CreateClientPayload, CreateLeadListPayload, CreateLeadPayload, Lead,
        LeadList, LeadSort, LeadStatus, NewClient, NewLead, Priority, RowError, UpdateClientPayload,
        UpdateLeadListPayload, UpdateLeadPayload, UploadReport,
    },
};

pub const DEFAULT_CLIENT_GROUP: &str = "ungrouped";

/// Posição de um lead novo: logo depois do último da coluna, ou 0 se a coluna estiver vazia.
pub fn next_position(max_in_column: Option<i32>) -> i32 {
    max_in_column.map_or(0, |max| max + 1)
}

/// Lê uma linha do CSV (já convertida em objeto JSON) como lead.
/// Em caso de falha devolve a chave da mensagem de erro da linha.
pub fn prepare_row(row: &Value, assigned_to: &str) -> Result<NewLead, &'static str> {
    let fields = row.as_object().ok_or("row_unreadable")?;

    let name = text_field(fields.get("name")).ok_or("name_required")?;
    let value = match fields.get("value") {
        None | Some(Value::Null) => Decimal::ZERO,
        Some(Value::String(s)) if s.trim().is_empty() => Decimal::ZERO,
        Some(Value::String(s)) => Decimal::from_str(s.trim()).map_err(|_| "row_unreadable")?,
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).map_err(|_| "row_unreadable")?,
        Some(_) => return Err("row_unreadable"),
    };

    Ok(NewLead {
        name,
        email: text_field(fields.get("email")),
        phone: text_field(fields.get("phone")),
        company: text_field(fields.get("company")),
        value,
        status: enum_field::<LeadStatus>(fields.get("status"))?.unwrap_or_default(),
        priority: enum_field::<Priority>(fields.get("priority"))?.unwrap_or_default(),
        notes: text_field(fields.get("notes")),
        assigned_to: Some(assigned_to.to_string()),
        position: 0,
    })
}

// Planilhas costumam trazer telefones como número
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn enum_field<T: DeserializeOwned>(value: Option<&Value>) -> Result<Option<T>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => serde_json::from_value(Value::String(s.trim().to_lowercase()))
            .map(Some)
            .map_err(|_| "row_unreadable"),
        Some(_) => Err("row_unreadable"),
    }
}

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
}

impl CrmService {
    pub fn new(repo: CrmRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  LEADS
    // =========================================================================

    pub async fn list_leads<'e, E>(
        &self,
        executor: E,
        status: Option<LeadStatus>,
        sort: LeadSort,
    ) -> Result<Vec<Lead>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_leads(executor, status, sort).await
    }

    pub async fn get_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_lead(executor, id).await
    }

    pub async fn create_lead(
        &self,
        conn: &mut PgConnection,
        payload: CreateLeadPayload,
        assigned_to: &str,
    ) -> Result<Lead, AppError> {
        let status = payload.status.unwrap_or_default();
        let lead = NewLead {
            name: require(payload.name, "name")?.trim().to_string(),
            email: payload.email,
            phone: payload.phone,
            company: payload.company,
            value: payload.value.unwrap_or(Decimal::ZERO),
            status,
            priority: payload.priority.unwrap_or_default(),
            notes: payload.notes,
            assigned_to: Some(assigned_to.to_string()),
            position: 0,
        };

        self.insert_at_end(conn, lead).await
    }

    // Duas consultas sem trava: criações simultâneas na mesma coluna podem empatar na posição
    async fn insert_at_end(&self, conn: &mut PgConnection, mut lead: NewLead) -> Result<Lead, AppError> {
        let max = self.repo.max_position(&mut *conn, lead.status).await?;
        lead.position = next_position(max);
        self.repo.create_lead(&mut *conn, &lead).await
    }

    pub async fn update_lead<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateLeadPayload,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_lead(executor, id, payload).await
    }

    pub async fn delete_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_lead(executor, id).await
    }

    /// Importa linhas do CSV uma a uma, sem transação. Linhas com problema
    /// são registradas no relatório e puladas. `error` traz chaves do catálogo.
    pub async fn import_leads(
        &self,
        conn: &mut PgConnection,
        rows: &[Value],
        assigned_to: &str,
    ) -> Result<UploadReport, AppError> {
        if rows.is_empty() {
            return Err(AppError::BadRequest("invalid_leads_data"));
        }

        let mut created = Vec::new();
        let mut error_details = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;

            let lead = match prepare_row(row, assigned_to) {
                Ok(lead) => lead,
                Err(key) => {
                    error_details.push(RowError { row: row_number, error: key.to_string() });
                    continue;
                }
            };

            match self.insert_at_end(conn, lead).await {
                Ok(lead) => created.push(lead),
                Err(e) => {
                    tracing::warn!("⚠️ Linha {} da importação falhou: {}", row_number, e);
                    error_details.push(RowError { row: row_number, error: "internal_error".to_string() });
                }
            }
        }

        tracing::info!(
            "📥 Importação de leads: {} criados, {} com erro",
            created.len(),
            error_details.len()
        );

        Ok(UploadReport {
            success: true,
            created: created.len(),
            errors: error_details.len(),
            error_details,
            leads: created,
        })
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn list_clients<'e, E>(&self, executor: E, group: Option<&str>) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_clients(executor, group).await
    }

    pub async fn get_client<'e, E>(&self, executor: E, id: Uuid) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_client(executor, id).await
    }

    pub async fn create_client<'e, E>(&self, executor: E, payload: CreateClientPayload) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = NewClient {
            name: require(payload.name, "name")?,
            email: payload.email,
            phone: payload.phone,
            company: payload.company,
            website: payload.website,
            address: payload.address,
            group: payload
                .group
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CLIENT_GROUP.to_string()),
            status: payload.status.unwrap_or(ClientStatus::Prospect),
            total_value: payload.total_value.unwrap_or(Decimal::ZERO),
            notes: payload.notes,
        };

        self.repo.create_client(executor, &client).await
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateClientPayload,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_client(executor, id, payload).await
    }

    pub async fn delete_client<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_client(executor, id).await
    }

    // =========================================================================
    //  LISTAS DE LEADS
    // =========================================================================

    pub async fn list_lead_lists<'e, E>(&self, executor: E) -> Result<Vec<LeadList>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_lead_lists(executor).await
    }

    pub async fn get_lead_list<'e, E>(&self, executor: E, id: Uuid) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_lead_list(executor, id).await
    }

    pub async fn create_lead_list<'e, E>(
        &self,
        executor: E,
        payload: &CreateLeadListPayload,
        created_by: &str,
    ) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let name = require(payload.name.as_deref(), "name")?;
        self.repo.create_lead_list(executor, name, payload, created_by).await
    }

    pub async fn update_lead_list<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateLeadListPayload,
    ) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_lead_list(executor, id, payload).await
    }

    pub async fn delete_lead_list<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_lead_list(executor, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_lead_of_a_column_goes_to_zero() {
        assert_eq!(next_position(None), 0);
    }

    #[test]
    fn new_lead_goes_after_the_last_one() {
        assert_eq!(next_position(Some(0)), 1);
        assert_eq!(next_position(Some(41)), 42);
    }

    #[test]
    fn row_with_name_gets_defaults() {
        let lead = prepare_row(&json!({ "name": "  Айгуль  ", "value": "250000.50" }), "user-1").unwrap();

        assert_eq!(lead.name, "Айгуль");
        assert_eq!(lead.value, Decimal::from_str("250000.50").unwrap());
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.priority, Priority::Medium);
        assert_eq!(lead.assigned_to.as_deref(), Some("user-1"));
    }

    #[test]
    fn row_accepts_numbers_and_known_enums() {
        let row = json!({
            "name": "ТОО Алтын",
            "phone": 77011234567u64,
            "value": 1200,
            "status": "Qualified",
            "priority": "high",
            "email": ""
        });
        let lead = prepare_row(&row, "u").unwrap();

        assert_eq!(lead.phone.as_deref(), Some("77011234567"));
        assert_eq!(lead.value, Decimal::from(1200));
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.priority, Priority::High);
        assert_eq!(lead.email, None);
    }

    #[test]
    fn nameless_rows_are_rejected() {
        assert_eq!(prepare_row(&json!({ "email": "a@b.kz" }), "u"), Err("name_required"));
        assert_eq!(prepare_row(&json!({ "name": "   " }), "u"), Err("name_required"));
    }

    #[test]
    fn unreadable_rows_are_rejected() {
        assert_eq!(prepare_row(&json!("só texto"), "u"), Err("row_unreadable"));
        assert_eq!(prepare_row(&json!({ "name": "X", "value": "muito" }), "u"), Err("row_unreadable"));
        assert_eq!(prepare_row(&json!({ "name": "X", "status": "sleeping" }), "u"), Err("row_unreadable"));
    }

    #[test]
    fn mixed_upload_counts_valid_and_nameless_rows() {
        let rows = [
            json!({ "name": "A" }),
            json!({ "company": "sem nome" }),
            json!({ "name": "B", "status": "won" }),
            json!({}),
        ];
        let outcome: Vec<_> = rows.iter().map(|r| prepare_row(r, "u")).collect();

        assert_eq!(outcome.iter().filter(|r| r.is_ok()).count(), 2);
        assert_eq!(outcome.iter().filter(|r| r.is_err()).count(), 2);
    }
}
