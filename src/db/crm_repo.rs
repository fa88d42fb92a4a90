// src/db/crm_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    models::crm::{
        Client, CreateLeadListPayload, Lead, LeadList, LeadSort, LeadStatus, NewClient, NewLead,
        UpdateClientPayload, UpdateLeadListPayload, UpdateLeadPayload,
    },
};

const LEAD_COLUMNS: &str = "id, name, email, phone, company, value, status, priority, notes, \
                            assigned_to, position, created_at, updated_at";
const CLIENT_COLUMNS: &str = r#"id, name, email, phone, company, website, address, "group", status, total_value, notes, created_at, updated_at"#;
const LIST_COLUMNS: &str = "id, name, description, lead_ids, tags, created_by, created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct CrmRepository;

impl CrmRepository {
    pub fn new() -> Self {
        Self
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
        // ORDER BY vem de uma lista fechada (LeadSort), nunca do usuário
        let sql = format!(
            "SELECT {LEAD_COLUMNS} FROM leads \
             WHERE ($1::lead_status IS NULL OR status = $1) \
             ORDER BY {}",
            sort.order_by()
        );

        let leads = sqlx::query_as::<_, Lead>(&sql)
            .bind(status)
            .fetch_all(executor)
            .await?;

        Ok(leads)
    }

    pub async fn find_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Lead))
    }

    /// Maior posição ocupada na coluna do status (`None` se a coluna estiver vazia).
    pub async fn max_position<'e, E>(&self, executor: E, status: LeadStatus) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let max = sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(position) FROM leads WHERE status = $1")
            .bind(status)
            .fetch_one(executor)
            .await?;

        Ok(max)
    }

    pub async fn create_lead<'e, E>(&self, executor: E, lead: &NewLead) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO leads (name, email, phone, company, value, status, priority, notes, assigned_to, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {LEAD_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Lead>(&sql)
            .bind(&lead.name)
            .bind(&lead.email)
            .bind(&lead.phone)
            .bind(&lead.company)
            .bind(lead.value)
            .bind(lead.status)
            .bind(lead.priority)
            .bind(&lead.notes)
            .bind(&lead.assigned_to)
            .bind(lead.position)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    /// Atualização parcial: campos ausentes mantêm o valor atual.
    pub async fn update_lead<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateLeadPayload,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE leads SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                value = COALESCE($6, value),
                status = COALESCE($7, status),
                priority = COALESCE($8, priority),
                notes = COALESCE($9, notes),
                assigned_to = COALESCE($10, assigned_to),
                position = COALESCE($11, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {LEAD_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Lead>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(input.value)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.notes)
            .bind(&input.assigned_to)
            .bind(input.position)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Lead))
    }

    pub async fn delete_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "leads", id, Resource::Lead).await
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn list_clients<'e, E>(&self, executor: E, group: Option<&str>) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"SELECT {CLIENT_COLUMNS} FROM clients
               WHERE ($1::text IS NULL OR "group" = $1)
               ORDER BY created_at DESC"#
        );

        let clients = sqlx::query_as::<_, Client>(&sql)
            .bind(group)
            .fetch_all(executor)
            .await?;

        Ok(clients)
    }

    pub async fn find_client<'e, E>(&self, executor: E, id: Uuid) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Client))
    }

    pub async fn create_client<'e, E>(&self, executor: E, client: &NewClient) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO clients (name, email, phone, company, website, address, "group", status, total_value, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {CLIENT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Client>(&sql)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(&client.company)
            .bind(&client.website)
            .bind(&client.address)
            .bind(&client.group)
            .bind(client.status)
            .bind(client.total_value)
            .bind(&client.notes)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateClientPayload,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE clients SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                website = COALESCE($6, website),
                address = COALESCE($7, address),
                "group" = COALESCE($8, "group"),
                status = COALESCE($9, status),
                total_value = COALESCE($10, total_value),
                notes = COALESCE($11, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Client>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.website)
            .bind(&input.address)
            .bind(&input.group)
            .bind(input.status)
            .bind(input.total_value)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Client))
    }

    pub async fn delete_client<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "clients", id, Resource::Client).await
    }

    // =========================================================================
    //  LISTAS DE LEADS
    // =========================================================================

    pub async fn list_lead_lists<'e, E>(&self, executor: E) -> Result<Vec<LeadList>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {LIST_COLUMNS} FROM lead_lists ORDER BY created_at DESC");
        let lists = sqlx::query_as::<_, LeadList>(&sql).fetch_all(executor).await?;
        Ok(lists)
    }

    pub async fn find_lead_list<'e, E>(&self, executor: E, id: Uuid) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {LIST_COLUMNS} FROM lead_lists WHERE id = $1");
        sqlx::query_as::<_, LeadList>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::LeadList))
    }

    pub async fn create_lead_list<'e, E>(
        &self,
        executor: E,
        name: &str,
        input: &CreateLeadListPayload,
        created_by: &str,
    ) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO lead_lists (name, description, lead_ids, tags, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LIST_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, LeadList>(&sql)
            .bind(name)
            .bind(&input.description)
            .bind(input.lead_ids.clone().unwrap_or_default())
            .bind(input.tags.clone().unwrap_or_default())
            .bind(created_by)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_lead_list<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateLeadListPayload,
    ) -> Result<LeadList, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE lead_lists SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                lead_ids = COALESCE($4, lead_ids),
                tags = COALESCE($5, tags),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {LIST_COLUMNS}
            "#
        );

        sqlx::query_as::<_, LeadList>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.lead_ids)
            .bind(&input.tags)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::LeadList))
    }

    pub async fn delete_lead_list<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "lead_lists", id, Resource::LeadList).await
    }
}

/// DELETE por id; nenhuma linha afetada vira 404 do recurso.
pub(crate) async fn delete_by_id<'e, E>(
    executor: E,
    table: &'static str,
    id: Uuid,
    resource: Resource,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(resource));
    }
    Ok(())
}
