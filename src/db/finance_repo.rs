// src/db/finance_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::crm_repo::delete_by_id,
    models::finance::{
        Invoice, InvoiceStatus, NewInvoice, NewTransaction, Transaction, TransactionKind,
        TransactionStatus, UpdateInvoicePayload, UpdateTransactionPayload,
    },
};

const INVOICE_COLUMNS: &str = "id, invoice_number, client_name, client_email, service, amount, status, \
                               due_date, issue_date, notes, created_at, updated_at";
const TRANSACTION_COLUMNS: &str = "id, description, amount, kind, category, date, status, reference, notes, \
                                   created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct FinanceRepository;

impl FinanceRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    /// Próximo valor do contador de faturas. A sequence nunca devolve o mesmo número duas vezes.
    pub async fn next_invoice_sequence<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let next = sqlx::query_scalar::<_, i64>("SELECT nextval('invoice_number_seq')")
            .fetch_one(executor)
            .await?;

        Ok(next)
    }

    pub async fn list_invoices<'e, E>(
        &self,
        executor: E,
        status: Option<InvoiceStatus>,
    ) -> Result<Vec<Invoice>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices \
             WHERE ($1::invoice_status IS NULL OR status = $1) \
             ORDER BY created_at DESC"
        );

        let invoices = sqlx::query_as::<_, Invoice>(&sql)
            .bind(status)
            .fetch_all(executor)
            .await?;

        Ok(invoices)
    }

    pub async fn find_invoice<'e, E>(&self, executor: E, id: Uuid) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Invoice))
    }

    pub async fn create_invoice<'e, E>(
        &self,
        executor: E,
        invoice_number: &str,
        invoice: &NewInvoice,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO invoices (invoice_number, client_name, client_email, service, amount, status, due_date, issue_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {INVOICE_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Invoice>(&sql)
            .bind(invoice_number)
            .bind(&invoice.client_name)
            .bind(&invoice.client_email)
            .bind(&invoice.service)
            .bind(invoice.amount)
            .bind(invoice.status)
            .bind(invoice.due_date)
            .bind(invoice.issue_date)
            .bind(&invoice.notes)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_invoice<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateInvoicePayload,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE invoices SET
                client_name = COALESCE($2, client_name),
                client_email = COALESCE($3, client_email),
                service = COALESCE($4, service),
                amount = COALESCE($5, amount),
                status = COALESCE($6, status),
                due_date = COALESCE($7, due_date),
                issue_date = COALESCE($8, issue_date),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INVOICE_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .bind(&input.client_name)
            .bind(&input.client_email)
            .bind(&input.service)
            .bind(input.amount)
            .bind(input.status)
            .bind(input.due_date)
            .bind(input.issue_date)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Invoice))
    }

    pub async fn delete_invoice<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "invoices", id, Resource::Invoice).await
    }

    // =========================================================================
    //  TRANSAÇÕES
    // =========================================================================

    pub async fn list_transactions<'e, E>(
        &self,
        executor: E,
        kind: Option<TransactionKind>,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<Transaction>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE ($1::transaction_kind IS NULL OR kind = $1) \
               AND ($2::transaction_status IS NULL OR status = $2) \
             ORDER BY date DESC"
        );

        let transactions = sqlx::query_as::<_, Transaction>(&sql)
            .bind(kind)
            .bind(status)
            .fetch_all(executor)
            .await?;

        Ok(transactions)
    }

    /// Todas as transações, sem filtro (base das estatísticas).
    pub async fn all_transactions<'e, E>(&self, executor: E) -> Result<Vec<Transaction>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.list_transactions(executor, None, None).await
    }

    pub async fn find_transaction<'e, E>(&self, executor: E, id: Uuid) -> Result<Transaction, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Transaction))
    }

    pub async fn create_transaction<'e, E>(
        &self,
        executor: E,
        transaction: &NewTransaction,
    ) -> Result<Transaction, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO transactions (description, amount, kind, category, date, status, reference, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Transaction>(&sql)
            .bind(&transaction.description)
            .bind(transaction.amount)
            .bind(transaction.kind)
            .bind(&transaction.category)
            .bind(transaction.date)
            .bind(transaction.status)
            .bind(&transaction.reference)
            .bind(&transaction.notes)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    /// O sinal do valor já deve vir resolvido pelo serviço.
    pub async fn update_transaction<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateTransactionPayload,
    ) -> Result<Transaction, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE transactions SET
                description = COALESCE($2, description),
                amount = COALESCE($3, amount),
                kind = COALESCE($4, kind),
                category = COALESCE($5, category),
                date = COALESCE($6, date),
                status = COALESCE($7, status),
                reference = COALESCE($8, reference),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TRANSACTION_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.kind)
            .bind(&input.category)
            .bind(input.date)
            .bind(input.status)
            .bind(&input.reference)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Transaction))
    }

    pub async fn delete_transaction<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "transactions", id, Resource::Transaction).await
    }
}
