// src/services/finance_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Executor, PgConnection, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::require},
    db::FinanceRepository,
    models::finance::{
        CreateInvoicePayload, CreateTransactionPayload, Invoice, InvoiceStatus, NewInvoice,
        NewTransaction, Transaction, TransactionKind, TransactionListResponse, TransactionStats,
        TransactionStatus, UpdateInvoicePayload, UpdateTransactionPayload,
    },
};

/// `INV-` + contador com pelo menos 3 dígitos (INV-007, INV-1234).
pub fn format_invoice_number(sequence: i64) -> String {
    format!("INV-{sequence:03}")
}

/// Despesas são gravadas negativas e receitas positivas, qualquer que seja o sinal enviado.
pub fn signed_amount(kind: TransactionKind, amount: Decimal) -> Decimal {
    match kind {
        TransactionKind::Income => amount.abs(),
        TransactionKind::Expense => -amount.abs(),
    }
}

impl TransactionStats {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut stats = TransactionStats::default();

        for t in transactions {
            match (t.status, t.kind) {
                (TransactionStatus::Completed, TransactionKind::Income) => stats.total_income += t.amount,
                (TransactionStatus::Completed, TransactionKind::Expense) => stats.total_expenses += t.amount.abs(),
                (TransactionStatus::Pending, _) => stats.pending_amount += t.amount.abs(),
                (TransactionStatus::Cancelled, _) => {}
            }
        }

        stats.net_profit = stats.total_income - stats.total_expenses;
        stats
    }
}

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    pub async fn list_invoices<'e, E>(
        &self,
        executor: E,
        status: Option<InvoiceStatus>,
    ) -> Result<Vec<Invoice>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_invoices(executor, status).await
    }

    pub async fn get_invoice<'e, E>(&self, executor: E, id: Uuid) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_invoice(executor, id).await
    }

    pub async fn create_invoice(
        &self,
        conn: &mut PgConnection,
        payload: CreateInvoicePayload,
    ) -> Result<Invoice, AppError> {
        let invoice = NewInvoice {
            client_name: require(payload.client_name, "clientName")?,
            client_email: payload.client_email,
            service: require(payload.service, "service")?,
            amount: require(payload.amount, "amount")?,
            status: payload.status.unwrap_or_default(),
            due_date: require(payload.due_date, "dueDate")?,
            issue_date: payload.issue_date.unwrap_or_else(Utc::now),
            notes: payload.notes,
        };

        let sequence = self.repo.next_invoice_sequence(&mut *conn).await?;
        let number = format_invoice_number(sequence);

        self.repo.create_invoice(&mut *conn, &number, &invoice).await
    }

    pub async fn update_invoice<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateInvoicePayload,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_invoice(executor, id, payload).await
    }

    pub async fn delete_invoice<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_invoice(executor, id).await
    }

    // =========================================================================
    //  TRANSAÇÕES
    // =========================================================================

    /// Lista filtrada + estatísticas calculadas sobre todas as transações.
    pub async fn list_transactions(
        &self,
        conn: &mut PgConnection,
        kind: Option<TransactionKind>,
        status: Option<TransactionStatus>,
    ) -> Result<TransactionListResponse, AppError> {
        let transactions = self.repo.list_transactions(&mut *conn, kind, status).await?;

        let stats = if kind.is_none() && status.is_none() {
            TransactionStats::from_transactions(&transactions)
        } else {
            let all = self.repo.all_transactions(&mut *conn).await?;
            TransactionStats::from_transactions(&all)
        };

        Ok(TransactionListResponse { transactions, stats })
    }

    pub async fn get_transaction<'e, E>(&self, executor: E, id: Uuid) -> Result<Transaction, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_transaction(executor, id).await
    }

    pub async fn create_transaction<'e, E>(
        &self,
        executor: E,
        payload: CreateTransactionPayload,
    ) -> Result<Transaction, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let kind = require(payload.kind, "type")?;
        let transaction = NewTransaction {
            description: require(payload.description, "description")?,
            amount: signed_amount(kind, require(payload.amount, "amount")?),
            kind,
            category: payload.category,
            date: payload.date.unwrap_or_else(Utc::now),
            status: payload.status.unwrap_or_default(),
            reference: payload.reference,
            notes: payload.notes,
        };

        self.repo.create_transaction(executor, &transaction).await
    }

    /// Quando valor ou tipo mudam, o sinal é recalculado com base no registro atual.
    pub async fn update_transaction(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        mut payload: UpdateTransactionPayload,
    ) -> Result<Transaction, AppError> {
        if payload.amount.is_some() || payload.kind.is_some() {
            let current = self.repo.find_transaction(&mut *conn, id).await?;
            let kind = payload.kind.unwrap_or(current.kind);
            let amount = payload.amount.unwrap_or(current.amount);
            payload.amount = Some(signed_amount(kind, amount));
        }

        self.repo.update_transaction(&mut *conn, id, &payload).await
    }

    pub async fn delete_transaction<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_transaction(executor, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionKind, status: TransactionStatus, amount: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            description: "teste".into(),
            amount: signed_amount(kind, Decimal::from(amount)),
            kind,
            category: None,
            date: Utc::now(),
            status,
            reference: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn invoice_numbers_are_zero_padded() {
        assert_eq!(format_invoice_number(1), "INV-001");
        assert_eq!(format_invoice_number(42), "INV-042");
        assert_eq!(format_invoice_number(1234), "INV-1234");
    }

    #[test]
    fn expenses_are_negative_and_income_positive() {
        let amount = Decimal::from(150_000);

        assert_eq!(signed_amount(TransactionKind::Expense, amount), -amount);
        assert_eq!(signed_amount(TransactionKind::Expense, -amount), -amount);
        assert_eq!(signed_amount(TransactionKind::Income, -amount), amount);
        assert_eq!(signed_amount(TransactionKind::Income, amount), amount);
    }

    #[test]
    fn stats_only_count_completed_for_totals() {
        let all = vec![
            tx(TransactionKind::Income, TransactionStatus::Completed, 1000),
            tx(TransactionKind::Income, TransactionStatus::Completed, 500),
            tx(TransactionKind::Expense, TransactionStatus::Completed, 300),
            tx(TransactionKind::Expense, TransactionStatus::Pending, 200),
            tx(TransactionKind::Income, TransactionStatus::Pending, 100),
            tx(TransactionKind::Income, TransactionStatus::Cancelled, 9999),
        ];

        let stats = TransactionStats::from_transactions(&all);

        assert_eq!(stats.total_income, Decimal::from(1500));
        assert_eq!(stats.total_expenses, Decimal::from(300));
        assert_eq!(stats.net_profit, Decimal::from(1200));
        assert_eq!(stats.pending_amount, Decimal::from(300));
    }

    #[test]
    fn empty_ledger_has_zero_stats() {
        assert_eq!(TransactionStats::from_transactions(&[]), TransactionStats::default());
    }
}
