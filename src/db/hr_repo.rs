// src/db/hr_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::crm_repo::delete_by_id,
    models::hr::{Employee, EmployeeStatus, NewEmployee, UpdateEmployeePayload},
};

const EMPLOYEE_COLUMNS: &str = "id, name, email, phone, role, department, location, status, salary, \
                                hire_date, notes, created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct HrRepository;

impl HrRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_employees<'e, E>(
        &self,
        executor: E,
        status: Option<EmployeeStatus>,
        department: Option<&str>,
    ) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees \
             WHERE ($1::employee_status IS NULL OR status = $1) \
               AND ($2::text IS NULL OR department = $2) \
             ORDER BY created_at DESC"
        );

        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(status)
            .bind(department)
            .fetch_all(executor)
            .await?;

        Ok(employees)
    }

    pub async fn find_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Employee))
    }

    pub async fn create_employee<'e, E>(&self, executor: E, employee: &NewEmployee) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO employees (name, email, phone, role, department, location, status, salary, hire_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(&employee.role)
            .bind(&employee.department)
            .bind(&employee.location)
            .bind(employee.status)
            .bind(employee.salary)
            .bind(employee.hire_date)
            .bind(&employee.notes)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_employee<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateEmployeePayload,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE employees SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                role = COALESCE($5, role),
                department = COALESCE($6, department),
                location = COALESCE($7, location),
                status = COALESCE($8, status),
                salary = COALESCE($9, salary),
                hire_date = COALESCE($10, hire_date),
                notes = COALESCE($11, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role)
            .bind(&input.department)
            .bind(&input.location)
            .bind(input.status)
            .bind(input.salary)
            .bind(input.hire_date)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Employee))
    }

    pub async fn delete_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "employees", id, Resource::Employee).await
    }
}
