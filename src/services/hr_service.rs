// src/services/hr_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::require},
    db::HrRepository,
    models::hr::{CreateEmployeePayload, Employee, EmployeeStatus, NewEmployee, UpdateEmployeePayload},
};

#[derive(Clone)]
pub struct HrService {
    repo: HrRepository,
}

impl HrService {
    pub fn new(repo: HrRepository) -> Self {
        Self { repo }
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
        self.repo.list_employees(executor, status, department).await
    }

    pub async fn get_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_employee(executor, id).await
    }

    pub async fn create_employee<'e, E>(
        &self,
        executor: E,
        payload: CreateEmployeePayload,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = NewEmployee {
            name: require(payload.name, "name")?,
            email: require(payload.email, "email")?,
            phone: payload.phone,
            role: require(payload.role, "role")?,
            department: payload.department,
            location: payload.location,
            status: payload.status.unwrap_or_default(),
            salary: payload.salary,
            hire_date: payload.hire_date,
            notes: payload.notes,
        };

        self.repo.create_employee(executor, &employee).await
    }

    pub async fn update_employee<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateEmployeePayload,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_employee(executor, id, payload).await
    }

    pub async fn delete_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_employee(executor, id).await
    }
}
