// src/models/hr.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "employee_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Менеджер продаж")]
    pub role: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: EmployeeStatus,
    pub salary: Option<Decimal>,
    pub hire_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: EmployeeStatus,
    pub salary: Option<Decimal>,
    pub hire_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeePayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub role: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub salary: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub hire_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub role: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub salary: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub hire_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    pub status: Option<String>,
    pub department: Option<String>,
}
