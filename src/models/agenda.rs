// src/models/agenda.rs
// Calendário (eventos) e tarefas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::crm::Priority;

pub const DEFAULT_EVENT_COLOR: &str = "indigo";

// =============================================================================
//  EVENTOS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    #[schema(example = "Встреча с клиентом")]
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub all_day: bool,
    #[schema(example = "indigo")]
    pub color: String,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub all_day: bool,
    pub color: String,
    pub location: Option<String>,
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required(message = "required"))]
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub start_date: Option<DateTime<Utc>>,
    #[validate(required(message = "required"))]
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub end_date: Option<DateTime<Utc>>,
    pub all_day: Option<bool>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub end_date: Option<DateTime<Utc>>,
    pub all_day: Option<bool>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    /// Só filtra quando `endDate` também vier
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub end_date: Option<DateTime<Utc>>,
}

// =============================================================================
//  TAREFAS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    #[schema(example = "Подготовить презентацию")]
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub due_date: Option<DateTime<Utc>>,
    pub assignee: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "crate::common::dates::deserialize_optional")]
    pub due_date: Option<DateTime<Utc>>,
    pub assignee: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
}
