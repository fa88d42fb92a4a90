// src/db/agenda_repo.rs
// Eventos do calendário e tarefas

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::crm_repo::delete_by_id,
    models::{
        agenda::{Event, NewEvent, NewTask, Task, TaskStatus, UpdateEventPayload, UpdateTaskPayload},
        crm::Priority,
    },
};

const EVENT_COLUMNS: &str = "id, title, description, start_date, end_date, all_day, color, location, \
                             attendees, created_at, updated_at";
const TASK_COLUMNS: &str = "id, title, description, priority, status, due_date, assignee, created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct AgendaRepository;

impl AgendaRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  EVENTOS
    // =========================================================================

    /// `range` filtra pelo início do evento (limites inclusivos).
    pub async fn list_events<'e, E>(
        &self,
        executor: E,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<Event>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE ($1::timestamptz IS NULL OR start_date BETWEEN $1 AND $2) \
             ORDER BY start_date ASC"
        );

        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(range.map(|(from, _)| from))
            .bind(range.map(|(_, to)| to))
            .fetch_all(executor)
            .await?;

        Ok(events)
    }

    pub async fn find_event<'e, E>(&self, executor: E, id: Uuid) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Event))
    }

    pub async fn create_event<'e, E>(&self, executor: E, event: &NewEvent) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO events (title, description, start_date, end_date, all_day, color, location, attendees)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Event>(&sql)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .bind(event.all_day)
            .bind(&event.color)
            .bind(&event.location)
            .bind(&event.attendees)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_event<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateEventPayload,
    ) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                all_day = COALESCE($6, all_day),
                color = COALESCE($7, color),
                location = COALESCE($8, location),
                attendees = COALESCE($9, attendees),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.all_day)
            .bind(&input.color)
            .bind(&input.location)
            .bind(&input.attendees)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Event))
    }

    pub async fn delete_event<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "events", id, Resource::Event).await
    }

    // =========================================================================
    //  TAREFAS
    // =========================================================================

    pub async fn list_tasks<'e, E>(
        &self,
        executor: E,
        status: Option<TaskStatus>,
        priority: Option<Priority>,
    ) -> Result<Vec<Task>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks \
             WHERE ($1::task_status IS NULL OR status = $1) \
               AND ($2::priority IS NULL OR priority = $2) \
             ORDER BY created_at DESC"
        );

        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(status)
            .bind(priority)
            .fetch_all(executor)
            .await?;

        Ok(tasks)
    }

    pub async fn find_task<'e, E>(&self, executor: E, id: Uuid) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Task))
    }

    pub async fn create_task<'e, E>(&self, executor: E, task: &NewTask) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO tasks (title, description, priority, status, due_date, assignee)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TASK_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Task>(&sql)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.priority)
            .bind(task.status)
            .bind(task.due_date)
            .bind(&task.assignee)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_task<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateTaskPayload,
    ) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                priority = COALESCE($4, priority),
                status = COALESCE($5, status),
                due_date = COALESCE($6, due_date),
                assignee = COALESCE($7, assignee),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority)
            .bind(input.status)
            .bind(input.due_date)
            .bind(&input.assignee)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Task))
    }

    pub async fn delete_task<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "tasks", id, Resource::Task).await
    }
}
