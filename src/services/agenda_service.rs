// src/services/agenda_service.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::require},
    db::AgendaRepository,
    models::{
        agenda::{
            CreateEventPayload, CreateTaskPayload, Event, NewEvent, NewTask, Task, TaskStatus,
            UpdateEventPayload, UpdateTaskPayload, DEFAULT_EVENT_COLOR,
        },
        crm::Priority,
    },
};

/// O intervalo só vale com as duas pontas.
pub fn event_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    start.zip(end)
}

#[derive(Clone)]
pub struct AgendaService {
    repo: AgendaRepository,
}

impl AgendaService {
    pub fn new(repo: AgendaRepository) -> Self {
        Self { repo }
    }

    // --- Eventos ---

    pub async fn list_events<'e, E>(
        &self,
        executor: E,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_events(executor, event_range(start, end)).await
    }

    pub async fn get_event<'e, E>(&self, executor: E, id: Uuid) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_event(executor, id).await
    }

    pub async fn create_event<'e, E>(&self, executor: E, payload: CreateEventPayload) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let event = NewEvent {
            title: require(payload.title, "title")?,
            description: payload.description,
            start_date: require(payload.start_date, "startDate")?,
            end_date: require(payload.end_date, "endDate")?,
            all_day: payload.all_day.unwrap_or(false),
            color: payload
                .color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
            location: payload.location,
            attendees: payload.attendees.unwrap_or_default(),
        };

        self.repo.create_event(executor, &event).await
    }

    pub async fn update_event<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateEventPayload,
    ) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_event(executor, id, payload).await
    }

    pub async fn delete_event<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_event(executor, id).await
    }

    // --- Tarefas ---

    pub async fn list_tasks<'e, E>(
        &self,
        executor: E,
        status: Option<TaskStatus>,
        priority: Option<Priority>,
    ) -> Result<Vec<Task>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_tasks(executor, status, priority).await
    }

    pub async fn get_task<'e, E>(&self, executor: E, id: Uuid) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_task(executor, id).await
    }

    pub async fn create_task<'e, E>(&self, executor: E, payload: CreateTaskPayload) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let task = NewTask {
            title: require(payload.title, "title")?,
            description: payload.description,
            priority: payload.priority.unwrap_or_default(),
            status: payload.status.unwrap_or_default(),
            due_date: payload.due_date,
            assignee: payload.assignee,
        };

        self.repo.create_task(executor, &task).await
    }

    pub async fn update_task<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateTaskPayload,
    ) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_task(executor, id, payload).await
    }

    pub async fn delete_task<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_task(executor, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn range_needs_both_ends() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();

        assert_eq!(event_range(Some(start), Some(end)), Some((start, end)));
        assert_eq!(event_range(Some(start), None), None);
        assert_eq!(event_range(None, Some(end)), None);
    }
}
