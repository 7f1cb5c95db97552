//! Builders shared by the task unit tests.

use crate::task::domain::{
    PersistedTaskData, Task, TaskDescription, TaskId, TaskPriority, TaskTitle,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Returns midnight UTC plus `minute` minutes on 2026-01-20.
pub(super) fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 20, 0, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Persisted-task builder with fixed timestamps.
pub(super) struct TaskFixture {
    data: PersistedTaskData,
}

impl TaskFixture {
    pub(super) fn new(id: i64, title: &str) -> Self {
        Self {
            data: PersistedTaskData {
                id: TaskId::new(id),
                title: TaskTitle::new(title).expect("valid title"),
                description: TaskDescription::default(),
                completed: false,
                priority: TaskPriority::Medium,
                due_date: None,
                created_at: at_minute(0),
                updated_at: at_minute(0),
            },
        }
    }

    pub(super) fn created(mut self, minute: u32) -> Self {
        self.data.created_at = at_minute(minute);
        self
    }

    pub(super) fn updated(mut self, minute: u32) -> Self {
        self.data.updated_at = at_minute(minute);
        self
    }

    pub(super) const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.data.updated_at = updated_at;
        self
    }

    pub(super) const fn completed(mut self) -> Self {
        self.data.completed = true;
        self
    }

    pub(super) const fn due(mut self, due_date: NaiveDate) -> Self {
        self.data.due_date = Some(due_date);
        self
    }

    pub(super) fn build(self) -> Task {
        Task::from_persisted(self.data)
    }
}

pub(super) fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}
