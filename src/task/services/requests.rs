//! Request payloads accepted by the task service.

use crate::task::domain::{
    NewTask, TaskChanges, TaskDescription, TaskPriority, TaskTitle, TaskValidationError,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Deserializer};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: Option<TaskPriority>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the requested title as submitted.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Validates the request and stamps it with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the title or description violate
    /// their length limits.
    pub fn into_new_task(self, clock: &impl Clock) -> Result<NewTask, TaskValidationError> {
        let title = TaskTitle::new(self.title)?;
        let description = self
            .description
            .map(TaskDescription::new)
            .transpose()?
            .unwrap_or_default();

        Ok(NewTask::new(title, clock)
            .with_description(description)
            .with_priority(self.priority.unwrap_or_default())
            .with_due_date(self.due_date))
    }
}

/// Request payload for a partial task update.
///
/// Every field is optional and absent fields are left untouched. In JSON an
/// explicit `"due_date": null` clears the due date while omitting the key
/// keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_present")]
    due_date: Option<Option<NaiveDate>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }
}

impl TryFrom<UpdateTaskRequest> for TaskChanges {
    type Error = TaskValidationError;

    fn try_from(request: UpdateTaskRequest) -> Result<Self, Self::Error> {
        let mut changes = Self::new();
        if let Some(title) = request.title {
            changes = changes.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = request.description {
            changes = changes.with_description(TaskDescription::new(description)?);
        }
        if let Some(completed) = request.completed {
            changes = changes.with_completed(completed);
        }
        if let Some(priority) = request.priority {
            changes = changes.with_priority(priority);
        }
        if let Some(due_date) = request.due_date {
            changes = changes.with_due_date(due_date);
        }
        Ok(changes)
    }
}

/// Distinguishes a key that is present (even as `null`) from one that is
/// missing, which `#[serde(default)]` turns into `None`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
