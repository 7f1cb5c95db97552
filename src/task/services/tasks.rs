//! Service layer for todo task operations.

use crate::task::{
    domain::{Task, TaskBoard, TaskChanges, TaskId, TaskListing, TaskValidationError},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
///
/// A missing task is not an error: lookups and mutations report it as
/// `Ok(None)` and deletion as `Ok(false)`.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input violated a field constraint. Nothing was persisted.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The store failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Holds no task state of its own; every call reads from or writes to the
/// repository it was constructed with.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync + 'static,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title or description
    /// violate their limits, or [`TaskServiceError::Repository`] when the
    /// store rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let new_task = request.into_new_task(&*self.clock)?;
        let task = self.repository.insert(&new_task).await?;
        tracing::info!(task_id = %task.id(), priority = %task.priority(), "created task");
        Ok(task)
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        self.list(TaskListing::All).await
    }

    /// Returns pending tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_pending(&self) -> TaskServiceResult<Vec<Task>> {
        self.list(TaskListing::Pending).await
    }

    /// Returns completed tasks, most recently changed first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_completed(&self) -> TaskServiceResult<Vec<Task>> {
        self.list(TaskListing::Completed).await
    }

    /// Returns the tasks selected by `listing`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list(&self, listing: TaskListing) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list(listing).await?;
        tracing::debug!(listing = listing.as_str(), count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies the fields present in `request` to a task.
    ///
    /// Present fields are validated before the store is touched, so an
    /// invalid request fails even when `id` does not exist. Returns
    /// `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid fields or
    /// [`TaskServiceError::Repository`] when the store fails.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Option<Task>> {
        let changes = TaskChanges::try_from(request)?;
        let clock = Arc::clone(&self.clock);
        let updated = self
            .repository
            .modify(id, Box::new(move |task: &mut Task| task.apply(changes, &*clock)))
            .await?;
        log_mutation(id, updated.as_ref(), "updated task");
        Ok(updated)
    }

    /// Flips a task's completion flag.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn toggle_completed(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let clock = Arc::clone(&self.clock);
        let toggled = self
            .repository
            .modify(id, Box::new(move |task: &mut Task| task.toggle_completed(&*clock)))
            .await?;
        log_mutation(id, toggled.as_ref(), "toggled task completion");
        Ok(toggled)
    }

    /// Deletes a task.
    ///
    /// Returns `Ok(true)` when the task existed and was removed and
    /// `Ok(false)` when there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            tracing::info!(task_id = %id, "deleted task");
        } else {
            tracing::debug!(task_id = %id, "delete skipped, task not found");
        }
        Ok(removed)
    }

    /// Returns every task partitioned into pending and completed halves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn board(&self) -> TaskServiceResult<TaskBoard> {
        let tasks = self.list_all().await?;
        Ok(TaskBoard::from_tasks(tasks))
    }

    /// Returns the current UTC calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

fn log_mutation(id: TaskId, task: Option<&Task>, message: &'static str) {
    match task {
        Some(stored) => tracing::info!(
            task_id = %id,
            completed = stored.is_completed(),
            updated_at = %stored.updated_at(),
            "{message}"
        ),
        None => tracing::debug!(task_id = %id, "{message}: task not found"),
    }
}
