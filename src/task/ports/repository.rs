//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskListing};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// In-place change applied to a stored task inside a single transaction.
///
/// Mutations are infallible: validation happens before the store is
/// touched.
pub type TaskMutation = Box<dyn FnOnce(&mut Task) + Send>;

/// Task persistence contract.
///
/// Not-found is reported through `Option`/`bool` results rather than as an
/// error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task under a freshly assigned identifier and returns the
    /// stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend fails.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Loads a task, applies `mutation`, and persists the result atomically.
    ///
    /// Returns the stored record, or `None` without writing anything when
    /// the task does not exist.
    async fn modify(&self, id: TaskId, mutation: TaskMutation)
    -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task.
    ///
    /// Returns `true` when a record was removed and `false` when none
    /// existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns the tasks selected by `listing`, in its order.
    async fn list(&self, listing: TaskListing) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
