//! Pending/completed partition of the task list.

use super::{Task, TaskListing};
use chrono::NaiveDate;

/// Every task split into its pending and completed halves, each ordered by
/// its own listing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    pending: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskBoard {
    /// Partitions `tasks` into pending and completed halves.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let (completed, pending): (Vec<Task>, Vec<Task>) =
            tasks.into_iter().partition(Task::is_completed);
        Self {
            pending: TaskListing::Pending.arrange(pending),
            completed: TaskListing::Completed.arrange(completed),
        }
    }

    /// Returns pending tasks, newest first.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns completed tasks, most recently changed first.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    /// Returns the pending tasks whose due date lies before `today`.
    pub fn overdue(&self, today: NaiveDate) -> impl Iterator<Item = &Task> {
        self.pending.iter().filter(move |task| task.is_overdue(today))
    }

    /// Consumes the board, returning `(pending, completed)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Task>, Vec<Task>) {
        (self.pending, self.completed)
    }
}
