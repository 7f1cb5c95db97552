//! Filtering and ordering rules for task listings.

use super::Task;
use serde::Deserialize;
use std::cmp::Ordering;

/// Which tasks a listing contains and how they are ordered.
///
/// | Listing     | Filter              | Order                                |
/// |-------------|---------------------|--------------------------------------|
/// | `All`       | every task          | `created_at` desc, then `id` desc    |
/// | `Pending`   | `completed = false` | `created_at` desc, then `id` desc    |
/// | `Completed` | `completed = true`  | `updated_at` desc, then `id` desc    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskListing {
    /// Every task, newest first.
    #[default]
    All,
    /// Tasks that are not completed, newest first.
    Pending,
    /// Completed tasks, most recently changed first.
    Completed,
}

impl TaskListing {
    /// Returns `true` when `task` belongs in this listing.
    #[must_use]
    pub const fn includes(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }

    /// Compares two tasks by this listing's order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let primary = match self {
            Self::All | Self::Pending => right.created_at().cmp(&left.created_at()),
            Self::Completed => right.updated_at().cmp(&left.updated_at()),
        };
        primary.then_with(|| right.id().cmp(&left.id()))
    }

    /// Filters and orders `tasks` for this listing.
    #[must_use]
    pub fn arrange(self, tasks: impl IntoIterator<Item = Task>) -> Vec<Task> {
        let mut selected: Vec<Task> = tasks
            .into_iter()
            .filter(|task| self.includes(task))
            .collect();
        selected.sort_by(|left, right| self.compare(left, right));
        selected
    }

    /// Returns the query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}
