//! Domain model for todo tasks.
//!
//! The domain holds the task aggregate, its validated fields, partial update
//! change sets, and the ordering rules used by listings. Persistence and
//! transport concerns stay outside this boundary.

mod board;
mod changes;
mod error;
mod ids;
mod listing;
mod priority;
mod task;
mod text;

pub use board::TaskBoard;
pub use changes::TaskChanges;
pub use error::{ParseTaskPriorityError, TaskValidationError};
pub use ids::TaskId;
pub use listing::TaskListing;
pub use priority::TaskPriority;
pub use task::{NewTask, PersistedTaskData, Task};
pub use text::{TaskDescription, TaskTitle};
