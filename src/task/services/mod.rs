//! Application services for todo task operations.

mod requests;
mod tasks;

pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
