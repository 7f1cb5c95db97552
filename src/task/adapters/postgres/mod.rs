//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{INITIAL_SCHEMA_SQL, PostgresTaskRepository, TaskPgPool};
