//! JSON HTTP API over the task service.
//!
//! Every response body uses the [`ApiResponse`] envelope. Handlers are
//! generic over the repository and clock so the same router serves both the
//! `PostgreSQL` and in-memory stores.

mod error;
mod response;
mod routes;

pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::router;
