//! Mapping of service outcomes onto HTTP responses.

use super::ApiResponse;
use crate::task::{domain::TaskId, services::TaskServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
    /// No task exists under the requested identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
}

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Service(TaskServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Service(TaskServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TaskNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Service(TaskServiceError::Repository(err)) => {
                tracing::error!(error = %err, "task storage failure");
                "The task store is unavailable. Please try again.".to_owned()
            }
            Self::Service(TaskServiceError::Validation(_)) | Self::TaskNotFound(_) => {
                self.to_string()
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
