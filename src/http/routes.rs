//! Route table and handlers.

use super::{ApiError, ApiResponse};
use crate::task::{
    domain::{Task, TaskBoard, TaskId, TaskListing},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Query string accepted by `GET /api/tasks`.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    status: TaskListing,
}

/// Board payload with the counts the list view shows.
#[derive(Debug, Serialize)]
struct BoardView {
    pending: Vec<Task>,
    completed: Vec<Task>,
    pending_count: usize,
    completed_count: usize,
    overdue_count: usize,
}

impl BoardView {
    fn new(board: TaskBoard, today: chrono::NaiveDate) -> Self {
        let overdue_count = board.overdue(today).count();
        let (pending, completed) = board.into_parts();
        Self {
            pending_count: pending.len(),
            completed_count: completed.len(),
            pending,
            completed,
            overdue_count,
        }
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Builds the API router around `service`.
///
/// | Route                          | Operation          |
/// |--------------------------------|--------------------|
/// | `GET /health`                  | liveness           |
/// | `GET /api/board`               | pending/completed  |
/// | `GET /api/tasks?status=…`      | list               |
/// | `POST /api/tasks`              | create             |
/// | `GET /api/tasks/{id}`          | get                |
/// | `PATCH /api/tasks/{id}`        | partial update     |
/// | `DELETE /api/tasks/{id}`       | delete             |
/// | `POST /api/tasks/{id}/toggle`  | toggle completion  |
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = Router::new()
        .route("/", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route(
            "/{id}",
            get(get_task::<R, C>)
                .patch(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/{id}/toggle", post(toggle_task::<R, C>));

    Router::new()
        .route("/health", get(health))
        .route("/api/board", get(board::<R, C>))
        .nest("/api/tasks", tasks)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Task>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.list(query.status).await?;
    Ok(Json(ApiResponse::success(tasks)))
}

async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    tracing::debug!(title = payload.title(), "creating task");
    let task = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(task))))
}

async fn get_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<TaskId>,
) -> ApiResult<Task>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.get(id).await?.ok_or(ApiError::TaskNotFound(id))?;
    Ok(Json(ApiResponse::success(task)))
}

async fn update_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<TaskId>,
    Json(payload): Json<UpdateTaskRequest>,
) -> ApiResult<Task>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service
        .update(id, payload)
        .await?
        .ok_or(ApiError::TaskNotFound(id))?;
    Ok(Json(ApiResponse::success(task)))
}

async fn toggle_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<TaskId>,
) -> ApiResult<Task>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service
        .toggle_completed(id)
        .await?
        .ok_or(ApiError::TaskNotFound(id))?;
    Ok(Json(ApiResponse::success(task)))
}

async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<TaskId>,
) -> ApiResult<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    if !service.delete(id).await? {
        return Err(ApiError::TaskNotFound(id));
    }
    Ok(Json(ApiResponse::success(())))
}

async fn board<R, C>(State(service): State<TaskService<R, C>>) -> ApiResult<BoardView>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let board = service.board().await?;
    Ok(Json(ApiResponse::success(BoardView::new(board, service.today()))))
}
