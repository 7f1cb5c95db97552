//! In-memory integration tests for task workflows.

use super::helpers::{TestService, ids, service};
use chrono::NaiveDate;
use rstest::rstest;
use todolist::task::{
    domain::{TaskId, TaskPriority},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shopping_and_release_workflow(service: TestService) {
    let milk = service
        .create(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("create milk");
    let release = service
        .create(
            CreateTaskRequest::new("Ship release")
                .with_description("v1.0")
                .with_priority(TaskPriority::Urgent)
                .with_due_date(NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")),
        )
        .await
        .expect("create release");
    assert_eq!(milk.priority(), TaskPriority::Medium);

    let all = service.list_all().await.expect("all");
    assert_eq!(ids(&all), vec![release.id().value(), milk.id().value()]);

    let done = service
        .toggle_completed(milk.id())
        .await
        .expect("toggle")
        .expect("milk exists");
    assert!(done.is_completed());

    let pending = service.list_pending().await.expect("pending");
    let completed = service.list_completed().await.expect("completed");
    assert_eq!(ids(&pending), vec![release.id().value()]);
    assert_eq!(ids(&completed), vec![milk.id().value()]);

    let renamed = service
        .update(
            release.id(),
            UpdateTaskRequest::new().with_title("Ship release 1.0"),
        )
        .await
        .expect("update")
        .expect("release exists");
    assert_eq!(renamed.title().as_str(), "Ship release 1.0");
    assert_eq!(renamed.description().as_str(), "v1.0");
    assert_eq!(renamed.priority(), TaskPriority::Urgent);

    assert!(service.delete(milk.id()).await.expect("delete"));
    let all = service.list_all().await.expect("all");
    assert_eq!(ids(&all), vec![release.id().value()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_tasks_show_on_the_board(service: TestService) {
    let yesterday = service.today().pred_opt().expect("valid date");
    let late = service
        .create(CreateTaskRequest::new("Renew passport").with_due_date(yesterday))
        .await
        .expect("create");
    service
        .create(CreateTaskRequest::new("Plan holiday").with_due_date(service.today()))
        .await
        .expect("create");

    let board = service.board().await.expect("board");
    let overdue: Vec<_> = board.overdue(service.today()).map(|task| task.id()).collect();

    assert_eq!(overdue, vec![late.id()]);
    assert_eq!(board.pending().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oversized_description_is_rejected(service: TestService) {
    let result = service
        .create(CreateTaskRequest::new("Write notes").with_description("n".repeat(1001)))
        .await;
    assert!(matches!(result, Err(TaskServiceError::Validation(_))));
    assert!(service.list_all().await.expect("all").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_date_survives_unrelated_updates(service: TestService) {
    let due = NaiveDate::from_ymd_opt(2026, 12, 24).expect("valid date");
    let task = service
        .create(CreateTaskRequest::new("Buy gifts").with_due_date(due))
        .await
        .expect("create");

    let updated = service
        .update(task.id(), UpdateTaskRequest::new().with_completed(true))
        .await
        .expect("update")
        .expect("task exists");

    assert_eq!(updated.due_date(), Some(due));
    assert!(updated.is_completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_lists_nothing(service: TestService) {
    assert!(service.list_all().await.expect("all").is_empty());
    assert!(service.list_pending().await.expect("pending").is_empty());
    assert!(service.list_completed().await.expect("completed").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_missing_task_keeps_store_size(service: TestService) {
    service
        .create(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("create");

    assert!(!service.delete(TaskId::new(42)).await.expect("delete"));
    assert_eq!(service.list_all().await.expect("all").len(), 1);
}
