//! Service workflows against `PostgreSQL`.

use super::helpers::{test_database, test_runtime};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use std::sync::Arc;
use todolist::task::services::{CreateTaskRequest, TaskService, UpdateTaskRequest};

#[rstest]
fn update_and_board_against_database(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_service_flow");
    let rt = test_runtime();
    let service = TaskService::new(Arc::new(db.repo.clone()), Arc::new(DefaultClock));

    let milk = rt
        .block_on(service.create(CreateTaskRequest::new("Buy milk")))
        .expect("create");
    let release = rt
        .block_on(service.create(CreateTaskRequest::new("Ship release")))
        .expect("create");

    let updated = rt
        .block_on(service.update(
            milk.id(),
            UpdateTaskRequest::new()
                .with_description("2 litres")
                .with_completed(true),
        ))
        .expect("update")
        .expect("task exists");
    assert_eq!(updated.description().as_str(), "2 litres");
    assert!(updated.is_completed());

    let board = rt.block_on(service.board()).expect("board");
    assert_eq!(board.pending().len(), 1);
    assert_eq!(board.completed().len(), 1);
    assert_eq!(board.pending().first().map(|task| task.id()), Some(release.id()));
    assert_eq!(board.completed().first(), Some(&updated));
}
