//! Repository contract tests for [`InMemoryTaskRepository`].

use super::helpers::{ids, new_task, repo};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskListing},
    ports::TaskRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_start_at_one_and_are_never_reused(repo: InMemoryTaskRepository) {
    let first = repo.insert(&new_task("first")).await.expect("insert");
    let second = repo.insert(&new_task("second")).await.expect("insert");
    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));

    assert!(repo.delete(second.id()).await.expect("delete"));
    let third = repo.insert(&new_task("third")).await.expect("insert");

    assert_eq!(third.id(), TaskId::new(3));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_stores_a_pending_task_with_matching_timestamps(repo: InMemoryTaskRepository) {
    let stored = repo.insert(&new_task("Buy milk")).await.expect("insert");

    assert!(!stored.is_completed());
    assert_eq!(stored.created_at(), stored.updated_at());
    let fetched = repo.find_by_id(stored.id()).await.expect("lookup");
    assert_eq!(fetched, Some(stored));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn modify_applies_mutation_and_returns_stored_record(repo: InMemoryTaskRepository) {
    let stored = repo.insert(&new_task("Buy milk")).await.expect("insert");

    let modified = repo
        .modify(
            stored.id(),
            Box::new(|task: &mut Task| task.toggle_completed(&DefaultClock)),
        )
        .await
        .expect("modify")
        .expect("task exists");

    assert!(modified.is_completed());
    let fetched = repo.find_by_id(stored.id()).await.expect("lookup");
    assert_eq!(fetched, Some(modified));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn modify_on_missing_task_does_not_run_mutation(repo: InMemoryTaskRepository) {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let result = repo
        .modify(
            TaskId::new(99),
            Box::new(move |_task: &mut Task| flag.store(true, Ordering::SeqCst)),
        )
        .await
        .expect("modify");

    assert_eq!(result, None);
    assert!(!ran.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_listing_is_newest_first(repo: InMemoryTaskRepository) {
    for title in ["one", "two", "three"] {
        repo.insert(&new_task(title)).await.expect("insert");
    }

    let pending = repo.list(TaskListing::Pending).await.expect("list");
    assert_eq!(ids(&pending), vec![3, 2, 1]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_toggles_are_not_lost() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let stored = repo.insert(&new_task("contested")).await.expect("insert");

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let shared = Arc::clone(&repo);
            let id = stored.id();
            tokio::spawn(async move {
                shared
                    .modify(id, Box::new(|task: &mut Task| task.toggle_completed(&DefaultClock)))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("join").expect("modify");
    }

    let fetched = repo
        .find_by_id(stored.id())
        .await
        .expect("lookup")
        .expect("task exists");
    // An even number of toggles lands back on pending.
    assert!(!fetched.is_completed());
}
