//! Repository contract tests for [`PostgresTaskRepository`].

use super::helpers::{test_database, test_runtime};
use chrono::NaiveDate;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use std::time::Duration;
use todolist::task::{
    domain::{NewTask, Task, TaskDescription, TaskId, TaskListing, TaskPriority, TaskTitle},
    ports::TaskRepository,
};

fn new_task(title: &str) -> NewTask {
    NewTask::new(TaskTitle::new(title).expect("valid title"), &DefaultClock)
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

#[rstest]
fn insert_and_find_round_trips_every_field(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_round_trip");
    let rt = test_runtime();
    let new = new_task("Ship release")
        .with_description(TaskDescription::new("v1.0 ✓").expect("valid description"))
        .with_priority(TaskPriority::Urgent)
        .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 1));

    let stored = rt.block_on(db.repo.insert(&new)).expect("insert");
    let fetched = rt
        .block_on(db.repo.find_by_id(stored.id()))
        .expect("lookup")
        .expect("task exists");

    assert_eq!(fetched, stored);
    assert_eq!(fetched.title().as_str(), "Ship release");
    assert_eq!(fetched.description().as_str(), "v1.0 ✓");
    assert_eq!(fetched.priority(), TaskPriority::Urgent);
    assert_eq!(fetched.created_at(), new.created_at());
    assert_eq!(fetched.updated_at(), new.created_at());
}

#[rstest]
fn identifiers_are_not_reused_after_delete(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_id_reuse");
    let rt = test_runtime();

    let first = rt.block_on(db.repo.insert(&new_task("first"))).expect("insert");
    assert!(rt.block_on(db.repo.delete(first.id())).expect("delete"));
    let second = rt.block_on(db.repo.insert(&new_task("second"))).expect("insert");

    assert!(second.id() > first.id());
    assert!(!rt.block_on(db.repo.delete(first.id())).expect("delete"));
}

#[rstest]
fn missing_task_is_absent(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_missing");
    let rt = test_runtime();
    let missing = TaskId::new(9_999);

    assert_eq!(rt.block_on(db.repo.find_by_id(missing)).expect("lookup"), None);
    let modified = rt
        .block_on(db.repo.modify(
            missing,
            Box::new(|task: &mut Task| task.toggle_completed(&DefaultClock)),
        ))
        .expect("modify");
    assert_eq!(modified, None);
}

#[rstest]
fn modify_persists_mutation(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_modify");
    let rt = test_runtime();
    let stored = rt.block_on(db.repo.insert(&new_task("Buy milk"))).expect("insert");

    let modified = rt
        .block_on(db.repo.modify(
            stored.id(),
            Box::new(|task: &mut Task| task.toggle_completed(&DefaultClock)),
        ))
        .expect("modify")
        .expect("task exists");
    let fetched = rt
        .block_on(db.repo.find_by_id(stored.id()))
        .expect("lookup")
        .expect("task exists");

    assert!(modified.is_completed());
    assert!(modified.updated_at() > stored.updated_at());
    assert_eq!(fetched, modified);
}

#[rstest]
fn listings_filter_and_order(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_listings");
    let rt = test_runtime();
    let mut stored = Vec::new();
    for title in ["one", "two", "three", "four"] {
        stored.push(rt.block_on(db.repo.insert(&new_task(title))).expect("insert"));
    }
    let stored_ids = ids(&stored);
    let [one, two, three, four] = stored_ids.as_slice() else {
        panic!("expected four tasks");
    };
    for id in [*three, *one] {
        rt.block_on(db.repo.modify(
            TaskId::new(id),
            Box::new(|task: &mut Task| task.toggle_completed(&DefaultClock)),
        ))
        .expect("modify")
        .expect("task exists");
        // Separate the completion timestamps.
        std::thread::sleep(Duration::from_millis(2));
    }

    let all = rt.block_on(db.repo.list(TaskListing::All)).expect("list");
    let pending = rt.block_on(db.repo.list(TaskListing::Pending)).expect("list");
    let completed = rt.block_on(db.repo.list(TaskListing::Completed)).expect("list");

    assert_eq!(ids(&all), vec![*four, *three, *two, *one]);
    assert_eq!(ids(&pending), vec![*four, *two]);
    assert_eq!(ids(&completed), vec![*one, *three]);
}

#[rstest]
fn ensure_schema_is_idempotent(shared_test_cluster: &'static TestCluster) {
    let db = test_database(shared_test_cluster, "test_schema");
    let rt = test_runtime();

    rt.block_on(db.repo.ensure_schema()).expect("first apply");
    rt.block_on(db.repo.ensure_schema()).expect("second apply");
}
