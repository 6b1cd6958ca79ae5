//! Domain-focused tests for task identity and construction.

use super::clock::{SteppingClock, epoch};
use crate::datastore::{Key, KeyId};
use crate::project::domain::ProjectKey;
use crate::task::domain::{PersistedTaskData, Task, TaskDomainError, TaskKey, TaskName};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::new()
}

#[rstest]
fn keys_with_the_same_id_are_equal() {
    let key1 = TaskKey::build_by_id(1_i64);
    let key2 = TaskKey::build_by_id(1_i64);

    assert_eq!(key1, key2);
    assert_eq!(key1.task_id(), &KeyId::Id(1));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
#[case(i64::MAX)]
fn digit_strings_normalize_to_numeric_ids(#[case] id: i64) {
    assert_eq!(TaskKey::build_by_id(id), TaskKey::build_by_id(id.to_string()));
    assert_eq!(
        TaskKey::build_by_id(id.to_string()).task_id(),
        &KeyId::Id(id)
    );
}

#[rstest]
fn non_digit_strings_stay_names() {
    let key = TaskKey::build_by_id("a1b2");
    assert_eq!(key.task_id(), &KeyId::Name("a1b2".to_owned()));
}

#[rstest]
fn generated_keys_are_lowercase_unpadded_base32() {
    let key = TaskKey::build_for_new();
    let id = key
        .task_id()
        .as_name()
        .expect("generated keys use string identifiers");

    assert_eq!(id.len(), 26);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_lowercase() || ('2'..='7').contains(&c)),
        "unexpected character in {id}"
    );
}

#[rstest]
fn generated_keys_differ() {
    assert_ne!(TaskKey::build_for_new(), TaskKey::build_for_new());
}

#[rstest]
#[case(Key::new("Task", 5_i64), KeyId::Id(5))]
#[case(Key::new("Task", "15"), KeyId::Id(15))]
#[case(Key::new("Task", "abc"), KeyId::Name("abc".to_owned()))]
fn build_from_key_accepts_root_task_keys(#[case] key: Key, #[case] expected: KeyId) {
    let task_key = TaskKey::build_from_key(&key).expect("valid task key");
    assert_eq!(task_key.task_id(), &expected);
}

#[rstest]
fn build_from_key_rejects_keys_with_parent() {
    let key = Key::new("Task", 1_i64).with_parent(Key::new("Project", 1_i64));
    assert_eq!(
        TaskKey::build_from_key(&key),
        Err(TaskDomainError::KeyHasParent("Project(1)/Task(1)".to_owned()))
    );
}

#[rstest]
fn build_from_key_rejects_other_kinds() {
    let key = Key::new("Project", 1_i64);
    assert_eq!(
        TaskKey::build_from_key(&key),
        Err(TaskDomainError::KindMismatch("Project".to_owned()))
    );
}

#[rstest]
fn to_key_round_trips_through_build_from_key() {
    let task_key = TaskKey::build_for_new();
    let stored = task_key.to_key();

    assert_eq!(stored.kind(), TaskKey::KIND);
    assert_eq!(TaskKey::build_from_key(&stored), Ok(task_key));
}

#[rstest]
fn task_from_persisted_keeps_every_field() {
    let project_key = ProjectKey::build_by_id(3_i64);
    let task = Task::from_persisted(PersistedTaskData {
        key: TaskKey::build_by_id(1_i64),
        name: TaskName::new("Task Name").expect("valid name"),
        project_key: Some(project_key.clone()),
        finished_at: None,
        created_at: epoch(),
        updated_at: epoch(),
    });

    assert_eq!(task.key(), &TaskKey::build_by_id(1_i64));
    assert_eq!(task.name().as_str(), "Task Name");
    assert_eq!(task.project_key(), Some(&project_key));
    assert!(!task.is_finished());
    assert_eq!(task.created_at(), epoch());
    assert_eq!(task.updated_at(), epoch());
}

#[rstest]
fn new_task_is_unfinished_with_matching_timestamps(clock: SteppingClock) {
    let task = Task::new(TaskName::new("Buy milk").expect("valid name"), None, &clock);

    assert!(!task.is_finished());
    assert_eq!(task.project_key(), None);
    assert_eq!(task.created_at(), epoch());
    assert_eq!(task.created_at(), task.updated_at());
    assert!(task.key().task_id().as_name().is_some());
}
