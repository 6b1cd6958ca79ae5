//! Mapping between [`Task`] and its stored document shape.

use crate::datastore::{Entity, Key, Value};
use crate::project::domain::ProjectKey;
use crate::task::domain::{PersistedTaskData, Task, TaskDomainError, TaskKey, TaskName};
use chrono::{DateTime, Utc};

const NAME: &str = "name";
const PROJECT_KEY: &str = "project_key";
const FINISHED_AT: &str = "finished_at";
const CREATED_AT: &str = "created_at";
// Existing documents spell the update timestamp without the "d".
const UPDATED_AT: &str = "update_at";

/// Converts a task into the document stored at its key.
#[must_use]
pub fn task_to_entity(task: &Task) -> Entity {
    Entity::new(task.key().to_key())
        .with_property(NAME, task.name().as_str())
        .with_property(PROJECT_KEY, task.project_key().map(ProjectKey::to_key))
        .with_property(FINISHED_AT, task.finished_at())
        .with_property(CREATED_AT, task.created_at())
        .with_property(UPDATED_AT, task.updated_at())
}

/// Rebuilds a validated task from a stored document.
///
/// # Errors
///
/// Returns [`TaskDomainError`] when the key is not a root `Task` key, a
/// field is missing or holds the wrong value type, the name fails
/// validation, or the project reference is malformed.
pub fn entity_to_task(entity: &Entity) -> Result<Task, TaskDomainError> {
    let key = TaskKey::build_from_key(entity.key())?;
    let name = TaskName::new(string_field(entity, NAME)?)?;
    let project_key = optional_key_field(entity, PROJECT_KEY)?
        .map(ProjectKey::build_from_key)
        .transpose()?;

    Ok(Task::from_persisted(PersistedTaskData {
        key,
        name,
        project_key,
        finished_at: optional_timestamp_field(entity, FINISHED_AT)?,
        created_at: timestamp_field(entity, CREATED_AT)?,
        updated_at: timestamp_field(entity, UPDATED_AT)?,
    }))
}

fn field<'a>(entity: &'a Entity, name: &'static str) -> Result<&'a Value, TaskDomainError> {
    entity.get(name).ok_or(TaskDomainError::MissingField(name))
}

const fn type_error(field: &'static str, expected: &'static str, found: &Value) -> TaskDomainError {
    TaskDomainError::TypeValidation {
        field,
        expected,
        found: found.type_name(),
    }
}

fn string_field<'a>(entity: &'a Entity, name: &'static str) -> Result<&'a str, TaskDomainError> {
    match field(entity, name)? {
        Value::String(value) => Ok(value.as_str()),
        other => Err(type_error(name, "string", other)),
    }
}

fn timestamp_field(entity: &Entity, name: &'static str) -> Result<DateTime<Utc>, TaskDomainError> {
    match field(entity, name)? {
        Value::Timestamp(value) => Ok(*value),
        other => Err(type_error(name, "timestamp", other)),
    }
}

fn optional_timestamp_field(
    entity: &Entity,
    name: &'static str,
) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    match field(entity, name)? {
        Value::Null => Ok(None),
        Value::Timestamp(value) => Ok(Some(*value)),
        other => Err(type_error(name, "timestamp or null", other)),
    }
}

fn optional_key_field<'a>(
    entity: &'a Entity,
    name: &'static str,
) -> Result<Option<&'a Key>, TaskDomainError> {
    match field(entity, name)? {
        Value::Null => Ok(None),
        Value::Key(value) => Ok(Some(value)),
        other => Err(type_error(name, "key or null", other)),
    }
}
