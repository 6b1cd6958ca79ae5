//! Document store adapter for task persistence.
//!
//! Each task is one [`crate::datastore::Entity`] keyed by
//! `(Task, task identifier)` with the properties `name`, `project_key`,
//! `finished_at`, `created_at` and `update_at`.

mod document;
mod repository;

pub use document::{entity_to_task, task_to_entity};
pub use repository::DatastoreTaskRepository;
