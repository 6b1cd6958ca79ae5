//! Service layer for task creation, lookup, and lifecycle changes.

use crate::project::domain::ProjectKey;
use crate::task::{
    domain::{Task, TaskDomainError, TaskKey, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    project_key: Option<ProjectKey>,
}

impl CreateTaskRequest {
    /// Creates a request for a task with the given name and no project.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_key: None,
        }
    }

    /// Associates the new task with a project.
    #[must_use]
    pub fn with_project_key(mut self, project_key: ProjectKey) -> Self {
        self.project_key = Some(project_key);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task is stored at the key.
    #[error("task not found: {0}")]
    NotFound(TaskKey),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every mutating operation fetches the current version, applies one
/// transition, saves the result and returns it.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is invalid or
    /// [`TaskLifecycleError::Repository`] when the task cannot be saved.
    pub fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let name = TaskName::new(request.name)?;
        let task = Task::new(name, request.project_key, &*self.clock);
        self.repository.save(&task)?;
        info!(task_id = %task.key(), "created task");
        Ok(task)
    }

    /// Retrieves a task that is expected to exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task is stored at
    /// `key`, or [`TaskLifecycleError::Repository`] when lookup fails.
    pub fn find(&self, key: &TaskKey) -> TaskLifecycleResult<Task> {
        self.find_optional(key)?
            .ok_or_else(|| TaskLifecycleError::NotFound(key.clone()))
    }

    /// Retrieves a task, returning `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub fn find_optional(&self, key: &TaskKey) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.fetch_no_raise(key)?)
    }

    /// Lists all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.fetch_list()?)
    }

    /// Renames a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is invalid,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub fn rename(&self, key: &TaskKey, name: impl Into<String>) -> TaskLifecycleResult<Task> {
        let name = TaskName::new(name)?;
        self.apply(key, "renamed task", |task, clock| {
            task.to_changed_task_name(name, clock)
        })
    }

    /// Marks a stored task as finished now.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub fn finish(&self, key: &TaskKey) -> TaskLifecycleResult<Task> {
        self.apply(key, "finished task", Task::to_finished_now)
    }

    /// Clears the completion timestamp of a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub fn cancel_finish(&self, key: &TaskKey) -> TaskLifecycleResult<Task> {
        self.apply(key, "reopened task", Task::to_canceled_finish)
    }

    /// Points a stored task at a project, or detaches it with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub fn assign_project(
        &self,
        key: &TaskKey,
        project_key: Option<ProjectKey>,
    ) -> TaskLifecycleResult<Task> {
        self.apply(key, "assigned task project", |task, clock| {
            task.with_project_key(project_key, clock)
        })
    }

    /// Deletes a task. Deleting an absent task succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence fails.
    pub fn delete(&self, key: &TaskKey) -> TaskLifecycleResult<()> {
        self.repository.delete(key)?;
        info!(task_id = %key, "deleted task");
        Ok(())
    }

    fn apply(
        &self,
        key: &TaskKey,
        event: &'static str,
        transition: impl FnOnce(&Task, &C) -> Task,
    ) -> TaskLifecycleResult<Task> {
        let current = self.find(key)?;
        let next = transition(&current, &*self.clock);
        self.repository.save(&next)?;
        info!(task_id = %key, event, "task updated");
        Ok(next)
    }
}
