//! Task entity and its copy-with-changes transitions.

use super::{TaskKey, TaskName};
use crate::project::domain::ProjectKey;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Task entity.
///
/// A task is never mutated in place. Each transition borrows the current
/// version and returns a new one whose `updated_at` is read from the clock;
/// `created_at` is carried over unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    key: TaskKey,
    name: TaskName,
    project_key: Option<ProjectKey>,
    finished_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task key.
    pub key: TaskKey,
    /// Persisted task name.
    pub name: TaskName,
    /// Referenced project, if any.
    pub project_key: Option<ProjectKey>,
    /// Completion timestamp, if finished.
    pub finished_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an unfinished task under a freshly generated key.
    ///
    /// The name must already be a validated [`TaskName`]:
    ///
    /// ```
    /// use mockable::DefaultClock;
    /// use todo_tasks::task::domain::{Task, TaskName};
    ///
    /// let name = TaskName::new("Write report").expect("valid name");
    /// let task = Task::new(name, None, &DefaultClock);
    /// assert!(!task.is_finished());
    /// ```
    ///
    /// A plain string is rejected at compile time:
    ///
    /// ```compile_fail
    /// use mockable::DefaultClock;
    /// use todo_tasks::task::domain::Task;
    ///
    /// let task = Task::new("Write report", None, &DefaultClock);
    /// ```
    #[must_use]
    pub fn new(name: TaskName, project_key: Option<ProjectKey>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            key: TaskKey::build_for_new(),
            name,
            project_key,
            finished_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            key: data.key,
            name: data.name,
            project_key: data.project_key,
            finished_at: data.finished_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task key.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the referenced project, if any.
    #[must_use]
    pub const fn project_key(&self) -> Option<&ProjectKey> {
        self.project_key.as_ref()
    }

    /// Returns the completion timestamp, if finished.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` once a completion timestamp is set.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Returns a copy referencing `project_key` (or no project).
    #[must_use]
    pub fn with_project_key(&self, project_key: Option<ProjectKey>, clock: &impl Clock) -> Self {
        self.changed(clock, |task| task.project_key = project_key)
    }

    /// Returns a copy finished at `finished_at`.
    #[must_use]
    pub fn with_finished_at(&self, finished_at: DateTime<Utc>, clock: &impl Clock) -> Self {
        self.changed(clock, |task| task.finished_at = Some(finished_at))
    }

    /// Returns an unfinished copy.
    #[must_use]
    pub fn to_canceled_finish(&self, clock: &impl Clock) -> Self {
        self.changed(clock, |task| task.finished_at = None)
    }

    /// Returns a copy finished at the current clock time.
    #[must_use]
    pub fn to_finished_now(&self, clock: &impl Clock) -> Self {
        self.with_finished_at(clock.utc(), clock)
    }

    /// Returns a renamed copy.
    #[must_use]
    pub fn to_changed_task_name(&self, name: TaskName, clock: &impl Clock) -> Self {
        self.changed(clock, |task| task.name = name)
    }

    fn changed(&self, clock: &impl Clock, change: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        change(&mut next);
        next.updated_at = clock.utc();
        next
    }
}
