//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_tasks::{
    datastore::adapters::memory::InMemoryDatastore,
    task::{
        adapters::datastore::DatastoreTaskRepository,
        domain::Task,
        services::{TaskLifecycleError, TaskLifecycleService},
    },
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<DatastoreTaskRepository<InMemoryDatastore>, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskWorld {
    pub store: Arc<InMemoryDatastore>,
    pub service: TestTaskService,
    pub current_task: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryDatastore::new());
        let service = TaskLifecycleService::new(
            Arc::new(DatastoreTaskRepository::new(Arc::clone(&store))),
            Arc::new(DefaultClock),
        );
        Self {
            store,
            service,
            current_task: None,
            last_create_result: None,
        }
    }

    /// Returns the task the scenario is acting on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}
