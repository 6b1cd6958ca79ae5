//! Document-store-backed task repository.

use super::document::{entity_to_task, task_to_entity};
use crate::datastore::{DocumentStore, Entity};
use crate::task::{
    domain::{Task, TaskKey},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Task repository persisting to a [`DocumentStore`].
///
/// The store client is injected; clones share it.
pub struct DatastoreTaskRepository<S: DocumentStore + ?Sized> {
    client: Arc<S>,
}

impl<S: DocumentStore + ?Sized> DatastoreTaskRepository<S> {
    /// Creates a repository over the given store client.
    #[must_use]
    pub const fn new(client: Arc<S>) -> Self {
        Self { client }
    }

    /// Returns the underlying store client.
    #[must_use]
    pub const fn client(&self) -> &Arc<S> {
        &self.client
    }
}

impl<S: DocumentStore + ?Sized> Clone for DatastoreTaskRepository<S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

fn to_domain(entity: &Entity) -> TaskRepositoryResult<Task> {
    entity_to_task(entity).map_err(|err| {
        warn!(key = %entity.key(), error = %err, "stored task document failed validation");
        TaskRepositoryError::InvalidPersistedData(err)
    })
}

impl<S: DocumentStore + ?Sized> TaskRepository for DatastoreTaskRepository<S> {
    fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        debug!(kind = TaskKey::KIND, task_id = %task.key(), "saving task");
        self.client
            .put(task_to_entity(task))
            .map_err(TaskRepositoryError::persistence)
    }

    fn delete(&self, key: &TaskKey) -> TaskRepositoryResult<()> {
        debug!(kind = TaskKey::KIND, task_id = %key, "deleting task");
        self.client
            .delete(&key.to_key())
            .map_err(TaskRepositoryError::persistence)
    }

    fn fetch_no_raise(&self, key: &TaskKey) -> TaskRepositoryResult<Option<Task>> {
        debug!(kind = TaskKey::KIND, task_id = %key, "fetching task");
        let entity = self
            .client
            .get(&key.to_key())
            .map_err(TaskRepositoryError::persistence)?;
        entity.as_ref().map(to_domain).transpose()
    }

    fn fetch_list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let entities = self
            .client
            .query(TaskKey::KIND)
            .map_err(TaskRepositoryError::persistence)?;
        debug!(kind = TaskKey::KIND, count = entities.len(), "fetched task list");
        entities.iter().map(to_domain).collect()
    }
}
