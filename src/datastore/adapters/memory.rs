//! In-memory document store for tests and ephemeral use.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::datastore::{
    Entity, Key,
    ports::{DatastoreError, DatastoreResult, DocumentStore},
};

/// Thread-safe in-memory document store.
///
/// Clones share the same underlying entities.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatastore {
    entities: Arc<RwLock<BTreeMap<Key, Entity>>>,
}

impl InMemoryDatastore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities across all kinds.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Poisoned`] when the state lock is poisoned.
    pub fn len(&self) -> DatastoreResult<usize> {
        let entities = self
            .entities
            .read()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        Ok(entities.len())
    }
}

impl DocumentStore for InMemoryDatastore {
    fn get(&self, key: &Key) -> DatastoreResult<Option<Entity>> {
        let entities = self
            .entities
            .read()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        Ok(entities.get(key).cloned())
    }

    fn put(&self, entity: Entity) -> DatastoreResult<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        entities.insert(entity.key().clone(), entity);
        Ok(())
    }

    fn delete(&self, key: &Key) -> DatastoreResult<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        entities.remove(key);
        Ok(())
    }

    fn query(&self, kind: &str) -> DatastoreResult<Vec<Entity>> {
        let entities = self
            .entities
            .read()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        Ok(entities
            .values()
            .filter(|entity| entity.key().kind() == kind)
            .cloned()
            .collect())
    }
}
