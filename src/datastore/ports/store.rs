//! Document store port: blocking key-addressed persistence.

use crate::datastore::{Entity, Key};
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type DatastoreResult<T> = Result<T, DatastoreError>;

/// Key-addressed document store contract.
///
/// Every call is a single blocking request/response round trip. There are no
/// transactions spanning calls.
pub trait DocumentStore: Send + Sync {
    /// Looks up the entity stored at `key`.
    ///
    /// Returns `None` when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] when the backend cannot be read.
    fn get(&self, key: &Key) -> DatastoreResult<Option<Entity>>;

    /// Upserts `entity` at its own key.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] when the write is not durable.
    fn put(&self, entity: Entity) -> DatastoreResult<()>;

    /// Removes the entity at `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] when the backend cannot be written.
    fn delete(&self, key: &Key) -> DatastoreResult<()>;

    /// Returns every entity whose key has the given kind, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] when the backend cannot be read.
    fn query(&self, kind: &str) -> DatastoreResult<Vec<Entity>>;
}

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum DatastoreError {
    /// Shared store state was poisoned by a panicking writer.
    #[error("store state is poisoned: {0}")]
    Poisoned(String),

    /// The persisted snapshot could not be decoded or encoded.
    #[error("corrupt snapshot: {0}")]
    Snapshot(Arc<serde_json::Error>),

    /// Backend I/O failure.
    #[error("store I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl DatastoreError {
    /// Wraps a lock poisoning error.
    pub fn poisoned(err: &impl std::fmt::Display) -> Self {
        Self::Poisoned(err.to_string())
    }
}

impl From<std::io::Error> for DatastoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for DatastoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(Arc::new(err))
    }
}
