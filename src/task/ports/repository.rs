//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDomainError, TaskKey};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Calls are blocking and independent: there is no batching and no
/// transaction spanning calls.
pub trait TaskRepository: Send + Sync {
    /// Upserts `task` at its key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails.
    fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes the task stored at `key`. Deleting an absent task is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the delete fails.
    fn delete(&self, key: &TaskKey) -> TaskRepositoryResult<()>;

    /// Finds the task stored at `key`.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidPersistedData`] when the stored
    /// document does not form a valid task.
    fn fetch_no_raise(&self, key: &TaskKey) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidPersistedData`] when any stored
    /// document does not form a valid task.
    fn fetch_list(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(#[source] TaskDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
