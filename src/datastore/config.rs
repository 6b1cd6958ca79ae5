//! Store selection and construction.

use std::env;
use std::sync::Arc;

use camino::Utf8PathBuf;
use serde::Deserialize;
use thiserror::Error;

use super::{
    DatastoreError, DocumentStore,
    adapters::{json_file::JsonFileDatastore, memory::InMemoryDatastore},
};

/// Environment variable naming the backend (`memory` or `json_file`).
pub const BACKEND_ENV: &str = "TODO_DATASTORE_BACKEND";

/// Environment variable holding the snapshot path for `json_file`.
pub const PATH_ENV: &str = "TODO_DATASTORE_PATH";

/// Backend a [`DatastoreConfig`] opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum DatastoreBackend {
    /// Process-local store, lost on exit.
    #[default]
    Memory,
    /// JSON snapshot file at `path`.
    JsonFile {
        /// Snapshot location; the parent directory must exist.
        path: Utf8PathBuf,
    },
}

/// Document store configuration.
///
/// # Examples
///
/// ```
/// use todo_tasks::datastore::{DatastoreBackend, DatastoreConfig};
///
/// let config = DatastoreConfig::default();
/// assert_eq!(config.backend, DatastoreBackend::Memory);
/// assert!(config.open().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatastoreConfig {
    /// Selected backend.
    #[serde(flatten)]
    pub backend: DatastoreBackend,
}

/// Errors raised while building or opening a store from configuration.
#[derive(Debug, Clone, Error)]
pub enum DatastoreConfigError {
    /// The backend name is not recognised.
    #[error("unsupported datastore backend '{0}', expected memory or json_file")]
    UnsupportedBackend(String),

    /// The `json_file` backend was selected without a path.
    #[error("TODO_DATASTORE_PATH must be set for the json_file backend")]
    MissingPath,

    /// The selected store could not be opened.
    #[error(transparent)]
    Open(#[from] DatastoreError),
}

impl DatastoreConfig {
    /// Creates a configuration for the in-memory backend.
    #[must_use]
    pub const fn memory() -> Self {
        Self {
            backend: DatastoreBackend::Memory,
        }
    }

    /// Creates a configuration for a JSON snapshot file.
    #[must_use]
    pub fn json_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            backend: DatastoreBackend::JsonFile { path: path.into() },
        }
    }

    /// Reads the configuration from [`BACKEND_ENV`] and [`PATH_ENV`].
    ///
    /// With no backend set, a present path selects `json_file` and an
    /// absent one selects `memory`.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreConfigError::UnsupportedBackend`] for an unknown
    /// backend name and [`DatastoreConfigError::MissingPath`] when
    /// `json_file` is selected without a path.
    pub fn from_env() -> Result<Self, DatastoreConfigError> {
        Self::from_values(env::var(BACKEND_ENV).ok(), env::var(PATH_ENV).ok())
    }

    fn from_values(
        backend: Option<String>,
        path: Option<String>,
    ) -> Result<Self, DatastoreConfigError> {
        let path = path.filter(|value| !value.trim().is_empty());
        let backend = backend
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty());

        match (backend.as_deref(), path) {
            (None | Some("memory"), None) | (Some("memory"), Some(_)) => Ok(Self::memory()),
            (None | Some("json_file"), Some(path)) => Ok(Self::json_file(path)),
            (Some("json_file"), None) => Err(DatastoreConfigError::MissingPath),
            (Some(other), _) => Err(DatastoreConfigError::UnsupportedBackend(other.to_owned())),
        }
    }

    /// Opens the configured store as a shared client handle.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreConfigError::Open`] when the backend cannot be
    /// opened.
    pub fn open(&self) -> Result<Arc<dyn DocumentStore>, DatastoreConfigError> {
        let store: Arc<dyn DocumentStore> = match &self.backend {
            DatastoreBackend::Memory => Arc::new(InMemoryDatastore::new()),
            DatastoreBackend::JsonFile { path } => Arc::new(JsonFileDatastore::open(path)?),
        };
        Ok(store)
    }
}
