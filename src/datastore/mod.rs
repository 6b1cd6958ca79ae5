//! Key-addressed document storage.
//!
//! Repositories persist domain aggregates as [`Entity`] documents addressed
//! by a [`Key`] (kind tag plus identifier). The store client is constructed
//! explicitly, usually through [`DatastoreConfig::open`], and handed to the
//! repositories that need it.
//!
//! - Data model in [`key`] and [`entity`]
//! - Port contract in [`ports`]
//! - Backends in [`adapters`]
//! - Backend selection in [`config`]

pub mod adapters;
pub mod config;
pub mod entity;
pub mod key;
pub mod ports;

pub use config::{DatastoreBackend, DatastoreConfig, DatastoreConfigError};
pub use entity::{Entity, Value};
pub use key::{Key, KeyId};
pub use ports::{DatastoreError, DatastoreResult, DocumentStore};
