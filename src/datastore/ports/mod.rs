//! Port contracts for document storage.
//!
//! Ports define the store-agnostic interface repositories are written
//! against.

pub mod store;

pub use store::{DatastoreError, DatastoreResult, DocumentStore};
