//! Task tracking domain model with a document store persistence adapter.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task entity, validated value objects, repository and services
//! - [`project`]: Project identity referenced by tasks
//! - [`datastore`]: Key-addressed document store the repositories persist to

pub mod datastore;
pub mod project;
pub mod task;
