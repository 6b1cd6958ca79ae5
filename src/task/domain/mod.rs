//! Domain model for tasks.
//!
//! Value objects validate on construction, so a [`TaskKey`] or
//! [`TaskName`] in hand is always well formed. [`Task`] is an immutable
//! entity whose transitions return new versions. Storage concerns stay
//! outside the domain boundary.

mod error;
mod key;
mod name;
mod task;

pub use error::TaskDomainError;
pub use key::TaskKey;
pub use name::TaskName;
pub use task::{PersistedTaskData, Task};
