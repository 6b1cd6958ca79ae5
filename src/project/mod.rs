//! Project references consumed by the task domain.
//!
//! Projects are a separate aggregate. Tasks hold only a [`domain::ProjectKey`]
//! pointing at one, with no ownership and no cascading.

pub mod domain;
