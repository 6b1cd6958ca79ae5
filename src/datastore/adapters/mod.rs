//! Adapter implementations for document storage ports.

pub mod json_file;
pub mod memory;
