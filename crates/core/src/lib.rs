//! Shared domain types and errors for the taskboard workspace.

pub mod error;
pub mod types;
