//! Request handlers.
//!
//! Each submodule provides async handler functions for one record type,
//! rendering askama templates. Handlers delegate to the corresponding
//! repository in `taskboard_db` and map errors via [`crate::error::AppError`].

pub mod project;
pub mod task;
