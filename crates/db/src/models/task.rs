//! Task entity model and DTOs.
//!
//! Every task belongs to exactly one project; `project_id` always references
//! an existing `projects` row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task joined with its project's name, for list and detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub description: String,
}

/// DTO for updating an existing task. All fields are optional; `None` fields
/// keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    pub description: Option<String>,
}
