//! Background task entity models and DTOs.

use hyperion_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub task_type: String,
    pub status_id: StatusId,
    /// `None` for tasks queued from unauthenticated endpoints.
    pub submitted_by: Option<DbId>,
    pub parameters: serde_json::Value,
    pub result: Option<serde_json::Value>,
    pub error_message: Option<String>,
    pub submitted_at: Timestamp,
    pub claimed_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a new task via `POST /tasks`.
#[derive(Debug, Deserialize)]
pub struct SubmitTask {
    pub task_type: String,
    pub parameters: serde_json::Value,
}
