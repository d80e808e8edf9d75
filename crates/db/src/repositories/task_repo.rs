//! Repository for the `tasks` table.
//!
//! The table doubles as the queue transport between the API and the worker
//! binary. Claiming uses `SELECT FOR UPDATE SKIP LOCKED` so several worker
//! processes can share one queue without double-execution.

use hyperion_core::types::DbId;
use sqlx::PgPool;

use crate::models::status::TaskStatus;
use crate::models::task::{SubmitTask, Task};

/// Column list for `tasks` queries.
const COLUMNS: &str = "id, task_type, status_id, submitted_by, parameters, result, \
                        error_message, submitted_at, claimed_at, completed_at, \
                        created_at, updated_at";

/// Provides queue operations for background tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Create a new pending task. Returns immediately with the task row;
    /// the id is the caller's handle for later status lookups.
    pub async fn submit(
        pool: &PgPool,
        submitted_by: Option<DbId>,
        input: &SubmitTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (task_type, status_id, submitted_by, parameters) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.task_type)
            .bind(TaskStatus::Pending.id())
            .bind(submitted_by)
            .bind(&input.parameters)
            .fetch_one(pool)
            .await
    }

    /// Atomically claim the oldest unclaimed pending task.
    ///
    /// Returns `None` when the queue is empty.
    pub async fn claim_next(pool: &PgPool) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks \
             SET status_id = $1, claimed_at = NOW() \
             WHERE id = ( \
                 SELECT id FROM tasks \
                 WHERE status_id = $2 AND claimed_at IS NULL \
                 ORDER BY submitted_at ASC, id ASC \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(TaskStatus::Running.id())
            .bind(TaskStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }

    /// Mark a task as completed with its result payload.
    pub async fn complete(
        pool: &PgPool,
        task_id: DbId,
        result: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE tasks SET status_id = $2, result = $3, completed_at = NOW() WHERE id = $1",
        )
        .bind(task_id)
        .bind(TaskStatus::Completed.id())
        .bind(result)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a task as failed with an error message.
    ///
    /// No automatic retry is performed; the row stays in `Failed` status.
    pub async fn fail(pool: &PgPool, task_id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE tasks \
             SET status_id = $2, error_message = $3, completed_at = NOW() \
             WHERE id = $1",
        )
        .bind(task_id)
        .bind(TaskStatus::Failed.id())
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
