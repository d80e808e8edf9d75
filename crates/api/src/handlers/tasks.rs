//! Handlers for background task submission and lookup.
//!
//! Tasks are queued rows in the shared database; the worker binary claims
//! and executes them. Submission returns immediately with the task handle
//! and never blocks on execution.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hyperion_core::error::CoreError;
use hyperion_core::types::DbId;
use hyperion_db::models::task::{SubmitTask, Task};
use hyperion_db::repositories::TaskRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /math
///
/// Offload a demonstration addition to the worker and return the queued
/// task id as an opaque handle.
pub async fn math(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let submit = SubmitTask {
        task_type: "add".to_string(),
        parameters: json!({ "x": 4, "y": 4 }),
    };
    let task = TaskRepo::submit(&state.pool, None, &submit).await?;

    tracing::info!(task_id = task.id, "Addition task queued");

    Ok(Json(json!({ "math": task.id.to_string() })))
}

/// POST /tasks
///
/// Submit a new background task. Returns 201 with the created row; the
/// task starts in `pending` status and is picked up by the worker.
pub async fn submit_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::submit(&state.pool, Some(auth.user.id), &input).await?;

    tracing::info!(
        task_id = task.id,
        task_type = %task.task_type,
        user_id = auth.user.id,
        "Task submitted",
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id}
///
/// Get a single task (status, result, error) by ID.
pub async fn get_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(task))
}
