//! Route definitions for background tasks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task offload routes.
///
/// ```text
/// GET  /math        -> math (public demo: queue add(4, 4))
/// POST /tasks       -> submit_task (requires auth)
/// GET  /tasks/{id}  -> get_task (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/math", get(tasks::math))
        .route("/tasks", post(tasks::submit_task))
        .route("/tasks/{id}", get(tasks::get_task))
}
