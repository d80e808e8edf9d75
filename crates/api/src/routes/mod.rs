pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// POST /token        login (public, form-encoded)
/// POST /register     register (public)
///
/// GET  /users        list users (requires auth)
/// GET  /users/{id}   get user (requires auth)
///
/// GET  /math         queue demo addition (public)
/// POST /tasks        submit task (requires auth)
/// GET  /tasks/{id}   task status (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(tasks::router())
}
