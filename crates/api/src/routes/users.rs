//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`. All require authentication.
///
/// ```text
/// GET /users       -> list_users
/// GET /users/{id}  -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
}
