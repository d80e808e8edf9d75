//! Route definitions for the auth endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST /token     -> login (form-encoded username + password)
/// POST /register  -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(auth::login))
        .route("/register", post(auth::register))
}
