//! Handlers for the `/users` resource.
//!
//! Both endpoints require a valid bearer token via [`AuthUser`].

use axum::extract::{Path, State};
use axum::Json;
use hyperion_core::error::CoreError;
use hyperion_core::types::DbId;
use hyperion_db::models::user::UserResponse;
use hyperion_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `GET /users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// GET /users
///
/// List every registered user's public fields.
pub async fn list_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UsersResponse>> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(UsersResponse {
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

/// GET /users/{id}
///
/// Get a single user's public fields by ID.
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}
