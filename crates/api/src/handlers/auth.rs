//! Handlers for the authentication endpoints (`/token`, `/register`).

use axum::extract::State;
use axum::{Form, Json};
use hyperion_core::error::CoreError;
use hyperion_core::roles::UserRole;
use hyperion_db::models::user::{CreateUser, UserResponse};
use hyperion_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult, AuthError};
use crate::state::AppState;

/// Timestamp format of the human-readable `expiration` field.
const EXPIRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token` (OAuth2 password-style login).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// The user's email address.
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Human-readable UTC expiration (`YYYY-MM-DD HH:MM:SS`).
    pub expiration: String,
    #[serde(rename = "type")]
    pub token_type: &'static str,
}

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone_number: String,
    pub password: String,
    /// Defaults to `"1"` when omitted.
    pub phone_country_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /token
///
/// Authenticate with email + password, returning a bearer token with the
/// default TTL. Performs zero writes.
///
/// Unknown users and wrong passwords produce the same 401 response so the
/// outcome does not disclose whether an account exists.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&input.password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials.into());
    }

    let issued = generate_access_token(&user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token: issued.token,
        expiration: issued.expires_at.format(EXPIRATION_FORMAT).to_string(),
        token_type: "bearer",
    }))
}

/// POST /register
///
/// Create a new user with the default role. Exactly one durable write.
/// Returns the public fields of the created record; the password hash never
/// appears in any output representation.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<UserResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        phone_number: input.phone_number,
        phone_country_code: input.phone_country_code.unwrap_or_else(|| "1".to_string()),
        password_hash,
        role: UserRole::default().as_str().to_string(),
    };

    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(map_unique_violation)?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(UserResponse::from(&user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Translate a unique-constraint violation on the users email into
/// [`AuthError::DuplicateEmail`]. Other errors pass through as database
/// failures.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AuthError::DuplicateEmail.into();
        }
    }
    AppError::Database(err)
}
