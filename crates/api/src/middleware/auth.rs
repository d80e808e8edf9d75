//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hyperion_core::error::CoreError;
use hyperion_db::models::user::User;
use hyperion_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AuthError};
use crate::state::AppState;

/// Authenticated user resolved from a JWT bearer token in the
/// `Authorization` header.
///
/// Decoding proves signature and expiry; the subject is then resolved back
/// to its user row, so a token whose account has since disappeared does
/// not authenticate. The resolved row is proof of identity for the current
/// request only -- no session object persists between requests.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user row backing this request's identity.
    pub user: User,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims =
            validate_token(token, &state.config.jwt).map_err(|_| AuthError::InvalidToken)?;

        let user = UserRepo::find_by_email(&state.pool, &claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthUser { user })
    }
}
