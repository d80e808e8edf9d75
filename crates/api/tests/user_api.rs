//! HTTP-level integration tests for the `/users` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_auth, login_user, register_user};
use sqlx::PgPool;
use tower::ServiceExt;

/// `/users` requires a bearer token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_users_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get(app, "/users/1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A malformed Authorization header (wrong scheme) is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_users_rejects_non_bearer_scheme(pool: PgPool) {
    let app = build_test_app(pool);

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .uri("/users")
                .header("authorization", "Basic dXNlcjpwdw==")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Listing returns every registered user's public fields, wrapped in a
/// `users` envelope, and never credential material.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users(pool: PgPool) {
    let app = build_test_app(pool);

    register_user(&app, "one@example.com", "pw-one").await;
    register_user(&app, "two@example.com", "pw-two").await;
    let token = login_user(&app, "one@example.com", "pw-one").await;

    let response = get_auth(app, "/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().expect("users must be an array");
    assert_eq!(users.len(), 2);

    for user in users {
        assert!(user["id"].is_number());
        assert!(user["email"].is_string());
        assert!(user.get("password_hash").is_none());
        assert!(user.get("role").is_none());
    }
}

/// Looking up an id that does not exist returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_user_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    register_user(&app, "present@example.com", "pw123").await;
    let token = login_user(&app, "present@example.com", "pw123").await;

    let response = get_auth(app, "/users/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
