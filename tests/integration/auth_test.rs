//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::unique;
use crate::require_test_db;

#[tokio::test]
async fn test_login_success() {
    let app = require_test_db!();
    let username = unique("login_ok");
    app.create_test_user(&username, "password123", &[]).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["token_type"], "Bearer");
    let roles: Vec<_> = response.body["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap().to_string())
        .collect();
    assert!(roles.contains(&"ROLE_CLIENTE".to_string()));
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = require_test_db!();
    let username = unique("login_badpw");
    app.create_test_user(&username, "password123", &[]).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = require_test_db!();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": unique("nobody"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_inactive_account() {
    let app = require_test_db!();
    let username = unique("login_inactive");
    app.create_test_user(&username, "password123", &[]).await;

    sqlx::query("UPDATE users SET active = FALSE WHERE username = $1")
        .bind(&username)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_duplicate_username_is_conflict() {
    let app = require_test_db!();
    let username = unique("dup");

    let signup = |email: String| {
        serde_json::json!({
            "username": username,
            "email": email,
            "password": "password123",
            "first_name": "Dup",
            "last_name": "User",
        })
    };

    let first = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(signup(format!("{username}@test.local"))),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(signup(format!("{username}-other@test.local"))),
            None,
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "failed signup must not write");
}

#[tokio::test]
async fn test_session_info_authenticated() {
    let app = require_test_db!();
    let username = unique("session");
    app.create_test_user(&username, "password123", &["admin"])
        .await;
    let token = app.login(&username, "password123").await;

    let response = app
        .request("GET", "/api/auth/session-info", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], username.as_str());
}

#[tokio::test]
async fn test_session_info_anonymous() {
    let app = require_test_db!();

    let response = app
        .request("GET", "/api/auth/session-info", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "No active session");
}

#[tokio::test]
async fn test_tampered_token_is_anonymous() {
    let app = require_test_db!();
    let username = unique("tamper");
    app.create_test_user(&username, "password123", &["admin"])
        .await;
    let token = app.login(&username, "password123").await;

    let mut tampered = token[..token.len() - 4].to_string();
    tampered.push_str("AAAA");

    // Tampered credential degrades to anonymous, so an admin-gated
    // endpoint answers 401, not 403 or 500.
    let response = app
        .request("GET", "/api/couriers", None, Some(&tampered))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
