//! Integration tests for role- and ownership-based authorization.

use http::StatusCode;

use crate::helpers::unique;
use crate::require_test_db;

#[tokio::test]
async fn test_admin_endpoint_rejects_anonymous() {
    let app = require_test_db!();

    let response = app.request("GET", "/api/couriers", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_endpoint_rejects_client_role() {
    let app = require_test_db!();
    let username = unique("pol_client");
    app.create_test_user(&username, "password123", &[]).await;
    let token = app.login(&username, "password123").await;

    let response = app.request("GET", "/api/couriers", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_endpoint_allows_admin_role() {
    let app = require_test_db!();
    let username = unique("pol_admin");
    app.create_test_user(&username, "password123", &["admin"])
        .await;
    let token = app.login(&username, "password123").await;

    let response = app.request("GET", "/api/couriers", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_kitchen_role_allowed_on_kitchen_endpoint() {
    let app = require_test_db!();
    let username = unique("pol_kitchen");
    app.create_test_user(&username, "password123", &["personal_cocina"])
        .await;
    let token = app.login(&username, "password123").await;

    let response = app.request("GET", "/api/orders", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_endpoint_allows_anonymous() {
    let app = require_test_db!();

    let response = app.request("GET", "/api/products", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_ownership_allows_own_resource() {
    let app = require_test_db!();
    let username = unique("own_self");
    app.create_test_user(&username, "password123", &[]).await;
    let token = app.login(&username, "password123").await;

    let login = app
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
    let own_id = login.body["id"].as_i64().unwrap();

    let response = app
        .request(
            "GET",
            &format!("/api/orders/client/{own_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_ownership_denies_foreign_resource() {
    let app = require_test_db!();
    let username = unique("own_other");
    app.create_test_user(&username, "password123", &[]).await;
    let token = app.login(&username, "password123").await;

    let login = app
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
    let foreign_id = login.body["id"].as_i64().unwrap() + 1;

    let response = app
        .request(
            "GET",
            &format!("/api/orders/client/{foreign_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_bypasses_ownership() {
    let app = require_test_db!();
    let username = unique("own_admin");
    app.create_test_user(&username, "password123", &["admin"])
        .await;
    let token = app.login(&username, "password123").await;

    let response = app
        .request("GET", "/api/orders/client/999999", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
