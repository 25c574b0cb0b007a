//! Integration tests for the exclusive-access lock protocol.

use std::time::{Duration, Instant};

use http::StatusCode;

use comanda_core::error::ErrorKind;
use comanda_entity::category::NewCategory;

use crate::helpers::{TEST_DWELL_SECONDS, unique};
use crate::require_test_db;

#[tokio::test]
async fn test_second_locker_blocks_until_first_releases() {
    let app = require_test_db!();

    let category = app
        .state
        .category_repo
        .create(&NewCategory {
            name: unique("lock_cat"),
            description: None,
        })
        .await
        .unwrap();

    let dwell = Duration::from_secs(TEST_DWELL_SECONDS);
    let repo_a = app.state.category_repo.clone();
    let repo_b = app.state.category_repo.clone();
    let id = category.id;

    let started = Instant::now();
    let (a, b) = tokio::join!(
        repo_a.find_by_id_locked(id, dwell),
        repo_b.find_by_id_locked(id, dwell),
    );
    let elapsed = started.elapsed();

    assert_eq!(a.unwrap().id, id);
    assert_eq!(b.unwrap().id, id);

    // The second acquisition cannot begin its dwell until the first
    // transaction commits, so the two dwells serialize.
    let serialized = Duration::from_secs(TEST_DWELL_SECONDS * 2);
    assert!(
        elapsed >= serialized - Duration::from_millis(500),
        "locked fetches overlapped: {elapsed:?} < {serialized:?}"
    );
}

#[tokio::test]
async fn test_missing_row_is_not_found_without_dwell() {
    let app = require_test_db!();

    let started = Instant::now();
    let err = app
        .state
        .category_repo
        .find_by_id_locked(i64::MAX, Duration::from_secs(TEST_DWELL_SECONDS))
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(
        elapsed < Duration::from_secs(1),
        "missing row must not hold the dwell"
    );
}

#[tokio::test]
async fn test_lock_endpoint_is_admin_gated() {
    let app = require_test_db!();
    let username = unique("lock_client");
    app.create_test_user(&username, "password123", &[]).await;
    let token = app.login(&username, "password123").await;

    let response = app
        .request("GET", "/api/categories/1/lock", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_lock_endpoint_returns_entity_after_dwell() {
    let app = require_test_db!();
    let username = unique("lock_admin");
    app.create_test_user(&username, "password123", &["admin"])
        .await;
    let token = app.login(&username, "password123").await;

    let name = unique("lock_probe");
    let category = app
        .state
        .category_repo
        .create(&NewCategory {
            name: name.clone(),
            description: None,
        })
        .await
        .unwrap();

    let started = Instant::now();
    let response = app
        .request(
            "GET",
            &format!("/api/categories/{}/lock", category.id),
            None,
            Some(&token),
        )
        .await;
    let elapsed = started.elapsed();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], name.as_str());
    assert!(
        elapsed >= Duration::from_secs(TEST_DWELL_SECONDS),
        "lock probe returned before the dwell elapsed"
    );
}
