//! Offline smoke tests — no database required.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.success());
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
async fn unknown_routes_return_not_found() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_reject_missing_credentials() {
    let app = TestApp::offline();

    let response = app
        .request(
            "POST",
            "/api/sessions",
            Some(serde_json::json!({ "name": "Friday round" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.success());
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn validation_failures_use_the_error_envelope() {
    let app = TestApp::offline();

    // Registration validates the body before touching the database.
    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "first_name": "",
                "last_name": "Nobody",
                "work_area": "QA",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.success());
    assert!(response.error().contains("First name"));
}
