//! Integration tests for user registration and lookup.

use axum::http::StatusCode;

use crate::helpers::{TestApp, unique};

#[tokio::test]
async fn registration_is_idempotent_for_the_same_name() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let first = unique("Maya");
    let body = serde_json::json!({
        "first_name": first.as_str(),
        "last_name": "Navarro",
        "work_area": "Operations",
    });

    let created = app.request("POST", "/api/users", Some(body), None).await;
    assert_eq!(created.status, StatusCode::OK);
    assert!(created.success());
    let id = created.data()["id"].as_str().unwrap().to_string();

    // Same name with different casing returns the same record, not an error.
    let again = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "first_name": first.to_uppercase(),
                "last_name": "NAVARRO",
                "work_area": "Somewhere else",
            })),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert!(again.success());
    assert_eq!(again.data()["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn lookup_matches_case_insensitively() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let first = unique("Iris");
    let id = app.create_user(&first, "Quint").await;

    let response = app
        .request(
            "GET",
            &format!(
                "/api/users/lookup?first_name={}&last_name=quint",
                first.to_lowercase()
            ),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"].as_str().unwrap(), id.to_string());
}

#[tokio::test]
async fn lookup_of_unknown_user_fails() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "GET",
            "/api/users/lookup?first_name=No&last_name=Body",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!response.success());
}

#[tokio::test]
async fn get_by_id_returns_the_user() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let first = unique("Olga");
    let id = app.create_user(&first, "Petrov").await;

    let response = app
        .request("GET", &format!("/api/users/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["first_name"].as_str().unwrap(), first);
    assert_eq!(response.data()["role"].as_str().unwrap(), "user");
}
