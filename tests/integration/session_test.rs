//! Integration tests for the session lifecycle.

use axum::http::StatusCode;

use crate::helpers::{TestApp, unique};

#[tokio::test]
async fn a_new_session_starts_open_and_untimed() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Sprint demo"), (&admin, "hunter2hunter2"))
        .await;

    let response = app
        .request("GET", &format!("/api/sessions/{session_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["is_closed"], false);
    assert!(data["start_time"].is_null());
    assert!(data["end_time"].is_null());
    assert!(data["actual_duration_minutes"].is_null());
}

#[tokio::test]
async fn assigning_times_computes_the_duration() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Retro"), (&admin, "hunter2hunter2"))
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/sessions/{session_id}/times"),
            Some(serde_json::json!({
                "start_time": "09:00",
                "end_time": "11:30",
            })),
            Some((&admin, "hunter2hunter2")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["actual_duration_minutes"], 150);

    // Re-assignment overwrites, including across midnight.
    let overwritten = app
        .request(
            "PUT",
            &format!("/api/sessions/{session_id}/times"),
            Some(serde_json::json!({
                "start_time": "23:00",
                "end_time": "01:00",
            })),
            Some((&admin, "hunter2hunter2")),
        )
        .await;

    assert_eq!(overwritten.status, StatusCode::OK);
    assert_eq!(overwritten.data()["actual_duration_minutes"], 120);
    assert_eq!(overwritten.data()["start_time"], "23:00");
}

#[tokio::test]
async fn malformed_times_are_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Planning"), (&admin, "hunter2hunter2"))
        .await;

    for (start, end) in [("9:00", "11:30"), ("09:00", "25:00"), ("09:00", "11:60")] {
        let response = app
            .request(
                "PUT",
                &format!("/api/sessions/{session_id}/times"),
                Some(serde_json::json!({ "start_time": start, "end_time": end })),
                Some((&admin, "hunter2hunter2")),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{start}-{end}");
        assert!(!response.success());
    }
}

#[tokio::test]
async fn closing_blocks_predictions_and_reopening_allows_them() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Standup"), (&admin, "hunter2hunter2"))
        .await;
    let user_id = app.create_user(&unique("Pat"), "Jordan").await;

    let closed = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/close"),
            None,
            Some((&admin, "hunter2hunter2")),
        )
        .await;
    assert_eq!(closed.status, StatusCode::OK);
    assert_eq!(closed.data()["is_closed"], true);

    let rejected = app
        .request(
            "POST",
            "/api/predictions",
            Some(serde_json::json!({
                "user_id": user_id,
                "session_id": session_id,
                "predicted_time": "01:30",
            })),
            None,
        )
        .await;
    assert_eq!(rejected.status, StatusCode::CONFLICT);
    assert!(rejected.error().contains("closed"));

    let reopened = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/open"),
            None,
            Some((&admin, "hunter2hunter2")),
        )
        .await;
    assert_eq!(reopened.data()["is_closed"], false);

    let accepted = app
        .request(
            "POST",
            "/api/predictions",
            Some(serde_json::json!({
                "user_id": user_id,
                "session_id": session_id,
                "predicted_time": "01:30",
            })),
            None,
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert!(accepted.success());
}

#[tokio::test]
async fn closing_twice_is_idempotent() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Review"), (&admin, "hunter2hunter2"))
        .await;

    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                &format!("/api/sessions/{session_id}/close"),
                None,
                Some((&admin, "hunter2hunter2")),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.data()["is_closed"], true);
    }
}

#[tokio::test]
async fn blank_session_names_are_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;

    let response = app
        .request(
            "POST",
            "/api/sessions",
            Some(serde_json::json!({ "name": "   " })),
            Some((&admin, "hunter2hunter2")),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.success());
}
