//! Integration tests for prediction submission rules.

use axum::http::StatusCode;

use crate::helpers::{TestApp, unique};

async fn submit(
    app: &TestApp,
    user_id: uuid::Uuid,
    session_id: uuid::Uuid,
    predicted_time: &str,
) -> crate::helpers::TestResponse {
    app.request(
        "POST",
        "/api/predictions",
        Some(serde_json::json!({
            "user_id": user_id,
            "session_id": session_id,
            "predicted_time": predicted_time,
        })),
        None,
    )
    .await
}

#[tokio::test]
async fn a_valid_prediction_is_stored_with_derived_minutes() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Deploy"), (&admin, "hunter2hunter2"))
        .await;
    let user_id = app.create_user(&unique("Sam"), "Rivera").await;

    let response = submit(&app, user_id, session_id, "02:30").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["predicted_time"], "02:30");
    assert_eq!(response.data()["predicted_minutes"], 150);
    assert!(response.data()["difference_minutes"].is_null());
}

#[tokio::test]
async fn malformed_times_are_rejected_before_anything_else() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_id = uuid::Uuid::new_v4();
    let session_id = uuid::Uuid::new_v4();

    // Even a nonexistent session reports the format error first.
    let response = submit(&app, user_id, session_id, "2:30").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("HH:MM"));
}

#[tokio::test]
async fn predictions_against_unknown_sessions_fail() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = submit(&app, uuid::Uuid::new_v4(), uuid::Uuid::new_v4(), "02:30").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.error().contains("Session"));
}

#[tokio::test]
async fn one_prediction_per_user_per_session() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Upgrade"), (&admin, "hunter2hunter2"))
        .await;
    let user_id = app.create_user(&unique("Lena"), "Brandt").await;

    let first = submit(&app, user_id, session_id, "01:00").await;
    assert_eq!(first.status, StatusCode::OK);

    // A different guess from the same user is still rejected.
    let second = submit(&app, user_id, session_id, "01:15").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.error().contains("already submitted"));
}

#[tokio::test]
async fn identical_guesses_name_the_earlier_user() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Migration"), (&admin, "hunter2hunter2"))
        .await;
    let first_name = unique("Noor");
    let first_user = app.create_user(&first_name, "Haddad").await;
    let second_user = app.create_user(&unique("Till"), "Mayer").await;

    let first = submit(&app, first_user, session_id, "03:45").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = submit(&app, second_user, session_id, "03:45").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.error().contains("03:45"));
    assert!(
        second.error().contains(&first_name),
        "error should name the user who took the time: {}",
        second.error()
    );
}

#[tokio::test]
async fn listings_attach_the_user() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let admin = unique("admin");
    app.create_admin(&admin, "hunter2hunter2").await;
    let session_id = app
        .create_session(&unique("Rollout"), (&admin, "hunter2hunter2"))
        .await;
    let first_name = unique("Ana");
    let user_id = app.create_user(&first_name, "Silva").await;
    submit(&app, user_id, session_id, "00:45").await;

    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}/predictions"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.data().as_array().expect("expected a list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["prediction"]["predicted_time"], "00:45");
    assert_eq!(items[0]["user"]["first_name"].as_str().unwrap(), first_name);
}
