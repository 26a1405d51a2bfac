//! Integration tests for difference recomputation and winner resolution.

use axum::http::StatusCode;

use crate::helpers::{TestApp, unique};

struct Arena {
    app: TestApp,
    admin: String,
    session_id: uuid::Uuid,
}

impl Arena {
    /// An admin, an open session, and a helper for submitting guesses.
    async fn try_new() -> Option<Self> {
        let app = TestApp::try_new().await?;
        let admin = unique("admin");
        app.create_admin(&admin, "hunter2hunter2").await;
        let session_id = app
            .create_session(&unique("Bake-off"), (&admin, "hunter2hunter2"))
            .await;
        Some(Self {
            app,
            admin,
            session_id,
        })
    }

    async fn guess(&self, first_name: &str, predicted_time: &str) {
        let user_id = self.app.create_user(first_name, "Guesser").await;
        let response = self
            .app
            .request(
                "POST",
                "/api/predictions",
                Some(serde_json::json!({
                    "user_id": user_id,
                    "session_id": self.session_id,
                    "predicted_time": predicted_time,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "guess failed");
    }

    async fn record_times(&self, start: &str, end: &str) {
        let response = self
            .app
            .request(
                "PUT",
                &format!("/api/sessions/{}/times", self.session_id),
                Some(serde_json::json!({ "start_time": start, "end_time": end })),
                Some((&self.admin, "hunter2hunter2")),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "time assignment failed");
    }

    async fn winner(&self) -> crate::helpers::TestResponse {
        self.app
            .request(
                "GET",
                &format!("/api/sessions/{}/winner", self.session_id),
                None,
                None,
            )
            .await
    }
}

#[tokio::test]
async fn winner_requires_recorded_times() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    arena.guess(&unique("Kim"), "01:00").await;

    let response = arena.winner().await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.error().contains("no recorded duration"));
}

#[tokio::test]
async fn the_closest_guess_wins() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    let near = unique("Nina");
    let far = unique("Franz");
    // Actual duration will be 130 minutes.
    arena.guess(&near, "02:05").await; // 125 -> off by 5
    arena.guess(&far, "03:00").await; // 180 -> off by 50
    arena.record_times("09:00", "11:10").await;

    let response = arena.winner().await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["user"]["first_name"].as_str().unwrap(), near);
    assert_eq!(data["actual_duration"], "02:10");
    assert_eq!(data["predicted_time"], "02:05");
    assert_eq!(data["difference_minutes"], 5);
    assert_eq!(data["difference_display"], "+5 min");
}

#[tokio::test]
async fn exact_ties_go_to_the_earliest_submission() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    let early = unique("Early");
    let late = unique("Late");
    // Actual 130; both guesses are exactly 10 minutes off.
    arena.guess(&early, "02:00").await; // 120
    arena.guess(&late, "02:20").await; // 140
    arena.record_times("09:00", "11:10").await;

    // The result is stable across repeated resolutions.
    for _ in 0..3 {
        let response = arena.winner().await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.data()["user"]["first_name"].as_str().unwrap(),
            early
        );
        assert_eq!(response.data()["difference_minutes"], 10);
    }
}

#[tokio::test]
async fn differences_are_recomputed_when_times_change() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    arena.guess(&unique("Aldo"), "02:00").await; // 120
    arena.record_times("09:00", "11:00").await; // actual 120

    let exact = arena.winner().await;
    assert_eq!(exact.data()["difference_minutes"], 0);
    assert_eq!(exact.data()["difference_display"], "0 min");

    // Times change; a fresh resolution reflects the new actual duration.
    arena.record_times("09:00", "12:00").await; // actual 180
    let shifted = arena.winner().await;
    assert_eq!(shifted.data()["difference_minutes"], 60);
    assert_eq!(shifted.data()["difference_display"], "+1h");
}

#[tokio::test]
async fn recompute_endpoint_reports_the_updated_count() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    arena.guess(&unique("Ben"), "01:00").await;
    arena.guess(&unique("Cleo"), "02:00").await;
    arena.record_times("10:00", "11:30").await;

    let response = arena
        .app
        .request(
            "POST",
            &format!("/api/sessions/{}/differences", arena.session_id),
            None,
            Some((&arena.admin, "hunter2hunter2")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["updated"], 2);
}

#[tokio::test]
async fn winner_without_predictions_is_not_found() {
    let Some(arena) = Arena::try_new().await else {
        return;
    };

    arena.record_times("09:00", "10:00").await;

    let response = arena.winner().await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.error().contains("No predictions"));
}
