//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine as _;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use timepool_api::{AppState, build_app};
use timepool_auth::gate::AdminGate;
use timepool_auth::password::{PasswordHasher, PasswordPolicy};
use timepool_core::config::app::{CorsConfig, ServerConfig};
use timepool_core::config::auth::AuthConfig;
use timepool_core::config::logging::LoggingConfig;
use timepool_core::config::{AppConfig, DatabaseConfig};
use timepool_database::connection::DatabasePool;
use timepool_database::repositories::admin::AdminCredentialRepository;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct setup
    pub db_pool: PgPool,
}

/// Decoded response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of the response envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` message of the response envelope.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or("")
    }

    /// Whether the envelope reports success.
    pub fn success(&self) -> bool {
        self.body["success"].as_bool().unwrap_or(false)
    }
}

impl TestApp {
    /// Create a test application against the test database.
    ///
    /// Returns `None` (and the calling test should bail out) when
    /// `TIMEPOOL_TEST_DATABASE_URL` is not set.
    pub async fn try_new() -> Option<Self> {
        let url = match std::env::var("TIMEPOOL_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping: TIMEPOOL_TEST_DATABASE_URL is not set");
                return None;
            }
        };

        let config = test_config(&url);
        let db_pool = DatabasePool::connect(&config.database)
            .await
            .expect("failed to connect to test database")
            .into_pool();

        timepool_database::migration::run_migrations(&db_pool)
            .await
            .expect("failed to run migrations");

        let state = AppState::new(config, db_pool.clone());
        Some(Self {
            router: build_app(state),
            db_pool,
        })
    }

    /// Create an application over a lazy pool that never connects.
    ///
    /// Only endpoints that do not touch the database respond successfully;
    /// used for offline smoke tests.
    pub fn offline() -> Self {
        let config = test_config("postgres://localhost:1/unreachable");
        let db_pool = DatabasePool::connect_lazy(&config.database)
            .expect("lazy pool construction should not fail")
            .into_pool();

        let state = AppState::new(config, db_pool.clone());
        Self {
            router: build_app(state),
            db_pool,
        }
    }

    /// Send a request and decode the JSON response body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        basic_auth: Option<(&str, &str)>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some((username, password)) = basic_auth {
            let token =
                base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
            builder = builder.header(header::AUTHORIZATION, format!("Basic {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Store an admin credential directly through the gate.
    pub async fn create_admin(&self, username: &str, password: &str) {
        let gate = AdminGate::new(
            Arc::new(AdminCredentialRepository::new(self.db_pool.clone())),
            PasswordHasher::new(),
            PasswordPolicy::new(&AuthConfig {
                password_min_length: 8,
                require_strong_passwords: false,
            }),
        );
        gate.bootstrap(username, password)
            .await
            .expect("failed to bootstrap admin");
    }

    /// Register a user through the API and return its ID.
    pub async fn create_user(&self, first_name: &str, last_name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({
                    "first_name": first_name,
                    "last_name": last_name,
                    "work_area": "Testing",
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "user creation failed");
        response.data()["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("user id missing")
    }

    /// Create a session through the API as the given admin.
    pub async fn create_session(&self, name: &str, admin: (&str, &str)) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/sessions",
                Some(serde_json::json!({ "name": name })),
                Some(admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "session creation failed");
        response.data()["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("session id missing")
    }
}

/// A short unique suffix so parallel tests never collide on names.
pub fn unique(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

fn test_config(database_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig {
            password_min_length: 8,
            require_strong_passwords: false,
        },
        logging: LoggingConfig::default(),
    }
}
