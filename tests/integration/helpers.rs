//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roster_api::AppState;
use roster_core::config::{AppConfig, DatabaseConfig};
use roster_database::repositories::StudentRepository;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
}

/// Status and decoded JSON body of a test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database.
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                ..DatabaseConfig::default()
            },
            ..AppConfig::default()
        };

        let pool = roster_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        roster_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(StudentRepository::new(pool));
        let state = AppState {
            config: Arc::new(config),
            store,
        };

        Self {
            router: roster_api::build_app(state),
        }
    }

    /// Send a request with an optional JSON body and decode the response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
        };

        TestResponse { status, body }
    }

    /// Send a request with a raw (possibly malformed) body.
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).expect("Response body was not valid JSON");

        TestResponse { status, body }
    }

    /// Create a student through the API and return the generated id.
    pub async fn create_student(&self, name: &str, email: &str, age: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/student",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "age": age,
                })),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_i64().expect("Create returned no id")
    }
}
