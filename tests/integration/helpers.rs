//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

use folderhub_api::{AppState, build_app};
use folderhub_core::config::{AppConfig, DatabaseConfig};
use folderhub_database::DatabasePool;
use folderhub_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        let router = build_app(AppState::new(config, db));

        Self { router, db_pool }
    }

    /// Create an organization and return its id
    pub async fn create_org(&self, name: &str) -> String {
        let response = self
            .request("POST", "/api/organizations", Some(json!({ "name": name })))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create a folder and return the response data
    pub async fn create_folder(&self, org_id: &str, name: &str, parent_id: Option<&str>) -> Value {
        let response = self
            .request(
                "POST",
                &format!("/api/organizations/{org_id}/folders"),
                Some(json!({ "name": name, "parent_id": parent_id })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"].clone()
    }

    /// Current stored path of a folder
    pub async fn path_of(&self, folder_id: &str) -> String {
        sqlx::query_scalar("SELECT path FROM folders WHERE id = ?1")
            .bind(folder_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("folder row")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data.id` field as a string
    pub fn id(&self) -> String {
        self.body["data"]["id"]
            .as_str()
            .expect("response has data.id")
            .to_string()
    }

    /// The `data` array's `id` fields
    pub fn ids(&self) -> Vec<String> {
        self.body["data"]
            .as_array()
            .expect("response data is an array")
            .iter()
            .map(|v| v["id"].as_str().expect("id").to_string())
            .collect()
    }
}
