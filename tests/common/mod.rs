// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use larder::db;
use larder::server::{CatalogState, ServerConfig, create_router};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A migrated database in a temporary directory plus a router over it.
///
/// Keep the value alive for the duration of the test to prevent cleanup.
pub struct TestApp {
    _temp_dir: TempDir,
    pub db_path: PathBuf,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        db::init(&db_path).unwrap();

        let config = ServerConfig::default().with_db_path(&db_path);
        let router = create_router(Arc::new(CatalogState::new(config)));

        Self {
            _temp_dir: temp_dir,
            db_path,
            router,
        }
    }

    /// Open a direct connection for assertions against the store
    pub fn conn(&self) -> rusqlite::Connection {
        db::open(&self.db_path).unwrap()
    }

    /// Send a prebuilt request and return the raw response
    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and return the status with the decoded JSON body
    /// (`Value::Null` for empty bodies)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.request(request).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a recipe through the API and return its record
    pub async fn sample_recipe(&self, name: &str, ingredients: &[&str]) -> Value {
        let ingredients: Vec<Value> = ingredients
            .iter()
            .map(|name| serde_json::json!({ "name": name }))
            .collect();
        let (status, body) = self
            .post(
                "/recipes",
                serde_json::json!({
                    "name": name,
                    "description": "Insert Description Here",
                    "ingredients": ingredients,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

/// Names of the nested ingredients in a recipe record
pub fn ingredient_names(record: &Value) -> Vec<String> {
    record["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

/// Count rows in a table
pub fn count_rows(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}
