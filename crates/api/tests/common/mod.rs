#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::{Database, Document, DocumentStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults, serving static files
/// from `static_root/frontend` and `static_root/public`.
pub fn test_config(static_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file: static_root.join("data").join("database.json"),
        public_dir: static_root.join("public"),
        frontend_dir: static_root.join("frontend"),
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
    }
}

/// A database over an in-memory store holding `doc`.
pub fn memory_db(doc: &Document) -> Arc<Database> {
    let store = MemoryStore::with_document(doc).unwrap();
    Arc::new(Database::new(Arc::new(store)))
}

/// A database over the seed document.
pub async fn seeded_db() -> Arc<Database> {
    let db = Arc::new(Database::new(Arc::new(MemoryStore::new())));
    db.initialize().await.unwrap();
    db
}

/// Build the full application router (same middleware stack as
/// production) over `db`. Static files resolve under a non-existent root.
pub fn build_test_app(db: Arc<Database>) -> Router {
    build_test_app_with(db, test_config(Path::new("/nonexistent-folio-root")))
}

pub fn build_test_app_with(db: Arc<Database>, config: ServerConfig) -> Router {
    let state = AppState {
        db,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build an app over an arbitrary store.
pub fn build_app_over(store: Arc<dyn DocumentStore>) -> Router {
    build_test_app(Arc::new(Database::new(store)))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
