//! HTTP-level integration tests for the `/api/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use folio_db::Document;
use serde_json::json;

fn project_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Internal tooling revamp",
        "image": "https://example.com/x.jpg",
        "category": "Web Design",
        "location": "Remote"
    })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_seed_projects_in_order() {
    let db = common::seeded_db().await;
    let response = get(common::build_test_app(db), "/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["E-commerce Platform", "Healthcare App", "Corporate Website"]
    );
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_id_and_date() {
    let db = common::seeded_db().await;
    let body = project_body("Atlas");
    let response = post_json(common::build_test_app(db.clone()), "/api/projects", body.clone()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    for (key, value) in body.as_object().unwrap() {
        assert_eq!(&created[key], value, "field {key} not echoed");
    }
    assert_eq!(created["id"], 4);
    assert!(created["date"].is_string());

    let listed = body_json(get(common::build_test_app(db), "/api/projects").await).await;
    assert_eq!(listed.as_array().unwrap().last().unwrap(), &created);
}

#[tokio::test]
async fn create_keeps_passthrough_fields() {
    let db = common::seeded_db().await;
    let response = post_json(
        common::build_test_app(db),
        "/api/projects",
        json!({"name": "Atlas", "client": "Acme", "featured": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["client"], "Acme");
    assert_eq!(created["featured"], true);
    assert!(created.get("description").is_none());
}

#[tokio::test]
async fn create_stores_documented_fields_as_sent() {
    let db = common::seeded_db().await;
    let response = post_json(
        common::build_test_app(db),
        "/api/projects",
        json!({"name": "X", "description": null, "location": 5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["description"], serde_json::Value::Null);
    assert!(created.as_object().unwrap().contains_key("description"));
    assert_eq!(created["location"], 5);
}

#[tokio::test]
async fn create_records_activity() {
    let db = common::seeded_db().await;
    post_json(
        common::build_test_app(db.clone()),
        "/api/projects",
        project_body("Atlas"),
    )
    .await;

    let feed = body_json(get(common::build_test_app(db), "/api/activity").await).await;
    assert_eq!(feed[0]["title"], "New Project Added");
    assert_eq!(feed[0]["description"], "Atlas was added to the portfolio");
    assert_eq!(feed[0]["icon"], "fa-project-diagram");
    assert_eq!(feed[0]["time"], "Just now");
}

#[tokio::test]
async fn create_without_name_is_rejected_and_store_untouched() {
    let db = common::seeded_db().await;
    let before = db.snapshot().await.unwrap();

    let response = post_json(
        common::build_test_app(db.clone()),
        "/api/projects",
        json!({"description": "nameless"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.snapshot().await.unwrap(), before);
}

// ---------------------------------------------------------------------------
// Scenario: ids on an empty collection, delete, list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_collection_create_create_delete() {
    let db = common::memory_db(&Document::default());

    let first = body_json(
        post_json(common::build_test_app(db.clone()), "/api/projects", project_body("X")).await,
    )
    .await;
    assert_eq!(first["id"], 1);

    let second = body_json(
        post_json(common::build_test_app(db.clone()), "/api/projects", project_body("Y")).await,
    )
    .await;
    assert_eq!(second["id"], 2);

    let response = delete(common::build_test_app(db.clone()), "/api/projects/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Project deleted successfully"})
    );

    let listed = body_json(get(common::build_test_app(db), "/api/projects").await).await;
    let ids: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeat_delete_returns_404() {
    let db = common::seeded_db().await;

    let response = delete(common::build_test_app(db.clone()), "/api/projects/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(common::build_test_app(db.clone()), "/api/projects/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project not found");

    let feed = body_json(get(common::build_test_app(db), "/api/activity").await).await;
    assert_eq!(feed[0]["title"], "Project Deleted");
    assert_eq!(
        feed[0]["description"],
        "Healthcare App was removed from the portfolio"
    );
    // Only the successful delete was logged.
    assert_eq!(feed[1]["title"], "New Project Added");
}

#[tokio::test]
async fn delete_non_numeric_id_returns_404() {
    let db = common::seeded_db().await;
    let before = db.snapshot().await.unwrap();

    let response = delete(common::build_test_app(db.clone()), "/api/projects/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Project not found");
    assert_eq!(db.snapshot().await.unwrap(), before);
}

#[tokio::test]
async fn delete_reads_leading_digits_of_id() {
    let db = common::seeded_db().await;

    let response = delete(common::build_test_app(db.clone()), "/api/projects/2abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<_> = db
        .snapshot()
        .await
        .unwrap()
        .projects
        .iter()
        .filter_map(|p| p.name().map(str::to_string))
        .collect();
    assert_eq!(names, vec!["E-commerce Platform", "Corporate Website"]);
}

#[tokio::test]
async fn deleting_max_id_then_creating_reuses_it() {
    let db = common::seeded_db().await;
    delete(common::build_test_app(db.clone()), "/api/projects/3").await;

    let created = body_json(
        post_json(common::build_test_app(db), "/api/projects", project_body("Z")).await,
    )
    .await;
    assert_eq!(created["id"], 3);
}
