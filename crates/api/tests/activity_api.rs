//! HTTP-level integration tests for the `/api/activity` feed.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn seed_feed_is_returned_as_is() {
    let db = common::seeded_db().await;
    let response = get(common::build_test_app(db), "/api/activity").await;

    assert_eq!(response.status(), StatusCode::OK);
    let feed = body_json(response).await;
    assert_eq!(feed.as_array().unwrap().len(), 3);
    assert_eq!(feed[0]["time"], "2 hours ago");
    assert_eq!(feed[2]["description"], "John Doe submitted a contact form");
}

#[tokio::test]
async fn feed_is_capped_at_five_newest_first() {
    let db = common::seeded_db().await;
    for i in 0..6 {
        post_json(
            common::build_test_app(db.clone()),
            "/api/newsletter",
            json!({"email": format!("user{i}@x.com")}),
        )
        .await;
    }

    let feed = body_json(get(common::build_test_app(db.clone()), "/api/activity").await).await;
    let feed = feed.as_array().unwrap();
    assert_eq!(feed.len(), 5);
    assert_eq!(feed[0]["description"], "user5@x.com subscribed to the newsletter");
    assert_eq!(feed[0]["id"], 9);

    // The full history is retained in storage.
    assert_eq!(db.snapshot().await.unwrap().activity.len(), 9);
}

#[tokio::test]
async fn activity_is_read_only() {
    let db = common::seeded_db().await;
    let response = post_json(
        common::build_test_app(db),
        "/api/activity",
        json!({"title": "Injected"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
