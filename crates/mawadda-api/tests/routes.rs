use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use mawadda_api::{AppState, router};
use mawadda_store::MemStore;

fn app() -> Router {
    router(Arc::new(AppState {
        store: Arc::new(MemStore::new()),
    }))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(path).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_the_backend() {
    let app = app();
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["backend"], "memory");
    assert_eq!(body["database"]["connected"], true);
}

#[tokio::test]
async fn test_endpoint_echoes_the_request() {
    let app = app();
    let (status, body) = get(&app, "/api/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API is working!");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["path"], "/api/test");
}

#[tokio::test]
async fn viewing_a_random_message_moves_the_stats() {
    let app = app();

    let (status, message) = get(&app, "/api/messages/random").await;
    assert_eq!(status, StatusCode::OK);
    assert!(message["title"].is_string());

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["totalHearts"], 3);
    assert_eq!(stats["currentStreak"], 1);
    assert_eq!(stats["messagesViewed"], 1);

    // A second view inside the cooldown earns no hearts but still counts.
    let (status, _) = get(&app, "/api/messages/random").await;
    assert_eq!(status, StatusCode::OK);
    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["totalHearts"], 3);
    assert_eq!(stats["messagesViewed"], 2);
}

#[tokio::test]
async fn recent_messages_respect_the_limit() {
    let app = app();
    let (status, body) = get(&app, "/api/messages/recent?limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Default limit is 5.
    let (_, body) = get(&app, "/api/messages/recent").await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_message_rejects_bad_payloads() {
    let app = app();

    let (status, _) = post(
        &app,
        "/api/messages",
        json!({ "title": "no content", "category": "love" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/api/messages",
        json!({ "title": "x", "content": "y", "category": "not-a-category" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/api/messages",
        json!({ "title": "  ", "content": "y", "category": "love" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn creating_a_message_unlocks_the_author_achievement() {
    let app = app();

    let (status, message) = post(
        &app,
        "/api/messages",
        json!({
            "title": "Ya Amar",
            "content": "A note written just for you.",
            "category": "love",
            "hearts": 7,
            "isSpecial": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["title"], "Ya Amar");
    assert_eq!(message["isSpecial"], true);

    let (_, achievements) = get(&app, "/api/achievements").await;
    let beloved = achievements
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "Beloved Wife")
        .unwrap();
    assert!(!beloved["unlockedAt"].is_null());
}

#[tokio::test]
async fn favorites_round_trip() {
    let app = app();

    let (_, recent) = get(&app, "/api/messages/recent?limit=1").await;
    let message_id = recent[0]["id"].as_str().unwrap().to_string();

    let (status, favorite) = post(
        &app,
        "/api/favorites",
        json!({ "messageId": message_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite["messageId"], message_id.as_str());

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["favoritesCount"], 1);
    assert_eq!(stats["totalHearts"], 5);

    let (status, favorites) = get(&app, "/api/favorites").await;
    assert_eq!(status, StatusCode::OK);
    let favorites = favorites.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["message"]["id"], message_id.as_str());

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/favorites/{}", message_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["favoritesCount"], 0);
}

#[tokio::test]
async fn add_favorite_rejects_a_malformed_body() {
    let app = app();
    let (status, _) = post(&app, "/api/favorites", json!({ "messageId": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_routes_return_json_404() {
    let app = app();
    let (status, body) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("/api/nope"));
    assert!(body["availableRoutes"].is_array());
}
