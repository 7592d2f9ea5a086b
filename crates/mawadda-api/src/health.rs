use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use mawadda_types::api::{DatabaseHealth, HealthResponse, TestResponse};

use crate::SharedState;

pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    // A stats read touches the backend, so it doubles as the liveness probe.
    let connected = state.store.user_stats().is_ok();

    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        database: DatabaseHealth {
            backend: state.store.backend(),
            connected,
        },
    })
}

pub async fn test(method: Method, uri: Uri) -> impl IntoResponse {
    Json(TestResponse {
        message: "API is working!",
        timestamp: Utc::now(),
        method: method.to_string(),
        path: uri.path().to_string(),
    })
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": format!("Route {} not found", uri.path()),
            "availableRoutes": [
                "/api/health",
                "/api/test",
                "/api/stats",
                "/api/messages/random",
                "/api/messages/recent",
                "/api/messages",
                "/api/favorites",
                "/api/achievements",
            ],
        })),
    )
}
