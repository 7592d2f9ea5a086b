pub mod achievements;
pub mod error;
pub mod favorites;
pub mod health;
pub mod messages;
pub mod stats;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use mawadda_store::Storage;

pub struct AppState {
    pub store: Arc<dyn Storage>,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/test", get(health::test))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/messages/random", get(messages::random_message))
        .route("/api/messages/recent", get(messages::recent_messages))
        .route("/api/messages", post(messages::create_message))
        .route(
            "/api/favorites",
            get(favorites::get_favorites).post(favorites::add_favorite),
        )
        .route("/api/favorites/{message_id}", delete(favorites::remove_favorite))
        .route("/api/achievements", get(achievements::get_achievements))
        .fallback(health::not_found)
        .with_state(state)
}
