use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use mawadda_store::{rules, seed};
use mawadda_types::api::CreateMessageRequest;

use crate::SharedState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

const MAX_RECENT: usize = 50;

pub async fn random_message(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(message) = state.store.random_message()? else {
        return Err(ApiError::NotFound("No messages found"));
    };

    // Viewing a message is the daily "visit": it moves the streak and earns
    // hearts, subject to the grant cooldown.
    state.store.update_streak()?;
    state.store.increment_hearts(rules::VIEW_REWARD_HEARTS)?;

    Ok(Json(message))
}

pub async fn recent_messages(
    State(state): State<SharedState>,
    Query(query): Query<RecentQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = state.store.recent_messages(query.limit.min(MAX_RECENT))?;
    Ok(Json(messages))
}

pub async fn create_message(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    // Deserialized by hand so shape errors map to 400, not axum's 422.
    let req: CreateMessageRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("Invalid request data: {}", e)))?;

    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Err(ApiError::Validation(
            "title and content must not be empty".to_string(),
        ));
    }

    let message = state.store.create_message(req.into())?;

    if let Some(achievement) = state
        .store
        .unlock_achievement(seed::FIRST_MESSAGE_ACHIEVEMENT)?
    {
        info!("Achievement unlocked: {}", achievement.name);
    }

    Ok((StatusCode::CREATED, Json(message)))
}
