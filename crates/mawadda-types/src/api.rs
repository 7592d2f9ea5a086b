use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Category, Favorite, Message, NewMessage};

// -- Messages --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMessageRequest {
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub hearts: i64,
    #[serde(default)]
    pub is_special: bool,
}

impl From<CreateMessageRequest> for NewMessage {
    fn from(req: CreateMessageRequest) -> Self {
        NewMessage {
            title: req.title,
            content: req.content,
            category: req.category,
            hearts: req.hearts,
            is_special: req.is_special,
        }
    }
}

// -- Favorites --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddFavoriteRequest {
    pub message_id: Uuid,
}

/// A favorite with its referenced message embedded. `message` is `None`
/// when the message no longer exists (favorites hold weak references).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub message_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub message: Option<Message>,
}

impl FavoriteResponse {
    pub fn new(favorite: Favorite, message: Option<Message>) -> Self {
        Self {
            id: favorite.id,
            message_id: favorite.message_id,
            created_at: favorite.created_at,
            message,
        }
    }
}

// -- Health / diagnostics --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealth {
    pub backend: &'static str,
    pub connected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
}
